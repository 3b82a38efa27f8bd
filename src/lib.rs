//! Route and query-key pattern matching for fixture-backed API mocking.
//!
//! Two grammars are supported:
//!
//! - route patterns such as `"GET /api/users/:id"` or `"GET /files/*"`,
//!   matched against a request method and path;
//! - query-key patterns such as `["users", ":id"]` or
//!   `["users", {"id": ":uid"}]`, matched against structured cache keys.
//!
//! Lookups over a set of patterns always pick the first match in declaration
//! order. A request that matches nothing is `None`; only malformed route
//! patterns are errors.
//!
//! The free functions in this module use a process-wide [`RouteMatcher`].
//! Construct your own matcher for an isolated cache.

#![forbid(unsafe_code)]

mod query_key;
mod registry;
mod route;

pub use self::query_key::{Element, QueryKeyMatcher, QueryParams, DEFAULT_MAX_DEPTH};
pub use self::registry::{QueryKeyHit, QueryKeyRegistry, RouteHit, RouteRegistry};
pub use self::route::{
    CompiledPattern, PatternCache, PatternError, RouteMatcher, RouteParams, RouteParamsIntoIter,
};

#[cfg(feature = "http")]
pub use http::Method;

use std::sync::{Arc, OnceLock};

static DEFAULT_ROUTE_MATCHER: OnceLock<Arc<RouteMatcher>> = OnceLock::new();

/// The matcher behind the free functions and [`RouteRegistry::new`].
pub fn default_route_matcher() -> Arc<RouteMatcher> {
    Arc::clone(DEFAULT_ROUTE_MATCHER.get_or_init(|| Arc::new(RouteMatcher::new())))
}

pub fn compile_pattern(pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
    default_route_matcher().compile(pattern)
}

/// # Panics
/// Panics if `pattern` is malformed.
pub fn match_route(pattern: &str, method: &str, path: &str) -> Option<RouteParams> {
    default_route_matcher().match_route(pattern, method, path)
}

pub fn try_match_route(
    pattern: &str,
    method: &str,
    path: &str,
) -> Result<Option<RouteParams>, PatternError> {
    default_route_matcher().try_match_route(pattern, method, path)
}

/// # Panics
/// Panics if a pattern reached before the first match is malformed.
pub fn find_first_route_match<K, V, I>(
    patterns: I,
    method: &str,
    path: &str,
) -> Option<(K, V, RouteParams)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    default_route_matcher().find_first(patterns, method, path)
}

pub fn try_find_first_route_match<K, V, I>(
    patterns: I,
    method: &str,
    path: &str,
) -> Result<Option<(K, V, RouteParams)>, PatternError>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    default_route_matcher().try_find_first(patterns, method, path)
}

pub fn clear_route_cache() {
    default_route_matcher().clear_cache()
}

pub fn match_query_key(candidate: &[Element], pattern: &[Element]) -> Option<QueryParams> {
    QueryKeyMatcher::new().match_key(candidate, pattern)
}

pub fn find_first_query_key_match<K, V, I>(
    patterns: I,
    candidate: &[Element],
) -> Option<(K, V, QueryParams)>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[Element]>,
{
    QueryKeyMatcher::new().find_first(patterns, candidate)
}

#[test]
fn test_simple() {
    let routes: &[(&str, usize)] = &[
        ("GET /api/users", 1),
        ("GET /api/users/:id", 2),
        ("POST /api/users", 3),
        ("GET /api/files/*", 4),
    ];

    let cases: &[(_, _, _, &[(&str, &str)])] = &[
        ("GET", "/api/users", 1, &[]),
        ("get", "/api/users/123", 2, &[("id", "123")]),
        ("POST", "/api/users", 3, &[]),
        ("GET", "/api/files/a/b/c.txt", 4, &[]),
    ];

    for &(method, path, data, captures) in cases {
        let (_, value, params) = find_first_route_match(routes.iter().copied(), method, path).unwrap();
        assert_eq!(value, data);
        let v: Vec<(&str, &str)> = params.iter().collect();
        assert_eq!(&v, captures);
    }

    assert!(find_first_route_match(routes.iter().copied(), "DELETE", "/api/users").is_none());

    let key = crate::query_key!["users", "123"];
    let params = match_query_key(&key, &crate::query_key!["users", ":id"]).unwrap();
    assert_eq!(params.get("id"), Some(&Element::from("123")));
}
