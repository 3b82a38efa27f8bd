use crate::route::{CompiledPattern, PatternError, RouteMatcher, RouteParams};

use std::sync::Arc;

use indexmap::IndexMap;

/// Ordered `pattern -> value` table. Patterns are compiled on insert, so a
/// malformed declaration fails at registration rather than on first request.
#[derive(Debug)]
pub struct RouteRegistry<T> {
    matcher: Arc<RouteMatcher>,
    entries: IndexMap<Box<str>, Entry<T>>,
}

#[derive(Debug)]
struct Entry<T> {
    compiled: Arc<CompiledPattern>,
    value: T,
}

/// A successful lookup in a [`RouteRegistry`].
#[derive(Debug)]
pub struct RouteHit<'a, T> {
    pub pattern: &'a str,
    pub value: &'a T,
    pub params: RouteParams,
}

impl<T> Default for RouteRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RouteRegistry<T> {
    /// A registry compiling through the process-wide default matcher.
    pub fn new() -> Self {
        Self::with_matcher(crate::default_route_matcher())
    }

    pub fn with_matcher(matcher: Arc<RouteMatcher>) -> Self {
        Self {
            matcher,
            entries: IndexMap::new(),
        }
    }

    /// Re-inserting a pattern replaces its value and keeps its position.
    ///
    /// # Panics
    /// Panics if `pattern` is malformed.
    pub fn insert(&mut self, pattern: &str, value: T) -> &mut Self {
        if let Err(e) = self.insert_entry(pattern, value) {
            panic!("{}: pattern = {:?}", e, pattern);
        }
        self
    }

    pub fn try_insert(&mut self, pattern: &str, value: T) -> Result<&mut Self, PatternError> {
        self.insert_entry(pattern, value)?;
        Ok(self)
    }

    pub fn get(&self, pattern: &str) -> Option<&T> {
        self.entries.get(pattern).map(|e| &e.value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(k, e)| (&**k, &e.value))
    }

    /// First entry in declaration order matching the request.
    pub fn find(&self, method: &str, path: &str) -> Option<RouteHit<'_, T>> {
        self.entries.iter().find_map(|(pattern, entry)| {
            let params = entry.compiled.matches(method, path)?;
            Some(RouteHit {
                pattern: &**pattern,
                value: &entry.value,
                params,
            })
        })
    }
}

impl<T> RouteRegistry<T> {
    fn insert_entry(&mut self, pattern: &str, value: T) -> Result<(), PatternError> {
        let compiled = self.matcher.compile(pattern)?;
        self.entries.insert(pattern.into(), Entry { compiled, value });
        Ok(())
    }
}

#[cfg(feature = "http")]
impl<T> RouteRegistry<T> {
    pub fn find_request<B>(&self, req: &http::Request<B>) -> Option<RouteHit<'_, T>> {
        self.find(req.method().as_str(), req.uri().path())
    }
}
