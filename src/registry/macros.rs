/// Builds a [`RouteRegistry`](crate::RouteRegistry) in declaration order.
///
/// ```
/// use fixture_router::route_registry;
///
/// let registry = route_registry! {
///     "GET /api/users" => 1,
///     "GET /api/users/:id" => 2,
/// };
/// let hit = registry.find("GET", "/api/users/7").unwrap();
/// assert_eq!(*hit.value, 2);
/// assert_eq!(hit.params.get("id"), Some("7"));
/// ```
#[macro_export]
macro_rules! route_registry {
    {$($pattern:expr => $value:expr),+ $(,)?} => {{
        let mut __registry = $crate::RouteRegistry::new();
        $(__registry.insert($pattern, $value);)+
        __registry
    }};
}

/// Builds a query key (`Vec<Element>`) from anything convertible to [`Element`](crate::Element).
///
/// ```
/// use fixture_router::{query_key, Element};
///
/// let key = query_key!["users", 42, Element::object([("status", "active")])];
/// assert_eq!(key.len(), 3);
/// ```
#[macro_export]
macro_rules! query_key {
    [$($element:expr),* $(,)?] => {
        ::std::vec![$($crate::Element::from($element)),*]
    };
}
