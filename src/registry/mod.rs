mod macros;
mod query_key;
mod route;

pub use self::query_key::{QueryKeyHit, QueryKeyRegistry};
pub use self::route::{RouteHit, RouteRegistry};
