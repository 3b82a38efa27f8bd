mod cache;
mod compile;
mod error;
mod matcher;
mod params;

pub use self::cache::PatternCache;
pub use self::compile::CompiledPattern;
pub use self::error::PatternError;
pub use self::matcher::RouteMatcher;
pub use self::params::{IntoIter as RouteParamsIntoIter, RouteParams};
