mod element;
mod matcher;
mod object;

pub use self::element::Element;
pub use self::matcher::{QueryKeyMatcher, QueryParams, DEFAULT_MAX_DEPTH};
