/// A malformed route pattern declaration.
///
/// Raised when a pattern is first compiled; a request that simply does not
/// match is reported as `None`, never as an error.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("route pattern {pattern:?} has no space between method and path, expected \"METHOD /path\"")]
    MissingSeparator { pattern: Box<str> },

    #[error("route pattern {pattern:?} has a path that does not start with '/', expected \"METHOD /path\"")]
    MissingLeadingSlash { pattern: Box<str> },

    #[error("route pattern {pattern:?} did not compile to a valid regex")]
    Regex {
        pattern: Box<str>,
        #[source]
        source: regex::Error,
    },
}

impl PatternError {
    /// The pattern string that failed to compile.
    pub fn pattern(&self) -> &str {
        match self {
            Self::MissingSeparator { pattern }
            | Self::MissingLeadingSlash { pattern }
            | Self::Regex { pattern, .. } => pattern,
        }
    }
}
