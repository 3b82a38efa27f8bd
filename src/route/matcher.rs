use super::cache::PatternCache;
use super::compile::CompiledPattern;
use super::error::PatternError;
use super::params::RouteParams;

use std::sync::Arc;

/// Matches requests against route patterns, compiling each distinct pattern
/// string once into its own cache.
#[derive(Debug, Default)]
pub struct RouteMatcher {
    cache: PatternCache,
}

impl RouteMatcher {
    pub fn new() -> Self {
        Self {
            cache: PatternCache::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            cache: PatternCache::with_capacity(capacity),
        }
    }

    pub fn compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        self.cache.get_or_compile(pattern)
    }

    /// # Panics
    /// Panics if `pattern` is malformed.
    pub fn match_route(&self, pattern: &str, method: &str, path: &str) -> Option<RouteParams> {
        match self.try_match_route(pattern, method, path) {
            Ok(ret) => ret,
            Err(e) => panic!("{}: pattern = {:?}", e, pattern),
        }
    }

    pub fn try_match_route(
        &self,
        pattern: &str,
        method: &str,
        path: &str,
    ) -> Result<Option<RouteParams>, PatternError> {
        let compiled = self.compile(pattern)?;
        let ret = compiled.matches(method, path);
        if ret.is_none() {
            tracing::trace!(pattern, method, path, "route pattern did not match");
        }
        Ok(ret)
    }

    /// Returns the first entry, in iteration order, whose pattern matches.
    ///
    /// Entries after the first match are never compiled.
    ///
    /// # Panics
    /// Panics if a pattern reached before the first match is malformed.
    pub fn find_first<K, V, I>(
        &self,
        patterns: I,
        method: &str,
        path: &str,
    ) -> Option<(K, V, RouteParams)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        for (pattern, value) in patterns {
            if let Some(params) = self.match_route(pattern.as_ref(), method, path) {
                return Some((pattern, value, params));
            }
        }
        None
    }

    pub fn try_find_first<K, V, I>(
        &self,
        patterns: I,
        method: &str,
        path: &str,
    ) -> Result<Option<(K, V, RouteParams)>, PatternError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        for (pattern, value) in patterns {
            if let Some(params) = self.try_match_route(pattern.as_ref(), method, path)? {
                return Ok(Some((pattern, value, params)));
            }
        }
        Ok(None)
    }

    pub fn clear_cache(&self) {
        self.cache.clear()
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }
}

#[cfg(feature = "http")]
impl RouteMatcher {
    /// # Panics
    /// Panics if `pattern` is malformed.
    pub fn match_request<B>(&self, pattern: &str, req: &http::Request<B>) -> Option<RouteParams> {
        self.match_route(pattern, req.method().as_str(), req.uri().path())
    }
}
