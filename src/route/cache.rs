use super::compile::CompiledPattern;
use super::error::PatternError;

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;

/// Memo of compiled route patterns keyed by the exact pattern string.
///
/// Entries live until [`PatternCache::clear`]. Two threads compiling the same
/// new pattern at once both do the work; the first insert is kept and the
/// results are identical anyway.
#[derive(Debug, Default)]
pub struct PatternCache {
    map: RwLock<HashMap<Box<str>, Arc<CompiledPattern>>>,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            map: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    pub fn get_or_compile(&self, pattern: &str) -> Result<Arc<CompiledPattern>, PatternError> {
        if let Some(hit) = self.map.read().get(pattern) {
            return Ok(Arc::clone(hit));
        }

        let compiled = Arc::new(CompiledPattern::parse(pattern)?);
        tracing::debug!(
            pattern,
            regex = compiled.path_regex(),
            "compiled route pattern"
        );

        let mut map = self.map.write();
        let entry = map.entry(pattern.into()).or_insert(compiled);
        Ok(Arc::clone(entry))
    }

    pub fn clear(&self) {
        let mut map = self.map.write();
        tracing::debug!(entries = map.len(), "clearing route pattern cache");
        map.clear();
    }

    pub fn len(&self) -> usize {
        self.map.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reuses_compiled_pattern() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("GET /a/:id").unwrap();
        let b = cache.get_or_compile("GET /a/:id").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        // keyed by the exact string, no normalization
        let c = cache.get_or_compile("get /a/:id").unwrap();
        assert!(!Arc::ptr_eq(&a, &c));
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn failed_compile_is_not_cached() {
        let cache = PatternCache::new();
        assert!(cache.get_or_compile("GET a").is_err());
        assert!(cache.is_empty());
    }

    #[test]
    fn clear_forces_recompile() {
        let cache = PatternCache::new();
        let a = cache.get_or_compile("GET /x").unwrap();
        cache.clear();
        assert!(cache.is_empty());
        let b = cache.get_or_compile("GET /x").unwrap();
        assert!(!Arc::ptr_eq(&a, &b));
        assert_eq!(*a, *b);
    }
}
