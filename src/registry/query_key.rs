use crate::query_key::{Element, QueryKeyMatcher, QueryParams};

/// Ordered list of query-key patterns and their values, searched front to back.
#[derive(Debug)]
pub struct QueryKeyRegistry<T> {
    matcher: QueryKeyMatcher,
    entries: Vec<(Vec<Element>, T)>,
}

/// A successful lookup in a [`QueryKeyRegistry`].
#[derive(Debug)]
pub struct QueryKeyHit<'a, T> {
    pub pattern: &'a [Element],
    pub value: &'a T,
    pub params: QueryParams,
}

impl<T> Default for QueryKeyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> QueryKeyRegistry<T> {
    pub fn new() -> Self {
        Self::with_matcher(QueryKeyMatcher::new())
    }

    pub fn with_matcher(matcher: QueryKeyMatcher) -> Self {
        Self {
            matcher,
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, pattern: Vec<Element>, value: T) -> &mut Self {
        self.entries.push((pattern, value));
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&[Element], &T)> + '_ {
        self.entries.iter().map(|(k, v)| (k.as_slice(), v))
    }

    pub fn find(&self, candidate: &[Element]) -> Option<QueryKeyHit<'_, T>> {
        let (pattern, value, params) = self.matcher.find_first(self.iter(), candidate)?;
        Some(QueryKeyHit {
            pattern,
            value,
            params,
        })
    }
}
