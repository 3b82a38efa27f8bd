use super::element::{deep_eq, Element};
use super::object::match_object;

use indexmap::IndexMap;

/// Default bound on object nesting inside a query key.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Values extracted from `":name"` placeholders, in the order first seen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    map: IndexMap<String, Element>,
}

impl QueryParams {
    pub fn get(&self, name: &str) -> Option<&Element> {
        self.map.get(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &Element)> + '_ {
        self.map.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn into_inner(self) -> IndexMap<String, Element> {
        self.map
    }

    /// A repeated name keeps its slot and takes the newer value.
    pub(crate) fn insert(&mut self, name: &str, value: Element) {
        self.map.insert(name.to_owned(), value);
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, Element);
    type IntoIter = indexmap::map::IntoIter<String, Element>;
    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

/// Matches structured query keys such as `["users", {"id": "1"}]`.
#[derive(Debug, Clone, Copy)]
pub struct QueryKeyMatcher {
    max_depth: usize,
}

impl Default for QueryKeyMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryKeyMatcher {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Bounds object nesting; a key nested deeper never matches.
    pub const fn with_max_depth(max_depth: usize) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Matches `candidate` against `pattern` position by position.
    ///
    /// Both must have the same length. `"*"` accepts anything, `":name"`
    /// accepts anything and extracts it, two objects go through the object
    /// sub-pattern matcher and everything else must be equal.
    pub fn match_key(&self, candidate: &[Element], pattern: &[Element]) -> Option<QueryParams> {
        if candidate.len() != pattern.len() {
            return None;
        }

        let mut params = QueryParams::default();

        for (value, expected) in candidate.iter().zip(pattern) {
            if expected.is_wildcard() {
                continue;
            }
            if let Some(name) = expected.placeholder() {
                params.insert(name, value.clone());
                continue;
            }
            let ok = match (expected, value) {
                (Element::Object(p), Element::Object(v)) => {
                    match_object(v, p, &mut params, self.max_depth)
                }
                _ => deep_eq(expected, value, self.max_depth),
            };
            if !ok {
                return None;
            }
        }

        Some(params)
    }

    /// Returns the first entry, in iteration order, whose pattern matches.
    pub fn find_first<K, V, I>(&self, patterns: I, candidate: &[Element]) -> Option<(K, V, QueryParams)>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<[Element]>,
    {
        for (pattern, value) in patterns {
            if let Some(params) = self.match_key(candidate, pattern.as_ref()) {
                return Some((pattern, value, params));
            }
        }
        None
    }
}
