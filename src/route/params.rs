use std::ops::Deref;
use std::str::FromStr;

use smallvec::SmallVec;

/// Parameters extracted from a matched route, in pattern order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    buf: SmallVec<[(Box<str>, String); 4]>,
}

impl RouteParams {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.buf
            .iter()
            .find_map(|(k, v)| if name == &**k { Some(v.as_str()) } else { None })
    }

    pub fn parse<T: FromStr>(&self, name: &str) -> Option<Result<T, T::Err>> {
        self.get(name).map(T::from_str)
    }

    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.buf.iter().map(|(k, v)| (&**k, v.as_str()))
    }
}

impl RouteParams {
    pub(crate) fn new() -> Self {
        Self {
            buf: SmallVec::new(),
        }
    }

    /// A repeated name keeps its slot and takes the newer value.
    pub(crate) fn insert(&mut self, name: &str, value: String) {
        match self.buf.iter_mut().find(|(k, _)| &**k == name) {
            Some(slot) => slot.1 = value,
            None => self.buf.push((name.into(), value)),
        }
    }
}

impl Deref for RouteParams {
    type Target = [(Box<str>, String)];
    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl IntoIterator for RouteParams {
    type Item = (String, String);
    type IntoIter = IntoIter;
    fn into_iter(self) -> IntoIter {
        IntoIter {
            inner: self.buf.into_iter(),
        }
    }
}

pub struct IntoIter {
    inner: smallvec::IntoIter<[(Box<str>, String); 4]>,
}

impl Iterator for IntoIter {
    type Item = (String, String);

    fn next(&mut self) -> Option<Self::Item> {
        let (k, v) = self.inner.next()?;
        Some((k.into_string(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for IntoIter {}
