use indexmap::IndexMap;

const WILDCARD: &str = "*";
const COLON: char = ':';

/// One position of a query key.
///
/// `Undefined` and `Null` are distinct values. Objects keep insertion order
/// for display but compare by key.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    String(String),
    Array(Vec<Element>),
    Object(IndexMap<String, Element>),
}

impl Element {
    pub fn object<K, V, I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Element>,
    {
        Self::Object(
            fields
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Element>> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    /// `true` for the pattern element `"*"`.
    pub fn is_wildcard(&self) -> bool {
        self.as_str() == Some(WILDCARD)
    }

    /// The parameter name of a `":name"` placeholder.
    pub fn placeholder(&self) -> Option<&str> {
        let s = self.as_str()?;
        match s.strip_prefix(COLON) {
            Some(name) if !name.is_empty() => Some(name),
            _ => None,
        }
    }
}

/// Structural equality, giving up (unequal) past `depth` levels of nesting.
///
/// Nulls only equal nulls, elements of different kinds are never equal,
/// arrays compare position by position and objects compare by key.
pub(crate) fn deep_eq(lhs: &Element, rhs: &Element, depth: usize) -> bool {
    use Element::*;

    match (lhs, rhs) {
        (Undefined, Undefined) | (Null, Null) => true,
        (Bool(a), Bool(b)) => a == b,
        (Number(a), Number(b)) => a == b,
        (String(a), String(b)) => a == b,
        (Array(a), Array(b)) => {
            if depth == 0 {
                return false;
            }
            a.len() == b.len() && a.iter().zip(b).all(|(x, y)| deep_eq(x, y, depth - 1))
        }
        (Object(a), Object(b)) => {
            if depth == 0 {
                return false;
            }
            a.len() == b.len()
                && a.iter().all(|(k, x)| match b.get(k) {
                    Some(y) => deep_eq(x, y, depth - 1),
                    None => false,
                })
        }
        _ => false,
    }
}

impl From<&str> for Element {
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<String> for Element {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<bool> for Element {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

macro_rules! from_number {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for Element {
                fn from(n: $ty) -> Self {
                    Self::Number(n as f64)
                }
            }
        )+
    };
}

from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T: Into<Element>> From<Option<T>> for Element {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Element>> From<Vec<T>> for Element {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}

impl From<IndexMap<String, Element>> for Element {
    fn from(map: IndexMap<String, Element>) -> Self {
        Self::Object(map)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Value> for Element {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Value::String(s) => Self::String(s),
            Value::Array(v) => Self::Array(v.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders() {
        assert_eq!(Element::from(":id").placeholder(), Some("id"));
        assert_eq!(Element::from("::x").placeholder(), Some(":x"));
        assert_eq!(Element::from(":").placeholder(), None);
        assert_eq!(Element::from("id").placeholder(), None);
        assert_eq!(Element::Null.placeholder(), None);

        assert!(Element::from("*").is_wildcard());
        assert!(!Element::from("**").is_wildcard());
    }

    #[test]
    fn deep_equality() {
        let a = Element::object([("x", Element::from(1)), ("y", Element::from("s"))]);
        let b = Element::object([("y", Element::from("s")), ("x", Element::from(1))]);
        assert!(deep_eq(&a, &b, 8));

        let c = Element::object([("x", Element::from(1))]);
        assert!(!deep_eq(&a, &c, 8));
        assert!(!deep_eq(&c, &a, 8));

        assert!(deep_eq(&Element::Null, &Element::Null, 8));
        assert!(!deep_eq(&Element::Null, &Element::Undefined, 8));
        assert!(!deep_eq(&Element::Null, &Element::object::<&str, Element, _>([]), 8));

        assert!(deep_eq(&Element::from(vec![1, 2]), &Element::from(vec![1, 2]), 8));
        assert!(!deep_eq(&Element::from(vec![1, 2]), &Element::from(vec![2, 1]), 8));
        assert!(!deep_eq(
            &Element::Array(vec![]),
            &Element::object::<&str, Element, _>([]),
            8
        ));

        assert!(!deep_eq(&Element::from(f64::NAN), &Element::from(f64::NAN), 8));
        assert!(deep_eq(&Element::from(0.0), &Element::from(-0.0), 8));
    }

    #[test]
    fn deep_equality_respects_depth() {
        let nested = Element::object([("a", Element::object([("b", 1)]))]);
        assert!(deep_eq(&nested, &nested.clone(), 2));
        assert!(!deep_eq(&nested, &nested.clone(), 1));
    }

    #[cfg(feature = "json")]
    #[test]
    fn from_json() {
        let v = serde_json::json!(["users", { "id": "1", "tags": [true, null] }, 2.5]);
        let e = Element::from(v);
        let expected = Element::from(vec![
            Element::from("users"),
            Element::object([
                ("id", Element::from("1")),
                ("tags", Element::from(vec![Element::Bool(true), Element::Null])),
            ]),
            Element::from(2.5),
        ]);
        assert_eq!(e, expected);
    }
}
