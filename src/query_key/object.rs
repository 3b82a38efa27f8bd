use super::element::{deep_eq, Element};
use super::matcher::QueryParams;

use indexmap::IndexMap;

/// Matches an object value against an object sub-pattern.
///
/// Every pattern field must be present in the value; extra value fields are
/// ignored. A `":name"` field extracts, an object field on both sides
/// recurses and anything else must be deeply equal. `depth` bounds the
/// remaining nesting; reaching zero is a no-match.
pub(crate) fn match_object(
    value: &IndexMap<String, Element>,
    pattern: &IndexMap<String, Element>,
    params: &mut QueryParams,
    depth: usize,
) -> bool {
    if depth == 0 {
        tracing::debug!("query key object pattern exceeds the nesting limit");
        return false;
    }

    if pattern.len() > value.len() {
        return false;
    }

    for (key, expected) in pattern {
        let actual = match value.get(key) {
            Some(v) => v,
            None => return false,
        };

        if let Some(name) = expected.placeholder() {
            params.insert(name, actual.clone());
            continue;
        }

        let ok = match (expected, actual) {
            (Element::Object(p), Element::Object(v)) => match_object(v, p, params, depth - 1),
            _ => deep_eq(expected, actual, depth - 1),
        };
        if !ok {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obj(e: Element) -> IndexMap<String, Element> {
        match e {
            Element::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn subset_with_placeholder() {
        let value = obj(Element::object([("id", "1"), ("status", "active")]));
        let pattern = obj(Element::object([("id", ":uid")]));

        let mut params = QueryParams::default();
        assert!(match_object(&value, &pattern, &mut params, 8));
        assert_eq!(params.get("uid"), Some(&Element::from("1")));
    }

    #[test]
    fn missing_field_or_larger_pattern() {
        let value = obj(Element::object([("id", "1")]));

        let pattern = obj(Element::object([("name", ":n")]));
        assert!(!match_object(&value, &pattern, &mut QueryParams::default(), 8));

        let pattern = obj(Element::object([("id", ":id"), ("name", ":n")]));
        assert!(!match_object(&value, &pattern, &mut QueryParams::default(), 8));
    }

    #[test]
    fn nested_objects_recurse() {
        let value = obj(Element::object([
            ("filter", Element::object([("page", Element::from(2)), ("q", Element::from("x"))])),
            ("sort", Element::from("asc")),
        ]));
        let pattern = obj(Element::object([(
            "filter",
            Element::object([("page", ":page")]),
        )]));

        let mut params = QueryParams::default();
        assert!(match_object(&value, &pattern, &mut params, 8));
        assert_eq!(params.get("page"), Some(&Element::from(2)));

        assert!(!match_object(&value, &pattern, &mut QueryParams::default(), 1));
    }

    #[test]
    fn literal_fields_use_deep_equality() {
        let value = obj(Element::object([
            ("ids", Element::from(vec![1, 2])),
            ("flag", Element::Null),
        ]));

        let pattern = obj(Element::object([("ids", Element::from(vec![1, 2]))]));
        assert!(match_object(&value, &pattern, &mut QueryParams::default(), 8));

        let pattern = obj(Element::object([("flag", Element::Null)]));
        assert!(match_object(&value, &pattern, &mut QueryParams::default(), 8));

        let pattern = obj(Element::object([("flag", Element::Undefined)]));
        assert!(!match_object(&value, &pattern, &mut QueryParams::default(), 8));

        // "*" has no special meaning inside an object pattern
        let pattern = obj(Element::object([("flag", "*")]));
        assert!(!match_object(&value, &pattern, &mut QueryParams::default(), 8));
    }
}
