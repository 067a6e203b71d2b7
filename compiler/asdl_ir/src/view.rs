//! Read-only instance contract.
//!
//! Anything that wants to be rendered as a tree implements [`NodeView`]. The
//! renderer never sees the concrete instance type; it asks for the type name,
//! the ordered field names, each field's descriptor, and each field's value.

use std::fmt;

use crate::desc::Desc;

/// Generic read access to a record-like instance.
pub trait NodeView {
    /// Name of the generated type; used as the node label.
    fn type_name(&self) -> &str;

    /// Field names in positional order.
    fn field_names(&self) -> &[String];

    /// Resolved descriptor of a field, `None` if the type has no such field.
    fn field_desc(&self, field: &str) -> Option<&Desc>;

    /// Current value of a field.
    ///
    /// Returns [`FieldValue::Unset`] for a field that was never assigned and
    /// has no default.
    fn field_value(&self, field: &str) -> FieldValue<'_>;
}

/// A borrowed field value as seen through [`NodeView`].
#[derive(Clone)]
pub enum FieldValue<'a> {
    /// Never assigned and no default.
    Unset,
    /// A maybe field holding nothing.
    Absent,
    Int(i64),
    Str(&'a str),
    /// A simple-sum value.
    Enum { tag: u32, name: &'a str },
    /// A nested record instance.
    Node(&'a dyn NodeView),
    /// Elements of a repeated field, in order.
    Array(Vec<FieldValue<'a>>),
}

impl FieldValue<'_> {
    /// True for [`FieldValue::Unset`].
    #[inline]
    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Unset => f.write_str("Unset"),
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            FieldValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            FieldValue::Enum { tag, name } => f
                .debug_struct("Enum")
                .field("tag", tag)
                .field("name", name)
                .finish(),
            FieldValue::Node(node) => f.debug_tuple("Node").field(&node.type_name()).finish(),
            FieldValue::Array(items) => f.debug_tuple("Array").field(items).finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Hand-written record: point(int x, int? y)
    struct MockPoint {
        fields: Vec<String>,
        x_desc: Desc,
        y_desc: Desc,
        y: Option<i64>,
    }

    impl NodeView for MockPoint {
        fn type_name(&self) -> &'static str {
            "point"
        }

        fn field_names(&self) -> &[String] {
            &self.fields
        }

        fn field_desc(&self, field: &str) -> Option<&Desc> {
            match field {
                "x" => Some(&self.x_desc),
                "y" => Some(&self.y_desc),
                _ => None,
            }
        }

        fn field_value(&self, field: &str) -> FieldValue<'_> {
            match (field, self.y) {
                ("x", _) => FieldValue::Int(1),
                ("y", Some(y)) => FieldValue::Int(y),
                ("y", None) => FieldValue::Absent,
                _ => FieldValue::Unset,
            }
        }
    }

    fn point(y: Option<i64>) -> MockPoint {
        MockPoint {
            fields: vec!["x".to_string(), "y".to_string()],
            x_desc: Desc::Int,
            y_desc: Desc::Maybe(Box::new(Desc::Int)),
            y,
        }
    }

    #[test]
    fn view_exposes_fields_in_order() {
        let p = point(Some(2));
        assert_eq!(p.field_names(), ["x", "y"]);
        assert!(matches!(p.field_value("y"), FieldValue::Int(2)));
    }

    #[test]
    fn absent_is_not_unset() {
        let p = point(None);
        assert!(matches!(p.field_value("y"), FieldValue::Absent));
        assert!(!p.field_value("y").is_unset());
        assert!(p.field_value("z").is_unset());
    }

    #[test]
    fn unknown_field_has_no_desc() {
        let p = point(None);
        assert!(p.field_desc("z").is_none());
        assert!(matches!(p.field_desc("y"), Some(Desc::Maybe(_))));
    }

    #[test]
    fn debug_names_nested_node() {
        let p = point(None);
        let value = FieldValue::Array(vec![FieldValue::Node(&p), FieldValue::Str("s")]);
        assert_eq!(format!("{value:?}"), r#"Array([Node("point"), Str("s")])"#);
    }
}
