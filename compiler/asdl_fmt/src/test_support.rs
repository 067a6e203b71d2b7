//! Hand-built instances for renderer tests.

use std::sync::Arc;

use asdl_ir::{Constructor, Desc, Field, FieldValue, NodeView, Product, Sum};

/// Owned field value.
pub(crate) enum Mock {
    Unset,
    Absent,
    Int(i64),
    Str(String),
    Enum(u32, String),
    Node(MockNode),
    Array(Vec<Mock>),
}

impl Mock {
    pub(crate) fn view(&self) -> FieldValue<'_> {
        match self {
            Mock::Unset => FieldValue::Unset,
            Mock::Absent => FieldValue::Absent,
            Mock::Int(n) => FieldValue::Int(*n),
            Mock::Str(s) => FieldValue::Str(s),
            Mock::Enum(tag, name) => FieldValue::Enum { tag: *tag, name },
            Mock::Node(node) => FieldValue::Node(node),
            Mock::Array(items) => FieldValue::Array(items.iter().map(Mock::view).collect()),
        }
    }
}

/// Record with an explicit field table.
pub(crate) struct MockNode {
    name: String,
    names: Vec<String>,
    descs: Vec<Desc>,
    values: Vec<Mock>,
}

impl MockNode {
    pub(crate) fn new(name: &str) -> Self {
        MockNode {
            name: name.to_string(),
            names: Vec::new(),
            descs: Vec::new(),
            values: Vec::new(),
        }
    }

    pub(crate) fn field(mut self, name: &str, desc: Desc, value: Mock) -> Self {
        self.names.push(name.to_string());
        self.descs.push(desc);
        self.values.push(value);
        self
    }

    /// A field listed in `field_names` but missing from the descriptor table.
    pub(crate) fn undeclared(mut self, name: &str) -> Self {
        self.names.push(name.to_string());
        self
    }
}

impl NodeView for MockNode {
    fn type_name(&self) -> &str {
        &self.name
    }

    fn field_names(&self) -> &[String] {
        &self.names
    }

    fn field_desc(&self, field: &str) -> Option<&Desc> {
        let i = self.names.iter().position(|n| n == field)?;
        self.descs.get(i)
    }

    fn field_value(&self, field: &str) -> FieldValue<'_> {
        match self.names.iter().position(|n| n == field) {
            Some(i) => self.values.get(i).map_or(FieldValue::Unset, Mock::view),
            None => FieldValue::Unset,
        }
    }
}

pub(crate) fn expr_desc() -> Desc {
    Desc::Sum(Arc::new(Sum {
        name: "expr".to_string(),
        constructors: vec![
            Constructor::new("Const", vec![Field::required("n", "int")]),
            Constructor::new(
                "Add",
                vec![Field::required("left", "expr"), Field::required("right", "expr")],
            ),
        ],
    }))
}

pub(crate) fn op_desc() -> Desc {
    Desc::Sum(Arc::new(Sum {
        name: "op".to_string(),
        constructors: vec![Constructor::unit("Plus"), Constructor::unit("Minus")],
    }))
}

pub(crate) fn point_desc() -> Desc {
    Desc::Product(Arc::new(Product {
        name: "point".to_string(),
        fields: vec![Field::required("x", "int"), Field::required("y", "int")],
    }))
}

pub(crate) fn point(x: i64, y: i64) -> MockNode {
    MockNode::new("point")
        .field("x", Desc::Int, Mock::Int(x))
        .field("y", Desc::Int, Mock::Int(y))
}

pub(crate) fn konst(n: i64) -> MockNode {
    MockNode::new("Const").field("n", Desc::Int, Mock::Int(n))
}

pub(crate) fn add(left: MockNode, right: MockNode) -> MockNode {
    MockNode::new("Add")
        .field("left", expr_desc(), Mock::Node(left))
        .field("right", expr_desc(), Mock::Node(right))
}
