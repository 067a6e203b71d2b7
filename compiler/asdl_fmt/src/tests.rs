use super::*;
use crate::test_support::{add, konst, op_desc, point, Mock, MockNode};
use asdl_ir::Desc;
use pretty_assertions::assert_eq;

#[test]
fn point_renders_inline() {
    let text = format_node(&point(1, 2), &FormatConfig::default()).unwrap();
    assert_eq!(text, "(point 1 2)");
}

#[test]
fn nested_expression_inline_when_it_fits() {
    let expr = add(konst(1), add(konst(2), konst(3)));
    let text = format_node(&expr, &FormatConfig::with_max_width(80)).unwrap();
    assert_eq!(text, "(Add (Const 1) (Add (Const 2) (Const 3)))");
}

#[test]
fn nested_expression_breaks_when_narrow() {
    let expr = add(konst(1), add(konst(2), konst(3)));
    let text = format_node(&expr, &FormatConfig::with_max_width(10)).unwrap();
    let expected = "\
(Add
  (Const
    1
  )
  (Add
    (Const
      2
    )
    (Const
      3
    )
  )
)";
    assert_eq!(text, expected);
}

#[test]
fn enum_values_render_as_plain_text() {
    let plus = FieldValue::Enum { tag: 1, name: "Plus" };
    assert_eq!(format_value(&plus, &FormatConfig::default()).unwrap(), "Plus");
    assert_eq!(
        format_value(&plus, &FormatConfig::default().raw_tags()).unwrap(),
        "1"
    );
}

#[test]
fn bare_primitives_render_as_leaves() {
    let config = FormatConfig::with_max_width(1);
    assert_eq!(format_value(&FieldValue::Int(-42), &config).unwrap(), "-42");
    assert_eq!(format_value(&FieldValue::Str("hello"), &config).unwrap(), "hello");
}

#[test]
fn array_value_cannot_stand_alone() {
    let err = format_value(&FieldValue::Array(Vec::new()), &FormatConfig::default()).unwrap_err();
    assert_eq!(
        err.to_string(),
        "malformed tree at <root>: cannot render array on its own"
    );
}

#[test]
fn empty_record() {
    let node = MockNode::new("Eof");
    assert_eq!(format_node(&node, &FormatConfig::default()).unwrap(), "(Eof)");
}

#[test]
fn mixed_fields() {
    let node = MockNode::new("Binary")
        .field("op", op_desc(), Mock::Enum(1, "Plus".to_string()))
        .field("left", Desc::Int, Mock::Int(1))
        .field("right", Desc::Maybe(Box::new(Desc::Int)), Mock::Absent)
        .field(
            "extra",
            Desc::Array(Box::new(Desc::Str)),
            Mock::Array(vec![Mock::Str("x".to_string())]),
        );
    assert_eq!(
        format_node(&node, &FormatConfig::default()).unwrap(),
        "(Binary Plus 1 x)"
    );
}

#[test]
fn rendering_is_idempotent() {
    let expr = add(konst(1), add(konst(2), konst(3)));
    let config = FormatConfig::with_max_width(20);
    let first = format_node(&expr, &config).unwrap();
    let second = format_node(&expr, &config).unwrap();
    assert_eq!(first, second);
}

#[test]
fn write_node_appends_to_emitter() {
    let mut out = StringEmitter::new();
    out.emit("tree: ");
    write_node(&konst(5), &FormatConfig::default(), &mut out).unwrap();
    assert_eq!(out.output(), "tree: (Const 5)");
}

#[test]
fn write_node_budgets_from_current_column() {
    // "(Const 5)" is 9 wide: fits in 12 alone, not after a 6-column prefix.
    let config = FormatConfig::with_max_width(12);
    let mut fresh = StringEmitter::new();
    write_node(&konst(5), &config, &mut fresh).unwrap();
    assert_eq!(fresh.output(), "(Const 5)");

    let mut out = StringEmitter::new();
    out.emit("tree: ");
    write_node(&konst(5), &config, &mut out).unwrap();
    assert_eq!(out.output(), "tree: (Const\n  5\n)");
}

#[test]
fn write_node_after_newline_has_full_width() {
    let config = FormatConfig::with_max_width(12);
    let mut out = StringEmitter::new();
    out.emit("tree:");
    out.emit_newline();
    write_node(&konst(5), &config, &mut out).unwrap();
    assert_eq!(out.output(), "tree:\n(Const 5)");
}

#[test]
fn string_field_with_line_break_is_not_inline() {
    let node = MockNode::new("S")
        .field("a", Desc::Str, Mock::Str("ab\ncd".to_string()))
        .field("b", Desc::Str, Mock::Str("ef".to_string()));
    assert_eq!(
        format_node(&node, &FormatConfig::default()).unwrap(),
        "(S\n  ab\ncd\n  ef\n)"
    );
}

#[test]
fn no_trailing_newline() {
    let expr = add(konst(1), konst(2));
    let text = format_node(&expr, &FormatConfig::with_max_width(5)).unwrap();
    assert!(!text.ends_with('\n'));
    assert!(text.ends_with(')'));
}
