use super::*;
use pretty_assertions::assert_eq;

fn leaf(s: &str) -> TreeNode {
    TreeNode::leaf(s)
}

fn node(label: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::node(label, children)
}

fn render(tree: &TreeNode, max_width: usize) -> String {
    let config = FormatConfig::with_max_width(max_width);
    let mut out = StringEmitter::new();
    emit_layout(&layout(tree, &config), 0, &config, &mut out);
    out.output()
}

#[test]
fn fits_on_one_line() {
    let tree = node("Point", vec![leaf("1"), leaf("2")]);
    assert_eq!(layout(&tree, &FormatConfig::default()), Layout::Line("(Point 1 2)".to_string()));
}

#[test]
fn exact_fit_is_inline() {
    let tree = node("Point", vec![leaf("1"), leaf("2")]);
    assert_eq!(render(&tree, 11), "(Point 1 2)");
    assert_eq!(render(&tree, 10), "(Point\n  1\n  2\n)");
}

#[test]
fn zero_children_always_inline() {
    let tree = node("Empty", Vec::new());
    assert_eq!(render(&tree, 80), "(Empty)");
    assert_eq!(render(&tree, 2), "(Empty)");
}

#[test]
fn leaf_is_never_broken() {
    assert_eq!(render(&leaf("a-very-long-leaf"), 4), "a-very-long-leaf");
}

#[test]
fn only_the_overflowing_level_breaks() {
    let tree = node(
        "Add",
        vec![
            node("Const", vec![leaf("1")]),
            node("Add", vec![node("Const", vec![leaf("2")]), node("Const", vec![leaf("3")])]),
        ],
    );
    assert_eq!(render(&tree, 80), "(Add (Const 1) (Add (Const 2) (Const 3)))");
    assert_eq!(
        render(&tree, 30),
        "(Add\n  (Const 1)\n  (Add (Const 2) (Const 3))\n)"
    );
}

#[test]
fn block_child_forces_parent_block() {
    let long = "x".repeat(20);
    let tree = node("Outer", vec![node("Inner", vec![leaf(&long)])]);
    let expected = format!("(Outer\n  (Inner\n    {long}\n  )\n)");
    assert_eq!(render(&tree, 24), expected);
}

#[test]
fn child_budget_shrinks_with_indent() {
    // "(Const 1)" is 9 wide: fits at 9 on its own, not one level down.
    let tree = node("Neg", vec![node("Const", vec![leaf("1")])]);
    assert_eq!(render(&node("Const", vec![leaf("1")]), 9), "(Const 1)");
    assert_eq!(render(&tree, 10), "(Neg\n  (Const\n    1\n  )\n)");
    assert_eq!(render(&tree, 11), "(Neg\n  (Const 1)\n)");
}

#[test]
fn flat_width_prefilter_skips_attempt() {
    let tree = node("Word", vec![leaf("abcdef"), leaf("ghijkl")]);
    // flat width 16 > 15
    assert!(tree.flat_width() > 15);
    assert!(!layout(&tree, &FormatConfig::with_max_width(15)).is_line());
}

#[test]
fn single_line_attempt_aborts_on_overflow() {
    let children = vec![Layout::Line("aaaa".to_string()), Layout::Line("bbbb".to_string())];
    assert_eq!(try_single_line("N", &children, 12), None);
    assert_eq!(try_single_line("N", &children, 13), Some("(N aaaa bbbb)".to_string()));
}

#[test]
fn single_line_rejects_block_child() {
    let children = vec![Layout::Block {
        label: "B".to_string(),
        children: Vec::new(),
    }];
    assert_eq!(try_single_line("A", &children, 80), None);
}

#[test]
fn multiline_leaf_breaks_parent() {
    let tree = node("S", vec![leaf("ab\ncd"), leaf("ef")]);
    assert!(!layout(&tree, &FormatConfig::default()).is_line());
    assert_eq!(render(&tree, 80), "(S\n  ab\ncd\n  ef\n)");

    let children = vec![Layout::Line("ab\ncd".to_string())];
    assert_eq!(try_single_line("S", &children, 80), None);
}

#[test]
fn multiline_leaf_breaks_every_ancestor() {
    let tree = node("Outer", vec![node("S", vec![leaf("a\nb")])]);
    assert_eq!(render(&tree, 80), "(Outer\n  (S\n    a\nb\n  )\n)");
}

#[test]
fn start_column_only_charges_the_first_line() {
    let config = FormatConfig::with_max_width(12);
    let tree = node("Neg", vec![node("Const", vec![leaf("1")])]);
    // "(Neg (Const 1))" is 15 wide; "(Const 1)" still fits one level down.
    assert_eq!(
        layout_at(&tree, &config, 6),
        Layout::Block {
            label: "Neg".to_string(),
            children: vec![Layout::Line("(Const 1)".to_string())],
        }
    );
    assert_eq!(layout_at(&tree, &config, 0), layout(&tree, &config));

    let small = node("Const", vec![leaf("1")]);
    assert!(layout_at(&small, &config, 3).is_line());
    assert!(!layout_at(&small, &config, 4).is_line());
}

#[test]
fn custom_indent_size() {
    let tree = node("Pair", vec![leaf("left"), leaf("right")]);
    let config = FormatConfig {
        max_width: 8,
        indent_size: 4,
        ..FormatConfig::default()
    };
    let mut out = StringEmitter::new();
    emit_layout(&layout(&tree, &config), 0, &config, &mut out);
    assert_eq!(out.output(), "(Pair\n    left\n    right\n)");
}

#[test]
fn emit_at_nonzero_indent() {
    let config = FormatConfig::with_max_width(4);
    let tree = node("T", vec![leaf("abcd")]);
    let mut out = StringEmitter::new();
    emit_layout(&layout(&tree, &config), 2, &config, &mut out);
    assert_eq!(out.output(), "  (T\n    abcd\n  )");
}
