//! Property-based and table tests for the indentation dump
//!
//! The expected output of every tree is rebuilt from an independent pre-order
//! walk, so the properties below check line count, ordering, indentation,
//! fallback marking and repeatability against that reference.

use proptest::prelude::*;
use rstest::rstest;
use std::thread;
use treedump::formats::{Formatter, JsonFormatter};
use treedump::loader::from_json_str;
use treedump::{
    dump_lines, dump_to_string, dump_with, DumpOptions, DumpVisitor, Node, NodeKind,
    FALLBACK_SUFFIX,
};

fn arb_kind() -> impl Strategy<Value = NodeKind> {
    prop_oneof![
        Just(NodeKind::Start),
        Just(NodeKind::Add),
        Just(NodeKind::Multiply),
        "[a-z]{0,6}".prop_map(NodeKind::Identifier),
        any::<i64>().prop_map(NodeKind::Integer),
        "[A-Z][a-z]{0,8}".prop_map(NodeKind::Other),
        arb_colliding_name().prop_map(NodeKind::Other),
    ]
}

/// Unhandled kind names spelled like the specialized ones
fn arb_colliding_name() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "start", "Start", "add", "ADD", "multiply", "identifier", "integer", "other", "Other",
    ])
    .prop_map(String::from)
}

fn arb_tree() -> impl Strategy<Value = Node> {
    let leaf = arb_kind().prop_map(Node::leaf);
    leaf.prop_recursive(6, 64, 4, |inner| {
        (arb_kind(), prop::collection::vec(inner, 0..4))
            .prop_map(|(kind, children)| Node::new(kind, children))
    })
}

fn arb_indent_unit() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(" ".to_string()),
        Just("  ".to_string()),
        Just("\t".to_string()),
        Just("| ".to_string()),
    ]
}

/// (depth, node) pairs in pre-order
fn preorder<'a>(node: &'a Node, depth: usize, out: &mut Vec<(usize, &'a Node)>) {
    out.push((depth, node));
    for child in node.children() {
        preorder(child, depth + 1, out);
    }
}

fn expected_lines(root: &Node, unit: &str) -> Vec<String> {
    let mut walk = Vec::new();
    preorder(root, 0, &mut walk);
    walk.into_iter()
        .map(|(depth, node)| {
            let suffix = if node.kind.is_specialized() {
                ""
            } else {
                FALLBACK_SUFFIX
            };
            format!("{}{}{}", unit.repeat(depth), node.display_label(), suffix)
        })
        .collect()
}

fn lines_with(root: &Node, unit: &str) -> Vec<String> {
    let options = DumpOptions::default().with_indent_unit(unit);
    let (_, lines) = dump_with(root, &options, Vec::new(), ()).unwrap();
    lines
}

proptest! {
    #[test]
    fn one_line_per_node(tree in arb_tree()) {
        prop_assert_eq!(dump_lines(&tree).len(), tree.count());
    }

    #[test]
    fn lines_follow_preorder_with_depth_indentation(tree in arb_tree(), unit in arb_indent_unit()) {
        prop_assert_eq!(lines_with(&tree, &unit), expected_lines(&tree, &unit));
    }

    #[test]
    fn descendants_are_indented_deeper(tree in arb_tree()) {
        let unit = "\t";
        let lines = lines_with(&tree, unit);
        let depth_of = |line: &String| line.len() - line.trim_start_matches(unit).len();

        // the line after a node is either its first child (one deeper) or
        // closes one or more subtrees (never deeper than one level)
        for pair in lines.windows(2) {
            prop_assert!(depth_of(&pair[1]) <= depth_of(&pair[0]) + 1);
        }
        prop_assert_eq!(depth_of(&lines[0]), 0);
    }

    #[test]
    fn depth_is_restored_after_every_dump(tree in arb_tree()) {
        let mut visitor = DumpVisitor::new(Vec::<String>::new(), &DumpOptions::default());
        tree.accept(&mut visitor, ()).unwrap();
        prop_assert_eq!(visitor.indent(), 0);
    }

    #[test]
    fn fallback_nodes_are_marked_and_descended(tree in arb_tree()) {
        let mut walk = Vec::new();
        preorder(&tree, 0, &mut walk);
        let lines = dump_lines(&tree);

        for ((_, node), line) in walk.iter().zip(&lines) {
            prop_assert_eq!(line.ends_with(FALLBACK_SUFFIX), !node.kind.is_specialized());
        }
        prop_assert_eq!(lines.len(), walk.len());
    }

    #[test]
    fn repeated_dumps_are_identical(tree in arb_tree(), unit in arb_indent_unit()) {
        let options = DumpOptions::default().with_indent_unit(unit);
        let first = dump_to_string(&tree, &options).unwrap();
        let second = dump_to_string(&tree, &options).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn json_output_reloads_as_the_same_tree(tree in arb_tree()) {
        let json = JsonFormatter.serialize(&tree).unwrap();
        let reloaded = from_json_str(&json).unwrap();
        prop_assert_eq!(dump_lines(&reloaded), dump_lines(&tree));
        prop_assert_eq!(reloaded, tree);
    }
}

fn expression_tree() -> Node {
    // a + b * 3
    Node::start(vec![Node::add(vec![
        Node::identifier("a"),
        Node::multiply(vec![Node::identifier("b"), Node::integer(3)]),
    ])])
}

#[test]
fn expression_dump_snapshot() {
    let output = dump_to_string(&expression_tree(), &DumpOptions::default()).unwrap();
    insta::assert_snapshot!(output, @r"
    Start
     Add
      Identifier(a)
      Multiply
       Identifier(b)
       Integer(3)
    ");
}

#[rstest]
#[case::single_leaf(Node::integer(5), vec!["Integer(5)"])]
#[case::add_of_integers(
    Node::start(vec![Node::add(vec![Node::integer(2), Node::integer(3)])]),
    vec!["Start", " Add", "  Integer(2)", "  Integer(3)"]
)]
#[case::unhandled_leaf(
    Node::start(vec![Node::other("Literal", vec![])]),
    vec!["Start", " Literal: no specialized handler for this node kind"]
)]
#[case::unhandled_with_children(
    Node::other("Call", vec![Node::identifier("f"), Node::integer(1)]),
    vec![
        "Call: no specialized handler for this node kind",
        " Identifier(f)",
        " Integer(1)",
    ]
)]
#[case::siblings_share_depth(
    Node::start(vec![
        Node::multiply(vec![Node::add(vec![Node::integer(1)])]),
        Node::identifier("z"),
    ]),
    vec!["Start", " Multiply", "  Add", "   Integer(1)", " Identifier(z)"]
)]
fn dump_cases(#[case] tree: Node, #[case] expected: Vec<&str>) {
    assert_eq!(dump_lines(&tree), expected);
}

#[rstest]
#[case(" ", "Start\n Add\n  Identifier(a)\n")]
#[case("    ", "Start\n    Add\n        Identifier(a)\n")]
#[case("\t", "Start\n\tAdd\n\t\tIdentifier(a)\n")]
#[case("", "Start\nAdd\nIdentifier(a)\n")]
fn indent_units(#[case] unit: &str, #[case] expected: &str) {
    let tree = Node::start(vec![Node::add(vec![Node::identifier("a")])]);
    let options = DumpOptions::default().with_indent_unit(unit);
    assert_eq!(dump_to_string(&tree, &options).unwrap(), expected);
}

#[test]
fn concurrent_dumps_are_independent() {
    let deep = Node::start(vec![Node::add(vec![Node::multiply(vec![
        Node::integer(1),
        Node::integer(2),
    ])])]);
    let wide = Node::start((0..50).map(Node::integer).collect());

    let expected_deep = dump_lines(&deep);
    let expected_wide = dump_lines(&wide);

    thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let tree = if i % 2 == 0 { &deep } else { &wide };
                scope.spawn(move || (i, dump_lines(tree)))
            })
            .collect();

        for handle in handles {
            let (i, lines) = handle.join().unwrap();
            if i % 2 == 0 {
                assert_eq!(lines, expected_deep);
            } else {
                assert_eq!(lines, expected_wide);
            }
        }
    });
}
