//! Tests for the generic multi-child Tree and its traversals

use rstest::{fixture, rstest};

use numtree::util::testing;
use numtree::{LoopType, Tree, TreeNodeConvert};

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

//         1
//      /  |  \
//     2   3   4
//    / \      |
//   5   6     7
//             |
//             8
#[fixture]
fn sample() -> Tree {
    let two = Tree::with_children(2.0, Tree::make_children(&[5.0, 6.0]));
    let seven = Tree::with_children(7.0, Tree::make_children(&[8.0]));
    let four = Tree::with_children(4.0, vec![seven]);
    Tree::with_children(1.0, vec![two, Tree::new(3.0), four])
}

fn values(nodes: &[&Tree]) -> Vec<f64> {
    Tree::value_vector(nodes).into_iter().flatten().collect()
}

fn position(nodes: &[&Tree], target: &Tree) -> Option<usize> {
    nodes.iter().position(|n| std::ptr::eq(*n, target))
}

// ============================================================
// make_children
// ============================================================

#[rstest]
#[case(vec![])]
#[case(vec![1.0])]
#[case(vec![1.0, 5.6, 9.8])]
#[case(vec![-2.5, 0.0, 0.0, 7.25])]
fn given_values_when_make_children_then_returns_leaves_in_order(#[case] input: Vec<f64>) {
    let children = Tree::make_children(&input);

    assert_eq!(children.len(), input.len());
    for (child, expected) in children.iter().zip(&input) {
        assert_eq!(child.value(), Some(*expected));
        assert_eq!(child.n_children(), 0);
    }
}

// ============================================================
// DFS
// ============================================================

#[test]
fn given_childless_root_when_dfs_then_returns_only_root() {
    let root = Tree::new(4.2);
    let nodes = Tree::dfs(&root);

    assert_eq!(nodes.len(), 1);
    assert!(std::ptr::eq(nodes[0], &root));
}

#[test]
fn given_unset_childless_root_when_dfs_then_returns_unset_value() {
    let root = Tree::empty();
    assert_eq!(Tree::value_vector(&Tree::dfs(&root)), vec![None]);
}

#[rstest]
fn given_tree_when_dfs_then_root_is_last_after_children(sample: Tree) {
    let nodes = Tree::dfs(&sample);
    assert_eq!(values(&nodes), vec![5.0, 6.0, 2.0, 3.0, 8.0, 7.0, 4.0, 1.0]);
}

#[rstest]
fn given_tree_when_dfs_then_equals_concat_of_child_dfs_plus_root(sample: Tree) {
    let mut expected: Vec<&Tree> = Vec::new();
    for child in sample.children() {
        expected.extend(Tree::dfs(child));
    }
    expected.push(&sample);

    let nodes = Tree::dfs(&sample);
    assert_eq!(nodes.len(), expected.len());
    for (got, want) in nodes.iter().zip(&expected) {
        assert!(std::ptr::eq(*got, *want));
    }
}

#[rstest]
fn given_tree_when_dfs_iterative_then_matches_recursive(sample: Tree) {
    let recursive = Tree::dfs_with(&sample, LoopType::Recursive);
    let iterative = Tree::dfs_with(&sample, LoopType::Iterative);

    assert_eq!(Tree::value_vector(&recursive), Tree::value_vector(&iterative));
    assert_eq!(Tree::value_vector(&Tree::dfs(&sample)), Tree::value_vector(&recursive));
}

#[test]
fn given_wide_and_deep_tree_when_dfs_iterative_then_matches_recursive() {
    // chain of 50 nodes, each also carrying three leaves
    let mut tree = Tree::with_children(0.0, Tree::make_children(&[0.1, 0.2, 0.3]));
    for i in 1..50 {
        let base = f64::from(i);
        let mut children = Tree::make_children(&[base + 0.1, base + 0.2]);
        children.insert(1, tree);
        tree = Tree::with_children(base, children);
    }

    let recursive = Tree::dfs_with(&tree, LoopType::Recursive);
    let iterative = Tree::dfs_with(&tree, LoopType::Iterative);
    assert_eq!(recursive.len(), 50 + 3 + 49 * 2);
    assert_eq!(Tree::value_vector(&recursive), Tree::value_vector(&iterative));
}

// ============================================================
// BFS
// ============================================================

#[rstest]
fn given_tree_when_bfs_then_returns_level_order(sample: Tree) {
    let nodes = Tree::bfs(&sample);
    assert_eq!(values(&nodes), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0]);
    assert!(std::ptr::eq(nodes[0], &sample));
}

#[rstest]
fn given_tree_when_bfs_then_every_node_comes_after_its_parent(sample: Tree) {
    let nodes = Tree::bfs(&sample);
    for (i, node) in nodes.iter().enumerate() {
        for child in node.children() {
            let child_pos = position(&nodes, child).expect("child missing from bfs");
            assert!(child_pos > i, "child {:?} emitted before its parent", child.value());
        }
    }
}

#[test]
fn given_childless_root_when_bfs_then_returns_only_root() {
    let root = Tree::new(1.0);
    assert_eq!(Tree::value_vector(&Tree::bfs(&root)), vec![Some(1.0)]);
}

#[rstest]
fn given_tree_when_dfs_and_bfs_then_both_visit_every_node_once(sample: Tree) {
    let dfs = Tree::dfs(&sample);
    let bfs = Tree::bfs(&sample);
    assert_eq!(dfs.len(), bfs.len());

    for node in &dfs {
        assert_eq!(dfs.iter().filter(|n| std::ptr::eq(**n, *node)).count(), 1);
        assert!(position(&bfs, node).is_some());
    }

    let mut dfs_values = values(&dfs);
    let mut bfs_values = values(&bfs);
    dfs_values.sort_by(f64::total_cmp);
    bfs_values.sort_by(f64::total_cmp);
    assert_eq!(dfs_values, bfs_values);
}

// ============================================================
// Mutation and ownership
// ============================================================

#[rstest]
fn given_tree_when_set_children_then_traversals_see_new_children(mut sample: Tree) {
    let detached = sample.set_children(Tree::make_children(&[10.0, 11.0]));

    assert_eq!(detached.len(), 3);
    assert_eq!(values(&Tree::dfs(&sample)), vec![10.0, 11.0, 1.0]);
    // detached subtrees keep their own children
    assert_eq!(values(&Tree::dfs(&detached[0])), vec![5.0, 6.0, 2.0]);
}

#[rstest]
fn given_tree_when_take_children_then_root_becomes_leaf(mut sample: Tree) {
    let detached = sample.take_children();
    assert!(sample.is_leaf());
    assert_eq!(Tree::dfs(&sample).len(), 1);
    assert_eq!(detached[2].depth(), 3);
}

#[rstest]
fn given_tree_when_depth_and_leaves_then_match_shape(sample: Tree) {
    assert_eq!(sample.depth(), 4);
    assert_eq!(
        sample.leaf_values(),
        vec![Some(5.0), Some(6.0), Some(3.0), Some(8.0)]
    );
}

// ============================================================
// Rendering
// ============================================================

#[rstest]
fn given_tree_when_rendered_then_one_line_per_node(sample: Tree) {
    let rendered = sample.to_tree_string().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "1");
    assert!(lines.iter().any(|l| l.ends_with("8")));
}
