// ABOUTME: End-to-end split, removal and reorder walkthroughs on the pane tree.
// ABOUTME: Exercises the public API only, addressing panes by id and by path.

use ps_layout::{Orientation, PaneEditor, PaneEvent, PanePath, PaneTree};

#[test]
fn nested_split_collapses_back_to_leaf() {
    let mut tree = PaneTree::new();
    let root = tree.root_id();

    tree.split_pane(root, Orientation::Horizontal).unwrap();
    assert_eq!(tree.root().orientation(), Some(Orientation::Horizontal));
    assert_eq!(tree.root().children().len(), 2);
    assert!(tree.root().children().iter().all(|c| c.is_leaf()));

    let first: PanePath = "0".parse().unwrap();
    tree.split_at(&first, Orientation::Vertical).unwrap();
    let child = tree.pane_at(&first).unwrap();
    assert_eq!(child.orientation(), Some(Orientation::Vertical));
    assert_eq!(child.children().len(), 2);

    assert!(tree.remove_node_at(&"0.1".parse().unwrap()));
    assert!(tree.remove_node_at(&"0.0".parse().unwrap()));

    let child = tree.pane_at(&first).unwrap();
    assert!(child.is_leaf());
    assert_eq!(child.orientation(), None);
    assert_eq!(tree.root().orientation(), Some(Orientation::Horizontal));
}

#[test]
fn removing_first_child_keeps_second() {
    let mut tree = PaneTree::new();
    let root = tree.root_id();
    let (_, second) = tree.split_pane(root, Orientation::Horizontal).unwrap();

    assert!(tree.remove_node_at(&"0".parse().unwrap()));

    let children = tree.root().children();
    assert_eq!(children.len(), 1);
    assert_eq!(children[0].id(), second);
    assert_eq!(tree.root().orientation(), Some(Orientation::Horizontal));
}

#[test]
fn drag_session_reorders_nested_siblings() {
    let mut editor = PaneEditor::default();
    let root = editor.tree().root_id();
    editor.dispatch(PaneEvent::Split {
        pane: root,
        orientation: Orientation::Vertical,
    });
    let bottom = editor.tree().leaves()[1];
    editor.dispatch(PaneEvent::Split {
        pane: bottom,
        orientation: Orientation::Horizontal,
    });
    let before = editor.tree().leaves();

    editor.dispatch(PaneEvent::DragStart { parent: bottom, index: 0 });
    editor.dispatch(PaneEvent::DragOver { parent: bottom, index: 1 });
    editor.dispatch(PaneEvent::Drop { parent: bottom, index: 1 });

    let after = editor.tree().leaves();
    assert_eq!(after, vec![before[0], before[2], before[1]]);

    // Same swap again restores the original order
    editor.dispatch(PaneEvent::DragStart { parent: bottom, index: 0 });
    editor.dispatch(PaneEvent::Drop { parent: bottom, index: 1 });
    assert_eq!(editor.tree().leaves(), before);
}

#[test]
fn stale_indices_never_panic() {
    let mut tree = PaneTree::new();
    let root = tree.root_id();
    tree.split_pane(root, Orientation::Horizontal).unwrap();
    let snapshot = tree.root().clone();

    assert!(!tree.reorder(root, 0, 9));
    assert!(!tree.remove_child(root, 9));
    assert!(!tree.remove_node_at(&"4.2.1".parse().unwrap()));
    assert!(tree
        .split_at(&"3".parse().unwrap(), Orientation::Vertical)
        .is_err());
    assert_eq!(tree.root(), &snapshot);
}
