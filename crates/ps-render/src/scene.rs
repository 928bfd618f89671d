// ABOUTME: Snapshot of what to draw: the tree plus drag highlights.
// ABOUTME: Resolves drag indices into the pane ids the views decorate.

use ps_layout::{PaneEditor, PaneId, PaneTree};
use serde::Serialize;

/// Actions offered on a leaf pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SplitHorizontal,
    SplitVertical,
    Remove,
}

impl Action {
    pub fn all() -> &'static [Action] {
        &[Action::SplitHorizontal, Action::SplitVertical, Action::Remove]
    }

    pub fn button(&self) -> &'static str {
        match self {
            Action::SplitHorizontal => "[H]",
            Action::SplitVertical => "[V]",
            Action::Remove => "[X]",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Scene<'a> {
    pub tree: &'a PaneTree,
    /// Pane currently highlighted as a drop target
    pub drop_target: Option<PaneId>,
    /// Pane being dragged
    pub dragging: Option<PaneId>,
}

impl<'a> Scene<'a> {
    pub fn new(tree: &'a PaneTree) -> Self {
        Self {
            tree,
            drop_target: None,
            dragging: None,
        }
    }

    pub fn from_editor(editor: &'a PaneEditor) -> Self {
        let tree = editor.tree();
        let child_id = |(parent, index): (PaneId, usize)| {
            tree.find(parent)
                .and_then(|pane| pane.child(index))
                .map(|child| child.id())
        };
        Self {
            tree,
            drop_target: editor.hovered_target().and_then(child_id),
            dragging: editor.drag().map(|session| session.source),
        }
    }

    /// Actions shown on a pane; only leaves have any
    pub fn actions(&self, pane: PaneId) -> &'static [Action] {
        match self.tree.find(pane) {
            Some(p) if p.is_leaf() => Action::all(),
            _ => &[],
        }
    }

    pub fn is_drop_target(&self, pane: PaneId) -> bool {
        self.drop_target == Some(pane)
    }

    pub fn is_dragging(&self, pane: PaneId) -> bool {
        self.dragging == Some(pane)
    }
}
