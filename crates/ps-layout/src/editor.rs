// ABOUTME: Event-driven editor that applies user interactions to the pane tree.
// ABOUTME: Routes split/remove requests and drives the drag session for reordering.

use ps_core::LayoutSettings;

use crate::drag::{DragEvent, DragState};
use crate::tree::{Orientation, PaneId, PaneTree};

/// Discrete interaction events from the host surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneEvent {
    Split { pane: PaneId, orientation: Orientation },
    Remove { pane: PaneId },
    DragStart { parent: PaneId, index: usize },
    DragOver { parent: PaneId, index: usize },
    DragLeave { parent: PaneId },
    Drop { parent: PaneId, index: usize },
    DragCancel,
    Reset,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The tree structure changed
    Changed,
    /// Only interaction state changed (drag source or hover)
    Tracked,
    /// Nothing happened
    Ignored,
}

/// Drag in progress among the children of one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub parent: PaneId,
    /// Pane being dragged; indices in `state` follow it across structural changes
    pub source: PaneId,
    pub state: DragState,
}

#[derive(Debug, Clone, Default)]
pub struct PaneEditor {
    tree: PaneTree,
    drag: Option<DragSession>,
}

impl PaneEditor {
    pub fn new(settings: &LayoutSettings) -> Self {
        Self {
            tree: PaneTree::with_settings(settings),
            drag: None,
        }
    }

    pub fn tree(&self) -> &PaneTree {
        &self.tree
    }

    pub fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Child being dragged, as (parent, index)
    pub fn drag_source(&self) -> Option<(PaneId, usize)> {
        let session = self.drag.as_ref()?;
        session.state.source().map(|index| (session.parent, index))
    }

    /// Drop target under the pointer, as (parent, index)
    pub fn hovered_target(&self) -> Option<(PaneId, usize)> {
        let session = self.drag.as_ref()?;
        session.state.hovered().map(|index| (session.parent, index))
    }

    pub fn dispatch(&mut self, event: PaneEvent) -> Outcome {
        let outcome = match event {
            PaneEvent::Split { pane, orientation } => {
                match self.tree.split_pane(pane, orientation) {
                    Ok((first, second)) => {
                        tracing::info!(
                            "Split pane {} {} into {} and {}",
                            pane,
                            orientation.label(),
                            first,
                            second
                        );
                        Outcome::Changed
                    }
                    Err(reason) => {
                        tracing::warn!("Refused to split pane {}: {}", pane, reason);
                        Outcome::Ignored
                    }
                }
            }
            PaneEvent::Remove { pane } => {
                let parent = self.tree.parent_of(pane);
                if self.tree.request_removal(pane) {
                    match parent {
                        Some(parent) => tracing::info!("Removed pane {} from {}", pane, parent),
                        None => tracing::info!("Reset root pane {}", pane),
                    }
                    Outcome::Changed
                } else {
                    tracing::debug!("Nothing to remove for pane {}", pane);
                    Outcome::Ignored
                }
            }
            PaneEvent::DragStart { parent, index } => self.drag_start(parent, index),
            PaneEvent::DragOver { parent, index } => {
                if self.is_valid_child(parent, index) {
                    self.drag_event(parent, DragEvent::Over(index))
                } else {
                    Outcome::Ignored
                }
            }
            PaneEvent::DragLeave { parent } => self.drag_event(parent, DragEvent::Leave),
            PaneEvent::Drop { parent, index } => self.drop_on(parent, index),
            PaneEvent::DragCancel => {
                if self.drag.take().is_some() {
                    tracing::debug!("Drag cancelled");
                    Outcome::Tracked
                } else {
                    Outcome::Ignored
                }
            }
            PaneEvent::Reset => {
                self.drag = None;
                if self.tree.reset() {
                    tracing::info!("Layout reset");
                    Outcome::Changed
                } else {
                    Outcome::Ignored
                }
            }
        };

        if outcome == Outcome::Changed {
            self.drop_stale_session();
        }
        outcome
    }

    fn is_valid_child(&self, parent: PaneId, index: usize) -> bool {
        self.tree
            .find(parent)
            .is_some_and(|pane| index < pane.children().len())
    }

    fn drag_start(&mut self, parent: PaneId, index: usize) -> Outcome {
        let Some(source) = self
            .tree
            .find(parent)
            .and_then(|pane| pane.child(index))
            .map(|child| child.id())
        else {
            tracing::debug!("Ignoring drag start on {} child {}", parent, index);
            return Outcome::Ignored;
        };
        let mut state = DragState::Idle;
        state.handle(DragEvent::Start(index));
        self.drag = Some(DragSession {
            parent,
            source,
            state,
        });
        tracing::debug!("Dragging child {} ({}) of {}", index, source, parent);
        Outcome::Tracked
    }

    fn drag_event(&mut self, parent: PaneId, event: DragEvent) -> Outcome {
        let Some(session) = self.drag.as_mut().filter(|s| s.parent == parent) else {
            return Outcome::Ignored;
        };
        let before = session.state;
        session.state.handle(event);
        if session.state == before {
            Outcome::Ignored
        } else {
            tracing::debug!("Drag state {:?} -> {:?}", before, session.state);
            Outcome::Tracked
        }
    }

    fn drop_on(&mut self, parent: PaneId, index: usize) -> Outcome {
        let Some(mut session) = self.drag.filter(|s| s.parent == parent) else {
            return Outcome::Ignored;
        };
        self.drag = None;

        match session.state.handle(DragEvent::Drop(index)) {
            Some(reorder) if self.tree.reorder(parent, reorder.from, reorder.to) => {
                tracing::info!(
                    "Swapped children {} and {} of {}",
                    reorder.from,
                    reorder.to,
                    parent
                );
                Outcome::Changed
            }
            Some(reorder) => {
                tracing::debug!(
                    "Stale reorder {} -> {} on {} ignored",
                    reorder.from,
                    reorder.to,
                    parent
                );
                Outcome::Tracked
            }
            None => Outcome::Tracked,
        }
    }

    /// Follow the dragged pane after a structural change.
    /// The drag ends once that pane is no longer a child of the session's parent.
    fn drop_stale_session(&mut self) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        let siblings = self
            .tree
            .find(session.parent)
            .map(|pane| pane.children())
            .unwrap_or_default();
        let Some(index) = siblings.iter().position(|c| c.id() == session.source) else {
            tracing::debug!(
                "Drag of {} on {} ended by structural change",
                session.source,
                session.parent
            );
            self.drag = None;
            return;
        };
        let shifted = session.state.source() != Some(index);
        session.state = match session.state.hovered() {
            Some(target) if !shifted && target < siblings.len() => DragState::Hovering {
                source: index,
                target,
            },
            // Sibling positions moved, so the hovered index names another pane
            _ => DragState::Dragging { source: index },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_core::ResplitPolicy;

    fn split_root(editor: &mut PaneEditor) -> (PaneId, PaneId, PaneId) {
        let root = editor.tree().root_id();
        let outcome = editor.dispatch(PaneEvent::Split {
            pane: root,
            orientation: Orientation::Horizontal,
        });
        assert_eq!(outcome, Outcome::Changed);
        let leaves = editor.tree().leaves();
        (root, leaves[0], leaves[1])
    }

    #[test]
    fn split_then_remove_through_events() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);

        assert_eq!(editor.dispatch(PaneEvent::Remove { pane: first }), Outcome::Changed);
        assert_eq!(editor.tree().leaves(), vec![second]);
        assert_eq!(editor.dispatch(PaneEvent::Remove { pane: second }), Outcome::Changed);
        assert!(editor.tree().find(root).unwrap().is_leaf());
    }

    #[test]
    fn resplit_is_ignored_under_guard() {
        let mut editor = PaneEditor::new(&LayoutSettings {
            resplit: ResplitPolicy::Guard,
            max_depth: None,
        });
        let (root, first, second) = split_root(&mut editor);
        let outcome = editor.dispatch(PaneEvent::Split {
            pane: root,
            orientation: Orientation::Vertical,
        });
        assert_eq!(outcome, Outcome::Ignored);
        assert_eq!(editor.tree().leaves(), vec![first, second]);
    }

    #[test]
    fn removing_unknown_pane_is_ignored() {
        let mut editor = PaneEditor::default();
        assert_eq!(editor.dispatch(PaneEvent::Remove { pane: PaneId(9) }), Outcome::Ignored);
        // Root already a leaf
        let root = editor.tree().root_id();
        assert_eq!(editor.dispatch(PaneEvent::Remove { pane: root }), Outcome::Ignored);
    }

    #[test]
    fn drag_and_drop_swaps_siblings() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);

        assert_eq!(
            editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 }),
            Outcome::Tracked
        );
        assert_eq!(
            editor.dispatch(PaneEvent::DragOver { parent: root, index: 1 }),
            Outcome::Tracked
        );
        assert_eq!(editor.hovered_target(), Some((root, 1)));
        assert_eq!(
            editor.dispatch(PaneEvent::Drop { parent: root, index: 1 }),
            Outcome::Changed
        );
        assert_eq!(editor.tree().leaves(), vec![second, first]);
        assert!(editor.drag().is_none());
    }

    #[test]
    fn abandoned_drag_leaves_tree_untouched() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);

        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });
        editor.dispatch(PaneEvent::DragOver { parent: root, index: 1 });
        assert_eq!(editor.dispatch(PaneEvent::DragLeave { parent: root }), Outcome::Tracked);
        assert_eq!(editor.hovered_target(), None);
        assert_eq!(editor.drag_source(), Some((root, 0)));
        assert_eq!(editor.dispatch(PaneEvent::DragCancel), Outcome::Tracked);
        assert_eq!(
            editor.dispatch(PaneEvent::Drop { parent: root, index: 1 }),
            Outcome::Ignored
        );
        assert_eq!(editor.tree().leaves(), vec![first, second]);
    }

    #[test]
    fn drop_on_source_ends_drag_without_change() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);

        editor.dispatch(PaneEvent::DragStart { parent: root, index: 1 });
        assert_eq!(
            editor.dispatch(PaneEvent::Drop { parent: root, index: 1 }),
            Outcome::Tracked
        );
        assert!(editor.drag().is_none());
        assert_eq!(editor.tree().leaves(), vec![first, second]);
    }

    #[test]
    fn events_for_other_parent_are_ignored() {
        let mut editor = PaneEditor::default();
        let (root, first, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::Split {
            pane: first,
            orientation: Orientation::Vertical,
        });

        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });
        assert_eq!(
            editor.dispatch(PaneEvent::DragOver { parent: first, index: 1 }),
            Outcome::Ignored
        );
        assert_eq!(
            editor.dispatch(PaneEvent::Drop { parent: first, index: 1 }),
            Outcome::Ignored
        );
        assert_eq!(editor.drag_source(), Some((root, 0)));
    }

    #[test]
    fn drag_start_on_leaf_or_bad_index_is_ignored() {
        let mut editor = PaneEditor::default();
        let (root, first, _) = split_root(&mut editor);

        assert_eq!(
            editor.dispatch(PaneEvent::DragStart { parent: first, index: 0 }),
            Outcome::Ignored
        );
        assert_eq!(
            editor.dispatch(PaneEvent::DragStart { parent: root, index: 2 }),
            Outcome::Ignored
        );
        assert!(editor.drag().is_none());
    }

    #[test]
    fn removing_dragged_parent_ends_session() {
        let mut editor = PaneEditor::default();
        let (root, first, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::Split {
            pane: first,
            orientation: Orientation::Vertical,
        });
        editor.dispatch(PaneEvent::DragStart { parent: first, index: 1 });
        assert!(editor.drag().is_some());

        editor.dispatch(PaneEvent::Remove { pane: first });
        assert!(editor.drag().is_none());
        assert_eq!(editor.tree().find(root).unwrap().children().len(), 1);
    }

    #[test]
    fn removing_dragged_child_ends_session() {
        let mut editor = PaneEditor::default();
        let (root, _, second) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 1 });

        editor.dispatch(PaneEvent::Remove { pane: second });
        assert!(editor.drag().is_none());
    }

    #[test]
    fn reset_clears_tree_and_drag() {
        let mut editor = PaneEditor::default();
        let (root, _, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });

        assert_eq!(editor.dispatch(PaneEvent::Reset), Outcome::Changed);
        assert!(editor.tree().root().is_leaf());
        assert!(editor.drag().is_none());
        assert_eq!(editor.dispatch(PaneEvent::Reset), Outcome::Ignored);
    }

    #[test]
    fn removing_dragged_child_ends_session_even_when_sibling_shifts() {
        let mut editor = PaneEditor::default();
        let (root, first, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });

        editor.dispatch(PaneEvent::Remove { pane: first });
        assert!(editor.drag().is_none());
        assert_eq!(editor.drag_source(), None);
    }

    #[test]
    fn replace_resplit_during_drag_ends_session() {
        let mut editor = PaneEditor::new(&LayoutSettings {
            resplit: ResplitPolicy::Replace,
            max_depth: None,
        });
        let (root, _, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });

        editor.dispatch(PaneEvent::Split {
            pane: root,
            orientation: Orientation::Vertical,
        });
        let fresh = editor.tree().leaves();
        assert!(editor.drag().is_none());
        assert_eq!(
            editor.dispatch(PaneEvent::Drop { parent: root, index: 1 }),
            Outcome::Ignored
        );
        assert_eq!(editor.tree().leaves(), fresh);
    }

    #[test]
    fn drag_follows_source_when_sibling_removed() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 1 });
        editor.dispatch(PaneEvent::DragOver { parent: root, index: 0 });

        editor.dispatch(PaneEvent::Remove { pane: first });
        let session = editor.drag().unwrap();
        assert_eq!(session.source, second);
        assert_eq!(editor.drag_source(), Some((root, 0)));
        assert_eq!(editor.hovered_target(), None);
    }

    #[test]
    fn hover_past_last_child_is_cleared() {
        let mut editor = PaneEditor::default();
        let (root, first, second) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });
        editor.dispatch(PaneEvent::DragOver { parent: root, index: 1 });

        editor.dispatch(PaneEvent::Remove { pane: second });
        assert_eq!(editor.drag().map(|s| s.source), Some(first));
        assert_eq!(editor.drag_source(), Some((root, 0)));
        assert_eq!(editor.hovered_target(), None);
    }

    #[test]
    fn hover_survives_unrelated_change() {
        let mut editor = PaneEditor::default();
        let (root, first, _) = split_root(&mut editor);
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });
        editor.dispatch(PaneEvent::DragOver { parent: root, index: 1 });

        editor.dispatch(PaneEvent::Split {
            pane: first,
            orientation: Orientation::Vertical,
        });
        assert_eq!(editor.drag_source(), Some((root, 0)));
        assert_eq!(editor.hovered_target(), Some((root, 1)));
    }
}
