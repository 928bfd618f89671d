// ABOUTME: Serializable view model for hosts that draw panes themselves.
// ABOUTME: Flattens the tree into positioned panes with their actions and drag flags.

use ps_layout::{Orientation, PaneId, Rect};
use serde::Serialize;

use crate::scene::{Action, Scene};
use crate::RenderError;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneView {
    pub id: PaneId,
    pub path: String,
    pub depth: usize,
    pub orientation: Option<Orientation>,
    pub rect: Rect,
    pub actions: Vec<Action>,
    pub drop_target: bool,
    pub dragging: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub root: PaneId,
    pub leaf_count: usize,
    pub panes: Vec<PaneView>,
}

impl ViewModel {
    pub fn from_scene(scene: &Scene<'_>) -> Self {
        let layout = scene.tree.layout();
        let leaf_count = layout.iter().filter(|e| e.is_leaf()).count();
        let panes = layout
            .into_iter()
            .map(|entry| PaneView {
                actions: scene.actions(entry.id).to_vec(),
                drop_target: scene.is_drop_target(entry.id),
                dragging: scene.is_dragging(entry.id),
                id: entry.id,
                path: entry.path,
                depth: entry.depth,
                orientation: entry.orientation,
                rect: entry.rect,
            })
            .collect();

        Self {
            root: scene.tree.root_id(),
            leaf_count,
            panes,
        }
    }

    pub fn to_json(&self) -> Result<String, RenderError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
