// ABOUTME: Recursive tree of panes built by splitting.
// ABOUTME: Supports splitting, removal with parent collapse, sibling swaps and layout.

use std::collections::HashMap;

use ps_core::{LayoutSettings, ResplitPolicy};
use serde::Serialize;

use crate::path::PanePath;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PaneId(pub u64);

impl std::fmt::Display for PaneId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Axis along which a split pane arranges its children.
/// Horizontal places them side by side, vertical stacks them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    pub fn label(&self) -> &'static str {
        match self {
            Orientation::Horizontal => "horizontal",
            Orientation::Vertical => "vertical",
        }
    }
}

/// A node of the tree. Leaves have no orientation and no children.
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    id: PaneId,
    orientation: Option<Orientation>,
    children: Vec<Pane>,
}

impl Pane {
    fn leaf(id: PaneId) -> Self {
        Self {
            id,
            orientation: None,
            children: Vec::new(),
        }
    }

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn orientation(&self) -> Option<Orientation> {
        self.orientation
    }

    pub fn children(&self) -> &[Pane] {
        &self.children
    }

    pub fn child(&self, index: usize) -> Option<&Pane> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Turn this pane into a split with two fresh leaves, dropping any subtree it had
    fn split(&mut self, orientation: Orientation, first: PaneId, second: PaneId) {
        self.orientation = Some(orientation);
        self.children = vec![Pane::leaf(first), Pane::leaf(second)];
    }

    /// Remove a child, keeping the order of the rest.
    /// A pane that loses its last child becomes a leaf again.
    fn remove_child(&mut self, index: usize) -> Option<Pane> {
        if index >= self.children.len() {
            return None;
        }
        let removed = self.children.remove(index);
        if self.children.is_empty() {
            self.orientation = None;
        }
        Some(removed)
    }

    /// Swap two children in place
    fn swap_children(&mut self, from: usize, to: usize) -> bool {
        let len = self.children.len();
        if from == to || from >= len || to >= len {
            return false;
        }
        self.children.swap(from, to);
        true
    }

    fn reset(&mut self) -> bool {
        if self.is_leaf() && self.orientation.is_none() {
            return false;
        }
        self.orientation = None;
        self.children.clear();
        true
    }

    fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

/// Rectangle in normalized coordinates (0.0 to 1.0)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn full() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 1.0,
            height: 1.0,
        }
    }

    /// The `index`-th of `count` equal slices along the orientation's axis
    fn slice(&self, orientation: Orientation, index: usize, count: usize) -> Rect {
        let count = count.max(1) as f32;
        let index = index as f32;
        match orientation {
            Orientation::Horizontal => Rect {
                x: self.x + self.width * index / count,
                y: self.y,
                width: self.width / count,
                height: self.height,
            },
            Orientation::Vertical => Rect {
                x: self.x,
                y: self.y + self.height * index / count,
                width: self.width,
                height: self.height / count,
            },
        }
    }

    pub fn area(&self) -> f32 {
        self.width * self.height
    }
}

/// Placement of one pane, produced by a pre-order walk of the tree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaneLayout {
    pub id: PaneId,
    pub path: String,
    pub depth: usize,
    pub orientation: Option<Orientation>,
    pub child_count: usize,
    pub rect: Rect,
}

impl PaneLayout {
    pub fn is_leaf(&self) -> bool {
        self.child_count == 0
    }
}

/// Why a split request left the tree unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SplitRefusal {
    #[error("no such pane")]
    NotFound,
    #[error("pane is already split")]
    AlreadySplit,
    #[error("maximum nesting depth of {0} reached")]
    MaxDepth(usize),
}

#[derive(Debug, Clone)]
pub struct PaneTree {
    root: Pane,
    next_id: u64,
    resplit: ResplitPolicy,
    max_depth: Option<usize>,
}

impl PaneTree {
    pub fn new() -> Self {
        Self::with_settings(&LayoutSettings::default())
    }

    pub fn with_settings(settings: &LayoutSettings) -> Self {
        Self {
            root: Pane::leaf(PaneId(0)),
            next_id: 1,
            resplit: settings.resplit,
            max_depth: settings.max_depth,
        }
    }

    pub fn root(&self) -> &Pane {
        &self.root
    }

    pub fn root_id(&self) -> PaneId {
        self.root.id
    }

    fn allocate_id(&mut self) -> PaneId {
        let id = PaneId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Split the given pane into two new leaves, returns their IDs
    pub fn split_pane(
        &mut self,
        pane: PaneId,
        orientation: Orientation,
    ) -> Result<(PaneId, PaneId), SplitRefusal> {
        let path = self.path_of(pane).ok_or(SplitRefusal::NotFound)?;
        self.split_at(&path, orientation)
    }

    /// Split the pane at `path` into two new leaves, returns their IDs
    pub fn split_at(
        &mut self,
        path: &PanePath,
        orientation: Orientation,
    ) -> Result<(PaneId, PaneId), SplitRefusal> {
        let target = self.pane_at(path).ok_or(SplitRefusal::NotFound)?;
        if !target.is_leaf() && self.resplit == ResplitPolicy::Guard {
            return Err(SplitRefusal::AlreadySplit);
        }
        if let Some(max) = self.max_depth {
            if path.depth() + 1 > max {
                return Err(SplitRefusal::MaxDepth(max));
            }
        }

        let first = self.allocate_id();
        let second = self.allocate_id();
        let target = self.pane_at_mut(path).ok_or(SplitRefusal::NotFound)?;
        target.split(orientation, first, second);
        Ok((first, second))
    }

    /// Ask for a pane to go away: its parent drops it, the root resets to a leaf
    pub fn request_removal(&mut self, pane: PaneId) -> bool {
        match self.path_of(pane) {
            Some(path) => self.remove_node_at(&path),
            None => false,
        }
    }

    /// Remove the pane at `path` from its parent. The root path resets the tree.
    pub fn remove_node_at(&mut self, path: &PanePath) -> bool {
        match path.split_last() {
            None => self.root.reset(),
            Some((parent, index)) => self
                .pane_at_mut(&parent)
                .and_then(|p| p.remove_child(index))
                .is_some(),
        }
    }

    /// Remove the `index`-th child of `parent`
    pub fn remove_child(&mut self, parent: PaneId, index: usize) -> bool {
        self.find_mut(parent)
            .and_then(|p| p.remove_child(index))
            .is_some()
    }

    /// Swap two children of `parent`. Equal or out-of-range indices do nothing.
    pub fn reorder(&mut self, parent: PaneId, from: usize, to: usize) -> bool {
        self.find_mut(parent)
            .map(|p| p.swap_children(from, to))
            .unwrap_or(false)
    }

    /// Collapse everything back to a single root leaf
    pub fn reset(&mut self) -> bool {
        self.root.reset()
    }

    pub fn find(&self, id: PaneId) -> Option<&Pane> {
        find_node(&self.root, id)
    }

    fn find_mut(&mut self, id: PaneId) -> Option<&mut Pane> {
        find_node_mut(&mut self.root, id)
    }

    pub fn pane_at(&self, path: &PanePath) -> Option<&Pane> {
        path.indices()
            .iter()
            .try_fold(&self.root, |node, &index| node.children.get(index))
    }

    fn pane_at_mut(&mut self, path: &PanePath) -> Option<&mut Pane> {
        path.indices()
            .iter()
            .try_fold(&mut self.root, |node, &index| node.children.get_mut(index))
    }

    pub fn path_of(&self, id: PaneId) -> Option<PanePath> {
        let mut indices = Vec::new();
        if locate(&self.root, id, &mut indices) {
            Some(PanePath::from(indices))
        } else {
            None
        }
    }

    pub fn parent_of(&self, id: PaneId) -> Option<PaneId> {
        let (parent, _) = self.path_of(id)?.split_last()?;
        self.pane_at(&parent).map(Pane::id)
    }

    pub fn contains(&self, id: PaneId) -> bool {
        self.find(id).is_some()
    }

    /// All pane IDs in pre-order
    pub fn panes(&self) -> Vec<PaneId> {
        let mut result = Vec::new();
        collect_panes(&self.root, &mut result, false);
        result
    }

    /// Leaf pane IDs, left to right / top to bottom
    pub fn leaves(&self) -> Vec<PaneId> {
        let mut result = Vec::new();
        collect_panes(&self.root, &mut result, true);
        result
    }

    pub fn pane_count(&self) -> usize {
        self.panes().len()
    }

    /// Longest root-to-leaf distance (a lone root is depth 0)
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Get all leaf panes with their layout rectangles
    pub fn pane_rects(&self) -> HashMap<PaneId, Rect> {
        self.layout()
            .into_iter()
            .filter(PaneLayout::is_leaf)
            .map(|entry| (entry.id, entry.rect))
            .collect()
    }

    /// Every pane with its rectangle, in pre-order
    pub fn layout(&self) -> Vec<PaneLayout> {
        let mut result = Vec::new();
        collect_layout(&self.root, PanePath::root(), Rect::full(), &mut result);
        result
    }
}

fn find_node(node: &Pane, target: PaneId) -> Option<&Pane> {
    if node.id == target {
        return Some(node);
    }
    node.children.iter().find_map(|child| find_node(child, target))
}

fn find_node_mut(node: &mut Pane, target: PaneId) -> Option<&mut Pane> {
    if node.id == target {
        return Some(node);
    }
    node.children
        .iter_mut()
        .find_map(|child| find_node_mut(child, target))
}

fn locate(node: &Pane, target: PaneId, indices: &mut Vec<usize>) -> bool {
    if node.id == target {
        return true;
    }
    for (index, child) in node.children.iter().enumerate() {
        indices.push(index);
        if locate(child, target, indices) {
            return true;
        }
        indices.pop();
    }
    false
}

fn collect_panes(node: &Pane, out: &mut Vec<PaneId>, leaves_only: bool) {
    if !leaves_only || node.is_leaf() {
        out.push(node.id);
    }
    for child in &node.children {
        collect_panes(child, out, leaves_only);
    }
}

fn collect_layout(node: &Pane, path: PanePath, rect: Rect, out: &mut Vec<PaneLayout>) {
    out.push(PaneLayout {
        id: node.id,
        path: path.to_string(),
        depth: path.depth(),
        orientation: node.orientation,
        child_count: node.children.len(),
        rect,
    });
    let Some(orientation) = node.orientation else {
        return;
    };
    let count = node.children.len();
    for (index, child) in node.children.iter().enumerate() {
        collect_layout(
            child,
            path.child(index),
            rect.slice(orientation, index, count),
            out,
        );
    }
}

impl Default for PaneTree {
    fn default() -> Self {
        Self::new()
    }
}
