// ABOUTME: Pane layout management for the split editor.
// ABOUTME: Owns the pane tree, its structural operations and drag reordering.

mod drag;
mod editor;
mod path;
mod tree;

pub use drag::{DragEvent, DragState, Reorder};
pub use editor::{DragSession, Outcome, PaneEditor, PaneEvent};
pub use path::{PanePath, PathParseError};
pub use tree::{Orientation, Pane, PaneId, PaneLayout, PaneTree, Rect, SplitRefusal};
