// ABOUTME: Drag-and-drop interaction state for reordering sibling panes.
// ABOUTME: Independent of the tree; a valid drop yields a single reorder request.

/// Swap request produced by a completed drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reorder {
    pub from: usize,
    pub to: usize,
}

/// Pointer events delivered while dragging among the children of one pane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEvent {
    Start(usize),
    Over(usize),
    Leave,
    Drop(usize),
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        source: usize,
    },
    Hovering {
        source: usize,
        target: usize,
    },
}

impl DragState {
    /// Advance the state machine, returning the reorder a drop commits (if any)
    pub fn handle(&mut self, event: DragEvent) -> Option<Reorder> {
        let (next, reorder) = match (*self, event) {
            (_, DragEvent::Start(source)) => (DragState::Dragging { source }, None),
            (_, DragEvent::Cancel) => (DragState::Idle, None),

            (DragState::Idle, DragEvent::Over(_)) => (DragState::Idle, None),
            (DragState::Dragging { source }, DragEvent::Over(target))
            | (DragState::Hovering { source, .. }, DragEvent::Over(target)) => {
                (DragState::Hovering { source, target }, None)
            }

            (DragState::Hovering { source, .. }, DragEvent::Leave) => {
                (DragState::Dragging { source }, None)
            }
            (state, DragEvent::Leave) => (state, None),

            (DragState::Idle, DragEvent::Drop(_)) => (DragState::Idle, None),
            (DragState::Dragging { source }, DragEvent::Drop(to))
            | (DragState::Hovering { source, .. }, DragEvent::Drop(to)) => {
                let reorder = (source != to).then_some(Reorder { from: source, to });
                (DragState::Idle, reorder)
            }
        };
        *self = next;
        reorder
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, DragState::Idle)
    }

    pub fn source(&self) -> Option<usize> {
        match self {
            DragState::Idle => None,
            DragState::Dragging { source } | DragState::Hovering { source, .. } => Some(*source),
        }
    }

    /// Drop target currently under the pointer
    pub fn hovered(&self) -> Option<usize> {
        match self {
            DragState::Hovering { target, .. } => Some(*target),
            _ => None,
        }
    }
}
