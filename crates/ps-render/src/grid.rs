// ABOUTME: Character-grid renderer for the pane tree.
// ABOUTME: Draws one box per leaf with its action buttons and marks drag targets.

use ps_layout::{PaneLayout, Rect};

use crate::scene::{Action, Scene};
use crate::RenderError;

const MIN_COLS: usize = 4;
const MIN_ROWS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoxStyle {
    Solid,
    /// Drop target under the pointer
    Dashed,
    /// Pane being dragged
    Double,
}

impl BoxStyle {
    /// (top-left, top-right, bottom-left, bottom-right, horizontal, vertical)
    fn chars(&self) -> (char, char, char, char, char, char) {
        match self {
            BoxStyle::Solid => ('┌', '┐', '└', '┘', '─', '│'),
            BoxStyle::Dashed => ('┌', '┐', '└', '┘', '┄', '┆'),
            BoxStyle::Double => ('╔', '╗', '╚', '╝', '═', '║'),
        }
    }
}

/// Fixed-size character buffer
#[derive(Debug, Clone)]
pub(crate) struct GridCanvas {
    cols: usize,
    rows: usize,
    cells: Vec<Vec<char>>,
}

impl GridCanvas {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![vec![' '; cols]; rows],
        }
    }

    pub fn put(&mut self, col: usize, row: usize, c: char) {
        if let Some(cell) = self.cells.get_mut(row).and_then(|r| r.get_mut(col)) {
            *cell = c;
        }
    }

    /// Write text starting at (col, row), clipped to `max_width` cells
    pub fn text(&mut self, col: usize, row: usize, text: &str, max_width: usize) {
        for (i, c) in text.chars().take(max_width).enumerate() {
            self.put(col + i, row, c);
        }
    }

    /// Cell span [start, end) covered by a normalized rectangle
    fn cell_bounds(&self, rect: &Rect) -> (usize, usize, usize, usize) {
        let span = |start: f32, extent: f32, total: usize| {
            let a = (start * total as f32).round() as usize;
            let b = ((start + extent) * total as f32).round() as usize;
            (a.min(total), b.min(total))
        };
        let (x0, x1) = span(rect.x, rect.width, self.cols);
        let (y0, y1) = span(rect.y, rect.height, self.rows);
        (x0, y0, x1, y1)
    }

    fn draw_box(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, style: BoxStyle) {
        if x1 < x0 + 2 || y1 < y0 + 2 {
            for row in y0..y1 {
                for col in x0..x1 {
                    self.put(col, row, '░');
                }
            }
            return;
        }
        let (tl, tr, bl, br, h, v) = style.chars();
        let (right, bottom) = (x1 - 1, y1 - 1);
        for col in x0 + 1..right {
            self.put(col, y0, h);
            self.put(col, bottom, h);
        }
        for row in y0 + 1..bottom {
            self.put(x0, row, v);
            self.put(right, row, v);
        }
        self.put(x0, y0, tl);
        self.put(right, y0, tr);
        self.put(x0, bottom, bl);
        self.put(right, bottom, br);
    }

    pub fn lines(&self) -> Vec<String> {
        self.cells.iter().map(|row| row.iter().collect()).collect()
    }
}

fn leaf_labels(entry: &PaneLayout, scene: &Scene<'_>, show_ids: bool) -> Vec<String> {
    let mut labels = Vec::new();
    if show_ids {
        labels.push(format!("{} {}", entry.id, entry.path));
    }
    let buttons: Vec<&str> = scene
        .actions(entry.id)
        .iter()
        .map(Action::button)
        .collect();
    labels.push(buttons.join(" "));
    labels
}

/// Draw every leaf pane as a box sized by its share of the grid
pub fn render_grid(
    scene: &Scene<'_>,
    cols: usize,
    rows: usize,
    show_ids: bool,
) -> Result<Vec<String>, RenderError> {
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(RenderError::GridTooSmall { cols, rows });
    }

    let mut canvas = GridCanvas::new(cols, rows);
    let layout = scene.tree.layout();

    for entry in layout.iter().filter(|e| e.is_leaf()) {
        let (x0, y0, x1, y1) = canvas.cell_bounds(&entry.rect);
        canvas.draw_box(x0, y0, x1, y1, BoxStyle::Solid);

        if x1 < x0 + 2 || y1 < y0 + 2 {
            tracing::debug!("Pane {} too small to label", entry.id);
            continue;
        }
        let inner_width = x1 - x0 - 2;
        for (i, label) in leaf_labels(entry, scene, show_ids).iter().enumerate() {
            let row = y0 + 1 + i;
            if row >= y1 - 1 {
                break;
            }
            canvas.text(x0 + 1, row, label, inner_width);
        }
    }

    // Drag markers go on top so they outline whole subtrees
    let marked = [
        (scene.dragging, BoxStyle::Double),
        (scene.drop_target, BoxStyle::Dashed),
    ];
    for (pane, style) in marked {
        let Some(entry) = pane.and_then(|id| layout.iter().find(|e| e.id == id)) else {
            continue;
        };
        let (x0, y0, x1, y1) = canvas.cell_bounds(&entry.rect);
        canvas.draw_box(x0, y0, x1, y1, style);
    }

    Ok(canvas.lines())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ps_layout::{Orientation, PaneEditor, PaneEvent, PaneTree};

    #[test]
    fn single_leaf_shows_actions() {
        let tree = PaneTree::new();
        let lines = render_grid(&Scene::new(&tree), 20, 5, true).unwrap();

        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], format!("┌{}┐", "─".repeat(18)));
        assert!(lines[1].starts_with("│#0 root"));
        assert!(lines[2].starts_with("│[H] [V] [X]"));
        assert_eq!(lines[4], format!("└{}┘", "─".repeat(18)));
    }

    #[test]
    fn hidden_ids_leave_only_buttons() {
        let tree = PaneTree::new();
        let lines = render_grid(&Scene::new(&tree), 20, 5, false).unwrap();
        assert!(lines[1].starts_with("│[H] [V] [X]"));
    }

    #[test]
    fn horizontal_split_draws_side_by_side() {
        let mut tree = PaneTree::new();
        let root = tree.root_id();
        tree.split_pane(root, Orientation::Horizontal).unwrap();

        let lines = render_grid(&Scene::new(&tree), 20, 5, true).unwrap();
        let half = format!("┌{}┐", "─".repeat(8));
        assert_eq!(lines[0], format!("{half}{half}"));
        assert!(lines[1].contains("#1 0"));
        assert!(lines[1].contains("#2 1"));
    }

    #[test]
    fn vertical_split_stacks_boxes() {
        let mut tree = PaneTree::new();
        let root = tree.root_id();
        tree.split_pane(root, Orientation::Vertical).unwrap();

        let lines = render_grid(&Scene::new(&tree), 20, 10, true).unwrap();
        assert!(lines[4].starts_with('└'));
        assert!(lines[5].starts_with('┌'));
        assert!(lines[6].starts_with("│#2 1"));
    }

    #[test]
    fn drag_markers_are_drawn() {
        let mut editor = PaneEditor::default();
        let root = editor.tree().root_id();
        editor.dispatch(PaneEvent::Split {
            pane: root,
            orientation: Orientation::Horizontal,
        });
        editor.dispatch(PaneEvent::DragStart { parent: root, index: 0 });
        editor.dispatch(PaneEvent::DragOver { parent: root, index: 1 });

        let lines = render_grid(&Scene::from_editor(&editor), 20, 5, true).unwrap();
        assert!(lines[0].starts_with('╔'));
        assert!(lines[0].contains('┄'));
        assert!(lines[2].ends_with('┆'));
    }

    #[test]
    fn tiny_panes_are_shaded() {
        let mut tree = PaneTree::new();
        let mut pane = tree.root_id();
        for _ in 0..4 {
            pane = tree.split_pane(pane, Orientation::Horizontal).unwrap().0;
        }
        let lines = render_grid(&Scene::new(&tree), 8, 3, true).unwrap();
        assert!(lines.iter().any(|l| l.contains('░')));
    }

    #[test]
    fn too_small_grid_is_rejected() {
        let tree = PaneTree::new();
        assert!(matches!(
            render_grid(&Scene::new(&tree), 3, 10, true),
            Err(RenderError::GridTooSmall { cols: 3, rows: 10 })
        ));
    }

    #[test]
    fn canvas_clips_out_of_bounds_writes() {
        let mut canvas = GridCanvas::new(4, 2);
        canvas.text(2, 0, "abcdef", 10);
        canvas.put(9, 9, 'x');
        assert_eq!(canvas.lines(), vec!["  ab".to_string(), "    ".to_string()]);
    }
}
