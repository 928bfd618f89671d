// ABOUTME: Read-only rendering of the pane tree.
// ABOUTME: Draws panes on a character grid, as an outline, or as a JSON view model.

pub mod grid;
pub mod outline;
pub mod scene;
pub mod view;

pub use grid::render_grid;
pub use outline::render_outline;
pub use scene::{Action, Scene};
pub use view::{PaneView, ViewModel};

use ps_core::{ViewFormat, ViewSettings};

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("Grid of {cols}x{rows} cells is too small to draw panes")]
    GridTooSmall { cols: usize, rows: usize },

    #[error("Failed to serialize view: {0}")]
    Json(#[from] serde_json::Error),
}

/// Render the scene in the requested format
pub fn render(
    scene: &Scene<'_>,
    format: ViewFormat,
    settings: &ViewSettings,
) -> Result<String, RenderError> {
    match format {
        ViewFormat::Grid => {
            let lines = render_grid(scene, settings.cols, settings.rows, settings.show_ids)?;
            Ok(lines.join("\n"))
        }
        ViewFormat::Outline => Ok(render_outline(scene, settings.show_ids)),
        ViewFormat::Json => ViewModel::from_scene(scene).to_json(),
    }
}
