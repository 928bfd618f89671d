// ABOUTME: Indented tree listing of the pane hierarchy.

use ps_layout::{Pane, PanePath};

use crate::scene::{Action, Scene};

pub fn render_outline(scene: &Scene<'_>, show_ids: bool) -> String {
    let mut out = String::new();
    write_pane(scene, scene.tree.root(), &PanePath::root(), "", None, show_ids, &mut out);
    out
}

fn write_pane(
    scene: &Scene<'_>,
    pane: &Pane,
    path: &PanePath,
    prefix: &str,
    is_last: Option<bool>,
    show_ids: bool,
    out: &mut String,
) {
    let branch = match is_last {
        None => "",
        Some(true) => "└── ",
        Some(false) => "├── ",
    };
    out.push_str(prefix);
    out.push_str(branch);
    if show_ids {
        out.push_str(&format!("{} ", pane.id()));
    }
    let kind = pane.orientation().map(|o| o.label()).unwrap_or("leaf");
    out.push_str(&format!("{kind} [{path}]"));

    if pane.is_leaf() {
        let buttons: Vec<&str> = scene.actions(pane.id()).iter().map(Action::button).collect();
        out.push_str("  ");
        out.push_str(&buttons.join(" "));
    }
    if scene.is_dragging(pane.id()) {
        out.push_str("  (dragging)");
    }
    if scene.is_drop_target(pane.id()) {
        out.push_str("  <- drop here");
    }
    out.push('\n');

    let child_prefix = match is_last {
        None => String::new(),
        Some(true) => format!("{prefix}    "),
        Some(false) => format!("{prefix}│   "),
    };
    let count = pane.children().len();
    for (index, child) in pane.children().iter().enumerate() {
        write_pane(
            scene,
            child,
            &path.child(index),
            &child_prefix,
            Some(index + 1 == count),
            show_ids,
            out,
        );
    }
}
