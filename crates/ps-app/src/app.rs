// ABOUTME: Command loop driving the pane editor.
// ABOUTME: Maps parsed commands to editor events and prints views of the result.

use std::io::{BufRead, Write};

use anyhow::Result;
use ps_core::{Config, ViewFormat};
use ps_layout::{Outcome, PaneEditor, PaneEvent, PaneId};
use ps_render::Scene;

use crate::commands::{Command, Target, HELP};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Quit,
}

pub struct App {
    editor: PaneEditor,
    config: Config,
    echo: bool,
}

impl App {
    pub fn new(config: Config, echo: bool) -> Self {
        Self {
            editor: PaneEditor::new(&config.layout),
            config,
            echo,
        }
    }

    pub fn editor(&self) -> &PaneEditor {
        &self.editor
    }

    /// Process every line of `input` until it ends or a `quit` command
    pub fn run(&mut self, input: impl BufRead, out: &mut impl Write) -> Result<()> {
        for (number, line) in input.lines().enumerate() {
            let line = line?;
            tracing::trace!("line {}: {}", number + 1, line);
            if self.handle_line(&line, out)? == Control::Quit {
                tracing::info!("Quit requested");
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> Result<Control> {
        match Command::parse(line) {
            Ok(Some(command)) => self.execute(command, out),
            Ok(None) => Ok(Control::Continue),
            Err(e) => {
                writeln!(out, "error: {}", e)?;
                Ok(Control::Continue)
            }
        }
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> Result<Control> {
        let event = match command {
            Command::Help => {
                writeln!(out, "{}", HELP)?;
                return Ok(Control::Continue);
            }
            Command::Quit => return Ok(Control::Quit),
            Command::Show(format) => {
                self.show(format.unwrap_or(self.config.view.format), out)?;
                return Ok(Control::Continue);
            }
            Command::Cancel => PaneEvent::DragCancel,
            Command::Reset => PaneEvent::Reset,
            Command::Split {
                orientation,
                target,
            } => match self.resolve(&target, out)? {
                Some(pane) => PaneEvent::Split { pane, orientation },
                None => return Ok(Control::Continue),
            },
            Command::Remove { target } => match self.resolve(&target, out)? {
                Some(pane) => PaneEvent::Remove { pane },
                None => return Ok(Control::Continue),
            },
            Command::Drag { parent, index } => match self.resolve(&parent, out)? {
                Some(parent) => PaneEvent::DragStart { parent, index },
                None => return Ok(Control::Continue),
            },
            Command::Over { parent, index } => match self.resolve(&parent, out)? {
                Some(parent) => PaneEvent::DragOver { parent, index },
                None => return Ok(Control::Continue),
            },
            Command::Leave { parent } => match self.resolve(&parent, out)? {
                Some(parent) => PaneEvent::DragLeave { parent },
                None => return Ok(Control::Continue),
            },
            Command::Drop { parent, index } => match self.resolve(&parent, out)? {
                Some(parent) => PaneEvent::Drop { parent, index },
                None => return Ok(Control::Continue),
            },
        };

        let outcome = self.editor.dispatch(event);
        if self.echo && outcome != Outcome::Ignored {
            self.show(self.config.view.format, out)?;
        }
        Ok(Control::Continue)
    }

    fn resolve(&self, target: &Target, out: &mut impl Write) -> Result<Option<PaneId>> {
        let resolved = target.resolve(self.editor.tree());
        if resolved.is_none() {
            writeln!(out, "error: no pane at {}", target)?;
        }
        Ok(resolved)
    }

    fn show(&self, format: ViewFormat, out: &mut impl Write) -> Result<()> {
        let scene = Scene::from_editor(&self.editor);
        match ps_render::render(&scene, format, &self.config.view) {
            Ok(text) => writeln!(out, "{}", text.trim_end_matches('\n'))?,
            Err(e) => {
                tracing::warn!("Failed to render {} view: {}", format.label(), e);
                writeln!(out, "error: {e}")?;
            }
        }
        Ok(())
    }
}
