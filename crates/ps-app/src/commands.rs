// ABOUTME: Line command parsing for the interactive editor.
// ABOUTME: Turns text like `split h 0.1` into editor commands addressed by path or id.

use ps_core::ViewFormat;
use ps_layout::{Orientation, PaneId, PanePath, PaneTree, PathParseError};

/// A pane named on the command line: `0.1`, `root` or `#3`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Path(PanePath),
    Id(PaneId),
}

impl Target {
    pub fn resolve(&self, tree: &PaneTree) -> Option<PaneId> {
        match self {
            Target::Path(path) => tree.pane_at(path).map(|pane| pane.id()),
            Target::Id(id) => tree.contains(*id).then_some(*id),
        }
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Path(path) => write!(f, "{path}"),
            Target::Id(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Split { orientation: Orientation, target: Target },
    Remove { target: Target },
    Drag { parent: Target, index: usize },
    Over { parent: Target, index: usize },
    Leave { parent: Target },
    Drop { parent: Target, index: usize },
    Cancel,
    Reset,
    Show(Option<ViewFormat>),
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("unknown command '{0}' (try `help`)")]
    Unknown(String),

    #[error("`{command}` is missing its {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("`{0}` takes no more arguments")]
    TrailingArguments(&'static str),

    #[error("invalid orientation '{0}' (expected h or v)")]
    InvalidOrientation(String),

    #[error("invalid child index '{0}'")]
    InvalidIndex(String),

    #[error("invalid pane id '{0}'")]
    InvalidId(String),

    #[error("invalid view format: {0}")]
    InvalidFormat(String),

    #[error(transparent)]
    InvalidPath(#[from] PathParseError),
}

pub const HELP: &str = "\
commands:
  split h|v <pane>         split a leaf side by side (h) or stacked (v)
  remove <pane>            remove a pane (the root resets to a leaf)
  drag <parent> <index>    start dragging a child of <parent>
  over <parent> <index>    hover a sibling drop target
  leave <parent>           pointer left the drop target
  drop <parent> <index>    drop onto a sibling, swapping the two
  cancel                   abandon the current drag
  reset                    collapse everything to one pane
  show [grid|outline|json] print the layout
  help                     this text
  quit                     exit
panes are paths like `root`, `0`, `1.0` or ids like `#3`";

struct Words<'a> {
    command: &'static str,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Words<'a> {
    fn next(&mut self, argument: &'static str) -> Result<&'a str, CommandError> {
        self.inner.next().ok_or(CommandError::MissingArgument {
            command: self.command,
            argument,
        })
    }

    fn target(&mut self, argument: &'static str) -> Result<Target, CommandError> {
        parse_target(self.next(argument)?)
    }

    fn index(&mut self) -> Result<usize, CommandError> {
        let word = self.next("child index")?;
        word.parse()
            .map_err(|_| CommandError::InvalidIndex(word.to_string()))
    }

    fn finish(mut self) -> Result<(), CommandError> {
        match self.inner.next() {
            Some(_) => Err(CommandError::TrailingArguments(self.command)),
            None => Ok(()),
        }
    }
}

fn parse_target(word: &str) -> Result<Target, CommandError> {
    match word.strip_prefix('#') {
        Some(id) => id
            .parse()
            .map(|id| Target::Id(PaneId(id)))
            .map_err(|_| CommandError::InvalidId(word.to_string())),
        None => Ok(Target::Path(word.parse()?)),
    }
}

fn parse_orientation(word: &str) -> Result<Orientation, CommandError> {
    match word.to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        _ => Err(CommandError::InvalidOrientation(word.to_string())),
    }
}

#[derive(Debug, Clone, Copy)]
enum Verb {
    Split,
    Remove,
    Drag,
    Over,
    Leave,
    Drop,
    Cancel,
    Reset,
    Show,
    Help,
    Quit,
}

impl Verb {
    fn parse(word: &str) -> Option<Verb> {
        let verb = match word.to_ascii_lowercase().as_str() {
            "split" => Verb::Split,
            "remove" | "rm" => Verb::Remove,
            "drag" => Verb::Drag,
            "over" => Verb::Over,
            "leave" => Verb::Leave,
            "drop" => Verb::Drop,
            "cancel" => Verb::Cancel,
            "reset" => Verb::Reset,
            "show" => Verb::Show,
            "help" | "?" => Verb::Help,
            "quit" | "exit" => Verb::Quit,
            _ => return None,
        };
        Some(verb)
    }

    fn name(&self) -> &'static str {
        match self {
            Verb::Split => "split",
            Verb::Remove => "remove",
            Verb::Drag => "drag",
            Verb::Over => "over",
            Verb::Leave => "leave",
            Verb::Drop => "drop",
            Verb::Cancel => "cancel",
            Verb::Reset => "reset",
            Verb::Show => "show",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }
}

impl Command {
    /// Parse one line; blank lines and `#` comments yield None
    pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }

        let mut inner = line.split_whitespace();
        let Some(head) = inner.next() else {
            return Ok(None);
        };
        let verb = Verb::parse(head).ok_or_else(|| CommandError::Unknown(head.to_string()))?;
        let mut w = Words {
            command: verb.name(),
            inner,
        };

        let command = match verb {
            Verb::Split => {
                let orientation = parse_orientation(w.next("orientation")?)?;
                let target = w.target("pane")?;
                Command::Split { orientation, target }
            }
            Verb::Remove => Command::Remove {
                target: w.target("pane")?,
            },
            Verb::Drag => {
                let parent = w.target("parent pane")?;
                Command::Drag {
                    parent,
                    index: w.index()?,
                }
            }
            Verb::Over => {
                let parent = w.target("parent pane")?;
                Command::Over {
                    parent,
                    index: w.index()?,
                }
            }
            Verb::Leave => Command::Leave {
                parent: w.target("parent pane")?,
            },
            Verb::Drop => {
                let parent = w.target("parent pane")?;
                Command::Drop {
                    parent,
                    index: w.index()?,
                }
            }
            Verb::Cancel => Command::Cancel,
            Verb::Reset => Command::Reset,
            Verb::Show => match w.inner.next() {
                None => Command::Show(None),
                Some(format) => Command::Show(Some(
                    format
                        .parse::<ViewFormat>()
                        .map_err(CommandError::InvalidFormat)?,
                )),
            },
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };

        w.finish()?;
        Ok(Some(command))
    }
}
