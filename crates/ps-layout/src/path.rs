// ABOUTME: Structural addresses of panes within the tree.
// ABOUTME: A path is the list of child indices walked from the root.

use std::fmt;
use std::str::FromStr;

/// Child indices from the root; empty addresses the root itself
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PanePath(Vec<usize>);

impl PanePath {
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Path of the `index`-th child of this pane
    pub fn child(&self, index: usize) -> Self {
        let mut indices = self.0.clone();
        indices.push(index);
        Self(indices)
    }

    /// Split into the parent's path and this pane's index under it
    pub fn split_last(&self) -> Option<(PanePath, usize)> {
        let (last, rest) = self.0.split_last()?;
        Some((PanePath(rest.to_vec()), *last))
    }
}

impl From<Vec<usize>> for PanePath {
    fn from(indices: Vec<usize>) -> Self {
        Self(indices)
    }
}

impl fmt::Display for PanePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("root");
        }
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathParseError {
    #[error("invalid path segment '{0}' (expected a child index)")]
    InvalidIndex(String),
}

impl FromStr for PanePath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("root") {
            return Ok(Self::root());
        }
        s.split('.')
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| PathParseError::InvalidIndex(segment.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
