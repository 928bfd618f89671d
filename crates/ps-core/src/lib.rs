// ABOUTME: Shared configuration types for pane-splitter.
// ABOUTME: Defines layout and view settings and config file handling.

pub mod config;

pub use config::{Config, ConfigError, LayoutSettings, ResplitPolicy, ViewFormat, ViewSettings};
