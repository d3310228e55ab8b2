//! Configuration error types

use parallax_animation::InterpolationError;
use parallax_core::ColorParseError;
use thiserror::Error;

/// Errors raised while building or reconfiguring a view.
///
/// All of these are fatal for the construction call that produced them.
/// Transient runtime conditions (out-of-range tab indices, unmeasured
/// regions) are not errors and never surface here.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No tab content was supplied
    #[error("at least one tab is required")]
    MissingTabs,

    /// The header-top slot was not supplied
    #[error("header top content is required")]
    MissingHeaderTop,

    /// A numeric parameter is negative, non-finite, or out of its range
    #[error("invalid value {value} for `{name}`")]
    InvalidParameter { name: &'static str, value: f32 },

    /// The initial tab does not exist
    #[error("initial tab {index} is out of range for {count} tabs")]
    InitialTabOutOfRange { index: usize, count: usize },

    /// More custom headings than tabs
    #[error("{headings} tab headings given for {tabs} tabs")]
    HeadingCount { headings: usize, tabs: usize },

    /// A breakpoint table derived from the configuration is degenerate
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),

    #[error(transparent)]
    Color(#[from] ColorParseError),

    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for view construction
pub type Result<T> = std::result::Result<T, ConfigError>;
