use thiserror::Error;

/// Errors returned by the lookups and the configuration patch.
#[derive(Error, Debug)]
pub enum Error {
    /// No color set has this name.
    #[error("unknown colorset “{name}”, the defined colorsets are {known:?}")]
    UnknownColorset { name: String, known: Vec<&'static str> },

    /// No colormap has this name.
    #[error("unknown colormap “{name}”, the defined colormaps are {known:?}")]
    UnknownColormap { name: String, known: Vec<String> },

    /// The number of colors asked to [`crate::rainbow_discrete`] is
    /// not in `1 ..= 23`.
    #[error("rainbow_discrete: {0} colors requested, must be in 1..=23")]
    RainbowCount(usize),

    /// A colormap needs at least one anchor color.
    #[error("colormap “{0}” has no anchor color")]
    NoAnchors(String),

    /// The string is not a color of the form `#RRGGBB`.
    #[error("invalid hex color “{0}”")]
    InvalidHex(String),

    /// Reading or writing the configuration file failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results with [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
