use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("invalid container dimensions: width={width}, height={height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("interactive mode requires `interactive.levelRange`")]
    MissingLevelRange,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("pan/zoom gestures require interactive mode")]
    InteractionDisabled,

    #[error("invalid render frame: {0}")]
    InvalidFrame(String),

    #[error("render backend failure: {0}")]
    Backend(String),
}
