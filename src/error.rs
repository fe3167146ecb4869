use thiserror::Error;

/// Errors surfaced by the repeater core.
///
/// Nothing in the crate swallows these: sequencing fails fast on bad input and
/// playback hands emitter failures straight back to the caller of `play`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepeaterError {
    /// A time component was outside its wall-clock range
    #[error("{field} out of range: got {value}, expected 0..={max}")]
    InvalidInput {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// A textual time could not be read as `HH:MM`
    #[error("cannot parse {input:?} as a time of day (expected HH:MM)")]
    Unparseable { input: String },
    /// The tone emitter cannot accept strikes right now
    #[error("tone emitter unavailable: {0}")]
    EmitterUnavailable(String),
}

impl RepeaterError {
    pub(crate) fn unavailable(reason: impl std::fmt::Display) -> Self {
        RepeaterError::EmitterUnavailable(reason.to_string())
    }
}

pub type Result<T, E = RepeaterError> = std::result::Result<T, E>;
