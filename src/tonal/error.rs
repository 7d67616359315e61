use thiserror::Error;

use crate::tonal::interval::Quality;
use crate::tonal::pitch::Letter;

/// Everything that can go wrong while building, transforming or parsing
/// notes, intervals and chords.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TonalError {
    #[error("invalid note component: {component} '{value}'")]
    InvalidNoteComponent {
        component: &'static str,
        value: String,
    },
    #[error("an interval cannot span zero steps")]
    ZeroStep,
    #[error("interval step {0} is out of range")]
    StepOutOfRange(i32),
    #[error("{quality} is not a valid quality for a step of {step}")]
    InvalidQuality { quality: Quality, step: i32 },
    #[error("{letter} cannot be spelled {offset} semitones away from natural")]
    Unspellable { letter: Letter, offset: i32 },
    #[error("parse error: {0}")]
    Parse(String),
    #[error("unknown name '{0}'")]
    UnknownName(String),
    #[error("cannot apply '{op}' to {lhs} and {rhs}")]
    Unsupported {
        op: String,
        lhs: &'static str,
        rhs: &'static str,
    },
    #[error("{context} needs a note, found {found}")]
    ExpectedNote {
        context: String,
        found: &'static str,
    },
    #[error("unknown playback style '{0}'")]
    InvalidStyle(String),
    #[error("synthesizer failed: {0}")]
    Synth(String),
}
