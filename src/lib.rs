pub mod tonal {
    pub mod chord;
    pub mod constants;
    pub mod error;
    pub mod eval;
    pub mod interval;
    pub mod note;
    pub mod parser;
    pub mod pitch;
    pub mod sound;
    pub mod value;
}

pub use crate::tonal::chord::{Chord, TriadQuality};
pub use crate::tonal::error::TonalError;
pub use crate::tonal::eval::evaluate;
pub use crate::tonal::interval::{Interval, Quality};
pub use crate::tonal::note::Note;
pub use crate::tonal::pitch::{Accidental, Letter};
pub use crate::tonal::sound::{Style, Synthesizer};
pub use crate::tonal::value::Value;
