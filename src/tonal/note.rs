use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Shl, Shr};
use std::str::FromStr;

use crate::tonal::chord::Chord;
use crate::tonal::constants::{A4, M2, M3, M6, M7, Mn2, Mn3, Mn6, Mn7, P1, P4, P5};
use crate::tonal::error::TonalError;
use crate::tonal::interval::Interval;
use crate::tonal::parser::{note_from_pair, parse_single, Rule};
use crate::tonal::pitch::{Accidental, Letter, PitchClass};
use crate::tonal::sound::{Style, Synthesizer};

/// Spelling used when naming the distance between two notes, indexed by
/// semitones within the octave.
const SIMPLE_INTERVALS: [Interval; 12] = [P1, Mn2, M2, Mn3, M3, P4, A4, P5, Mn6, M6, Mn7, M7];

/// A spelled pitch: letter, accidental and octave. Octave 4 starts at middle
/// C, and octaves turn over between B and C.
///
/// Notes compare by pitch alone, so `C#4 == Db4`. Use [`Note::same_spelling`]
/// to tell enharmonic spellings apart.
#[derive(Debug, Clone, Copy)]
pub struct Note {
    letter: Letter,
    accidental: Accidental,
    octave: i32,
    /// Distance from middle C; always derived from the other three fields.
    semitones: i32,
}

/// Lowest octave a note can be written in.
pub const MIN_OCTAVE: i32 = -1000;
/// Highest octave a note can be written in.
pub const MAX_OCTAVE: i32 = 1000;

fn octave_out_of_range(value: impl fmt::Display) -> TonalError {
    TonalError::InvalidNoteComponent {
        component: "octave",
        value: value.to_string(),
    }
}

impl Note {
    /// # Panics
    ///
    /// Panics when `octave` lies outside `MIN_OCTAVE..=MAX_OCTAVE`. Use
    /// [`Note::try_new`] for octaves that come from input.
    pub const fn new(letter: Letter, accidental: Accidental, octave: i32) -> Note {
        if octave < MIN_OCTAVE || octave > MAX_OCTAVE {
            panic!("octave out of range");
        }
        Note {
            letter,
            accidental,
            octave,
            semitones: letter.natural_semitones() + accidental.offset() + 12 * (octave - 4),
        }
    }

    pub fn try_new(letter: Letter, accidental: Accidental, octave: i32) -> Result<Note, TonalError> {
        if (MIN_OCTAVE..=MAX_OCTAVE).contains(&octave) {
            Ok(Note::new(letter, accidental, octave))
        } else {
            Err(octave_out_of_range(octave))
        }
    }

    /// A natural in octave 4.
    pub const fn natural(letter: Letter) -> Note {
        Note::new(letter, Accidental::Natural, 4)
    }

    /// The note at `semitones` from middle C, spelled as a natural or a sharp.
    pub fn from_semitones(semitones: i32) -> Result<Note, TonalError> {
        let (letter, accidental) = PitchClass::from_semitones(semitones).to_step_name();
        Note::try_new(letter, accidental, semitones.div_euclid(12) + 4)
    }

    pub fn letter(&self) -> Letter {
        self.letter
    }

    pub fn accidental(&self) -> Accidental {
        self.accidental
    }

    pub fn octave(&self) -> i32 {
        self.octave
    }

    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    pub fn pitch_class(&self) -> PitchClass {
        PitchClass::from_semitones(self.semitones)
    }

    /// True when both notes match once moved into octave 4. Octave 4 is
    /// taken literally, so `B4` and `Cb4` (a semitone below middle C) differ.
    pub fn same_pitch_class(&self, other: &Note) -> bool {
        self.base() == other.base()
    }

    pub fn same_spelling(&self, other: &Note) -> bool {
        self.letter == other.letter && self.accidental == other.accidental && self.octave == other.octave
    }

    /// Raise (or, for a below interval, lower) the note by `interval`.
    ///
    /// The letter moves by the interval's step count and the accidental makes
    /// up whatever semitones remain, so C raised by a major third is E and
    /// never Fb. Fails when that would take more than a double accidental.
    ///
    /// The octave is whichever keeps the pitch exact, so `B4` raised by a
    /// diminished second is `Cb5`.
    pub fn raise_by(&self, interval: &Interval) -> Result<Note, TonalError> {
        let semitones = self
            .semitones
            .checked_add(interval.semitones())
            .ok_or_else(|| octave_out_of_range(format!("{} ^ {}", self, interval)))?;
        let letter = self.letter.step(interval.step() - interval.step().signum());

        // Distance of the natural letter above the target, folded so that the
        // B/C boundary reads as one semitone rather than eleven.
        let offset = letter.natural_semitones() - semitones.rem_euclid(12);
        let offset = (offset + 6).rem_euclid(12) - 6;
        let accidental = Accidental::from_offset(-offset)
            .ok_or(TonalError::Unspellable { letter, offset: -offset })?;

        let octave = (semitones - letter.natural_semitones() - accidental.offset()).div_euclid(12) + 4;
        let note = Note::try_new(letter, accidental, octave)?;
        log::trace!(target: "tonal::note", "{} ^ {} = {}", self, interval, note);
        Ok(note)
    }

    /// Lower the note by `interval`; the mirror of [`Note::raise_by`].
    pub fn lower_by(&self, interval: &Interval) -> Result<Note, TonalError> {
        self.raise_by(&interval.below())
    }

    /// The interval that raises `other` to this note, so `G4 - C4` is a
    /// perfect fifth and `C4 - G4` a perfect fifth below.
    ///
    /// Spelled from pitch alone: a tritone always comes back as an augmented
    /// fourth, a minor sixth never as an augmented fifth.
    pub fn difference(&self, other: &Note) -> Interval {
        let delta = self.semitones - other.semitones;
        let interval = SIMPLE_INTERVALS[(delta.abs() % 12) as usize].widened(delta.abs() / 12);
        if delta < 0 {
            interval.below()
        } else {
            interval
        }
    }

    pub fn octave_shift(&self, octaves: i32) -> Result<Note, TonalError> {
        let octave = self
            .octave
            .checked_add(octaves)
            .ok_or_else(|| octave_out_of_range(format!("{}{:+}", self.octave, octaves)))?;
        self.to_octave(octave)
    }

    /// Same letter and accidental, moved into `octave`.
    pub fn to_octave(&self, octave: i32) -> Result<Note, TonalError> {
        Note::try_new(self.letter, self.accidental, octave)
    }

    /// The note moved into octave 4.
    pub fn base(&self) -> Note {
        Note::new(self.letter, self.accidental, 4)
    }

    /// The same pitch respelled as a natural or a sharp.
    pub fn simplified(&self) -> Result<Note, TonalError> {
        Note::from_semitones(self.semitones)
    }

    /// One semitone up, spelled as a natural or a sharp.
    pub fn successor(&self) -> Result<Note, TonalError> {
        Note::from_semitones(self.semitones + Mn2.semitones())
    }

    /// Token understood by the tone device: sharps-only name plus the octave
    /// the pitch actually sounds in (`Cb4` is `B3`).
    pub fn tone_name(&self) -> String {
        format!("{}{}", self.pitch_class().chromatic_name(), self.semitones.div_euclid(12) + 4)
    }

    pub fn play<S: Synthesizer + ?Sized>(&self, synth: &mut S) -> Result<(), TonalError> {
        synth.play(&self.tone_name(), Style::Harmonic)
    }
}

impl PartialEq for Note {
    fn eq(&self, other: &Self) -> bool {
        self.semitones == other.semitones
    }
}

impl Eq for Note {}

impl PartialOrd for Note {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Note {
    fn cmp(&self, other: &Self) -> Ordering {
        self.semitones.cmp(&other.semitones)
    }
}

impl Hash for Note {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semitones.hash(state);
    }
}

impl Add for Note {
    type Output = Chord;

    fn add(self, other: Note) -> Chord {
        Chord::new(vec![self, other])
    }
}

impl Shr<i32> for Note {
    type Output = Result<Note, TonalError>;

    fn shr(self, octaves: i32) -> Self::Output {
        self.octave_shift(octaves)
    }
}

impl Shl<i32> for Note {
    type Output = Result<Note, TonalError>;

    fn shl(self, octaves: i32) -> Self::Output {
        match octaves.checked_neg() {
            Some(octaves) => self.octave_shift(octaves),
            None => Err(octave_out_of_range(octaves)),
        }
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}{}", self.letter, self.accidental, self.octave)
    }
}

impl FromStr for Note {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        note_from_pair(parse_single(Rule::note_only, s.trim())?)
    }
}
