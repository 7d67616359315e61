use std::fmt;
use std::ops::{Add, Shl, Shr};
use std::str::FromStr;

use itertools::Itertools;

use crate::tonal::constants::{D5, D7, M3, Mn2, Mn3, Mn7, P1, P5};
use crate::tonal::error::TonalError;
use crate::tonal::interval::Interval;
use crate::tonal::note::Note;
use crate::tonal::parser::{chord_from_pair, parse_single, Rule};
use crate::tonal::sound::{Style, Synthesizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriadQuality {
    Major,
    Minor,
    Diminished,
    HalfDiminished,
}

impl TriadQuality {
    fn intervals(self) -> [Interval; 3] {
        match self {
            TriadQuality::Major => [P1, M3, P5],
            TriadQuality::Minor => [P1, Mn3, P5],
            TriadQuality::Diminished => [P1, Mn3, D5],
            TriadQuality::HalfDiminished => [P1, M3, D5],
        }
    }
}

impl FromStr for TriadQuality {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maj" => Ok(TriadQuality::Major),
            "min" => Ok(TriadQuality::Minor),
            "dim" => Ok(TriadQuality::Diminished),
            "halfdim" => Ok(TriadQuality::HalfDiminished),
            _ => Err(TonalError::Parse(format!("unknown triad quality '{}'", s))),
        }
    }
}

/// A bag of notes.
///
/// The notes keep the order they were added in, which matters for display
/// and inversion, but not for comparison: two chords are equal when they
/// hold the same pitches the same number of times.
#[derive(Debug, Clone, Default)]
pub struct Chord {
    notes: Vec<Note>,
}

impl Chord {
    pub fn new(notes: Vec<Note>) -> Chord {
        Chord { notes }
    }

    /// Builds `tonic` raised by each interval in turn, then inverts.
    fn stack(tonic: &Note, intervals: &[Interval], inversions: usize) -> Result<Chord, TonalError> {
        let notes = intervals
            .iter()
            .map(|interval| tonic.raise_by(interval))
            .collect::<Result<Vec<Note>, TonalError>>()?;
        let mut chord = Chord::new(notes);
        for _ in 0..inversions {
            chord.invert_in_place()?;
        }
        Ok(chord)
    }

    pub fn triad(tonic: &Note, quality: TriadQuality, inversions: usize) -> Result<Chord, TonalError> {
        Chord::stack(tonic, &quality.intervals(), inversions)
    }

    /// The dominant seventh chord of the key of `tonic`, rooted a fifth above it.
    pub fn dominant_seventh(tonic: &Note, inversions: usize) -> Result<Chord, TonalError> {
        let root = tonic.raise_by(&P5)?;
        Chord::stack(&root, &[P1, M3, P5, Mn7], inversions)
    }

    /// The diminished seventh chord on the leading tone of `tonic`.
    pub fn diminished_seventh(tonic: &Note, inversions: usize) -> Result<Chord, TonalError> {
        let root = tonic.raise_by(&Mn2.below())?;
        Chord::stack(&root, &[P1, Mn3, D5, D7], inversions)
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Note> {
        self.notes.iter()
    }

    pub fn push(&mut self, note: Note) {
        self.notes.push(note);
    }

    /// True when both chords hold the same notes the same number of times
    /// once every note is moved into octave 4, whatever octave or inversion
    /// they are voiced in.
    pub fn same_shape(&self, other: &Chord) -> bool {
        self.base() == other.base()
    }

    pub fn octave_shift(&self, octaves: i32) -> Result<Chord, TonalError> {
        self.notes
            .iter()
            .map(|note| note.octave_shift(octaves))
            .collect::<Result<Vec<Note>, TonalError>>()
            .map(Chord::new)
    }

    pub fn base(&self) -> Chord {
        Chord::new(self.notes.iter().map(Note::base).collect())
    }

    pub fn raise_by(&self, interval: &Interval) -> Result<Chord, TonalError> {
        let notes = self
            .notes
            .iter()
            .map(|note| note.raise_by(interval))
            .collect::<Result<Vec<Note>, TonalError>>()?;
        Ok(Chord::new(notes))
    }

    pub fn lower_by(&self, interval: &Interval) -> Result<Chord, TonalError> {
        self.raise_by(&interval.below())
    }

    /// Moves the lowest note up by octaves until it is strictly above every
    /// other note, and puts it at the end. On error the chord is left as it
    /// was.
    pub fn invert_in_place(&mut self) -> Result<(), TonalError> {
        raise_lowest(&mut self.notes)?;
        log::debug!(target: "tonal::chord", "inverted to {}", self);
        Ok(())
    }

    pub fn inverted(&self) -> Result<Chord, TonalError> {
        let mut chord = self.clone();
        chord.invert_in_place()?;
        Ok(chord)
    }

    /// The chord as a tone device tune, e.g. `"C4 E4 G4"`.
    pub fn tune(&self) -> String {
        self.notes.iter().map(Note::tone_name).join(" ")
    }

    pub fn play<S: Synthesizer + ?Sized>(&self, synth: &mut S, style: Style) -> Result<(), TonalError> {
        let tune = self.tune();
        log::debug!(target: "tonal::chord", "playing '{}' {}", tune, style);
        synth.play(&tune, style)
    }
}

/// Ties go to the first of the lowest notes. A note with nothing left to
/// clear still goes up one octave, so unisons and single notes terminate.
fn raise_lowest(notes: &mut Vec<Note>) -> Result<(), TonalError> {
    let position = match notes.iter().position_min() {
        Some(position) => position,
        None => return Ok(()),
    };
    let highest = notes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != position)
        .map(|(_, note)| *note)
        .max();
    let mut lowest = notes[position].octave_shift(1)?;
    if let Some(highest) = highest {
        while lowest <= highest {
            lowest = lowest.octave_shift(1)?;
        }
    }
    notes.remove(position);
    notes.push(lowest);
    Ok(())
}

impl PartialEq for Chord {
    fn eq(&self, other: &Self) -> bool {
        self.notes.iter().sorted().eq(other.notes.iter().sorted())
    }
}

impl Eq for Chord {}

impl<'a> IntoIterator for &'a Chord {
    type Item = &'a Note;
    type IntoIter = std::slice::Iter<'a, Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter()
    }
}

impl Add<Note> for Chord {
    type Output = Chord;

    fn add(mut self, note: Note) -> Chord {
        self.notes.push(note);
        self
    }
}

impl Add<Chord> for Chord {
    type Output = Chord;

    fn add(mut self, other: Chord) -> Chord {
        self.notes.extend(other.notes);
        self
    }
}

impl Shr<i32> for Chord {
    type Output = Result<Chord, TonalError>;

    fn shr(self, octaves: i32) -> Self::Output {
        self.octave_shift(octaves)
    }
}

impl Shl<i32> for Chord {
    type Output = Result<Chord, TonalError>;

    fn shl(self, octaves: i32) -> Self::Output {
        self.notes
            .into_iter()
            .map(|note| note << octaves)
            .collect::<Result<Vec<Note>, TonalError>>()
            .map(Chord::new)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.notes.iter().join(", "))
    }
}

impl FromStr for Chord {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        chord_from_pair(parse_single(Rule::chord_only, s.trim())?)
    }
}
