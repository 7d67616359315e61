use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::tonal::error::TonalError;
use crate::tonal::note::{MAX_OCTAVE, MIN_OCTAVE};
use crate::tonal::parser::{interval_from_pair, parse_single, Rule};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quality {
    Perfect,
    Diminished,
    Minor,
    Major,
    Augmented,
}

impl Quality {
    pub fn abbreviation(self) -> &'static str {
        match self {
            Quality::Perfect => "P",
            Quality::Diminished => "D",
            Quality::Minor => "Mn",
            Quality::Major => "M",
            Quality::Augmented => "A",
        }
    }
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Quality::Perfect => "perfect",
            Quality::Diminished => "diminished",
            Quality::Minor => "minor",
            Quality::Major => "major",
            Quality::Augmented => "augmented",
        })
    }
}

impl FromStr for Quality {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P" => Ok(Quality::Perfect),
            "D" => Ok(Quality::Diminished),
            "Mn" => Ok(Quality::Minor),
            "M" => Ok(Quality::Major),
            "A" => Ok(Quality::Augmented),
            _ => Err(TonalError::Parse(format!("unknown interval quality '{}'", s))),
        }
    }
}

/// Widest step an interval may span: enough to carry a note from the lowest
/// octave to the highest.
pub const MAX_STEP: i32 = 7 * (MAX_OCTAVE - MIN_OCTAVE + 1) + 1;

/// Semitone width of `quality` over `step` letter positions, or `None` when
/// the pair is meaningless (a zero step, a "major fifth", a "perfect third")
/// or wider than `MAX_STEP`.
const fn width(quality: Quality, step: i32) -> Option<i32> {
    if step == 0 || step.unsigned_abs() > MAX_STEP as u32 {
        return None;
    }
    let size = step.abs();
    let simple = (size - 1) % 7 + 1;
    let natural = match simple {
        1 => 0,
        2 => 2,
        3 => 4,
        4 => 5,
        5 => 7,
        6 => 9,
        _ => 11,
    };
    let perfect_kind = matches!(simple, 1 | 4 | 5);
    let adjust = match (perfect_kind, quality) {
        (true, Quality::Perfect) => 0,
        (true, Quality::Diminished) => -1,
        (true, Quality::Augmented) => 1,
        (false, Quality::Major) => 0,
        (false, Quality::Minor) => -1,
        (false, Quality::Diminished) => -2,
        (false, Quality::Augmented) => 1,
        _ => return None,
    };
    let semitones = natural + 12 * ((size - 1) / 7) + adjust;
    Some(if step < 0 { -semitones } else { semitones })
}

/// A signed distance between two notes: a count of letter names spanned
/// (`step`, 1 = unison, 8 = octave, negative = below) and a quality making
/// up the exact number of semitones.
///
/// Two intervals are equal when they span the same number of semitones, so
/// an augmented fifth equals a minor sixth. The spelling is kept for display
/// and for picking letter names when transposing.
#[derive(Debug, Clone, Copy)]
pub struct Interval {
    quality: Quality,
    step: i32,
    semitones: i32,
}

impl Interval {
    pub fn new(quality: Quality, step: i32) -> Result<Interval, TonalError> {
        if step == 0 {
            return Err(TonalError::ZeroStep);
        }
        if step.unsigned_abs() > MAX_STEP as u32 {
            return Err(TonalError::StepOutOfRange(step));
        }
        match width(quality, step) {
            Some(semitones) => Ok(Interval { quality, step, semitones }),
            None => Err(TonalError::InvalidQuality { quality, step }),
        }
    }

    /// Compile-time constructor for the named interval table. An invalid
    /// pair fails const evaluation.
    pub(crate) const fn known(quality: Quality, step: i32) -> Interval {
        match width(quality, step) {
            Some(semitones) => Interval { quality, step, semitones },
            None => panic!("invalid interval quality for step"),
        }
    }

    pub fn quality(&self) -> Quality {
        self.quality
    }

    pub fn step(&self) -> i32 {
        self.step
    }

    pub fn semitones(&self) -> i32 {
        self.semitones
    }

    pub fn is_above(&self) -> bool {
        self.step > 0
    }

    /// The same interval in the other direction.
    pub fn below(&self) -> Interval {
        Interval {
            quality: self.quality,
            step: -self.step,
            semitones: -self.semitones,
        }
    }

    /// Same quality, `octaves` more octaves in the interval's own direction.
    pub(crate) fn widened(&self, octaves: i32) -> Interval {
        let size = self.step.abs() + 7 * octaves;
        let semitones = self.semitones.abs() + 12 * octaves;
        if self.step < 0 {
            Interval { quality: self.quality, step: -size, semitones: -semitones }
        } else {
            Interval { quality: self.quality, step: size, semitones }
        }
    }
}

impl PartialEq for Interval {
    fn eq(&self, other: &Self) -> bool {
        self.semitones == other.semitones
    }
}

impl Eq for Interval {}

impl Hash for Interval {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.semitones.hash(state);
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let direction = if self.step < 0 { "B" } else { "A" };
        write!(f, "{}{} {}", self.quality.abbreviation(), self.step.abs(), direction)
    }
}

impl FromStr for Interval {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        interval_from_pair(parse_single(Rule::interval_only, s.trim())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tonal::constants::*;

    #[test]
    fn widths_of_simple_intervals() {
        assert_eq!(P1.semitones(), 0);
        assert_eq!(D2.semitones(), 0);
        assert_eq!(Mn3.semitones(), 3);
        assert_eq!(A4.semitones(), 6);
        assert_eq!(D5.semitones(), 6);
        assert_eq!(D7.semitones(), 9);
        assert_eq!(A7.semitones(), 12);
        assert_eq!(P8.semitones(), 12);
        assert_eq!(A8.semitones(), 13);
    }

    #[test]
    fn compound_intervals_add_octaves() {
        assert_eq!(Interval::new(Quality::Major, 10).unwrap().semitones(), 16);
        assert_eq!(Interval::new(Quality::Perfect, 22).unwrap().semitones(), 36);
        assert_eq!(Interval::new(Quality::Minor, 9).unwrap().semitones(), 13);
    }

    #[test]
    fn compare_intervals_by_semitones() {
        assert_eq!(A5, Mn6);
        assert_eq!(A4, D5);
        assert_ne!(P5, P4);
    }

    #[test]
    fn below_and_back_again() {
        assert_eq!(P5.below().semitones(), -7);
        assert_eq!(P5.below().below(), P5);
        assert_eq!(P5.below().below().step(), 5);
        assert_eq!(M3.below().quality(), Quality::Major);
        assert!(!Mn2.below().is_above());
    }

    #[test]
    fn reject_meaningless_qualities() {
        assert_eq!(
            Interval::new(Quality::Major, 4),
            Err(TonalError::InvalidQuality { quality: Quality::Major, step: 4 })
        );
        assert!(Interval::new(Quality::Perfect, 3).is_err());
        assert!(Interval::new(Quality::Minor, -12).is_err());
        assert_eq!(Interval::new(Quality::Perfect, 0), Err(TonalError::ZeroStep));
    }

    #[test]
    fn reject_steps_wider_than_the_note_range() {
        assert!(Interval::new(Quality::Perfect, MAX_STEP).is_ok());
        assert_eq!(
            Interval::new(Quality::Perfect, i32::MAX),
            Err(TonalError::StepOutOfRange(i32::MAX))
        );
        assert_eq!(
            Interval::new(Quality::Major, i32::MIN),
            Err(TonalError::StepOutOfRange(i32::MIN))
        );
        assert_eq!("P2147483647".parse::<Interval>(), Err(TonalError::StepOutOfRange(i32::MAX)));
    }

    #[test]
    fn display() {
        assert_eq!(P5.below().to_string(), "P5 B");
        assert_eq!(A4.to_string(), "A4 A");
        assert_eq!(Mn7.to_string(), "Mn7 A");
    }

    #[test]
    fn parse() {
        let fifth_below: Interval = "P5 B".parse().unwrap();
        assert_eq!(fifth_below, P5.below());
        assert_eq!(fifth_below.step(), -5);
        let ninth: Interval = "Mn9".parse().unwrap();
        assert_eq!(ninth.semitones(), 13);
        assert!("M4".parse::<Interval>().is_err());
        assert!("X3".parse::<Interval>().is_err());
    }

    #[test]
    fn widen_keeps_direction() {
        assert_eq!(M3.widened(1).step(), 10);
        assert_eq!(M3.below().widened(2).semitones(), -28);
        assert_eq!(M3.below().widened(2).step(), -17);
    }
}
