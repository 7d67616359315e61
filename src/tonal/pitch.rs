use std::fmt;
use std::str::FromStr;

use crate::tonal::error::TonalError;

/// The seven letter names, in scale order starting from C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Letter {
    C,
    D,
    E,
    F,
    G,
    A,
    B,
}

impl Letter {
    pub const ALL: [Letter; 7] = [
        Letter::C,
        Letter::D,
        Letter::E,
        Letter::F,
        Letter::G,
        Letter::A,
        Letter::B,
    ];

    /// Position on the cyclic letter line, C = 0 .. B = 6.
    pub const fn index(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 1,
            Letter::E => 2,
            Letter::F => 3,
            Letter::G => 4,
            Letter::A => 5,
            Letter::B => 6,
        }
    }

    /// Any integer is accepted; it wraps around the seven letters.
    pub fn from_index(index: i32) -> Letter {
        Letter::ALL[index.rem_euclid(7) as usize]
    }

    /// Semitones above C of the natural form of this letter.
    pub const fn natural_semitones(self) -> i32 {
        match self {
            Letter::C => 0,
            Letter::D => 2,
            Letter::E => 4,
            Letter::F => 5,
            Letter::G => 7,
            Letter::A => 9,
            Letter::B => 11,
        }
    }

    /// Moves `steps` letter positions along the alphabet, wrapping at B/C.
    pub fn step(self, steps: i32) -> Letter {
        Letter::from_index(self.index() + steps)
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Letter::C => "C",
            Letter::D => "D",
            Letter::E => "E",
            Letter::F => "F",
            Letter::G => "G",
            Letter::A => "A",
            Letter::B => "B",
        })
    }
}

impl TryFrom<char> for Letter {
    type Error = TonalError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_uppercase() {
            'C' => Ok(Letter::C),
            'D' => Ok(Letter::D),
            'E' => Ok(Letter::E),
            'F' => Ok(Letter::F),
            'G' => Ok(Letter::G),
            'A' => Ok(Letter::A),
            'B' => Ok(Letter::B),
            _ => Err(TonalError::InvalidNoteComponent {
                component: "letter",
                value: c.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accidental {
    DoubleFlat,
    Flat,
    Natural,
    Sharp,
    DoubleSharp,
}

impl Accidental {
    pub const fn offset(self) -> i32 {
        match self {
            Accidental::DoubleFlat => -2,
            Accidental::Flat => -1,
            Accidental::Natural => 0,
            Accidental::Sharp => 1,
            Accidental::DoubleSharp => 2,
        }
    }

    /// The accidental that moves a natural letter by `offset` semitones, if
    /// one exists.
    pub fn from_offset(offset: i32) -> Option<Accidental> {
        match offset {
            -2 => Some(Accidental::DoubleFlat),
            -1 => Some(Accidental::Flat),
            0 => Some(Accidental::Natural),
            1 => Some(Accidental::Sharp),
            2 => Some(Accidental::DoubleSharp),
            _ => None,
        }
    }
}

impl fmt::Display for Accidental {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Accidental::DoubleFlat => "bb",
            Accidental::Flat => "b",
            Accidental::Natural => "",
            Accidental::Sharp => "#",
            Accidental::DoubleSharp => "##",
        })
    }
}

impl FromStr for Accidental {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bb" => Ok(Accidental::DoubleFlat),
            "b" => Ok(Accidental::Flat),
            "" | "n" => Ok(Accidental::Natural),
            "#" | "s" => Ok(Accidental::Sharp),
            "##" | "ss" => Ok(Accidental::DoubleSharp),
            _ => Err(TonalError::InvalidNoteComponent {
                component: "accidental",
                value: s.to_string(),
            }),
        }
    }
}

/// Names used by the tone device, indexed by pitch class. Sharps only.
const CHROMATIC_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// A pitch with its octave discarded, 0 (C) to 11 (B).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PitchClass(u8);

impl PitchClass {
    pub fn from_semitones(semitones: i32) -> PitchClass {
        PitchClass(semitones.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_natural(self) -> bool {
        [0, 2, 4, 5, 7, 9, 11].contains(&self.0)
    }

    /// The plainest spelling of this pitch class: a natural, or failing that
    /// the sharp of the letter below.
    pub fn to_step_name(self) -> (Letter, Accidental) {
        let letter = match self.0 {
            0 | 1 => Letter::C,
            2 | 3 => Letter::D,
            4 => Letter::E,
            5 | 6 => Letter::F,
            7 | 8 => Letter::G,
            9 | 10 => Letter::A,
            _ => Letter::B,
        };
        let accidental = if self.is_natural() {
            Accidental::Natural
        } else {
            Accidental::Sharp
        };
        (letter, accidental)
    }

    pub fn chromatic_name(self) -> &'static str {
        CHROMATIC_NAMES[self.0 as usize]
    }
}
