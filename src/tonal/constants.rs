//! Named pitches in octave 4 and named intervals from unison to augmented
//! octave, plus lookup by name.
//!
//! Interval names use `P` perfect, `D` diminished, `Mn` minor, `M` major and
//! `A` augmented. Note names use `s` for sharp and `b` for flat.
#![allow(non_upper_case_globals)]

use crate::tonal::interval::{Interval, Quality};
use crate::tonal::note::Note;
use crate::tonal::pitch::{Accidental, Letter};

pub const C: Note = Note::natural(Letter::C);
pub const Bs: Note = Note::new(Letter::B, Accidental::Sharp, 4);
pub const Cs: Note = Note::new(Letter::C, Accidental::Sharp, 4);
pub const Db: Note = Note::new(Letter::D, Accidental::Flat, 4);
pub const D: Note = Note::natural(Letter::D);
pub const Ds: Note = Note::new(Letter::D, Accidental::Sharp, 4);
pub const Eb: Note = Note::new(Letter::E, Accidental::Flat, 4);
pub const E: Note = Note::natural(Letter::E);
pub const Fb: Note = Note::new(Letter::F, Accidental::Flat, 4);
pub const F: Note = Note::natural(Letter::F);
pub const Es: Note = Note::new(Letter::E, Accidental::Sharp, 4);
pub const Fs: Note = Note::new(Letter::F, Accidental::Sharp, 4);
pub const Gb: Note = Note::new(Letter::G, Accidental::Flat, 4);
pub const G: Note = Note::natural(Letter::G);
pub const Gs: Note = Note::new(Letter::G, Accidental::Sharp, 4);
pub const Ab: Note = Note::new(Letter::A, Accidental::Flat, 4);
pub const A: Note = Note::natural(Letter::A);
pub const As: Note = Note::new(Letter::A, Accidental::Sharp, 4);
pub const Bb: Note = Note::new(Letter::B, Accidental::Flat, 4);
pub const B: Note = Note::natural(Letter::B);
pub const Cb: Note = Note::new(Letter::C, Accidental::Flat, 4);

pub const P1: Interval = Interval::known(Quality::Perfect, 1);
pub const D2: Interval = Interval::known(Quality::Diminished, 2);
pub const Mn2: Interval = Interval::known(Quality::Minor, 2);
pub const M2: Interval = Interval::known(Quality::Major, 2);
pub const A2: Interval = Interval::known(Quality::Augmented, 2);
pub const D3: Interval = Interval::known(Quality::Diminished, 3);
pub const Mn3: Interval = Interval::known(Quality::Minor, 3);
pub const M3: Interval = Interval::known(Quality::Major, 3);
pub const A3: Interval = Interval::known(Quality::Augmented, 3);
pub const D4: Interval = Interval::known(Quality::Diminished, 4);
pub const P4: Interval = Interval::known(Quality::Perfect, 4);
pub const A4: Interval = Interval::known(Quality::Augmented, 4);
pub const D5: Interval = Interval::known(Quality::Diminished, 5);
pub const P5: Interval = Interval::known(Quality::Perfect, 5);
pub const A5: Interval = Interval::known(Quality::Augmented, 5);
pub const D6: Interval = Interval::known(Quality::Diminished, 6);
pub const Mn6: Interval = Interval::known(Quality::Minor, 6);
pub const M6: Interval = Interval::known(Quality::Major, 6);
pub const A6: Interval = Interval::known(Quality::Augmented, 6);
pub const D7: Interval = Interval::known(Quality::Diminished, 7);
pub const Mn7: Interval = Interval::known(Quality::Minor, 7);
pub const M7: Interval = Interval::known(Quality::Major, 7);
pub const A7: Interval = Interval::known(Quality::Augmented, 7);
pub const D8: Interval = Interval::known(Quality::Diminished, 8);
pub const P8: Interval = Interval::known(Quality::Perfect, 8);
pub const A8: Interval = Interval::known(Quality::Augmented, 8);

pub static NOTES: [(&str, Note); 21] = [
    ("C", C),
    ("Bs", Bs),
    ("Cs", Cs),
    ("Db", Db),
    ("D", D),
    ("Ds", Ds),
    ("Eb", Eb),
    ("E", E),
    ("Fb", Fb),
    ("F", F),
    ("Es", Es),
    ("Fs", Fs),
    ("Gb", Gb),
    ("G", G),
    ("Gs", Gs),
    ("Ab", Ab),
    ("A", A),
    ("As", As),
    ("Bb", Bb),
    ("B", B),
    ("Cb", Cb),
];

pub static INTERVALS: [(&str, Interval); 26] = [
    ("P1", P1),
    ("D2", D2),
    ("Mn2", Mn2),
    ("M2", M2),
    ("A2", A2),
    ("D3", D3),
    ("Mn3", Mn3),
    ("M3", M3),
    ("A3", A3),
    ("D4", D4),
    ("P4", P4),
    ("A4", A4),
    ("D5", D5),
    ("P5", P5),
    ("A5", A5),
    ("D6", D6),
    ("Mn6", Mn6),
    ("M6", M6),
    ("A6", A6),
    ("D7", D7),
    ("Mn7", Mn7),
    ("M7", M7),
    ("A7", A7),
    ("D8", D8),
    ("P8", P8),
    ("A8", A8),
];

pub fn note_named(name: &str) -> Option<Note> {
    NOTES.iter().find(|(n, _)| *n == name).map(|(_, note)| *note)
}

pub fn interval_named(name: &str) -> Option<Interval> {
    INTERVALS.iter().find(|(n, _)| *n == name).map(|(_, interval)| *interval)
}
