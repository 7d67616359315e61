use std::fmt;
use std::io::Write;
use std::str::FromStr;

use itertools::Itertools;

use crate::tonal::error::TonalError;

/// How a tune of several notes is sounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Every note at once, one voice per note.
    #[default]
    Harmonic,
    /// One voice playing the notes in turn.
    Melodic,
}

impl Style {
    /// Splits a tune such as `"C4 E4 G4"` into the voices the device plays
    /// simultaneously.
    pub fn voices(self, tune: &str) -> Vec<&str> {
        match self {
            Style::Harmonic => tune.split_whitespace().collect(),
            Style::Melodic => match tune.trim() {
                "" => vec![],
                whole => vec![whole],
            },
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", match self {
            Style::Harmonic => "harmonic",
            Style::Melodic => "melodic",
        })
    }
}

impl FromStr for Style {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "harmonic" => Ok(Style::Harmonic),
            "melodic" => Ok(Style::Melodic),
            _ => Err(TonalError::InvalidStyle(s.to_string())),
        }
    }
}

/// Something that can sound a tune of whitespace separated `<name><octave>`
/// tokens, with sharps only (`"C#4 F4 G#4"`).
pub trait Synthesizer {
    fn play(&mut self, tune: &str, style: Style) -> Result<(), TonalError>;
}

/// A synthesizer that writes each tune as a line of bracketed voices.
pub struct TextSynth<W: Write> {
    out: W,
}

impl<W: Write> TextSynth<W> {
    pub fn new(out: W) -> Self {
        TextSynth { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Synthesizer for TextSynth<W> {
    fn play(&mut self, tune: &str, style: Style) -> Result<(), TonalError> {
        let voices = style.voices(tune);
        log::debug!(target: "tonal::sound", "{} voice(s), {}", voices.len(), style);
        writeln!(self.out, "{}: {}", style, voices.iter().map(|voice| format!("[{}]", voice)).join(" "))
            .map_err(|e| TonalError::Synth(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tonal::chord::{Chord, TriadQuality};
    use crate::tonal::constants::*;
    use pretty_assertions::assert_eq;

    /// Keeps every tune it is asked to play.
    #[derive(Default)]
    struct Recorder {
        played: Vec<(String, Style)>,
    }

    impl Synthesizer for Recorder {
        fn play(&mut self, tune: &str, style: Style) -> Result<(), TonalError> {
            self.played.push((tune.to_string(), style));
            Ok(())
        }
    }

    #[test]
    fn split_voices() {
        assert_eq!(Style::Harmonic.voices("C4 E4  G4"), vec!["C4", "E4", "G4"]);
        assert_eq!(Style::Melodic.voices(" C4 E4 G4"), vec!["C4 E4 G4"]);
        assert!(Style::Melodic.voices("").is_empty());
    }

    #[test]
    fn parse_style() {
        assert_eq!("melodic".parse::<Style>().unwrap(), Style::Melodic);
        assert_eq!("loud".parse::<Style>(), Err(TonalError::InvalidStyle(String::from("loud"))));
        assert_eq!(Style::default(), Style::Harmonic);
    }

    #[test]
    fn chords_hand_their_tune_over() {
        let mut synth = Recorder::default();
        let chord = Chord::triad(&Db, TriadQuality::Minor, 1).unwrap();
        chord.play(&mut synth, Style::Melodic).unwrap();
        C.play(&mut synth).unwrap();
        assert_eq!(
            synth.played,
            vec![
                (String::from("E4 G#4 C#5"), Style::Melodic),
                (String::from("C4"), Style::Harmonic),
            ]
        );
    }

    #[test]
    fn text_synth_writes_voices() {
        let mut synth = TextSynth::new(Vec::new());
        (C + E + G).play(&mut synth, Style::Harmonic).unwrap();
        (C + E + G).play(&mut synth, Style::Melodic).unwrap();
        let text = String::from_utf8(synth.into_inner()).unwrap();
        assert_eq!(text, "harmonic: [C4] [E4] [G4]\nmelodic: [C4 E4 G4]\n");
    }
}
