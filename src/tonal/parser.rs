use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;

use crate::tonal::chord::Chord;
use crate::tonal::error::TonalError;
use crate::tonal::interval::{Interval, Quality};
use crate::tonal::note::Note;
use crate::tonal::pitch::{Accidental, Letter};

#[derive(Parser)]
#[grammar = "tonal/tonal.pest"]
pub struct TonalParser;

/// Parses the whole of `input` with `rule` and hands back the top pair.
pub(crate) fn parse_single(rule: Rule, input: &str) -> Result<Pair<'_, Rule>, TonalError> {
    let mut pairs = TonalParser::parse(rule, input).map_err(|e| TonalError::Parse(e.to_string()))?;
    pairs
        .next()
        .ok_or_else(|| TonalError::Parse(format!("nothing to parse in '{}'", input)))
}

pub(crate) fn unexpected(pair: &Pair<'_, Rule>) -> TonalError {
    TonalError::Parse(format!("unexpected {:?} '{}'", pair.as_rule(), pair.as_str()))
}

pub(crate) fn note_from_pair(pair: Pair<'_, Rule>) -> Result<Note, TonalError> {
    let text = pair.as_str();
    let mut letter = None;
    let mut accidental = Accidental::Natural;
    let mut octave = 4;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::letter => letter = part.as_str().chars().next().map(Letter::try_from).transpose()?,
            Rule::accidental => accidental = part.as_str().parse()?,
            Rule::octave => {
                octave = part.as_str().parse().map_err(|_| TonalError::InvalidNoteComponent {
                    component: "octave",
                    value: part.as_str().to_string(),
                })?
            }
            _ => return Err(unexpected(&part)),
        }
    }
    match letter {
        Some(letter) => Note::try_new(letter, accidental, octave),
        None => Err(TonalError::InvalidNoteComponent {
            component: "letter",
            value: text.to_string(),
        }),
    }
}

pub(crate) fn interval_from_pair(pair: Pair<'_, Rule>) -> Result<Interval, TonalError> {
    let text = pair.as_str();
    let mut quality = None;
    let mut step = None;
    let mut below = false;
    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::quality => quality = Some(part.as_str().parse::<Quality>()?),
            Rule::step => {
                step = Some(
                    part.as_str()
                        .parse::<i32>()
                        .map_err(|e| TonalError::Parse(format!("{} in '{}'", e, text)))?,
                )
            }
            Rule::direction => below = part.as_str() == "B",
            _ => return Err(unexpected(&part)),
        }
    }
    match (quality, step) {
        (Some(quality), Some(step)) => {
            let interval = Interval::new(quality, step)?;
            Ok(if below { interval.below() } else { interval })
        }
        _ => Err(TonalError::Parse(format!("incomplete interval '{}'", text))),
    }
}

pub(crate) fn chord_from_pair(pair: Pair<'_, Rule>) -> Result<Chord, TonalError> {
    pair.into_inner()
        .map(note_from_pair)
        .collect::<Result<Vec<Note>, TonalError>>()
        .map(Chord::new)
}
