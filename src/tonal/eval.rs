//! Evaluation of calculator expressions such as `triad(F, min) ^ P5.below`.
//!
//! Operators apply strictly left to right; use parentheses to group. Bare
//! names resolve against the named notes and intervals first, so `A5` is the
//! augmented fifth; spell a note in octave 5 as `A.va(5)` or `A >> 1`.
//!
//! `a - b` is the interval that raises `b` to `a`: `G - C` is a perfect fifth
//! up and `C - G` a perfect fifth below, not the other way round.

use itertools::Itertools;
use pest::iterators::Pair;

use crate::tonal::chord::{Chord, TriadQuality};
use crate::tonal::constants::{interval_named, note_named};
use crate::tonal::error::TonalError;
use crate::tonal::interval::Interval;
use crate::tonal::note::Note;
use crate::tonal::parser::{parse_single, unexpected, Rule};
use crate::tonal::value::{Method, Operator, Value};

pub fn evaluate(input: &str) -> Result<Value, TonalError> {
    let value = eval_expr(parse_single(Rule::expr_only, input.trim())?)?;
    log::debug!(target: "tonal::eval", "{} => {}", input.trim(), value);
    Ok(value)
}

fn eval_expr(pair: Pair<'_, Rule>) -> Result<Value, TonalError> {
    let mut inner = pair.into_inner();
    let mut value = match inner.next() {
        Some(first) => eval_operand(first)?,
        None => return Err(TonalError::Parse(String::from("empty expression"))),
    };
    for (op, operand) in inner.tuples() {
        let operator: Operator = op.as_str().parse()?;
        let rhs = eval_operand(operand)?;
        log::trace!(target: "tonal::eval", "{} {} {}", value, operator.symbol(), rhs);
        value = value.apply(operator, rhs)?;
    }
    Ok(value)
}

fn eval_operand(pair: Pair<'_, Rule>) -> Result<Value, TonalError> {
    let text = pair.as_str();
    let mut inner = pair.into_inner();
    let primary = inner
        .next()
        .ok_or_else(|| TonalError::Parse(format!("missing operand in '{}'", text)))?;
    let mut value = match primary.as_rule() {
        Rule::expr => eval_expr(primary)?,
        Rule::construct => eval_construct(primary)?,
        Rule::number => Value::Number(number(&primary)?),
        Rule::name => resolve(primary.as_str())?,
        _ => return Err(unexpected(&primary)),
    };
    for call in inner {
        let mut parts = call.into_inner();
        let method: Method = match parts.next() {
            Some(method) => method.as_str().parse()?,
            None => return Err(TonalError::Parse(format!("missing method in '{}'", text))),
        };
        let arg = parts.next().map(|arg| number(&arg)).transpose()?;
        value = value.call(method, arg)?;
    }
    Ok(value)
}

fn eval_construct(pair: Pair<'_, Rule>) -> Result<Value, TonalError> {
    let text = pair.as_str();
    let mut parts = pair.into_inner();
    let (ctor, tonic) = match (parts.next(), parts.next()) {
        (Some(ctor), Some(tonic)) => (ctor.as_str(), eval_expr(tonic)?),
        _ => return Err(TonalError::Parse(format!("incomplete chord constructor '{}'", text))),
    };
    let tonic = match tonic {
        Value::Note(note) => note,
        other => {
            return Err(TonalError::ExpectedNote {
                context: ctor.to_string(),
                found: other.kind(),
            })
        }
    };

    let mut quality = None;
    let mut inversions = 0;
    for part in parts {
        match part.as_rule() {
            Rule::kind => quality = Some(part.as_str().parse::<TriadQuality>()?),
            Rule::number => {
                inversions = usize::try_from(number(&part)?)
                    .map_err(|_| TonalError::Parse(format!("negative inversion count in '{}'", text)))?
            }
            _ => return Err(unexpected(&part)),
        }
    }

    let chord = match (ctor, quality) {
        ("triad", quality) => Chord::triad(&tonic, quality.unwrap_or(TriadQuality::Major), inversions)?,
        ("v7", None) => Chord::dominant_seventh(&tonic, inversions)?,
        ("o7", None) => Chord::diminished_seventh(&tonic, inversions)?,
        _ => return Err(TonalError::Parse(format!("'{}' takes no triad quality", ctor))),
    };
    Ok(Value::Chord(chord))
}

fn number(pair: &Pair<'_, Rule>) -> Result<i32, TonalError> {
    pair.as_str()
        .parse()
        .map_err(|e| TonalError::Parse(format!("{} in '{}'", e, pair.as_str())))
}

/// Named constants win over spellings.
fn resolve(name: &str) -> Result<Value, TonalError> {
    if let Some(note) = note_named(name) {
        return Ok(Value::Note(note));
    }
    if let Some(interval) = interval_named(name) {
        return Ok(Value::Interval(interval));
    }
    match name.parse::<Note>() {
        Ok(note) => return Ok(Value::Note(note)),
        Err(e @ TonalError::InvalidNoteComponent { .. }) => return Err(e),
        Err(_) => {}
    }
    match name.parse::<Interval>() {
        Ok(interval) => Ok(Value::Interval(interval)),
        Err(e @ (TonalError::InvalidQuality { .. } | TonalError::StepOutOfRange(_))) => Err(e),
        Err(_) => Err(TonalError::UnknownName(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tonal::constants::*;
    use crate::tonal::interval::Quality;
    use pretty_assertions::assert_eq;

    fn eval(input: &str) -> String {
        evaluate(input).unwrap().to_string()
    }

    #[test]
    fn transpose() {
        assert_eq!(evaluate("C ^ P5").unwrap(), Value::Note(G));
        assert_eq!(eval("C ^ D7"), "Bbb4");
        assert_eq!(eval("C ^ P5.below"), "F3");
        assert_eq!(eval("C ^ P5 ^ P5"), "D5");
        assert_eq!(eval("C ^ M10"), "E5");
        assert_eq!(eval("(D + Fs + A) ^ P5"), "A4, C#5, E5");
    }

    #[test]
    fn differences() {
        assert_eq!(eval("G - C"), "P5 A");
        assert_eq!(eval("C - G"), "P5 B");
        assert_eq!(evaluate("G - C").unwrap(), Value::Interval(P5));
        assert_eq!(eval("C - Mn2"), "B3");
    }

    #[test]
    fn chords() {
        assert_eq!(evaluate("triad(D)").unwrap(), Value::Chord(D + Fs + A));
        assert_eq!(eval("triad(C, maj, 2)"), "G4, C5, E5");
        assert_eq!(eval("triad(F, min)"), "F4, Ab4, C5");
        assert_eq!(eval("triad(C, 1)"), "E4, G4, C5");
        assert_eq!(eval("v7(C)"), "G4, B4, D5, F5");
        assert_eq!(eval("o7(C)"), "B3, D4, F4, Ab4");
        assert_eq!(eval("triad(Eb >> 1, dim)"), "Eb5, Gb5, Bbb5");
    }

    #[test]
    fn invert_and_shift() {
        assert_eq!(
            evaluate("(C + E + G).invert.invert.invert").unwrap(),
            evaluate("(C + E + G) >> 1").unwrap()
        );
        assert_eq!(eval("(C + E + G) << 2"), "C2, E2, G2");
        assert_eq!(eval("(C + E + G) >> -1"), "C3, E3, G3");
    }

    #[test]
    fn methods() {
        assert_eq!(eval("C.va(1).base"), "C4");
        assert_eq!(eval("P5.below.below"), "P5 A");
        assert_eq!(eval("E.succ"), "F4");
        assert_eq!(eval("Db.simplify"), "C#4");
    }

    #[test]
    fn names_before_spellings() {
        assert_eq!(evaluate("A5").unwrap(), Value::Interval(Mn6));
        assert_eq!(eval("A#5"), "A#5");
        assert_eq!(eval("Ebb2"), "Ebb2");
        assert_eq!(eval("A.va(5)"), "A5");
    }

    #[test]
    fn errors() {
        assert_eq!(
            evaluate("C + P5"),
            Err(TonalError::Unsupported {
                op: String::from("+"),
                lhs: "note",
                rhs: "interval",
            })
        );
        assert_eq!(evaluate("X9"), Err(TonalError::UnknownName(String::from("X9"))));
        assert_eq!(
            evaluate("C ^ M4"),
            Err(TonalError::InvalidQuality { quality: Quality::Major, step: 4 })
        );
        assert_eq!(
            evaluate("triad(P5)"),
            Err(TonalError::ExpectedNote {
                context: String::from("triad"),
                found: "interval",
            })
        );
        assert!(matches!(evaluate("v7(C, min)"), Err(TonalError::Parse(_))));
        assert!(matches!(evaluate("triad(C, -1)"), Err(TonalError::Parse(_))));
        assert!(matches!(evaluate("C ^"), Err(TonalError::Parse(_))));
    }

    #[test]
    fn huge_numbers_are_errors() {
        let octave_error = |value: &str| TonalError::InvalidNoteComponent {
            component: "octave",
            value: value.to_string(),
        };
        assert_eq!(evaluate("C999999999"), Err(octave_error("999999999")));
        assert_eq!(evaluate("P2147483647"), Err(TonalError::StepOutOfRange(i32::MAX)));
        assert_eq!(evaluate("C ^ P2147483647"), Err(TonalError::StepOutOfRange(i32::MAX)));
        assert!(matches!(evaluate("C >> 2147483647"), Err(TonalError::InvalidNoteComponent { .. })));
        assert!(matches!(evaluate("(C + E) << -2147483648"), Err(TonalError::InvalidNoteComponent { .. })));
        assert_eq!(evaluate("C.va(2147483647)"), Err(octave_error("2147483647")));
        assert_eq!(evaluate("C ^ P8 >> 996"), Err(octave_error("1001")));
        assert!(matches!(evaluate("C99999999999"), Err(TonalError::InvalidNoteComponent { .. })));
    }

    #[test]
    fn lowercase_note_names() {
        assert_eq!(eval("c ^ P5"), "G4");
        assert_eq!(eval("f#3 + a3"), "F#3, A3");
    }
}
