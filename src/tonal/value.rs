use std::fmt;
use std::str::FromStr;

use crate::tonal::chord::Chord;
use crate::tonal::error::TonalError;
use crate::tonal::interval::Interval;
use crate::tonal::note::Note;

/// Anything a calculator expression can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Note(Note),
    Interval(Interval),
    Chord(Chord),
    Number(i32),
}

/// Infix operators, in the order a pocket calculator would apply them:
/// strictly left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `^`: transpose by an interval.
    Raise,
    /// `+`: gather notes into a chord.
    Combine,
    /// `-`: the interval between two notes, or transpose down.
    Difference,
    /// `>>`
    OctaveUp,
    /// `<<`
    OctaveDown,
}

impl Operator {
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Raise => "^",
            Operator::Combine => "+",
            Operator::Difference => "-",
            Operator::OctaveUp => ">>",
            Operator::OctaveDown => "<<",
        }
    }
}

impl FromStr for Operator {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "^" => Ok(Operator::Raise),
            "+" => Ok(Operator::Combine),
            "-" => Ok(Operator::Difference),
            ">>" => Ok(Operator::OctaveUp),
            "<<" => Ok(Operator::OctaveDown),
            _ => Err(TonalError::Parse(format!("unknown operator '{}'", s))),
        }
    }
}

/// Postfix `.method` calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Below,
    Base,
    Invert,
    Va,
    Succ,
    Simplify,
}

impl FromStr for Method {
    type Err = TonalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "below" => Ok(Method::Below),
            "base" => Ok(Method::Base),
            "invert" => Ok(Method::Invert),
            "va" => Ok(Method::Va),
            "succ" => Ok(Method::Succ),
            "simplify" => Ok(Method::Simplify),
            _ => Err(TonalError::Parse(format!("unknown method '{}'", s))),
        }
    }
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Note(_) => "note",
            Value::Interval(_) => "interval",
            Value::Chord(_) => "chord",
            Value::Number(_) => "number",
        }
    }

    pub fn apply(self, op: Operator, rhs: Value) -> Result<Value, TonalError> {
        match (op, self, rhs) {
            (Operator::Raise, Value::Note(note), Value::Interval(interval)) => {
                Ok(Value::Note(note.raise_by(&interval)?))
            }
            (Operator::Raise, Value::Chord(chord), Value::Interval(interval)) => {
                Ok(Value::Chord(chord.raise_by(&interval)?))
            }
            (Operator::Combine, Value::Note(a), Value::Note(b)) => Ok(Value::Chord(a + b)),
            (Operator::Combine, Value::Chord(chord), Value::Note(note)) => Ok(Value::Chord(chord + note)),
            (Operator::Combine, Value::Note(note), Value::Chord(chord)) => {
                Ok(Value::Chord(Chord::new(vec![note]) + chord))
            }
            (Operator::Combine, Value::Chord(a), Value::Chord(b)) => Ok(Value::Chord(a + b)),
            (Operator::Difference, Value::Note(a), Value::Note(b)) => Ok(Value::Interval(a.difference(&b))),
            (Operator::Difference, Value::Note(note), Value::Interval(interval)) => {
                Ok(Value::Note(note.lower_by(&interval)?))
            }
            (Operator::Difference, Value::Chord(chord), Value::Interval(interval)) => {
                Ok(Value::Chord(chord.lower_by(&interval)?))
            }
            (Operator::OctaveUp, Value::Note(note), Value::Number(n)) => Ok(Value::Note((note >> n)?)),
            (Operator::OctaveUp, Value::Chord(chord), Value::Number(n)) => Ok(Value::Chord((chord >> n)?)),
            (Operator::OctaveDown, Value::Note(note), Value::Number(n)) => Ok(Value::Note((note << n)?)),
            (Operator::OctaveDown, Value::Chord(chord), Value::Number(n)) => Ok(Value::Chord((chord << n)?)),
            (op, lhs, rhs) => Err(TonalError::Unsupported {
                op: op.symbol().to_string(),
                lhs: lhs.kind(),
                rhs: rhs.kind(),
            }),
        }
    }

    pub fn call(self, method: Method, arg: Option<i32>) -> Result<Value, TonalError> {
        match (method, self, arg) {
            (Method::Below, Value::Interval(interval), None) => Ok(Value::Interval(interval.below())),
            (Method::Base, Value::Note(note), None) => Ok(Value::Note(note.base())),
            (Method::Base, Value::Chord(chord), None) => Ok(Value::Chord(chord.base())),
            (Method::Invert, Value::Chord(chord), None) => Ok(Value::Chord(chord.inverted()?)),
            (Method::Va, Value::Note(note), Some(octave)) => Ok(Value::Note(note.to_octave(octave)?)),
            (Method::Succ, Value::Note(note), None) => Ok(Value::Note(note.successor()?)),
            (Method::Simplify, Value::Note(note), None) => Ok(Value::Note(note.simplified()?)),
            (Method::Simplify, Value::Chord(chord), None) => {
                let notes = chord.iter().map(Note::simplified).collect::<Result<Vec<Note>, TonalError>>()?;
                Ok(Value::Chord(Chord::new(notes)))
            }
            (method, value, arg) => Err(TonalError::Unsupported {
                op: format!(".{:?}", method).to_lowercase(),
                lhs: value.kind(),
                rhs: if arg.is_some() { "number" } else { "nothing" },
            }),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Note(note) => write!(f, "{}", note),
            Value::Interval(interval) => write!(f, "{}", interval),
            Value::Chord(chord) => write!(f, "{}", chord),
            Value::Number(n) => write!(f, "{}", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tonal::constants::*;

    #[test]
    fn dispatch_by_operand_kinds() {
        assert_eq!(Value::Note(C).apply(Operator::Raise, Value::Interval(P5)).unwrap(), Value::Note(G));
        assert_eq!(Value::Note(C).apply(Operator::Combine, Value::Note(E)).unwrap(), Value::Chord(C + E));
        assert_eq!(Value::Note(G).apply(Operator::Difference, Value::Note(C)).unwrap(), Value::Interval(P5));
        assert_eq!(
            Value::Note(E).apply(Operator::Combine, Value::Chord(G + C)).unwrap().to_string(),
            "E4, G4, C4"
        );
        assert_eq!(
            Value::Chord(C + E).apply(Operator::OctaveDown, Value::Number(1)).unwrap().to_string(),
            "C3, E3"
        );
    }

    #[test]
    fn reject_meaningless_combinations() {
        assert_eq!(
            Value::Note(C).apply(Operator::Combine, Value::Interval(P5)),
            Err(TonalError::Unsupported {
                op: String::from("+"),
                lhs: "note",
                rhs: "interval",
            })
        );
        assert!(Value::Interval(P5).apply(Operator::Raise, Value::Note(C)).is_err());
        assert!(Value::Number(2).apply(Operator::OctaveUp, Value::Number(1)).is_err());
    }

    #[test]
    fn methods() {
        assert_eq!(Value::Interval(P5).call(Method::Below, None).unwrap().to_string(), "P5 B");
        assert_eq!(Value::Note(Cb).call(Method::Simplify, None).unwrap().to_string(), "B3");
        assert_eq!(Value::Note(G).call(Method::Va, Some(2)).unwrap().to_string(), "G2");
        assert_eq!(
            Value::Note(G).call(Method::Va, None),
            Err(TonalError::Unsupported {
                op: String::from(".va"),
                lhs: "note",
                rhs: "nothing",
            })
        );
        assert!(Value::Note(G).call(Method::Invert, None).is_err());
    }
}
