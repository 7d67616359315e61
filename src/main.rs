use std::io;
use std::process::ExitCode;

use clap::Parser;

use tonalcalc::tonal::sound::TextSynth;
use tonalcalc::{evaluate, Style, Synthesizer, TonalError, Value};

/// Musical calculator: transpose, combine, invert and name notes and chords
#[derive(Parser)]
#[command(name = "tonalcalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Expressions to evaluate, e.g. "C ^ P5", "G - C" or "triad(F, min, 1)"
    #[arg(required = true)]
    exprs: Vec<String>,

    /// Also sound note and chord results, harmonic or melodic
    #[arg(long)]
    play: Option<Style>,

    /// Print tone device tokens ("C#4") instead of spelled names
    #[arg(long)]
    tune: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    let mut synth = TextSynth::new(io::stdout());

    let mut failed = false;
    for expr in &cli.exprs {
        let outcome = evaluate(expr).and_then(|value| render(&value, &cli, &mut synth));
        if let Err(e) = outcome {
            eprintln!("{}: {}", expr, e);
            failed = true;
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn render<S: Synthesizer>(value: &Value, cli: &Cli, synth: &mut S) -> Result<(), TonalError> {
    let text = match value {
        Value::Note(note) if cli.tune => note.tone_name(),
        Value::Chord(chord) if cli.tune => chord.tune(),
        _ => value.to_string(),
    };
    println!("{}", text);

    if let Some(style) = cli.play {
        match value {
            Value::Note(note) => note.play(synth)?,
            Value::Chord(chord) => chord.play(synth, style)?,
            other => log::warn!("nothing to play for a {}", other.kind()),
        }
    }
    Ok(())
}
