//! Ankideck - Build an Anki deck from vocabulary example sentences
//!
//! With no arguments, reads `example_sentences.csv` and writes
//! `anki_example_sentences.tsv` in the working directory.

use anyhow::Result;
use argh::FromArgs;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use ankideck::{build_deck, DeckConfig};

/// Ankideck - Turn vocabulary example sentences into Anki flashcards
#[derive(FromArgs)]
struct Args {
    /// path to the tab-separated vocabulary file (default: example_sentences.csv)
    #[argh(option, short = 'i')]
    input: Option<String>,

    /// path for the generated deck (default: anki_example_sentences.tsv)
    #[argh(option, short = 'o')]
    output: Option<String>,

    /// write the front sentence without a lookup link
    #[argh(switch)]
    plain: bool,
}

fn main() -> Result<()> {
    let args: Args = argh::from_env();

    // Logs go to stderr; stdout only carries the confirmation line
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = DeckConfig::new();
    if let Some(input) = args.input {
        config = config.with_input(input);
    }
    if let Some(output) = args.output {
        config = config.with_output(output);
    }
    if args.plain {
        config = config.without_link();
    }

    let summary = build_deck(&config)?;

    eprintln!("📊 Summary:");
    eprintln!("   Rows read:     {}", summary.total_rows);
    eprintln!("   Cards written: {}", summary.cards_written);
    eprintln!("   Rows skipped:  {}", summary.skipped_rows);
    for (column, count) in &summary.skips_by_column {
        eprintln!("   missing {} x{}", column, count);
    }

    println!("Wrote Anki cards to {}", config.output.display());

    Ok(())
}
