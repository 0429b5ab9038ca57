//! Ankideck - Deck conversion
//!
//! Reads the tab-separated vocabulary file and writes one card per complete
//! row as a headerless two-column TSV ready for Anki's "Basic" note import.

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use tracing::{debug, info, warn};

use crate::card::{BuildSummary, CardBuilder, CardResult};
use crate::config::DeckConfig;
use crate::row::{Row, COLUMNS};

/// Convert the configured input file into a deck file
///
/// Fails before touching the output when the input does not exist.
pub fn build_deck(config: &DeckConfig) -> Result<BuildSummary> {
    let input = &config.input;
    if !input.exists() {
        bail!("Input file not found: {}", input.display());
    }

    info!("Reading vocabulary from {}", input.display());

    let infile = File::open(input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let outfile = File::create(&config.output).with_context(|| {
        format!("Failed to create output file: {}", config.output.display())
    })?;

    let summary = write_cards(
        BufReader::new(infile),
        BufWriter::new(outfile),
        &config.card_builder(),
    )?;

    info!(
        "Wrote {} cards to {} ({} rows skipped)",
        summary.cards_written,
        config.output.display(),
        summary.skipped_rows
    );

    Ok(summary)
}

/// Stream rows from `input` and write a card line to `output` for each complete row
///
/// Output order follows input order. Incomplete rows are skipped and only
/// show up in the summary.
pub fn write_cards<R: Read, W: Write>(
    input: R,
    output: W,
    builder: &CardBuilder,
) -> Result<BuildSummary> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .with_context(|| "Failed to read input header")?
        .clone();
    let missing: Vec<&str> = COLUMNS
        .iter()
        .copied()
        .filter(|column| !headers.iter().any(|h| h == *column))
        .collect();
    if !missing.is_empty() {
        warn!(
            "Input header lacks column(s) {}; every row will be skipped",
            missing.join(", ")
        );
    }

    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);

    let mut summary = BuildSummary::new();

    for (i, result) in reader.records().enumerate() {
        let row_num = i + 1;
        let mut record = result.with_context(|| format!("Failed to read row {}", row_num))?;

        // Short rows: absent trailing columns read as empty
        while record.len() < headers.len() {
            record.push_field("");
        }
        let row: Row = record
            .deserialize(Some(&headers))
            .with_context(|| format!("Failed to decode row {}", row_num))?;

        match builder.build(&row) {
            CardResult::Built(card) => {
                writer
                    .write_record([card.front.as_str(), card.back.as_str()])
                    .with_context(|| format!("Failed to write card for row {}", row_num))?;
                summary.record_built();
            }
            CardResult::Skipped(reason) => {
                debug!("Row {}: {} (skipped)", row_num, reason.description());
                summary.record_skipped(&reason);
            }
        }
    }

    writer.flush().with_context(|| "Failed to flush output")?;

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::highlight::wrap_span;
    use crate::link::LookupLink;
    use std::fs;
    use tempfile::tempdir;

    const HEADER: &str = "czech_word\tenglish_translation\tczech_sentence\tenglish_sentence\n";

    fn read_deck(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .has_headers(false)
            .from_reader(bytes)
            .records()
            .map(|r| r.unwrap().iter().map(|s| s.to_string()).collect())
            .collect()
    }

    fn convert(input: &str, builder: &CardBuilder) -> Result<(Vec<u8>, BuildSummary)> {
        let mut out = Vec::new();
        let summary = write_cards(input.as_bytes(), &mut out, builder)?;
        Ok((out, summary))
    }

    #[test]
    fn test_cards_in_input_order_without_header() -> Result<()> {
        let input = format!(
            "{}jít\tto go\tChci jít domů.\tI want to go home.\n\
             pes\tdog\tMůj pes spí.\tMy dog sleeps.\n",
            HEADER
        );
        let (out, summary) = convert(&input, &CardBuilder::new())?;
        let deck = read_deck(&out);

        assert_eq!(summary.cards_written, 2);
        assert_eq!(deck.len(), 2);
        assert_eq!(
            deck[0],
            vec![
                format!("jít<br><br>Chci {} domů.", wrap_span("jít")),
                format!("to go<br><br>I want {} home.", wrap_span("to go")),
            ]
        );
        assert!(deck[1][0].starts_with("pes<br><br>"));
        assert!(!String::from_utf8(out)?.contains("czech_word"));
        Ok(())
    }

    #[test]
    fn test_column_order_irrelevant() -> Result<()> {
        let input = "english_sentence\tczech_sentence\tenglish_translation\tczech_word\n\
                     My dog sleeps.\tMůj pes spí.\tdog\tpes\n";
        let (out, _) = convert(input, &CardBuilder::new())?;
        let deck = read_deck(&out);
        assert_eq!(deck[0][0], format!("pes<br><br>Můj {} spí.", wrap_span("pes")));
        assert_eq!(deck[0][1], format!("dog<br><br>My {} sleeps.", wrap_span("dog")));
        Ok(())
    }

    #[test]
    fn test_incomplete_and_short_rows_skipped() -> Result<()> {
        let input = format!(
            "{}jít\tto go\tChci jít domů.\t\n\
             pes\tdog\n\
             \tdog\tMůj pes spí.\tMy dog sleeps.\n\
             dům\thouse\tTo je dům.\tThat is a house.\n",
            HEADER
        );
        let (out, summary) = convert(&input, &CardBuilder::new())?;
        let deck = read_deck(&out);

        assert_eq!(deck.len(), 1);
        assert!(deck[0][0].starts_with("dům<br><br>"));
        assert_eq!(summary.total_rows, 4);
        assert_eq!(summary.cards_written, 1);
        assert_eq!(summary.skipped_rows, 3);
        assert_eq!(summary.skips_by_column.get("english_sentence"), Some(&1));
        assert_eq!(summary.skips_by_column.get("czech_sentence"), Some(&1));
        assert_eq!(summary.skips_by_column.get("czech_word"), Some(&1));
        Ok(())
    }

    #[test]
    fn test_output_quoting_and_line_endings() -> Result<()> {
        let input = format!("{}jít\tto go\tChci jít domů.\tI want to go home.\n", HEADER);
        let (out, _) = convert(&input, &CardBuilder::new().with_link(LookupLink::default()))?;
        let text = String::from_utf8(out)?;

        assert!(text.starts_with("\"jít<br><br><a href=\"\"https://"));
        assert!(text.ends_with("\r\n"));
        assert_eq!(text.matches("\r\n").count(), 1);
        Ok(())
    }

    #[test]
    fn test_build_deck_writes_output() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("example_sentences.csv");
        let output = dir.path().join("deck.tsv");
        fs::write(
            &input,
            format!(
                "{}jít\tto go\tChci jít domů.\tI want to go home.\n\
                 pes\tdog\tPotřebuji pesticid.\tI need pesticide.\n",
                HEADER
            ),
        )?;

        let config = DeckConfig::new().with_input(&input).with_output(&output);
        let summary = build_deck(&config)?;
        assert_eq!(summary.cards_written, 2);

        let deck = read_deck(&fs::read(&output)?);
        assert_eq!(deck.len(), 2);
        assert!(deck[0][0].contains("perplexity.ai/search?q="));
        assert_eq!(
            deck[1][0],
            format!(
                r#"pes<br><br><a href="{}" style="color:inherit; text-decoration:none;">Potřebuji pesticid.</a>"#,
                LookupLink::default().url_for("Potřebuji pesticid.")
            )
        );
        assert_eq!(deck[1][1], "dog<br><br>I need pesticide.");
        Ok(())
    }

    #[test]
    fn test_missing_input_leaves_output_untouched() -> Result<()> {
        let dir = tempdir()?;
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("deck.tsv");
        fs::write(&output, "previous deck\n")?;

        let config = DeckConfig::new().with_input(&input).with_output(&output);
        let err = build_deck(&config).unwrap_err();

        assert!(err.to_string().starts_with("Input file not found:"));
        assert!(err.to_string().contains("missing.csv"));
        assert_eq!(fs::read_to_string(&output)?, "previous deck\n");
        Ok(())
    }

    #[test]
    fn test_missing_input_creates_no_output() -> Result<()> {
        let dir = tempdir()?;
        let output = dir.path().join("deck.tsv");
        let config = DeckConfig::new()
            .with_input(dir.path().join("missing.csv"))
            .with_output(&output);

        assert!(build_deck(&config).is_err());
        assert!(!output.exists());
        Ok(())
    }
}
