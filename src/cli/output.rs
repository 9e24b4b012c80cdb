use anyhow::Result;
use roster::Position;
use serde_json::json;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::workflow::QueryOutcome;

/// Print a plain-text representation of the query outcome.
///
/// Each match renders the contact id and name, with a marker line
/// underneath flagging the matched character ranges.
pub(crate) fn print_plain(outcome: &QueryOutcome) {
    if outcome.matches.is_empty() {
        println!("No contacts match '{}'", outcome.phrase);
        return;
    }

    for found in &outcome.matches {
        match outcome.names.get(&found.contact_id) {
            Some(name) => {
                println!("{}  {}", found.contact_id, name);
                let indent = " ".repeat(found.contact_id.width() + 2);
                println!("{indent}{}", marker_line(name, &found.positions));
            }
            None => println!("{}", found.contact_id),
        }
    }
}

/// Format the query outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &QueryOutcome) -> Result<String> {
    let matches: Vec<serde_json::Value> = outcome
        .matches
        .iter()
        .map(|found| {
            json!({
                "contact": found.contact_id,
                "name": outcome.names.get(&found.contact_id),
                "positions": found.positions,
            })
        })
        .collect();

    let payload = json!({
        "phrase": outcome.phrase,
        "matches": matches,
    });

    Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the query outcome.
pub(crate) fn print_json(outcome: &QueryOutcome) -> Result<()> {
    println!("{}", format_outcome_json(outcome)?);
    Ok(())
}

/// Build a line of `^` markers aligned under the matched characters.
///
/// Alignment is done in display columns so wide characters stay under their
/// markers.
fn marker_line(name: &str, positions: &[Position]) -> String {
    let mut line = String::new();

    for (offset, ch) in name.chars().enumerate() {
        let claimed = positions.iter().any(|position| {
            let start = position.word_offset + position.from;
            let end = position.word_offset + position.to;
            (start..end).contains(&offset)
        });

        let columns = ch.width().unwrap_or(0);
        let glyph = if claimed { '^' } else { ' ' };
        for _ in 0..columns {
            line.push(glyph);
        }
    }

    line.trim_end().to_string()
}
