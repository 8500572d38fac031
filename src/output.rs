//! Output formatting for CLI display.
//!
//! Provides the [`PrettyPrint`] trait for human-readable output
//! as an alternative to JSON serialization.

use serde::Serialize;

use crate::{Definition, Result, WordObject, WordOfTheDay, WordnikError};

/// Render `item` as pretty-printed JSON for `--json` output.
///
/// # Errors
///
/// Returns [`WordnikError::Encode`] if the value cannot be expressed as JSON.
pub fn to_json<T: Serialize + ?Sized>(item: &T) -> Result<String> {
    serde_json::to_string_pretty(item).map_err(WordnikError::Encode)
}

/// Trait for human-readable key-value output.
///
/// Implemented by entity types to provide formatted output
/// suitable for terminal display when `--json` is not specified.
pub trait PrettyPrint {
    /// Returns a formatted string for terminal display.
    fn pretty_print(&self) -> String;
}

impl PrettyPrint for WordObject {
    fn pretty_print(&self) -> String {
        let divider = "─".repeat(self.word.chars().count().max(30));

        let mut lines = vec![format!("Word: {}", self.word), divider];

        if let Some(ref canonical) = self.canonical_form {
            lines.push(format!("Canonical:      {}", canonical));
        }

        if let Some(ref original) = self.original_word {
            lines.push(format!("Requested:      {}", original));
        }

        if !self.suggestions.is_empty() {
            lines.push(format!("Suggestions:    {}", self.suggestions.join(", ")));
        }

        if let Some(ref vulgar) = self.vulgar {
            lines.push(format!("Vulgar:         {}", vulgar));
        }

        lines.join("\n")
    }
}

impl PrettyPrint for Definition {
    fn pretty_print(&self) -> String {
        let pos = self.part_of_speech.as_deref().unwrap_or("?");
        let text = self.text.as_deref().unwrap_or("(no text)");

        let mut line = format!("({pos}) {text}");
        if let Some(ref source) = self.source_dictionary {
            line.push_str(&format!(" [{source}]"));
        }
        line
    }
}

impl PrettyPrint for WordOfTheDay {
    fn pretty_print(&self) -> String {
        let header = format!("Word of the day: {}", self.word);
        let divider = "─".repeat(header.chars().count().max(30));

        let mut lines = vec![header, divider];

        if let Some(date) = self.published_on() {
            lines.push(format!("Published:      {}", date));
        }

        for def in &self.definitions {
            let pos = def.part_of_speech.as_deref().unwrap_or("?");
            let text = def.text.as_deref().unwrap_or_default();
            lines.push(format!("  ({pos}) {text}"));
        }

        if let Some(example) = self.examples.first().and_then(|e| e.text.as_deref()) {
            lines.push(format!("Example:        {}", example));
        }

        if let Some(ref note) = self.note {
            lines.push(format!("Note:           {}", note));
        }

        lines.join("\n")
    }
}

impl<T: PrettyPrint> PrettyPrint for [T] {
    fn pretty_print(&self) -> String {
        self.iter()
            .enumerate()
            .map(|(i, item)| format!("{:>3}. {}", i + 1, item.pretty_print()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
