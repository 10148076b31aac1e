use std::io::BufRead;

use super::technique::Technique;

impl Technique {
    /// Maps a typed menu choice to a technique. Anything unrecognized falls back to box breathing.
    pub fn from_selector(input: &str) -> Self {
        match input.trim() {
            "2" => Technique::Diaphragmatic,
            "3" => Technique::AlternateNostril,
            _ => Technique::Box,
        }
    }
}

/// Read one line from `reader` and pick a technique from it.
/// End-of-stream and read failures select the default.
pub fn read_selection<R: BufRead>(mut reader: R) -> Technique {
    let mut input = String::new();
    match reader.read_line(&mut input) {
        Ok(0) => {
            tracing::debug!("stdin closed before a selection, using default technique");
            Technique::default()
        }
        Ok(_) => Technique::from_selector(&input),
        Err(e) => {
            tracing::debug!(error = %e, "failed to read selection, using default technique");
            Technique::default()
        }
    }
}
