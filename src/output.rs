//! Result emission
//!
//! A listing is emitted either as text (one line per element, kind-annotated
//! in long format) or as JSON. Text output is write-through: a failed write
//! aborts immediately and already-written lines stay written.

use std::io::Write;

use serde::Serialize;

use crate::error::{Result, VinvError};
use crate::inventory::ResolvedElement;

/// Outcome of a listing, in resolver order.
#[derive(Debug, Serialize)]
pub struct ListingResult {
    pub elements: Vec<ResolvedElement>,

    // Display concern only, not part of the structured output.
    #[serde(skip)]
    pub long: bool,
}

impl ListingResult {
    /// Render as text, one element per line, preserving element order.
    pub fn write_to(&self, w: &mut dyn Write) -> Result<()> {
        for element in &self.elements {
            let suffix = if self.long {
                element.object.long_suffix()
            } else {
                ""
            };
            writeln!(w, "{}{}", element.path, suffix)?;
        }

        Ok(())
    }
}

/// Writes command results to stdout in the configured mode.
pub struct ResultSink {
    json: bool,
}

impl ResultSink {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Emit to stdout.
    pub fn emit(&self, result: &ListingResult) -> Result<()> {
        let stdout = std::io::stdout();
        self.emit_to(result, &mut stdout.lock())
    }

    /// Emit to an arbitrary writer.
    pub fn emit_to(&self, result: &ListingResult, w: &mut dyn Write) -> Result<()> {
        if self.json {
            serde_json::to_writer_pretty(&mut *w, result).map_err(|e| {
                VinvError::EmissionFailed {
                    reason: e.to_string(),
                }
            })?;
            writeln!(w)?;
            return Ok(());
        }

        result.write_to(w)
    }
}
