// src/engine/markers.rs

//! Ordered marker list evaluated against every line of child output.
//!
//! Needles are literal, case-sensitive substrings. They are regex-escaped and
//! compiled into a single `RegexSet` so one pass over the line checks all of
//! them; when several match, the one listed first wins.

use regex::bytes::RegexSet;

use crate::errors::Result;
use crate::types::Verdict;

pub const SUCCESS_MARKER: &str = "TEST SUCCESS";
pub const FAILURE_MARKER: &str = "TEST FAILED";
pub const PANIC_MARKER: &str = "Kernel panic";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub needle: String,
    pub verdict: Verdict,
}

#[derive(Debug, Clone)]
pub struct MarkerSet {
    markers: Vec<Marker>,
    set: RegexSet,
}

impl MarkerSet {
    pub fn new<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, Verdict)>,
    {
        let markers: Vec<Marker> = pairs
            .into_iter()
            .map(|(needle, verdict)| Marker { needle, verdict })
            .collect();
        let set = RegexSet::new(markers.iter().map(|m| regex::escape(&m.needle)))?;
        Ok(Self { markers, set })
    }

    /// Highest-priority marker contained in `line`, if any.
    pub fn find(&self, line: &[u8]) -> Option<&Marker> {
        if self.markers.is_empty() {
            return None;
        }
        self.set
            .matches(line)
            .iter()
            .next()
            .map(|idx| &self.markers[idx])
    }

    pub fn evaluate(&self, line: &[u8]) -> Option<Verdict> {
        self.find(line).map(|m| m.verdict)
    }
}
