//! Conditional block pruning
//!
//! A gate named `DB` owns two marker pairs:
//!
//! ```text
//! <!-- BEGIN DB -->      ... kept when the gate is on ...      <!-- END DB -->
//! <!-- BEGIN NOT DB -->  ... kept when the gate is off ...     <!-- END NOT DB -->
//! ```
//!
//! The pair matching the gate's state is unwrapped (markers removed, content
//! kept); the other pair is erased together with its content. Blocks do not
//! nest. An opening marker without a closing one stops processing of that pair
//! and stays in the output.

use memchr::{memchr, memmem, memrchr};
use tracing::debug;

use super::into_text;

/// A named boolean switch over template blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gate {
    name: String,
    enabled: bool,
}

impl Gate {
    /// Gate guarding the database layer
    pub const DATABASE: &'static str = "DB";

    /// Create a gate
    pub fn new(name: impl Into<String>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            enabled,
        }
    }

    /// The database gate
    pub fn database(enabled: bool) -> Self {
        Self::new(Self::DATABASE, enabled)
    }

    /// Gate name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the gate is on
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Markers of the block kept when the gate is on
    pub fn markers(&self) -> (String, String) {
        (
            format!("<!-- BEGIN {} -->", self.name),
            format!("<!-- END {} -->", self.name),
        )
    }

    /// Markers of the block kept when the gate is off
    pub fn negated_markers(&self) -> (String, String) {
        (
            format!("<!-- BEGIN NOT {} -->", self.name),
            format!("<!-- END NOT {} -->", self.name),
        )
    }
}

/// Apply every gate to `content`
pub fn prune_blocks(content: &str, gates: &[Gate]) -> String {
    into_text(prune_bytes(content.as_bytes(), gates))
}

/// Apply every gate to raw template bytes
///
/// Markers are ASCII, so the surrounding bytes need not be valid UTF-8.
pub fn prune_bytes(content: &[u8], gates: &[Gate]) -> Vec<u8> {
    let mut output = content.to_vec();
    for gate in gates {
        let (begin, end) = gate.markers();
        let (not_begin, not_end) = gate.negated_markers();

        if gate.enabled {
            output = erase_blocks(output, not_begin.as_bytes(), not_end.as_bytes());
            output = unwrap_blocks(output, begin.as_bytes(), end.as_bytes());
        } else {
            output = erase_blocks(output, begin.as_bytes(), end.as_bytes());
            output = unwrap_blocks(output, not_begin.as_bytes(), not_end.as_bytes());
        }
    }
    output
}

/// Remove every `begin`..`end` span, content included
///
/// The line break after the closing marker only goes with the block when the
/// opening marker owned its whole line too.
fn erase_blocks(mut content: Vec<u8>, begin: &[u8], end: &[u8]) -> Vec<u8> {
    let mut cursor = 0;
    while let Some((open, close)) = find_pair(&content, cursor, begin, end) {
        let stop = if open.whole_line {
            close.end
        } else {
            close.marker_end
        };
        content.drain(open.start..stop);
        cursor = open.start;
    }
    content
}

/// Remove every `begin`/`end` marker pair, keeping what lies between
fn unwrap_blocks(mut content: Vec<u8>, begin: &[u8], end: &[u8]) -> Vec<u8> {
    let mut cursor = 0;
    while let Some((open, close)) = find_pair(&content, cursor, begin, end) {
        // Closing marker first so the opening span stays valid.
        content.drain(close.start..close.end);
        content.drain(open.start..open.end);
        cursor = open.start;
    }
    content
}

/// Removable byte span of one marker occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MarkerSpan {
    start: usize,
    end: usize,
    /// End of the marker text itself
    marker_end: usize,
    /// Whether the span covers the marker's whole line
    whole_line: bool,
}

/// Leftmost `begin` at or after `from` and the first `end` following it
fn find_pair(
    content: &[u8],
    from: usize,
    begin: &[u8],
    end: &[u8],
) -> Option<(MarkerSpan, MarkerSpan)> {
    let open_at = from + memmem::find(&content[from..], begin)?;
    let search_from = open_at + begin.len();
    let Some(offset) = memmem::find(&content[search_from..], end) else {
        debug!(
            marker = %String::from_utf8_lossy(begin),
            "unterminated conditional block left in place"
        );
        return None;
    };
    let close_at = search_from + offset;

    // Markers sharing a line are never whole-line spans, so the two spans
    // cannot overlap.
    Some((
        marker_span(content, open_at, begin.len()),
        marker_span(content, close_at, end.len()),
    ))
}

/// Span to delete for a marker at `start`: its whole line when the marker is
/// the only non-blank text on it, otherwise just the marker
fn marker_span(content: &[u8], start: usize, len: usize) -> MarkerSpan {
    let marker_end = start + len;
    let line_start = memrchr(b'\n', &content[..start]).map_or(0, |i| i + 1);
    let line_end = memchr(b'\n', &content[marker_end..])
        .map_or(content.len(), |i| marker_end + i + 1);

    let blank = |s: &[u8]| s.iter().all(|b| matches!(b, b' ' | b'\t' | b'\r' | b'\n'));
    if blank(&content[line_start..start]) && blank(&content[marker_end..line_end]) {
        MarkerSpan {
            start: line_start,
            end: line_end,
            marker_end,
            whole_line: true,
        }
    } else {
        MarkerSpan {
            start,
            end: marker_end,
            marker_end,
            whole_line: false,
        }
    }
}
