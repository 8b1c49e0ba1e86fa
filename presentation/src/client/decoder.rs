//! Incremental decoder for `data: <JSON>` event-stream records.
//!
//! Bytes arrive in arbitrary chunks; a record may be split anywhere,
//! including inside a multi-byte character. Complete lines are decoded as
//! they appear and the trailing partial line is kept for the next chunk.

use swarm_domain::StreamEvent;
use thiserror::Error;

const DATA_PREFIX: &str = "data: ";

/// A `data:` line that did not hold a valid event
#[derive(Error, Debug)]
#[error("malformed stream record {line:?}: {source}")]
pub struct StreamParseError {
    pub line: String,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a chunk and decode every line it completes.
    ///
    /// Blank lines, comments, and non-`data` fields are skipped.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<Result<StreamEvent, StreamParseError>> {
        self.buffer.extend_from_slice(chunk);

        let mut decoded = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            if let Some(result) = decode_line(&line) {
                decoded.push(result);
            }
        }
        decoded
    }

    /// Decode whatever is left once the stream has ended.
    pub fn finish(&mut self) -> Option<Result<StreamEvent, StreamParseError>> {
        let rest = std::mem::take(&mut self.buffer);
        decode_line(&rest)
    }

    /// Bytes held back waiting for a newline
    pub fn pending(&self) -> usize {
        self.buffer.len()
    }
}

fn decode_line(raw: &[u8]) -> Option<Result<StreamEvent, StreamParseError>> {
    let line = String::from_utf8_lossy(raw);
    let line = line.trim_end_matches(['\n', '\r']);
    let json = line.strip_prefix(DATA_PREFIX)?;
    if json.trim().is_empty() {
        return None;
    }
    Some(
        serde_json::from_str(json).map_err(|source| StreamParseError {
            line: line.to_string(),
            source,
        }),
    )
}
