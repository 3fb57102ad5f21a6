// Streaming reader for the daemon's brace-delimited status dump.
//
// The reader hands out one event per open marker (hosts and services only,
// so entry counts move before any field is read) and one per closed block.
// It never holds more than the block currently being filled.

mod lenient;
pub mod record;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{Result, StatusError};

pub use lenient::{parse_f64, parse_flag, parse_i64, parse_triple};
pub use record::{CheckRecord, CheckType, InfoRecord, ProgramRecord, Record};

/// Block kinds the statistics care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Info,
    Program,
    Host,
    Service,
}

impl BlockKind {
    /// Matches a stripped line against the open markers. The daemon's own
    /// `*status {` spellings are accepted alongside the short ones.
    pub fn from_open_marker(line: &str) -> Option<Self> {
        match line {
            "info {" => Some(BlockKind::Info),
            "program {" | "programstatus {" => Some(BlockKind::Program),
            "host {" | "hoststatus {" => Some(BlockKind::Host),
            "service {" | "servicestatus {" => Some(BlockKind::Service),
            _ => None,
        }
    }

    /// Host and service blocks are counted as entries when opened.
    pub fn is_entry(self) -> bool {
        matches!(self, BlockKind::Host | BlockKind::Service)
    }
}

/// One parsed block: its kind and raw `key=value` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub kind: BlockKind,
    pub fields: HashMap<String, String>,
}

impl Block {
    pub fn new(kind: BlockKind) -> Self {
        Block {
            kind,
            fields: HashMap::new(),
        }
    }

    /// Builder-style insert, mostly for tests.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    pub fn record(&self) -> Record {
        Record::from_block(self)
    }
}

/// What the reader saw.
#[derive(Debug, Clone, PartialEq)]
pub enum StatusEvent {
    /// A host or service block was opened.
    Opened(BlockKind),
    /// A block was closed; fields are final.
    Closed(Block),
}

/// Strips the characters the dump format treats as padding.
fn strip(line: &str) -> &str {
    line.trim_matches(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// Lazy iterator of [`StatusEvent`]s over any line source.
///
/// Malformed lines are skipped. A block still open at end of input is
/// dropped. After an I/O error the iterator yields that error once and ends.
pub struct StatusReader<R> {
    source: R,
    buf: Vec<u8>,
    current: Option<Block>,
    done: bool,
}

impl<R: BufRead> StatusReader<R> {
    pub fn new(source: R) -> Self {
        StatusReader {
            source,
            buf: Vec::new(),
            current: None,
            done: false,
        }
    }

    /// Handles one stripped line; returns an event when the line produced one.
    fn feed(&mut self, line: &str) -> Option<StatusEvent> {
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        if let Some(kind) = BlockKind::from_open_marker(line) {
            if let Some(abandoned) = self.current.replace(Block::new(kind)) {
                debug!(kind = ?abandoned.kind, "block reopened before close; dropping it");
            }
            return kind.is_entry().then_some(StatusEvent::Opened(kind));
        }

        if line == "}" {
            return self.current.take().map(StatusEvent::Closed);
        }

        let Some(block) = self.current.as_mut() else {
            trace!(line, "ignoring line outside a block");
            return None;
        };
        match line.split_once('=') {
            Some((key, value)) if !value.is_empty() => {
                block.fields.insert(key.to_string(), value.to_string());
            }
            _ => trace!(line, "ignoring malformed field line"),
        }
        None
    }
}

impl StatusReader<BufReader<File>> {
    /// Opens a status file. Failure here is fatal for the whole read.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| StatusError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(StatusReader::new(BufReader::new(file)))
    }
}

impl<R: BufRead> Iterator for StatusReader<R> {
    type Item = Result<StatusEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            self.buf.clear();
            match self.source.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    self.done = true;
                    if let Some(open) = self.current.take() {
                        debug!(kind = ?open.kind, "unterminated block at end of input; dropping it");
                    }
                }
                Ok(_) => {
                    let raw = String::from_utf8_lossy(&self.buf).into_owned();
                    if let Some(event) = self.feed(strip(&raw)) {
                        return Some(Ok(event));
                    }
                }
                Err(source) => {
                    self.done = true;
                    self.current = None;
                    return Some(Err(StatusError::Read { source }));
                }
            }
        }
        None
    }
}
