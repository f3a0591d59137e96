use log::Level;
use std::fmt::{self, Debug, Display};

/// Level at which [`LogTrace`] writes events.
pub const TRACE_LEVEL: Level = Level::Info;

/// Diagnostic events emitted while building, assigning, encoding and decoding.
///
/// Events borrow from the data being processed, so a sink that discards them
/// costs nothing beyond the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent<'a, S> {
    FrequencyCounted { symbol: &'a S, frequency: usize },
    LeafQueued { symbol: &'a S, frequency: usize },
    NodesMerged { left: usize, right: usize, merged: usize },
    RootSelected { frequency: usize },
    CodeAssigned { symbol: &'a S, code: &'a str },
    SymbolEncoded { symbol: &'a S, code: &'a str },
    SymbolDecoded { symbol: &'a S, position: usize },
}

pub trait TraceSink<S> {
    fn record(&mut self, event: &TraceEvent<'_, S>);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl<S> TraceSink<S> for NoTrace {
    fn record(&mut self, _event: &TraceEvent<'_, S>) {}
}

/// Forwards every event to the `log` facade at [`TRACE_LEVEL`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LogTrace;

impl<S: Debug> TraceSink<S> for LogTrace {
    fn record(&mut self, event: &TraceEvent<'_, S>) {
        log::log!(TRACE_LEVEL, "{}", event);
    }
}

/// Keeps the rendered form of every event, in order.
#[derive(Debug, Default, Clone)]
pub struct RecordingTrace {
    pub lines: Vec<String>,
}

impl RecordingTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_starting_with(&self, prefix: &str) -> usize {
        self.lines
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

impl<S: Debug> TraceSink<S> for RecordingTrace {
    fn record(&mut self, event: &TraceEvent<'_, S>) {
        self.lines.push(event.to_string());
    }
}

impl<S, F> TraceSink<S> for F
where
    F: FnMut(&TraceEvent<'_, S>),
{
    fn record(&mut self, event: &TraceEvent<'_, S>) {
        self(event)
    }
}

impl<S: Debug> Display for TraceEvent<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FrequencyCounted { symbol, frequency } => {
                write!(f, "frequency of {:?}: {}", symbol, frequency)
            }
            Self::LeafQueued { symbol, frequency } => {
                write!(f, "queued leaf {:?} with frequency {}", symbol, frequency)
            }
            Self::NodesMerged {
                left,
                right,
                merged,
            } => write!(
                f,
                "merged nodes with frequencies {} (left) and {} (right) into {}",
                left, right, merged
            ),
            Self::RootSelected { frequency } => {
                write!(f, "root selected with frequency {}", frequency)
            }
            Self::CodeAssigned { symbol, code } => {
                write!(f, "assigned code {} to {:?}", code, symbol)
            }
            Self::SymbolEncoded { symbol, code } => {
                write!(f, "encoded {:?} as {}", symbol, code)
            }
            Self::SymbolDecoded { symbol, position } => {
                write!(f, "decoded {:?} at bit {}", symbol, position)
            }
        }
    }
}
