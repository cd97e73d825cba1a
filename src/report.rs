use crate::blocks::BlockOutputs;
use crate::error::RunError;
use crate::value::PortValue;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one node/port whose value constitutes part of a circuit's final
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SinkRef {
    pub node_id: String,
    pub port: String,
}

impl SinkRef {
    pub fn new(node_id: impl Into<String>, port: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            port: port.into(),
        }
    }

    /// A sink on the conventional `output` port.
    pub fn output(node_id: impl Into<String>) -> Self {
        Self::new(node_id, "output")
    }
}

impl fmt::Display for SinkRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.node_id, self.port)
    }
}

/// The sink node/port pairs a caller wants extracted from a run.
#[derive(Debug, Clone, Default)]
pub struct SinkSelector {
    sinks: Vec<SinkRef>,
}

impl SinkSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the single `output` port of one node, the common case for
    /// circuits with one terminal block.
    pub fn output_of(node_id: impl Into<String>) -> Self {
        Self {
            sinks: vec![SinkRef::output(node_id)],
        }
    }

    pub fn select(mut self, sink: SinkRef) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn sinks(&self) -> &[SinkRef] {
        &self.sinks
    }
}

impl From<SinkRef> for SinkSelector {
    fn from(sink: SinkRef) -> Self {
        Self { sinks: vec![sink] }
    }
}

impl FromIterator<SinkRef> for SinkSelector {
    fn from_iter<I: IntoIterator<Item = SinkRef>>(iter: I) -> Self {
        Self {
            sinks: iter.into_iter().collect(),
        }
    }
}

/// Outputs of one successfully evaluated node; produced exactly once per
/// node per run.
#[derive(Debug, Clone)]
pub struct NodeResult {
    pub node_id: String,
    pub outputs: BlockOutputs,
}

/// One extracted sink value.
#[derive(Debug, Clone)]
pub struct SinkOutput {
    pub sink: SinkRef,
    pub value: PortValue,
}

/// What happened to one node, recorded in evaluation order. The log
/// doubles as the run's human-readable explanation.
#[derive(Debug, Clone, PartialEq)]
pub struct RunLog {
    pub node_id: String,
    pub event: RunEvent,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RunEvent {
    Evaluated,
    Failed(String),
    Skipped { upstream: String },
}

impl fmt::Display for RunLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.event {
            RunEvent::Evaluated => write!(f, "node '{}' evaluated", self.node_id),
            RunEvent::Failed(reason) => write!(f, "node '{}' failed: {}", self.node_id, reason),
            RunEvent::Skipped { upstream } => write!(
                f,
                "node '{}' skipped: upstream node '{}' failed",
                self.node_id, upstream
            ),
        }
    }
}

/// Aggregated outcome of one `execute` call.
///
/// `success` is false when validation failed or any requested sink did not
/// evaluate; `outputs` still carries every sink that was computed, so
/// callers can surface partial results.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub success: bool,
    pub outputs: Vec<SinkOutput>,
    pub logs: Vec<RunLog>,
    pub errors: Vec<RunError>,
}

impl ExecutionResult {
    pub fn output(&self, node_id: &str, port: &str) -> Option<&PortValue> {
        self.outputs
            .iter()
            .find(|o| o.sink.node_id == node_id && o.sink.port == port)
            .map(|o| &o.value)
    }
}
