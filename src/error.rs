use thiserror::Error;

/// Structural and schema problems detected by the validator before any
/// block processor runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("duplicate node id '{0}'")]
    DuplicateNodeId(String),

    #[error("duplicate edge id '{0}'")]
    DuplicateEdgeId(String),

    #[error("node '{node_id}' has an unregistered block kind: '{kind}'")]
    UnknownKind { node_id: String, kind: String },

    #[error("edge '{edge_id}' references a node '{node_id}' that does not exist")]
    DanglingEdge { edge_id: String, node_id: String },

    #[error("edge '{edge_id}' references port '{port}', which node '{node_id}' does not declare")]
    UnknownPort {
        edge_id: String,
        node_id: String,
        port: String,
    },

    #[error("input port '{port}' on node '{node_id}' has more than one incoming connection")]
    DuplicateInputEdge { node_id: String, port: String },

    #[error("circuit contains a cycle through nodes: {}", .node_ids.join(" -> "))]
    CycleDetected { node_ids: Vec<String> },

    #[error("invalid setting '{setting}' on node '{node_id}': {message}")]
    InvalidSetting {
        node_id: String,
        setting: String,
        message: String,
    },
}

/// Node-local failures raised by block processors at execution time.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    #[error("cannot convert '{value}' to a number")]
    TypeConversion { value: String },

    #[error("variable '{0}' is not defined in the current context")]
    UnknownVariable(String),

    #[error("no active character is set in the current context")]
    NoActiveCharacter,

    #[error("block processor fault: {0}")]
    Internal(String),
}

/// A failure attributed to a single node during a run. Failures stay local
/// to the node's dependency subtree; unrelated branches keep evaluating.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("node '{node_id}' failed: {cause}")]
pub struct NodeError {
    pub node_id: String,
    pub cause: NodeErrorCause,
}

/// What made a node fail: its own processor, or an upstream dependency.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NodeErrorCause {
    #[error("{0}")]
    Block(#[from] BlockError),

    #[error("upstream node '{upstream}' failed")]
    Propagated { upstream: String },
}

/// Any error reported by a single `execute` call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RunError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Node(#[from] NodeError),

    #[error("requested sink '{node_id}.{port}' was not produced by the run")]
    UnknownSink { node_id: String, port: String },
}

/// Errors that can occur when converting a custom editor format into a
/// `CircuitDefinition`.
#[derive(Error, Debug, Clone)]
pub enum CircuitConversionError {
    #[error("failed to parse circuit JSON: {0}")]
    JsonParse(String),

    #[error("invalid circuit data: {0}")]
    Validation(String),
}
