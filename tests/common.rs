//! Common test utilities for building circuits and context snapshots.
use promptloom::prelude::*;

/// Creates a simple, valid circuit for basic tests.
///
/// Layout: `greeting -> join <- who`, joined with no separator.
#[allow(dead_code)]
pub fn create_greeting_circuit() -> CircuitDefinition {
    CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("greeting", "textNode").with_setting("content", "Hello, "),
            NodeDefinition::new("who", "variableNode").with_setting("variable", "user"),
            NodeDefinition::new("join", "combinerNode").with_setting("inputs", 2),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "greeting", "output", "join", "input1"),
            EdgeDefinition::new("e2", "who", "output", "join", "input2"),
        ],
    }
}

/// Creates a two-node circuit whose combiners feed each other.
#[allow(dead_code)]
pub fn create_cyclic_circuit() -> CircuitDefinition {
    CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("a", "combinerNode").with_setting("inputs", 2),
            NodeDefinition::new("b", "combinerNode").with_setting("inputs", 2),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "a", "output", "b", "input1"),
            EdgeDefinition::new("e2", "b", "output", "a", "input1"),
        ],
    }
}

/// One text source fanning out to all three inputs of a combiner.
#[allow(dead_code)]
pub fn create_fanout_circuit() -> CircuitDefinition {
    CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("src", "textNode").with_setting("content", "x"),
            NodeDefinition::new("join", "combinerNode")
                .with_setting("inputs", 3)
                .with_setting("separator", "-"),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "src", "output", "join", "input1"),
            EdgeDefinition::new("e2", "src", "output", "join", "input2"),
            EdgeDefinition::new("e3", "src", "output", "join", "input3"),
        ],
    }
}

/// The context snapshot most tests run against: an active character, the
/// three-message history from the engine's reference cases, one user
/// variable and one placeholder.
#[allow(dead_code)]
pub fn create_sample_context() -> StaticContext {
    StaticContext::new()
        .with_character("Seraphina", 7)
        .with_message(ChatRole::User, "hi")
        .with_message(ChatRole::Ai, "hello")
        .with_message(ChatRole::User, "bye")
        .with_variable("user", "Alice")
        .with_placeholder("char", "Seraphina")
}
