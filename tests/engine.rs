//! Execution engine tests: per-kind semantics, ordering, fan-out, and
//! failure isolation.
mod common;
use common::*;
use promptloom::prelude::*;

fn run(circuit: &CircuitDefinition, context: &StaticContext, sinks: &SinkSelector) -> ExecutionResult {
    Executor::with_builtins().execute(circuit, context, sinks)
}

fn run_single(circuit: &CircuitDefinition, context: &StaticContext, node_id: &str) -> ExecutionResult {
    run(circuit, context, &SinkSelector::output_of(node_id))
}

#[test]
fn test_combiner_joins_inputs_in_port_order() {
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("cat", "textNode").with_setting("content", "cat"),
            NodeDefinition::new("dog", "textNode").with_setting("content", "dog"),
            NodeDefinition::new("join", "combinerNode")
                .with_setting("inputs", 2)
                .with_setting("separator", "-"),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "cat", "output", "join", "input1"),
            EdgeDefinition::new("e2", "dog", "output", "join", "input2"),
        ],
    };

    let result = run_single(&circuit, &StaticContext::new(), "join");
    assert!(result.success);
    assert_eq!(
        result.output("join", "output"),
        Some(&PortValue::from("cat-dog"))
    );
}

#[test]
fn test_unconnected_combiner_input_contributes_empty_string() {
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("cat", "textNode").with_setting("content", "cat"),
            NodeDefinition::new("dog", "textNode").with_setting("content", "dog"),
            NodeDefinition::new("join", "combinerNode")
                .with_setting("inputs", 3)
                .with_setting("separator", "-"),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "cat", "output", "join", "input1"),
            EdgeDefinition::new("e2", "dog", "output", "join", "input3"),
        ],
    };

    let result = run_single(&circuit, &StaticContext::new(), "join");
    assert!(result.success);
    assert_eq!(
        result.output("join", "output"),
        Some(&PortValue::from("cat--dog"))
    );
}

#[test]
fn test_text_numeric_coercion() {
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("n", "textNode")
                .with_setting("content", "42")
                .with_setting("outputType", "numeric"),
        ],
        edges: vec![],
    };

    let result = run_single(&circuit, &StaticContext::new(), "n");
    assert!(result.success);
    assert_eq!(result.output("n", "output"), Some(&PortValue::Number(42.0)));
}

#[test]
fn test_text_numeric_conversion_failure() {
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("n", "textNode")
                .with_setting("content", "forty")
                .with_setting("outputType", "numeric"),
        ],
        edges: vec![],
    };

    let result = run_single(&circuit, &StaticContext::new(), "n");
    assert!(!result.success);
    assert!(result.outputs.is_empty());
    assert!(result.errors.iter().any(|error| matches!(
        error,
        RunError::Node(NodeError {
            node_id,
            cause: NodeErrorCause::Block(BlockError::TypeConversion { .. }),
        }) if node_id == "n"
    )));
}

#[test]
fn test_chat_history_filtering_and_count() {
    let context = create_sample_context(); // user:"hi", ai:"hello", user:"bye"

    let history_node = |count: i64, message_type: &str| CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("h", "chatHistoryNode")
                .with_setting("messageType", message_type)
                .with_setting("messageCount", count),
        ],
        edges: vec![],
    };

    // Most recent single user message.
    let result = run_single(&history_node(1, "user"), &context, "h");
    assert_eq!(result.output("h", "output"), Some(&PortValue::from("bye")));

    // Count 0 means unbounded, chronological order.
    let result = run_single(&history_node(0, "all"), &context, "h");
    assert_eq!(
        result.output("h", "output"),
        Some(&PortValue::from("hi\nhello\nbye"))
    );

    let result = run_single(&history_node(0, "ai"), &context, "h");
    assert_eq!(result.output("h", "output"), Some(&PortValue::from("hello")));

    // No matching role yields empty text, not an error.
    let result = run_single(&history_node(0, "other"), &context, "h");
    assert!(result.success);
    assert_eq!(result.output("h", "output"), Some(&PortValue::from("")));
}

#[test]
fn test_variable_resolution() {
    let circuit = CircuitDefinition {
        nodes: vec![NodeDefinition::new("v", "variableNode").with_setting("variable", "user")],
        edges: vec![],
    };

    let result = run_single(&circuit, &create_sample_context(), "v");
    assert!(result.success);
    assert_eq!(result.output("v", "output"), Some(&PortValue::from("Alice")));

    // Placeholders resolve through the same table.
    let mut placeholder_circuit = circuit.clone();
    placeholder_circuit.nodes[0] =
        NodeDefinition::new("v", "variableNode").with_setting("variable", "char");
    let result = run_single(&placeholder_circuit, &create_sample_context(), "v");
    assert_eq!(
        result.output("v", "output"),
        Some(&PortValue::from("Seraphina"))
    );
}

#[test]
fn test_unknown_variable_fails_node() {
    let circuit = CircuitDefinition {
        nodes: vec![NodeDefinition::new("v", "variableNode").with_setting("variable", "missing")],
        edges: vec![],
    };

    let result = run_single(&circuit, &StaticContext::new(), "v");
    assert!(!result.success);
    assert!(result.errors.iter().any(|error| matches!(
        error,
        RunError::Node(NodeError {
            cause: NodeErrorCause::Block(BlockError::UnknownVariable(name)),
            ..
        }) if name == "missing"
    )));
}

#[test]
fn test_current_character_outputs() {
    let circuit = CircuitDefinition {
        nodes: vec![NodeDefinition::new("char", "currentCharacterNode")],
        edges: vec![],
    };
    let sinks = SinkSelector::new()
        .select(SinkRef::new("char", "name"))
        .select(SinkRef::new("char", "character_id"));

    let result = run(&circuit, &create_sample_context(), &sinks);
    assert!(result.success);
    assert_eq!(
        result.output("char", "name"),
        Some(&PortValue::from("Seraphina"))
    );
    assert_eq!(
        result.output("char", "character_id"),
        Some(&PortValue::Number(7.0))
    );
}

#[test]
fn test_no_active_character_fails_node() {
    let circuit = CircuitDefinition {
        nodes: vec![NodeDefinition::new("char", "currentCharacterNode")],
        edges: vec![],
    };

    let result = run(
        &circuit,
        &StaticContext::new(),
        &SinkSelector::from(SinkRef::new("char", "name")),
    );
    assert!(!result.success);
    assert!(result.errors.iter().any(|error| matches!(
        error,
        RunError::Node(NodeError {
            cause: NodeErrorCause::Block(BlockError::NoActiveCharacter),
            ..
        })
    )));
}

#[test]
fn test_fanout_computes_source_exactly_once() {
    let result = run_single(&create_fanout_circuit(), &StaticContext::new(), "join");
    assert!(result.success);
    assert_eq!(result.output("join", "output"), Some(&PortValue::from("x-x-x")));

    let src_evaluations = result
        .logs
        .iter()
        .filter(|log| log.node_id == "src" && log.event == RunEvent::Evaluated)
        .count();
    assert_eq!(src_evaluations, 1);
}

#[test]
fn test_failure_is_isolated_to_dependency_subtree() {
    // Two disconnected subgraphs; the bad one carries an invalid numeric
    // literal feeding a combiner, the healthy one is untouched.
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("bad", "textNode")
                .with_setting("content", "forty")
                .with_setting("outputType", "numeric"),
            NodeDefinition::new("bad_join", "combinerNode").with_setting("inputs", 2),
            NodeDefinition::new("ok", "textNode").with_setting("content", "still here"),
        ],
        edges: vec![EdgeDefinition::new(
            "e1", "bad", "output", "bad_join", "input1",
        )],
    };
    let sinks = SinkSelector::new()
        .select(SinkRef::output("bad_join"))
        .select(SinkRef::output("ok"));

    let result = run(&circuit, &StaticContext::new(), &sinks);
    assert!(!result.success);
    assert_eq!(
        result.output("ok", "output"),
        Some(&PortValue::from("still here"))
    );
    assert_eq!(result.output("bad_join", "output"), None);

    // The combiner was skipped because of its upstream, not evaluated.
    assert!(result.logs.iter().any(|log| log.node_id == "bad_join"
        && matches!(&log.event, RunEvent::Skipped { upstream } if upstream == "bad")));
    assert!(result.errors.iter().any(|error| matches!(
        error,
        RunError::Node(NodeError {
            node_id,
            cause: NodeErrorCause::Propagated { upstream },
        }) if node_id == "bad_join" && upstream == "bad"
    )));
}

#[test]
fn test_numbers_stringify_plainly_through_combiner() {
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("label", "textNode").with_setting("content", "id="),
            NodeDefinition::new("n", "textNode")
                .with_setting("content", "42")
                .with_setting("outputType", "numeric"),
            NodeDefinition::new("join", "combinerNode").with_setting("inputs", 2),
        ],
        edges: vec![
            EdgeDefinition::new("e1", "label", "output", "join", "input1"),
            EdgeDefinition::new("e2", "n", "output", "join", "input2"),
        ],
    };

    let result = run_single(&circuit, &StaticContext::new(), "join");
    assert_eq!(result.output("join", "output"), Some(&PortValue::from("id=42")));
}

#[test]
fn test_execution_is_deterministic() {
    let circuit = create_greeting_circuit();
    let context = create_sample_context();
    let executor = Executor::with_builtins();
    let sinks = SinkSelector::output_of("join");

    let first = executor.execute(&circuit, &context, &sinks);
    let second = executor.execute(&circuit, &context, &sinks);

    assert_eq!(first.success, second.success);
    assert_eq!(first.output("join", "output"), second.output("join", "output"));
    assert_eq!(first.logs, second.logs);
    assert_eq!(first.errors, second.errors);
    assert_eq!(
        first.output("join", "output"),
        Some(&PortValue::from("Hello, Alice"))
    );
}

#[test]
fn test_unknown_sink_is_reported() {
    let result = run_single(&create_greeting_circuit(), &create_sample_context(), "ghost");
    assert!(!result.success);
    assert!(result.errors.iter().any(|error| matches!(
        error,
        RunError::UnknownSink { node_id, .. } if node_id == "ghost"
    )));
}

#[test]
fn test_nodes_evaluate_in_ascending_id_order_within_ties() {
    // Three independent sources share in-degree zero; the log must list
    // them in ascending id order.
    let circuit = CircuitDefinition {
        nodes: vec![
            NodeDefinition::new("c", "textNode").with_setting("content", "3"),
            NodeDefinition::new("a", "textNode").with_setting("content", "1"),
            NodeDefinition::new("b", "textNode").with_setting("content", "2"),
        ],
        edges: vec![],
    };

    let result = run_single(&circuit, &StaticContext::new(), "a");
    let order: Vec<&str> = result.logs.iter().map(|log| log.node_id.as_str()).collect();
    assert_eq!(order, vec!["a", "b", "c"]);
}
