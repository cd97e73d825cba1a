//! # Promptloom - Circuit Execution Engine for Prompt Assembly
//!
//! **Promptloom** evaluates visual-workflow "circuits" — directed acyclic
//! graphs of typed blocks authored in an external editor — to assemble AI
//! chat prompts deterministically at chat time. Blocks cover text
//! literals, active-character metadata, chat-history slices, named
//! variables, and string combiners; the engine wires their ports together,
//! orders them topologically, and folds the graph into prompt text.
//!
//! ## Core Workflow
//!
//! The engine is format-agnostic: it operates on a canonical
//! [`CircuitDefinition`](circuit::CircuitDefinition) (`{nodes, edges}`).
//! The primary workflow is:
//!
//! 1. **Load a circuit**: deserialize the plain JSON document your editor
//!    persists, or implement [`IntoCircuit`](circuit::IntoCircuit) for a
//!    custom format.
//! 2. **Build a context**: a fresh, read-only snapshot of the chat turn —
//!    active character, history, variable table — behind the
//!    [`ContextProvider`](context::ContextProvider) trait.
//! 3. **Validate**: [`Validator`](validator::Validator) checks ports,
//!    single-writer inputs, acyclicity, and setting schemas; usable
//!    standalone for live editor feedback.
//! 4. **Execute**: [`Executor`](engine::Executor) runs the circuit and
//!    extracts the sink outputs you name, together with per-node logs and
//!    isolated errors.
//!
//! ## Quick Start
//!
//! ```rust
//! use promptloom::prelude::*;
//!
//! // greeting -> combiner <- variable ("who")
//! let circuit = CircuitDefinition {
//!     nodes: vec![
//!         NodeDefinition::new("greeting", "textNode").with_setting("content", "Hello, "),
//!         NodeDefinition::new("who", "variableNode").with_setting("variable", "user"),
//!         NodeDefinition::new("join", "combinerNode").with_setting("inputs", 2),
//!     ],
//!     edges: vec![
//!         EdgeDefinition::new("e1", "greeting", "output", "join", "input1"),
//!         EdgeDefinition::new("e2", "who", "output", "join", "input2"),
//!     ],
//! };
//!
//! let context = StaticContext::new().with_variable("user", "Alice");
//!
//! let executor = Executor::with_builtins();
//! let result = executor.execute(&circuit, &context, &SinkSelector::output_of("join"));
//!
//! assert!(result.success);
//! let prompt = result.output("join", "output").map(|v| v.to_string());
//! assert_eq!(prompt.as_deref(), Some("Hello, Alice"));
//! ```
//!
//! Execution is a pure function of `(circuit, context)`: identical inputs
//! always yield identical outputs, nothing persists across runs, and the
//! engine never mutates the circuit. Node-local failures (a bad numeric
//! literal, an undefined variable) are isolated to their dependency
//! subtree; the rest of the circuit still evaluates and the caller
//! receives partial outputs alongside a structured error list.

pub mod blocks;
pub mod circuit;
pub mod context;
pub mod engine;
pub mod error;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validator;
pub mod value;
