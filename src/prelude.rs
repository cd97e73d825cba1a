//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types and traits. Import this module
//! to get access to the core functionality without having to import each
//! type individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use promptloom::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let circuit_json = std::fs::read_to_string("path/to/circuit.json")?;
//! let circuit = CircuitDefinition::from_json(&circuit_json)?;
//!
//! let context = StaticContext::new().with_character("Seraphina", 7);
//!
//! let executor = Executor::with_builtins();
//! let result = executor.execute(&circuit, &context, &SinkSelector::output_of("prompt"));
//! println!("{:?}", result);
//! # Ok(())
//! # }
//! ```

// Execution and validation
pub use crate::engine::Executor;
pub use crate::validator::{ValidationMode, ValidationReport, Validator};

// Circuit model
pub use crate::circuit::{CircuitDefinition, EdgeDefinition, IntoCircuit, NodeDefinition};

// Block schema and behaviors
pub use crate::blocks::{BlockBehavior, BlockOutputs, ResolvedInputs};
pub use crate::schema::{BlockKind, BlockRegistry, PortSpec, SettingKind, SettingSpec, Settings};

// Runtime context
pub use crate::context::{ActiveCharacter, ChatMessage, ChatRole, ContextProvider, StaticContext};

// Values and results
pub use crate::report::{ExecutionResult, RunEvent, RunLog, SinkOutput, SinkRef, SinkSelector};
pub use crate::value::{PortValue, ValueType};

// Error types
pub use crate::error::{
    BlockError, CircuitConversionError, NodeError, NodeErrorCause, RunError, ValidationError,
};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
