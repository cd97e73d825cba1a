use clap::Parser;
use promptloom::prelude::*;
use std::fs;
use std::time::Instant;

/// A deterministic circuit execution CLI: validates a circuit document and
/// assembles its prompt output against a context snapshot
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the circuit JSON file (`{nodes, edges}`)
    circuit_path: String,

    /// Optional path to a context snapshot JSON file
    context_path: Option<String>,

    /// Sink to extract, as `node` or `node.port`. May be repeated;
    /// defaults to every terminal node's first output port.
    #[arg(short, long = "sink")]
    sinks: Vec<String>,

    /// Validate only, without executing
    #[arg(long)]
    check: bool,

    /// Stop validation at the first problem instead of collecting all
    #[arg(long)]
    fail_fast: bool,
}

fn main() {
    let cli = Cli::parse();
    let total_start = Instant::now();

    let circuit_json = fs::read_to_string(&cli.circuit_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read circuit file '{}': {}",
            &cli.circuit_path, e
        ))
    });
    let circuit = CircuitDefinition::from_json(&circuit_json)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse circuit: {}", e)));

    let context = match &cli.context_path {
        Some(path) => {
            let context_json = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read context file '{}': {}", path, e))
            });
            serde_json::from_str::<StaticContext>(&context_json)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse context: {}", e)))
        }
        None => {
            println!("No context file provided. Using an empty context.");
            StaticContext::new()
        }
    };

    let executor = Executor::with_builtins();

    // --- Validation ---
    let validate_start = Instant::now();
    let mode = if cli.fail_fast {
        ValidationMode::FailFast
    } else {
        ValidationMode::CollectAll
    };
    let report = Validator::new(executor.registry()).validate_with(&circuit, mode);
    let validate_duration = validate_start.elapsed();

    if !report.is_ok() {
        eprintln!("Circuit is invalid ({} issue(s)):", report.issues().len());
        for issue in report.issues() {
            eprintln!("  - {}", issue);
        }
        std::process::exit(1);
    }
    println!(
        "Circuit is valid: {} nodes, {} edges ({:?})",
        circuit.nodes.len(),
        circuit.edges.len(),
        validate_duration
    );
    if cli.check {
        return;
    }

    // --- Execution ---
    let sinks = if cli.sinks.is_empty() {
        let sinks = default_sinks(&circuit, &executor);
        if sinks.sinks().is_empty() {
            exit_with_error("No terminal nodes found; name a sink with --sink");
        }
        sinks
    } else {
        cli.sinks.iter().map(|s| parse_sink(s)).collect()
    };

    let exec_start = Instant::now();
    let result = executor.execute(&circuit, &context, &sinks);
    let exec_duration = exec_start.elapsed();

    println!("\nExecution finished (success: {})", result.success);
    for output in &result.outputs {
        println!("--- {} ---", output.sink);
        println!("{}", output.value);
    }
    if !result.errors.is_empty() {
        println!("\nErrors:");
        for error in &result.errors {
            println!("  - {}", error);
        }
    }
    println!("\nRun log:");
    for log in &result.logs {
        println!("  {}", log);
    }

    println!("\n--- Performance Summary ---");
    println!("Validation: {:?}", validate_duration);
    println!("Execution:  {:?}", exec_duration);
    println!("Total:      {:?}", total_start.elapsed());
}

/// `node` selects the conventional `output` port; `node.port` is explicit.
fn parse_sink(raw: &str) -> SinkRef {
    match raw.split_once('.') {
        Some((node_id, port)) => SinkRef::new(node_id, port),
        None => SinkRef::output(raw),
    }
}

/// Every node without an outgoing edge, on its first declared output port.
fn default_sinks(circuit: &CircuitDefinition, executor: &Executor) -> SinkSelector {
    circuit
        .nodes
        .iter()
        .filter(|node| !circuit.edges.iter().any(|e| e.source == node.id))
        .filter_map(|node| {
            let behavior = executor.registry().get(&node.kind)?;
            let port = behavior.output_ports(&node.settings).into_iter().next()?;
            Some(SinkRef::new(&node.id, port.name))
        })
        .collect()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
