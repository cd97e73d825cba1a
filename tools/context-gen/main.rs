use clap::Parser;
use promptloom::prelude::*;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs;

/// A CLI tool to generate sample context snapshots for the circuit executor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_context.json")]
    output: String,

    /// The number of chat messages to generate
    #[arg(long, default_value_t = 12)]
    messages: usize,

    /// The number of user variables to generate
    #[arg(long, default_value_t = 4)]
    variables: usize,
}

const CHARACTERS: &[(&str, i64)] = &[
    ("Seraphina", 7),
    ("Marcus", 12),
    ("Ishtar", 23),
    ("Wren", 31),
];

const USER_LINES: &[&str] = &[
    "Hey, how have you been?",
    "Tell me about the old city.",
    "What happened after the storm?",
    "Do you remember our first meeting?",
    "Where should we go next?",
];

const AI_LINES: &[&str] = &[
    "I've been wandering the archives again.",
    "The old city still hums at night, if you listen.",
    "After the storm, the river changed its course entirely.",
    "Of course. You were soaked through and still smiling.",
    "Somewhere the maps end. That's always where it gets interesting.",
];

const VARIABLE_NAMES: &[&str] = &[
    "mood",
    "scenario",
    "location",
    "weather",
    "time_of_day",
    "objective",
];

const VARIABLE_VALUES: &[&str] = &[
    "wistful",
    "a rain-slicked harbor town",
    "the northern archive",
    "low fog",
    "just before dawn",
    "find the cartographer",
];

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    println!(
        "Generating context snapshot ({} messages, {} variables)...",
        cli.messages, cli.variables
    );

    let mut context = StaticContext::new();

    let (name, id) = CHARACTERS[rng.random_range(0..CHARACTERS.len())];
    context = context.with_character(name, id);
    println!("-> Active character: {} (id {})", name, id);

    context = generate_history(&mut rng, context, cli.messages);
    context = generate_variables(&mut rng, context, cli.variables);

    // Placeholders a host would normally inject.
    context = context
        .with_placeholder("char", name)
        .with_placeholder("user", "Traveler");

    let json_output = serde_json::to_string_pretty(&context)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved context to '{}'",
        cli.output
    );

    Ok(())
}

/// Alternating user/ai turns with an occasional system interjection.
fn generate_history(rng: &mut ThreadRng, mut context: StaticContext, count: usize) -> StaticContext {
    for turn in 0..count {
        context = if turn % 2 == 0 {
            let line = USER_LINES[rng.random_range(0..USER_LINES.len())];
            context.with_message(ChatRole::User, line)
        } else if rng.random_range(0..8) == 0 {
            context.with_message(ChatRole::Other, "[The lights flicker briefly.]")
        } else {
            let line = AI_LINES[rng.random_range(0..AI_LINES.len())];
            context.with_message(ChatRole::Ai, line)
        };
    }
    println!("-> Generated {} chat message(s).", count);
    context
}

fn generate_variables(
    rng: &mut ThreadRng,
    mut context: StaticContext,
    count: usize,
) -> StaticContext {
    for name in VARIABLE_NAMES.iter().take(count) {
        let value = VARIABLE_VALUES[rng.random_range(0..VARIABLE_VALUES.len())];
        context = context.with_variable(*name, value);
    }
    println!(
        "-> Generated {} variable(s).",
        count.min(VARIABLE_NAMES.len())
    );
    context
}
