use clap::Parser;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;
use storytree::data::StoryDocument;
use storytree::story::NodeData;

/// A CLI tool to generate random, acyclic story trees for the storytree tools
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_story.json")]
    output: String,

    /// Maximum depth of the tree (the root is depth 0)
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// The minimum number of branches at a non-final node
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of branches at a non-final node
    #[arg(long, default_value_t = 3)]
    max: usize,

    /// Probability that a new branch rejoins an existing node one level down
    #[arg(long, default_value_t = 0.15)]
    converge: f64,
}

const PLACES: &[&str] = &[
    "the harbour", "a ruined chapel", "the old mill", "the market square", "a fog-bound pier",
    "the lighthouse", "a collapsed mine", "the archive",
];

const ACTIONS: &[&str] = &[
    "Follow the stranger", "Hide", "Open the letter", "Ring the bell", "Turn back",
    "Ask for help", "Light a lantern", "Climb higher",
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min == 0 || cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) must be at least 1 and not greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }
    if !(0.0..=1.0).contains(&cli.converge) {
        eprintln!("Error: --converge ({}) must be between 0 and 1", cli.converge);
        std::process::exit(1);
    }

    println!(
        "Generating a story tree (depth {}, {} to {} branches per node)...",
        cli.depth, cli.min, cli.max
    );

    let document = generate_story(&mut rng, &cli);
    println!("-> Generated {} node(s).", document.nodes.len());

    let json_output = serde_json::to_string_pretty(&document)?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved story to '{}'", cli.output);

    Ok(())
}

/// Builds the tree level by level. Edges only ever point one level down, so
/// convergence never creates a cycle.
fn generate_story(rng: &mut ThreadRng, cli: &Cli) -> StoryDocument {
    let mut document = StoryDocument {
        root_id: Some("n0".to_string()),
        ..StoryDocument::default()
    };
    let mut next_id = 0usize;

    let root = make_node(rng, &mut next_id, None);
    let mut level = vec![root.id.clone()];
    document.nodes.insert(root.id.clone(), root);

    for depth in 0..cli.depth {
        let mut next_level: Vec<String> = Vec::new();
        for parent in &level {
            let branches = rng.random_range(cli.min..=cli.max);
            let mut children = Vec::with_capacity(branches);
            for _ in 0..branches {
                let rejoin = !next_level.is_empty() && rng.random_bool(cli.converge);
                let child_id = if rejoin {
                    next_level[rng.random_range(0..next_level.len())].clone()
                } else {
                    let action = ACTIONS[rng.random_range(0..ACTIONS.len())];
                    let node = make_node(rng, &mut next_id, Some(action));
                    let id = node.id.clone();
                    document.nodes.insert(id.clone(), node);
                    next_level.push(id.clone());
                    id
                };
                if !children.contains(&child_id) {
                    children.push(child_id);
                }
            }
            document.structure.insert(parent.clone(), children);
        }
        println!("-> Level {}: {} node(s).", depth + 1, next_level.len());
        level = next_level;
    }

    for leaf in level {
        document.structure.insert(leaf, Vec::new());
    }
    document
}

fn make_node(rng: &mut ThreadRng, next_id: &mut usize, decision: Option<&str>) -> NodeData {
    let id = format!("n{}", *next_id);
    *next_id += 1;
    let place = PLACES[rng.random_range(0..PLACES.len())];

    let node = NodeData::new(
        id.clone(),
        format!("Scene {}", id),
        format!("You arrive at {}.", place),
    )
    .with_custom_id(format!("S-{:03}", *next_id));

    match decision {
        Some(text) => node.with_decision(text),
        None => node,
    }
}
