use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;
use std::fs;
use std::io::{self, Write};
use std::time::Instant;
use storytree::prelude::*;
use tracing_subscriber::EnvFilter;

// --- JSON Deserialization Structs (Input Format Specific) ---
// A flat node list where each node carries its own children. Only used here
// for conversion into a `StoryDocument`.

#[derive(Deserialize)]
struct RawStory {
    #[serde(default, alias = "rootId")]
    root_id: Option<String>,
    nodes: Vec<RawNode>,
}

#[derive(Deserialize)]
struct RawNode {
    id: String,
    title: String,
    #[serde(default)]
    content: String,
    #[serde(default, alias = "customId")]
    custom_id: Option<String>,
    #[serde(default, alias = "decisionText")]
    decision_text: Option<String>,
    #[serde(default)]
    children: Vec<String>,
    #[serde(default)]
    metadata: serde_json::Map<String, serde_json::Value>,
}

// --- Converter Implementation ---

impl IntoStory for RawStory {
    fn into_story(self) -> std::result::Result<StoryDocument, StoryConversionError> {
        let mut document = StoryDocument {
            root_id: self.root_id,
            ..StoryDocument::default()
        };

        for raw_node in self.nodes {
            if document.nodes.contains_key(&raw_node.id) {
                return Err(StoryConversionError::ValidationError(format!(
                    "duplicate node id '{}'",
                    raw_node.id
                )));
            }
            document
                .structure
                .insert(raw_node.id.clone(), raw_node.children);
            document.nodes.insert(
                raw_node.id.clone(),
                NodeData {
                    id: raw_node.id,
                    title: raw_node.title,
                    content: raw_node.content,
                    custom_id: raw_node.custom_id,
                    decision_text: raw_node.decision_text,
                    metadata: raw_node.metadata,
                },
            );
        }

        Ok(document)
    }
}

/// The on-disk layout of the story file.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum InputFormat {
    /// `{nodes: {id: node}, structure: {id: [children]}, rootId?}`
    Document,
    /// `{nodes: [{id, title, children, ...}], rootId?}`
    List,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DirectionCli {
    TopToBottom,
    LeftToRight,
}

/// Path enumeration, narrative serialization and flow-graph export for story trees
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the story JSON file
    story_path: String,

    /// Layout of the story file
    #[arg(short, long, value_enum, default_value = "document")]
    format: InputFormat,

    /// Explicit root node id (skips root resolution)
    #[arg(short, long)]
    root: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the resolved root node id
    Root,
    /// Enumerate every root-to-leaf path
    Paths {
        /// Print the paths as JSON instead of narrative text
        #[arg(long)]
        json: bool,
    },
    /// Serialize a hand-picked path, e.g. `--path a,b,c`
    Narrative {
        #[arg(long, value_delimiter = ',', required = true)]
        path: Vec<String>,
        /// Skip the parent→child check between consecutive ids
        #[arg(long)]
        no_validate: bool,
    },
    /// Export the flow graph (optionally with layered positions) as JSON
    Flow {
        #[arg(long)]
        layout: bool,
        #[arg(long, value_enum, default_value = "top-to-bottom")]
        direction: DirectionCli,
    },
    /// Walk the tree interactively, choosing a branch at each step
    Walk,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("storytree=info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let load_start = Instant::now();
    let tree = load_tree(&cli.story_path, cli.format, cli.root.clone());
    tracing::info!(
        path = %cli.story_path,
        nodes = tree.nodes().len(),
        elapsed = ?load_start.elapsed(),
        "loaded story"
    );

    match cli.command {
        Command::Root => run_root(&tree),
        Command::Paths { json } => run_paths(&tree, json),
        Command::Narrative { path, no_validate } => run_narrative(&tree, &path, !no_validate),
        Command::Flow { layout, direction } => run_flow(&tree, layout, direction),
        Command::Walk => run_interactive(&tree),
    }
}

fn load_tree(story_path: &str, format: InputFormat, root: Option<String>) -> StoryTree {
    let json = fs::read_to_string(story_path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read story file '{}': {}", story_path, e))
    });

    let mut document = match format {
        InputFormat::Document => StoryDocument::from_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load story: {}", e))),
        InputFormat::List => serde_json::from_str::<RawStory>(&json)
            .map_err(|e| e.to_string())
            .and_then(|raw| raw.into_story().map_err(|e| e.to_string()))
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to convert story: {}", e))),
    };

    if root.is_some() {
        document.root_id = root;
    }

    #[cfg(feature = "debug-tools")]
    write_debug_file(
        "tmp/story_document.json",
        &serde_json::to_string_pretty(&document).unwrap_or_default(),
    );

    document.into_tree()
}

fn run_root(tree: &StoryTree) {
    let root = tree
        .root()
        .unwrap_or_else(|e| exit_with_error(&format!("Root resolution failed: {}", e)));
    println!("{}", root);
}

fn run_paths(tree: &StoryTree, json: bool) {
    let start = Instant::now();
    let paths = tree
        .paths()
        .unwrap_or_else(|e| exit_with_error(&format!("Traversal failed: {}", e)));
    tracing::info!(paths = paths.len(), elapsed = ?start.elapsed(), "traversal finished");

    if json {
        let output = serde_json::to_string_pretty(&paths)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize paths: {}", e)));
        println!("{}", output);
        return;
    }

    for (index, path) in paths.iter().enumerate() {
        println!("--- Path {} ({}) ---", index + 1, path.node_ids.join(" → "));
        println!("{}\n", NarrativeFormatter::concatenate_path(path));
    }
}

fn run_narrative(tree: &StoryTree, node_ids: &[String], validate: bool) {
    let path = tree
        .path_from(node_ids, validate)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build path: {}", e)));
    println!("{}", NarrativeFormatter::concatenate_path(&path));
}

fn run_flow(tree: &StoryTree, layout: bool, direction: DirectionCli) {
    let graph = tree
        .flow_graph()
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to build flow graph: {}", e)));

    let serialized = if layout {
        let options = LayoutOptions {
            direction: match direction {
                DirectionCli::TopToBottom => LayoutDirection::TopToBottom,
                DirectionCli::LeftToRight => LayoutDirection::LeftToRight,
            },
            ..LayoutOptions::default()
        };
        let positions = LayeredLayout.layout(&graph, &options);
        serde_json::to_string_pretty(&serde_json::json!({
            "graph": graph,
            "positions": positions,
        }))
    } else {
        serde_json::to_string_pretty(&graph)
    };

    let output = serialized
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize flow graph: {}", e)));
    println!("{}", output);
}

/// Lets the reader pick a branch at every fork, then prints the chosen path.
fn run_interactive(tree: &StoryTree) {
    println!("--- storytree Interactive Walk ---");

    let mut current = tree
        .root()
        .unwrap_or_else(|e| exit_with_error(&format!("Root resolution failed: {}", e)));
    let mut chosen = vec![current.clone()];

    loop {
        let children = tree
            .structure()
            .get(&current)
            .cloned()
            .unwrap_or_default();
        if children.is_empty() {
            break;
        }

        println!("\nAt '{}'. Choose a branch:", current);
        for (i, child_id) in children.iter().enumerate() {
            let label = tree
                .nodes()
                .get(child_id)
                .map(|node| {
                    node.decision()
                        .map(str::to_string)
                        .unwrap_or_else(|| node.title.clone())
                })
                .unwrap_or_else(|| child_id.clone());
            println!("  {}: {}", i + 1, label);
        }

        let choice = prompt_for_input("Enter choice", Some("1"));
        match choice.trim().parse::<usize>() {
            Ok(n) if (1..=children.len()).contains(&n) => {
                current = children[n - 1].clone();
                chosen.push(current.clone());
            }
            _ => println!("Invalid choice. Please enter 1 to {}.", children.len()),
        }
    }

    run_narrative(tree, &chosen, true);
}

/// A helper function to prompt the user and read a line of input.
fn prompt_for_input(prompt_text: &str, default: Option<&str>) -> String {
    let mut line = String::new();
    let default_prompt = default.map_or(String::new(), |d| format!(" [default: {}]", d));

    print!("> {}{}: ", prompt_text, default_prompt);
    if let Err(e) = io::stdout().flush() {
        exit_with_error(&format!("Failed to flush stdout: {}", e));
    }

    match io::stdin().read_line(&mut line) {
        Ok(0) => exit_with_error("Input closed before a choice was made"),
        Ok(_) => {}
        Err(e) => exit_with_error(&format!("Failed to read line: {}", e)),
    }
    let trimmed = line.trim().to_string();

    if trimmed.is_empty() {
        default.unwrap_or("").to_string()
    } else {
        trimmed
    }
}

#[cfg(feature = "debug-tools")]
fn write_debug_file(path: &str, content: &str) {
    if let Some(parent) = std::path::Path::new(path).parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            tracing::warn!("Failed to create debug directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, content) {
        tracing::warn!("Failed to write debug file '{}': {}", path, e);
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
