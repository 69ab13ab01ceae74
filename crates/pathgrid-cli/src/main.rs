//! Shortest-path demo CLI.
//!
//! Provides the `pathgrid` binary. The `run` subcommand performs one
//! generate -> solve -> report cycle: a random connected weighted graph is
//! built, shortest paths from a start node are computed, and the per-node
//! results are printed as a table or as pretty JSON.
//!
//! Uses the same `pathgrid_solve` generator/solver pipeline exposed to
//! library consumers, so CLI output matches programmatic results exactly.

use std::process;

use clap::{Parser, Subcommand};

use pathgrid_solve::{solve, GraphGenerator, SolveError, SolveReport};

/// Random weighted graph generator and shortest-path solver.
#[derive(Parser)]
#[command(name = "pathgrid", about = "Random weighted graph generator and shortest-path solver")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Generate a random graph, solve shortest paths, and print the report.
    Run {
        /// Number of nodes. Out-of-range values (outside 5..=20) trigger a
        /// random count, matching the generator's contract.
        #[arg(short, long)]
        count: Option<usize>,

        /// PRNG seed for a reproducible graph (default: OS entropy).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Start node label (default: chosen at random).
        #[arg(long)]
        start: Option<String>,

        /// Also print the shortest path to this node label.
        #[arg(long)]
        path_to: Option<String>,

        /// Emit the report as pretty-printed JSON.
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            count,
            seed,
            start,
            path_to,
            json,
        } => {
            let exit_code = run(count, seed, start, path_to, json);
            process::exit(exit_code);
        }
    }
}

/// Execute the run subcommand.
///
/// Returns exit code: 0 = success, 1 = internal error,
/// 2 = invalid node label in --start/--path-to.
fn run(
    count: Option<usize>,
    seed: Option<u64>,
    start_label: Option<String>,
    path_to: Option<String>,
    json: bool,
) -> i32 {
    let mut generator = match seed {
        Some(seed) => GraphGenerator::from_seed(seed),
        None => GraphGenerator::new(),
    };

    let mut graph = generator.generate(count);

    // Either the requested start label (validated) or a uniform random pick.
    let start = match &start_label {
        Some(label) => match graph.node_by_label(label) {
            Some(id) => id,
            None => {
                eprintln!("Error: unknown start node label '{}'", label);
                return 2;
            }
        },
        None => match generator.pick_start(&graph) {
            Some(id) => id,
            None => {
                eprintln!("Error: generated graph is empty");
                return 1;
            }
        },
    };

    if let Err(e) = solve(&mut graph, start) {
        eprintln!("Error: solve failed: {}", e);
        return 1;
    }

    let report = match SolveReport::from_graph(&graph, start) {
        Ok(report) => report,
        Err(e) => {
            eprintln!("Error: failed to build report: {}", e);
            return 1;
        }
    };

    // Attach the highlighted path if one was requested. An unknown or
    // unreachable label is a validation failure, not an internal error.
    let report = match path_to {
        Some(label) => match report.with_path_to(&graph, start, &label) {
            Ok(report) => report,
            Err(e @ (SolveError::UnknownLabel { .. } | SolveError::Unreachable { .. })) => {
                eprintln!("Error: invalid path request: {}", e);
                return 2;
            }
            Err(e) => {
                eprintln!("Error: path extraction failed: {}", e);
                return 1;
            }
        },
        None => report,
    };

    if json {
        // Machine-readable output, pretty-printed.
        let out = serde_json::to_string_pretty(&report).unwrap_or_else(|e| {
            format!("{{\"error\": \"failed to serialize report: {}\"}}", e)
        });
        println!("{}", out);
    } else {
        print!("{}", render_text(&report));
    }
    0
}

/// Renders the report as a human-readable table.
fn render_text(report: &SolveReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Start node: {}\n\n", report.start));
    out.push_str(&format!(
        "{:<6} {:<12} {:<12} neighbors\n",
        "node", "distance", "predecessor"
    ));

    for node in &report.nodes {
        let distance = match node.distance {
            Some(d) => d.to_string(),
            None => "unreachable".to_string(),
        };
        let predecessor = node.predecessor.as_deref().unwrap_or("-");
        let neighbors = node
            .neighbors
            .iter()
            .map(|(label, weight)| format!("{}:{}", label, weight))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "{:<6} {:<12} {:<12} {}\n",
            node.label, distance, predecessor, neighbors
        ));
    }

    if let Some(path) = &report.highlighted_path {
        // The stored path runs end -> start; print it start -> end.
        let display = path
            .iter()
            .rev()
            .cloned()
            .collect::<Vec<_>>()
            .join(" -> ");
        out.push_str(&format!("\nShortest path: {}\n", display));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use pathgrid_solve::{EdgeReport, NodeReport};

    fn sample_report() -> SolveReport {
        SolveReport {
            start: "a".to_string(),
            nodes: vec![
                NodeReport {
                    label: "a".to_string(),
                    distance: Some(0),
                    predecessor: None,
                    neighbors: [("b".to_string(), 3u32)].into_iter().collect(),
                },
                NodeReport {
                    label: "b".to_string(),
                    distance: Some(3),
                    predecessor: Some("a".to_string()),
                    neighbors: [("a".to_string(), 3u32)].into_iter().collect(),
                },
                NodeReport {
                    label: "c".to_string(),
                    distance: None,
                    predecessor: None,
                    neighbors: IndexMap::new(),
                },
            ],
            edges: vec![EdgeReport {
                a: "a".to_string(),
                b: "b".to_string(),
                weight: 3,
            }],
            highlighted_path: Some(vec!["b".to_string(), "a".to_string()]),
        }
    }

    #[test]
    fn render_text_shows_start_and_sentinels() {
        let text = render_text(&sample_report());
        assert!(text.starts_with("Start node: a\n"));
        assert!(text.contains("unreachable"));
        assert!(text.contains("b:3"));
    }

    #[test]
    fn render_text_prints_path_start_to_end() {
        let text = render_text(&sample_report());
        assert!(text.contains("Shortest path: a -> b"));
    }

    #[test]
    fn run_with_unknown_start_label_exits_2() {
        assert_eq!(run(Some(6), Some(1), Some("zzz".to_string()), None, false), 2);
    }

    #[test]
    fn run_with_unknown_path_label_exits_2() {
        assert_eq!(run(Some(6), Some(1), None, Some("zzz".to_string()), false), 2);
    }

    #[test]
    fn run_happy_path_exits_0() {
        assert_eq!(run(Some(6), Some(1), Some("a".to_string()), Some("b".to_string()), true), 0);
    }
}
