//! Binary entry point for the ladder CLI.
#![forbid(unsafe_code)]

mod config;
mod ui;

use std::error::Error;
use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use ladder::{
    build_graph_with, is_unit_edit, levenshtein, loader, store, BuildOptions, LadderError, Word,
};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use config::{CliConfig, ConfigError};
use ui::{format_duration, Theme, Ui};

#[derive(Parser, Debug)]
#[command(
    name = "ladder",
    version,
    about = "Build word-ladder graphs and find the shortest ladder between two words",
    disable_help_subcommand = true
)]
struct Cli {
    #[arg(
        long,
        global = true,
        env = "LADDER_CONFIG",
        value_name = "PATH",
        help = "Path to the CLI config file"
    )]
    config: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format for structured responses"
    )]
    format: OutputFormat,

    #[arg(
        long,
        global = true,
        value_enum,
        default_value_t = ThemeArg::Auto,
        help = "Color theme for text output"
    )]
    theme: ThemeArg,

    #[arg(long, short, global = true, help = "Print only the essential result")]
    quiet: bool,

    #[arg(
        short,
        long,
        global = true,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug)"
    )]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct BuildCmd {
    #[arg(long, value_name = "FILE", help = "Word list, one word per line")]
    words: Option<PathBuf>,

    #[arg(long, value_name = "FILE", help = "Where to write the graph JSON")]
    out: Option<PathBuf>,

    #[arg(long, help = "Build all length groups on the current thread")]
    sequential: bool,
}

#[derive(Args, Debug)]
struct SearchCmd {
    #[arg(long, value_name = "FILE", help = "Graph JSON produced by `build`")]
    graph: Option<PathBuf>,

    #[arg(value_name = "START")]
    start: String,

    #[arg(value_name = "END")]
    end: String,
}

#[derive(Args, Debug)]
struct VerifyCmd {
    #[arg(long, value_name = "FILE", help = "Graph JSON to check")]
    graph: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    #[command(about = "Build the ladder graph of a word list")]
    Build(BuildCmd),

    #[command(about = "Find the shortest ladder between two words")]
    Search(SearchCmd),

    #[command(about = "Check a graph file against the graph invariants")]
    Verify(VerifyCmd),

    #[command(about = "Print the edit distance between two words")]
    Distance {
        #[arg(value_name = "A")]
        a: String,

        #[arg(value_name = "B")]
        b: String,
    },
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
enum ThemeArg {
    Auto,
    Light,
    Dark,
    Plain,
}

impl From<ThemeArg> for Theme {
    fn from(theme: ThemeArg) -> Self {
        match theme {
            ThemeArg::Auto => Theme::Auto,
            ThemeArg::Light => Theme::Light,
            ThemeArg::Dark => Theme::Dark,
            ThemeArg::Plain => Theme::Plain,
        }
    }
}

#[derive(Debug, Serialize)]
struct BuildReport {
    words_path: String,
    graph_path: String,
    nodes: usize,
    edges: usize,
    partitions: usize,
    parallel: bool,
    duration_ms: f64,
}

#[derive(Debug, Serialize)]
struct SearchReport {
    start: String,
    end: String,
    hops: usize,
    path: Vec<String>,
}

#[derive(Debug, Serialize)]
struct VerifyReport {
    graph_path: String,
    success: bool,
    nodes: usize,
    edges: usize,
    partitions: usize,
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct DistanceReport {
    a: String,
    b: String,
    distance: usize,
    unit_edit: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = CliConfig::load(cli.config.clone())?;
    debug!(path = ?config.path(), "cli.config.loaded");
    let ui = Ui::new(cli.theme.into(), cli.quiet || cli.format == OutputFormat::Json);

    match cli.command {
        Command::Build(cmd) => {
            let report = run_build(&cmd, &config, &ui)?;
            emit(cli.format, &report, || print_build_text(&ui, &report))?;
        }
        Command::Search(cmd) => {
            let report = run_search(&cmd, &config, &ui)?;
            emit(cli.format, &report, || print_search_text(&ui, &report))?;
        }
        Command::Verify(cmd) => {
            let report = run_verify(&cmd, &config, &ui)?;
            emit(cli.format, &report, || print_verify_text(&ui, &report))?;
            if !report.success {
                std::process::exit(2);
            }
        }
        Command::Distance { a, b } => {
            let report = DistanceReport {
                distance: levenshtein(&a, &b),
                unit_edit: is_unit_edit(&Word::new(a.as_str()), &Word::new(b.as_str())),
                a,
                b,
            };
            emit(cli.format, &report, || {
                ui.section(
                    "Distance",
                    [
                        ("words", format!("{} / {}", report.a, report.b)),
                        ("distance", report.distance.to_string()),
                        ("neighbors", report.unit_edit.to_string()),
                    ],
                )
            })?;
        }
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "ladder=warn",
        1 => "ladder=info",
        _ => "ladder=debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn run_build(cmd: &BuildCmd, config: &CliConfig, ui: &Ui) -> Result<BuildReport, Box<dyn Error>> {
    let words_path = resolve_path(cmd.words.as_ref(), config.words_path(), "words", "words")?;
    let graph_path = resolve_path(cmd.out.as_ref(), config.graph_path(), "graph", "out")?;
    let opts = if cmd.sequential || !config.parallel_build() {
        BuildOptions::sequential()
    } else {
        BuildOptions::default()
    };

    let task = ui.task(format!("Loading {}", words_path.display()));
    let words = loader::load_words(&words_path)?;
    task.finish();

    let task = ui.task(format!("Building graph of {} words", words.len()));
    let (graph, summary) = build_graph_with(&words, &opts);
    let elapsed = task.finish();

    let task = ui.task(format!("Writing {}", graph_path.display()));
    store::save_graph(&graph_path, &graph)?;
    task.finish();

    Ok(BuildReport {
        words_path: words_path.display().to_string(),
        graph_path: graph_path.display().to_string(),
        nodes: summary.nodes,
        edges: summary.edges,
        partitions: summary.partitions,
        parallel: opts.parallel,
        duration_ms: elapsed.as_secs_f64() * 1_000.0,
    })
}

fn run_search(cmd: &SearchCmd, config: &CliConfig, ui: &Ui) -> Result<SearchReport, Box<dyn Error>> {
    let graph_path = resolve_path(cmd.graph.as_ref(), config.graph_path(), "graph", "graph")?;
    if cmd.start.chars().count() != cmd.end.chars().count() {
        ui.warn(&format!(
            "'{}' and '{}' differ in length; ladders only substitute letters",
            cmd.start, cmd.end
        ));
    }

    let task = ui.task(format!("Loading {}", graph_path.display()));
    let graph = store::load_graph(&graph_path)?;
    task.finish();

    let path = graph.path(&cmd.start, &cmd.end)?;
    Ok(SearchReport {
        start: cmd.start.clone(),
        end: cmd.end.clone(),
        hops: path.len().saturating_sub(1),
        path,
    })
}

fn run_verify(cmd: &VerifyCmd, config: &CliConfig, ui: &Ui) -> Result<VerifyReport, Box<dyn Error>> {
    let graph_path = resolve_path(cmd.graph.as_ref(), config.graph_path(), "graph", "graph")?;
    let task = ui.task(format!("Verifying {}", graph_path.display()));
    let outcome = store::load_graph(&graph_path);
    task.finish();

    let graph_path = graph_path.display().to_string();
    match outcome {
        Ok(graph) => Ok(VerifyReport {
            graph_path,
            success: true,
            nodes: graph.len(),
            edges: graph.edge_count(),
            partitions: graph.partition_count(),
            error: None,
        }),
        Err(err @ (LadderError::MalformedGraph(_) | LadderError::Serialization(_))) => {
            Ok(VerifyReport {
                graph_path,
                success: false,
                nodes: 0,
                edges: 0,
                partitions: 0,
                error: Some(err.to_string()),
            })
        }
        Err(err) => Err(err.into()),
    }
}

fn resolve_path(
    flag: Option<&PathBuf>,
    configured: Option<&PathBuf>,
    what: &'static str,
    flag_name: &'static str,
) -> Result<PathBuf, ConfigError> {
    flag.or(configured)
        .cloned()
        .ok_or(ConfigError::MissingPath {
            what,
            flag: flag_name,
        })
}

fn emit<T, F>(format: OutputFormat, value: &T, printer: F) -> Result<(), Box<dyn Error>>
where
    T: Serialize,
    F: FnOnce(),
{
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)?;
            println!("{json}");
        }
        OutputFormat::Text => printer(),
    }
    Ok(())
}

fn print_build_text(ui: &Ui, report: &BuildReport) {
    ui.section(
        "Graph",
        [
            ("words", report.words_path.clone()),
            ("output", report.graph_path.clone()),
            ("nodes", report.nodes.to_string()),
            ("edges", report.edges.to_string()),
            ("length groups", report.partitions.to_string()),
            ("parallel", report.parallel.to_string()),
        ],
    );
    ui.success(&format!(
        "Built in {}",
        format_duration(std::time::Duration::from_secs_f64(report.duration_ms / 1_000.0))
    ));
}

fn print_search_text(ui: &Ui, report: &SearchReport) {
    ui.ladder(&report.path);
    ui.success(&format!(
        "{} step(s) from '{}' to '{}'",
        report.hops, report.start, report.end
    ));
}

fn print_verify_text(ui: &Ui, report: &VerifyReport) {
    if let Some(error) = &report.error {
        ui.warn(&format!("{}: {error}", report.graph_path));
        return;
    }
    ui.section(
        "Graph",
        [
            ("file", report.graph_path.clone()),
            ("nodes", report.nodes.to_string()),
            ("edges", report.edges.to_string()),
            ("length groups", report.partitions.to_string()),
        ],
    );
    ui.success("Graph is consistent");
}
