use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use is_terminal::IsTerminal;
use std::io::Read;
use twig::areas::graph::GitGraph;
use twig::artifacts::branch::branch_name::BranchName;
use twig::artifacts::core::PagerWriter;
use twig::artifacts::render::options::{BranchOrdering, GraphOptions, Mode, Orientation, Overflow};
use twig::artifacts::render::trace::TraceRenderer;
use twig::artifacts::script::Script;
use twig::artifacts::script::diagnostic::Diagnostic;

#[derive(Parser)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A git graph script interpreter",
    long_about = "Interprets small scripts of checkout/commit/merge commands \
    and replays them as commit-graph mutations. The bundled renderer prints \
    the mutation trace; graphical renderers plug in through the library.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "render",
        about = "Interpret a script and print the graph-mutation trace",
        long_about = "This command interprets a graph script and prints one line \
        per graph mutation, in execution order. Script problems are reported as \
        warnings on stderr and never stop the render."
    )]
    Render {
        #[arg(index = 1, help = "Path to the script file, or - for stdin")]
        script: String,
        #[arg(long, default_value = "normal", help = "Display density (normal or compact)")]
        mode: Mode,
        #[arg(long, default_value = "vertical", help = "Graph growth direction")]
        orientation: Orientation,
        #[arg(long, help = "Maximum container height in pixels")]
        max_height: Option<u32>,
        #[arg(long, default_value = "auto", help = "Container overflow policy")]
        overflow: Overflow,
        #[arg(long, required = false, help = "Label every commit dot with C<n>")]
        show_commit_number: bool,
        #[arg(long, default_value_t = 0, help = "First value of the commit counter")]
        commit_base: i64,
        #[arg(
            long,
            value_delimiter = ',',
            help = "Comma-separated branch names fixing the lane order"
        )]
        branches_order: Vec<String>,
    },
    #[command(
        name = "check",
        about = "Parse a script and report problems without rendering",
        long_about = "This command parses a graph script, prints every diagnostic, \
        and exits non-zero when the script has any."
    )]
    Check {
        #[arg(index = 1, help = "Path to the script file, or - for stdin")]
        script: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Render {
            script,
            mode,
            orientation,
            max_height,
            overflow,
            show_commit_number,
            commit_base,
            branches_order,
        } => {
            let options = GraphOptions {
                mode: *mode,
                orientation: *orientation,
                max_height: *max_height,
                overflow: *overflow,
                show_commit_number: *show_commit_number,
                commit_number_base: *commit_base,
                branches_order: branch_ordering(branches_order),
                ..GraphOptions::default()
            };

            let text = read_script(script)?;
            let mut renderer = TraceRenderer::default();
            let report = GitGraph::new(options).render(&text, &mut renderer)?;

            report_diagnostics(report.diagnostics());
            print_trace(&renderer)?
        }
        Commands::Check { script } => {
            let text = read_script(script)?;
            let parsed = Script::parse(&text);

            report_diagnostics(parsed.diagnostics());
            if parsed.has_diagnostics() {
                std::process::exit(1);
            }

            println!("{} commands, no problems", parsed.lines().len());
        }
    }

    Ok(())
}

fn read_script(path: &str) -> Result<String> {
    if path == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read script from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("failed to read script file {}", path))
}

fn branch_ordering(names: &[String]) -> Option<BranchOrdering> {
    if names.is_empty() {
        return None;
    }

    Some(BranchOrdering::new(
        names.iter().map(|name| BranchName::from(name.as_str())).collect(),
    ))
}

fn report_diagnostics(diagnostics: &[Diagnostic]) {
    let colorize = std::io::stderr().is_terminal();

    for diagnostic in diagnostics {
        if colorize {
            eprintln!("{} {}", "warning:".yellow().bold(), diagnostic);
        } else {
            eprintln!("warning: {}", diagnostic);
        }
    }
}

fn print_trace(renderer: &TraceRenderer) -> Result<()> {
    if std::io::stdout().is_terminal() {
        let pager = minus::Pager::new();
        let mut writer = PagerWriter::new(pager.clone());
        renderer.write_trace(&mut writer)?;
        minus::page_all(pager)?;
    } else {
        renderer.write_trace(&mut std::io::stdout().lock())?;
    }

    Ok(())
}
