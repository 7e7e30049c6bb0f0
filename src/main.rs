use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use kindling::{DiffOptions, Kindling, LineComparison, Whitespace, render};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "kindling", version)]
#[command(about = "Line-level diff viewer for logs, configs and other text artifacts")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the differences between two files
    Diff {
        /// The original file
        original: PathBuf,
        /// The modified file
        modified: PathBuf,
        /// Output layout
        #[arg(short, long, value_enum, default_value_t = Format::Patch)]
        format: Format,
        /// Unchanged lines shown around each change in patch output
        #[arg(short = 'U', long, default_value_t = 3)]
        context: usize,
        /// Column width for side-by-side output
        #[arg(long, default_value_t = 60)]
        width: usize,
        /// Compare lines case-insensitively
        #[arg(short = 'i', long)]
        ignore_case: bool,
        /// Ignore changes in the amount of whitespace
        #[arg(short = 'b', long, conflicts_with = "ignore_all_space")]
        ignore_space_change: bool,
        /// Ignore all whitespace
        #[arg(short = 'w', long)]
        ignore_all_space: bool,
        /// Refuse comparisons whose LCS table exceeds this many cells
        #[arg(long)]
        max_cells: Option<usize>,
    },
    /// Print shell completions
    Completions {
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
    /// Print the man page in roff format
    Man,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    /// Unified diff hunks
    Patch,
    /// Every line with old and new line numbers
    Listing,
    /// Original and modified in two columns
    SideBySide,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    kindling::logging::init(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("kindling: {}", e);
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> Result<ExitCode, Box<dyn std::error::Error>> {
    match command {
        Commands::Diff {
            original,
            modified,
            format,
            context,
            width,
            ignore_case,
            ignore_space_change,
            ignore_all_space,
            max_cells,
        } => {
            let whitespace = if ignore_all_space {
                Whitespace::Ignore
            } else if ignore_space_change {
                Whitespace::Collapse
            } else {
                Whitespace::Exact
            };
            let options = DiffOptions {
                comparison: LineComparison {
                    ignore_case,
                    whitespace,
                },
                max_table_cells: max_cells,
            };

            let diff = Kindling::new(options).compare_files(&original, &modified)?;
            let output = match format {
                Format::Patch => render::patch(
                    &diff,
                    &original.display().to_string(),
                    &modified.display().to_string(),
                    context,
                ),
                Format::Listing => render::listing(&diff),
                Format::SideBySide => render::side_by_side(&diff, width),
            };
            std::io::stdout().write_all(output.as_bytes())?;

            Ok(if diff.is_identical() {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(1)
            })
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "kindling", &mut std::io::stdout());
            Ok(ExitCode::SUCCESS)
        }
        Commands::Man => {
            clap_mangen::Man::new(Cli::command()).render(&mut std::io::stdout())?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
