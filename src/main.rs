use clap::{Parser, Subcommand};
use league_table::output::{self, OutputFormat};
use std::path::PathBuf;
use std::time::Instant;

const EXIT_SUCCESS: i32 = 0;
const EXIT_MALFORMED: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank teams from game results (default if no subcommand)
    Rank {
        /// File with one game per line; reads stdin when omitted or "-"
        input: Option<PathBuf>,

        /// Output format (overrides the config file)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Give every team its own position, even when level on points
        #[arg(long)]
        no_shared_ranks: bool,

        /// Write the standings to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Report malformed game lines without ranking
    Check {
        /// File with one game per line; reads stdin when omitted or "-"
        input: Option<PathBuf>,
    },
    /// Write the default config file
    InitConfig {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "league-table")]
#[command(about = "Rank teams from game results", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/league-table/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    league_table::logger::init_cli_logger(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Rank {
        input: None,
        format: None,
        no_shared_ranks: false,
        output: None,
        no_color: false,
    });

    match command {
        Commands::Rank {
            input,
            format,
            no_shared_ranks,
            output: out_path,
            no_color,
        } => {
            let config = load_config_or_exit(cli.config);
            let start_time = Instant::now();
            let lines = read_input_or_exit(input);
            let standings = league_table::compute_standings(&lines, &config.scoring);

            for skipped in standings.malformed() {
                tracing::warn!("Skipping malformed game {}", output::format_skipped(skipped));
            }

            let format = format.unwrap_or(config.output.format);
            let shared_ranks = config.output.shared_ranks && !no_shared_ranks;
            let use_colors = out_path.is_none() && !no_color && output::should_use_colors();

            let rendered =
                match output::render(&standings.ranking, format, shared_ranks, use_colors) {
                    Ok(r) => r,
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                };

            match out_path {
                Some(path) => {
                    if let Err(e) = league_table::input::write_output(&path, &rendered) {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                    tracing::info!(path = %path.display(), "Wrote standings");
                }
                None => println!("{}", rendered),
            }

            tracing::debug!(
                teams = standings.ranking.len(),
                games = standings.games,
                skipped = standings.skipped.len(),
                elapsed = ?start_time.elapsed(),
                "Ranked games"
            );
        }
        Commands::Check { input } => {
            let config = load_config_or_exit(cli.config);
            let lines = read_input_or_exit(input);
            let standings = league_table::compute_standings(&lines, &config.scoring);

            let malformed: Vec<_> = standings.malformed().collect();
            for skipped in &malformed {
                println!("{}", output::format_skipped(skipped));
            }

            if !malformed.is_empty() {
                eprintln!(
                    "{} malformed of {} lines ({} games scored)",
                    malformed.len(),
                    lines.len(),
                    standings.games
                );
                std::process::exit(EXIT_MALFORMED);
            }

            eprintln!("All {} games are well-formed", standings.games);
        }
        Commands::InitConfig { force } => {
            let path = match cli.config.or_else(league_table::config::get_config_path) {
                Some(p) => p,
                None => {
                    eprintln!("Could not determine home directory; pass --config PATH");
                    std::process::exit(EXIT_CONFIG);
                }
            };
            if let Err(e) = league_table::config::write_default_config(&path, force) {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
            println!("Wrote default config to {}", path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}

fn load_config_or_exit(path: Option<PathBuf>) -> league_table::config::Config {
    let config = match league_table::config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate scoring config at startup
    if let Err(errors) = league_table::scoring::validate_scoring(&config.scoring) {
        eprintln!("Scoring config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    config
}

fn read_input_or_exit(input: Option<PathBuf>) -> Vec<String> {
    match league_table::input::read_lines(input.as_deref()) {
        Ok(lines) => lines,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    }
}
