use std::fs;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "portfolio-fx", version)]
#[command(about = "Portfolio page effects: stylesheet generation and config checks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stylesheet the controller injects (ripple + card float keyframes)
    Styles {
        /// Number of cards to generate float animations for
        #[arg(long, default_value_t = 0)]
        cards: usize,

        /// Seed for reproducible float parameters
        #[arg(long)]
        seed: Option<u64>,

        /// JSON config file (defaults apply to anything it omits)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write output to file instead of stdout
        #[arg(short)]
        o: Option<PathBuf>,
    },

    /// Validate a config file and print the effective configuration
    Config {
        /// JSON config file; prints the defaults when omitted
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Styles {
            cards,
            seed,
            config,
            o,
        } => {
            let config = match portfolio_fx::load_config(config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };

            let css = portfolio_fx::render_stylesheet(&config, cards, seed);

            if let Some(out_path) = o {
                match fs::write(&out_path, &css) {
                    Ok(()) => {
                        eprintln!(
                            "wrote stylesheet for {cards} card(s) to {} ({} bytes)",
                            out_path.display(),
                            css.len()
                        );
                    }
                    Err(e) => {
                        eprintln!("error: cannot write '{}': {e}", out_path.display());
                        process::exit(1);
                    }
                }
            } else {
                print!("{css}");
            }
        }

        Commands::Config { config } => {
            let label = config
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "defaults".to_string());
            let loaded = match portfolio_fx::load_config(config.as_deref()) {
                Ok(c) => c,
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            };
            match loaded.to_json_pretty() {
                Ok(json) => {
                    println!("{json}");
                    eprintln!("{label}: ok");
                }
                Err(e) => {
                    eprintln!("error: {e}");
                    process::exit(1);
                }
            }
        }
    }
}
