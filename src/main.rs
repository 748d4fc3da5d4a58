use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use relink::core::{absolutize_document, RelinkOptions};
use relink::utils::url::combine;

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

#[derive(Parser)]
#[command(
    name = "relink",
    version,
    about = "Resolve URI references and absolutize links in HTML documents"
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a reference against a base URL and print the result
    Resolve {
        /// Base URL, usually absolute
        base: String,

        /// Reference to resolve, absolute or relative
        reference: String,
    },

    /// Rewrite relative href/src attributes in an HTML document to absolute form
    Absolutize {
        /// Base URL of the document
        base: String,

        /// Input HTML file (stdin when omitted)
        input: Option<PathBuf>,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Scheme to assume when the base URL has none
        #[arg(long, default_value = "http")]
        default_scheme: String,
    },
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn print_error_message(text: &str) {
    if atty::is(atty::Stream::Stderr) {
        eprintln!("{}{}{}", ANSI_COLOR_RED, text, ANSI_COLOR_RESET);
    } else {
        eprintln!("{}", text);
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Resolve { base, reference } => {
            println!("{}", combine(&base, &reference));
        }
        Command::Absolutize {
            base,
            input,
            output,
            default_scheme,
        } => {
            let html = match input {
                Some(path) => fs::read_to_string(&path),
                None => {
                    let mut buf = String::new();
                    io::stdin().read_to_string(&mut buf).map(|_| buf)
                }
            };
            let html = match html {
                Ok(html) => html,
                Err(error) => {
                    print_error_message(&format!("Error: could not read input ({})", error));
                    process::exit(1);
                }
            };

            let options = RelinkOptions {
                default_scheme: Some(default_scheme),
            };
            match absolutize_document(&html, &base, &options) {
                Ok(result) => match output {
                    Some(path) => {
                        if let Err(error) = fs::write(&path, result) {
                            print_error_message(&format!(
                                "Error: could not write output ({})",
                                error
                            ));
                            process::exit(1);
                        }
                    }
                    None => {
                        print!("{}", result);
                    }
                },
                Err(error) => {
                    print_error_message(&format!("Error: {}", error));
                    process::exit(1);
                }
            }
        }
    }
}
