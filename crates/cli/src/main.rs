// rangerelay CLI - fetch a range-query challenge, solve it, deliver answers

mod exit_codes;
mod solve;

use std::process::ExitCode;

use clap::Parser;

use exit_codes::EXIT_SUCCESS;
use solve::SolveOptions;

#[derive(Parser)]
#[command(name = "rrelay")]
#[command(about = "Answer range-sum challenges: fetch, solve in O(1) per query, deliver")]
#[command(version)]
struct Cli {
    /// Endpoint serving the challenge payload (token, data, queries)
    #[arg(long, env = "RRELAY_INPUT_URL")]
    input_url: String,

    /// Endpoint receiving the answer array
    #[arg(long, env = "RRELAY_OUTPUT_URL", required_unless_present = "dry_run")]
    output_url: Option<String>,

    /// Print the answers to stdout instead of POSTing them
    #[arg(long)]
    dry_run: bool,

    /// Suppress stderr progress notes
    #[arg(long, short = 'q')]
    quiet: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let opts = SolveOptions {
        input_url: cli.input_url,
        output_url: cli.output_url,
        dry_run: cli.dry_run,
        quiet: cli.quiet,
    };

    match solve::run(&opts) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(err.code)
        }
    }
}
