use std::process::ExitCode;

use clap::Parser;
use orthogon::text::{format_path, parse_path, MAX_ACCURACY};
use orthogon::{Orthogonalize, OrthogonalizeParams};

#[derive(Parser)]
#[command(
    name = "orthogon",
    about = "Orthogonalize a closed path into a rectilinear polygon",
    after_help = "Example: orthogon -a 2 -c 10 \"6218 8805, 6295 8675, 6501 8798, 6425 8927, 6218 8805\""
)]
struct Cli {
    /// Decimal places in the output, clamped to 0..=20
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    accuracy: i64,

    /// Output edges shorter than this are collapsed (negative means 0)
    #[arg(short, long, default_value = "0", allow_hyphen_values = true)]
    collapse: f64,

    /// Cap on collapse passes (defaults to the source edge count)
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Closed source path: `x y, x y, ...` with the first node repeated last
    #[arg(allow_hyphen_values = true)]
    data: Option<String>,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for orthogon. Logs go to stderr.
    // Override with RUST_LOG (e.g. RUST_LOG=orthogon=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("orthogon=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let Some(data) = cli.data else {
        return ExitCode::SUCCESS;
    };

    let accuracy = usize::try_from(cli.accuracy.max(0))
        .unwrap_or(0)
        .min(MAX_ACCURACY);
    let params = OrthogonalizeParams {
        collapse_length: cli.collapse.max(0.0),
        max_iterations: cli.max_iterations,
    };

    let result = parse_path(&data)
        .and_then(|source| Orthogonalize::new(source).with_params(params).execute());
    match result {
        Ok(path) => {
            let line = format_path(&path, accuracy);
            if !line.is_empty() {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            println!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
