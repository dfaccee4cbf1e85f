//! Command-line surface for `modelts`.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod generate;

pub use generate::execute;

/// Generate a TypeScript type declaration for a CMS content model.
#[derive(Parser, Debug)]
#[command(
    name = "modelts",
    version,
    about = "Generate TypeScript model declarations from a CMS schema API"
)]
pub struct Cli {
    /// Content model to generate a declaration for
    #[arg(value_name = "MODEL")]
    pub model: String,
    /// Restrict the root declaration to these columns
    #[arg(long = "cols", value_name = "COLUMNS", value_delimiter = ',')]
    pub cols: Option<Vec<String>>,
    /// Base name (without extension) for the output file
    #[arg(long = "name", value_name = "NAME")]
    pub name: Option<String>,
    /// Skip TLS certificate validation for API calls
    #[arg(long = "no-ssl-verify")]
    pub no_ssl_verify: bool,
}

/// Parse `args` and run one generation, returning the process exit code.
pub async fn run_cli(args: Vec<String>) -> i32 {
    match Cli::try_parse_from(args) {
        Ok(cli) => run(cli).await,
        Err(e) => {
            let code = e.exit_code();
            let _ = e.print();
            code
        }
    }
}

/// Run one generation end to end, mapping the outcome to an exit code.
pub async fn run(cli: Cli) -> i32 {
    match generate::run_inner(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("{err}");
            1
        }
    }
}

/// Initialize the fmt tracing subscriber.
///
/// `MODELTS_LOG` controls the log level: `trace`, `debug`, `info`, `warn`,
/// `error`, or a full tracing filter spec like
/// `modelts_core=debug,reqwest=warn`.
pub fn init_tracing() {
    const CRATES: [&str; 3] = ["modelts_cli", "modelts_core", "modelts_cms_sdk"];

    let filter = match std::env::var("MODELTS_LOG") {
        Ok(level) if is_plain_level(&level) => CRATES
            .iter()
            .map(|name| format!("{name}={level}"))
            .collect::<Vec<String>>()
            .join(","),
        Ok(spec) => spec,
        Err(_) => CRATES
            .iter()
            .map(|name| format!("{name}=info"))
            .collect::<Vec<String>>()
            .join(","),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::new(filter));
    if subscriber.try_init().is_err() {
        eprintln!("Warning: tracing subscriber already initialized");
    }
}

fn is_plain_level(s: &str) -> bool {
    matches!(
        s.to_ascii_lowercase().as_str(),
        "trace" | "debug" | "info" | "warn" | "error"
    )
}
