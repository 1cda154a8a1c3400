//! Integrates a configured request with composite Gauss-Legendre quadrature
//! and prints the estimate and the achieved relative error.
//!
//! Usage:
//!   compquad --tolerance 1e-9
//!   compquad --config requests.json --request unit --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use compquad::configuration::{
    Configuration,
    DEFAULT_REQUEST_NAME
};
use compquad::manager::manager::IManager;

#[derive(Parser)]
#[command(name = "compquad")]
#[command(about = "Composite Gauss-Legendre integration to a relative tolerance")]
struct Args {
    /// Required relative accuracy (overrides the request's tolerance)
    #[arg(long)]
    tolerance: Option<f64>,

    /// Lower integration bound (overrides the request)
    #[arg(long, allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Upper integration bound (overrides the request)
    #[arg(long, allow_hyphen_values = true)]
    upper: Option<f64>,

    /// JSON configuration with options and named requests
    #[arg(long)]
    config: Option<PathBuf>,

    /// Name of the request to run
    #[arg(long, default_value = DEFAULT_REQUEST_NAME)]
    request: String,

    /// Maximum number of subinterval doublings
    #[arg(long)]
    max_iterations: Option<usize>,

    /// Number of Gauss-Legendre points per subinterval
    #[arg(long)]
    rule_order: Option<usize>,

    /// Print the result as JSON
    #[arg(long, default_value = "false")]
    json: bool,

    /// List configured request names and exit
    #[arg(long, default_value = "false")]
    list_requests: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config = Configuration::new();
    if let Some(path) = &args.config {
        config
            .from_reader(path)
            .with_context(|| format!("failed to load configuration from {}", path.display()))?;
    }

    if args.list_requests {
        for name in config.request_manager().names() {
            println!("{}", name);
        }
        return Ok(());
    }

    let mut options = config.options();
    if let Some(max_iterations) = args.max_iterations {
        options = options.with_max_iterations(max_iterations)?;
    }
    if let Some(rule_order) = args.rule_order {
        options = options.with_rule_order(rule_order)?;
    }
    config.set_options(options)?;

    let mut request = config
        .request(&args.request)
        .with_context(|| format!("unknown request '{}'", args.request))?;
    if args.lower.is_some() || args.upper.is_some() {
        let a = args.lower.unwrap_or(request.a());
        let b = args.upper.unwrap_or(request.b());
        request = request.with_bounds(a, b)?;
    }
    if let Some(tolerance) = args.tolerance {
        request = request.with_tolerance(tolerance)?;
    }

    let rule = config.rule()?;
    info!(
        request = args.request.as_str(),
        integrand = %request.integrand(),
        a = request.a(),
        b = request.b(),
        tolerance = request.tolerance(),
        rule_order = rule.order(),
        "integrating"
    );
    let result = request
        .integrate(&rule, &options)
        .with_context(|| format!("integration of request '{}' failed", args.request))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Integral value: {}", result.value());
        println!("Integration accuracy: {:.6e}", result.achieved_relative_error());
    }
    Ok(())
}
