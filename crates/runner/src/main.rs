use anyhow::Context;
use prism_analytics::{AnalyticsConfig, AnalyticsEngine};
use prism_runner::{AnalyticsRequest, run};

fn print_help() {
    eprintln!(
        r#"Prism Runner - batch microstructure analytics

USAGE:
    prism-runner <REQUEST> [OPTIONS]

ARGS:
    <REQUEST>           JSON analytics request ("-" reads stdin)

OPTIONS:
    --config <PATH>     Load analytics configuration from JSON file
    --pretty            Pretty-print the JSON report
    --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with default parameters
    prism-runner request.json

    # Run with custom parameters
    prism-runner request.json --config analytics.json --pretty
"#
    );
}

fn read_input(path: &str) -> anyhow::Result<String> {
    if path == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read request {}", path))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let mut request_path: Option<String> = None;
    let mut config_path: Option<String> = None;
    let mut pretty = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--pretty" => pretty = true,
            arg if request_path.is_none() && (arg == "-" || !arg.starts_with('-')) => {
                request_path = Some(arg.to_string());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let Some(request_path) = request_path else {
        print_help();
        std::process::exit(1);
    };

    let config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            AnalyticsConfig::from_file(&path)
                .with_context(|| format!("Failed to load config {}", path))?
        }
        None => AnalyticsConfig::load_default().context("Failed to load default config")?,
    };
    let engine = AnalyticsEngine::new(config).context("Invalid analytics configuration")?;

    let request = AnalyticsRequest::from_json(&read_input(&request_path)?)
        .with_context(|| format!("Failed to parse request {}", request_path))?;

    let report = run(&engine, &request);
    let output = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", output);

    Ok(())
}
