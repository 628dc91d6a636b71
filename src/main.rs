use serde_json::Value;
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::{info, level_filters::LevelFilter, warn};
use tracing_subscriber::EnvFilter;

use softlayer_codec::complex_type::OrderData;
use softlayer_codec::config::Settings;
use softlayer_codec::datatypes::UnknownResourcePolicy;
use softlayer_codec::metrics;
use softlayer_codec::service::{ProductOrderService, SearchService};

const USAGE: &str = "usage: softlayer-codec [--strict] [--metrics] <command>

commands:
  search <file>             decode a SoftLayer_Search response
  stamp <TypeName> <file>   stamp an order and print its placeOrder request";

enum Command {
    Search { input: PathBuf },
    Stamp { type_name: String, input: PathBuf },
}

struct Args {
    command: Command,
    strict: bool,
    metrics: bool,
}

impl Args {
    fn parse() -> Option<Self> {
        let mut strict = false;
        let mut metrics = false;
        let mut positional = Vec::new();

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--strict" => strict = true,
                "--metrics" => metrics = true,
                "-h" | "--help" => return None,
                _ => positional.push(arg),
            }
        }

        let command = match positional.as_slice() {
            [cmd, input] if cmd == "search" => Command::Search {
                input: PathBuf::from(input),
            },
            [cmd, type_name, input] if cmd == "stamp" => Command::Stamp {
                type_name: type_name.clone(),
                input: PathBuf::from(input),
            },
            _ => return None,
        };

        Some(Self {
            command,
            strict,
            metrics,
        })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .init();

    dotenv::dotenv().ok();

    let Some(args) = Args::parse() else {
        eprintln!("{}", USAGE);
        std::process::exit(2);
    };

    let mut settings = Settings::new()?;
    if args.strict {
        settings.search.unknown_resource = UnknownResourcePolicy::Strict;
    }

    match args.command {
        Command::Search { input } => {
            let bytes = fs::read(&input)?;
            let service = SearchService::new(settings.search_decoder());
            let results = service.decode_results(&bytes)?;
            info!("🔎 Decoded {} search results from {}", results.len(), input.display());

            for result in &results {
                match result.resource_kind() {
                    Some(kind) => info!(
                        resource_type = %result.resource_type,
                        score = ?result.relevance_score.map(|s| s.value()),
                        terms = ?result.matched_terms,
                        "✅ {:?}",
                        kind
                    ),
                    None => warn!(resource_type = %result.resource_type, "⚠️ Unresolved resource"),
                }
            }

            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Stamp { type_name, input } => {
            let body: Value = serde_json::from_slice(&fs::read(&input)?)?;

            // Catalog variants are checked against their struct, but the body is sent as written
            if OrderData::decode(&type_name, body.clone())?.is_none() {
                warn!(type_name = %type_name, "⚠️ Order type outside the typed catalog");
            }
            let request = ProductOrderService::place_untyped_order(&type_name, body, None)?;

            info!(path = %request.path(), "📦 placeOrder request ready");
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
    }

    if args.metrics {
        print!("{}", metrics::render());
    }

    Ok(())
}
