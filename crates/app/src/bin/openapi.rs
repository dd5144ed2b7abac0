// Jobs API - OpenAPI document export

use std::path::PathBuf;

use clap::Parser;
use jobtrack_common::Config;

/// Export the Jobs API OpenAPI document
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Args {
    /// Write the document to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Advertised server URL [default: PUBLIC_API_URL, else http://localhost:$PORT/api/v1]
    #[arg(long)]
    server_url: Option<String>,

    /// Emit compact JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let server_url = args
        .server_url
        .unwrap_or_else(Config::public_api_url_from_env);

    let descriptor = jobtrack_jobs::api_descriptor(jobtrack_app::api_metadata(server_url))?;
    let json = if args.compact {
        serde_json::to_string(&descriptor)?
    } else {
        descriptor.to_json_pretty()?
    };

    match args.output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", json))?;
            eprintln!("Wrote OpenAPI document to {}", path.display());
        }
        None => println!("{}", json),
    }

    Ok(())
}
