use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;

/// Print the JSON schema of the figpack configuration file.
#[derive(Parser, Debug)]
#[command(name = "dump_config_schema")]
struct Args {
    /// Write the schema to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let schema = serde_json::to_string_pretty(&figpack::Config::json_schema())?;

    match args.output {
        Some(path) => fs::write(&path, format!("{schema}\n"))
            .with_context(|| format!("failed to write schema to {}", path.display()))?,
        None => println!("{schema}"),
    }
    Ok(())
}
