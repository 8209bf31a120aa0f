use anyhow::{Context, Result, anyhow};
use clap::{Args, Parser, Subcommand};
use figpack::capability::{load_elements, render_elements, rendered_assets, updated_elements};
use figpack::package::{
    ManifestContents, PackageContents, PackageOptions, PackageSummary, RasterAsset,
    export_directory, options_from_config, save_package,
};
use figpack::tree::{extract_with_manifest, load_design};
use figpack::util::expand_tilde;
use figpack::Config;
use log::info;
use std::path::{Path, PathBuf};

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("FIGPACK_GIT_HASH"), ")");

#[derive(Parser, Debug)]
#[command(name = "figpack")]
#[command(version = VERSION, about = "Extract vector assets from design files and package them")]
struct Cli {
    /// Configuration file (defaults to ~/.config/figpack/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Package the vector assets of a design-file node tree
    Tree {
        /// Design file (JSON)
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,

        /// Bitmap to include, stored as PNG at the given archive path
        #[arg(long = "raster", value_name = "ASSET=FILE", value_parser = parse_raster_arg)]
        rasters: Vec<(String, PathBuf)>,
    },
    /// Render a capability element list and package the updated list
    Elements {
        /// Element list (JSON array)
        input: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args, Debug)]
#[group(required = true, multiple = true)]
struct OutputArgs {
    /// Archive to write (.zip)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Also write the entries as loose files under this directory
    #[arg(long, value_name = "DIR")]
    out_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => Config::load_from(&expand_tilde(&path.to_string_lossy()))?,
        None => Config::load()?,
    };
    let options = options_from_config(&config);

    match cli.command {
        Command::Tree {
            input,
            output,
            rasters,
        } => run_tree(&input, &output, &rasters, &options),
        Command::Elements { input, output } => run_elements(&input, &output, &options),
    }
}

fn run_tree(
    input: &Path,
    output: &OutputArgs,
    raster_args: &[(String, PathBuf)],
    options: &PackageOptions,
) -> Result<()> {
    let roots = load_design(input)?;
    let extraction = extract_with_manifest(&roots, &options.naming());
    let assets = &extraction.assets;
    info!("Extracted {} vector assets from {}", assets.len(), input.display());

    let rasters = raster_args
        .iter()
        .map(|(asset, file)| RasterAsset::load(asset.clone(), file))
        .collect::<Result<Vec<_>>>()?;

    let contents = PackageContents {
        manifest: ManifestContents::Nodes(&extraction.manifest),
        vectors: assets,
        rasters: &rasters,
    };
    write_outputs(output, &contents, options)
}

fn run_elements(input: &Path, output: &OutputArgs, options: &PackageOptions) -> Result<()> {
    let elements = load_elements(input)?;
    let results = render_elements(&elements);
    let updated = updated_elements(&results);
    let assets = rendered_assets(&results, &options.naming());
    info!(
        "Rendered {} of {} elements from {}",
        assets.len(),
        elements.len(),
        input.display()
    );

    let contents = PackageContents {
        manifest: ManifestContents::Elements(&updated),
        vectors: &assets,
        rasters: &[],
    };
    write_outputs(output, &contents, options)
}

fn write_outputs(
    output: &OutputArgs,
    contents: &PackageContents<'_>,
    options: &PackageOptions,
) -> Result<()> {
    if let Some(path) = &output.output {
        let summary = save_package(path, contents, options)
            .with_context(|| format!("failed to write package {}", path.display()))?;
        print_summary(&summary);
    }

    if let Some(dir) = &output.out_dir {
        let summary = export_directory(dir, contents, options)
            .with_context(|| format!("failed to export to {}", dir.display()))?;
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &PackageSummary) {
    println!(
        "Wrote {} ({} entries: {} svg, {} png, {} bytes)",
        summary.path.display(),
        summary.entries,
        summary.vectors,
        summary.rasters,
        summary.bytes
    );
}

fn parse_raster_arg(value: &str) -> Result<(String, PathBuf)> {
    let (asset, file) = value
        .split_once('=')
        .ok_or_else(|| anyhow!("expected ASSET=FILE, got '{value}'"))?;
    if asset.is_empty() || file.is_empty() {
        return Err(anyhow!("expected ASSET=FILE, got '{value}'"));
    }
    Ok((asset.to_string(), expand_tilde(file)))
}
