//! Regenerates the embedded tool configuration at `assets/tools.ron`.

use clap::Parser;
use easel::ToolsConfig;
use ron::ser::PrettyConfig;
use std::fs;
use std::path::PathBuf;

const TOOLS_RON_PATH: &str = "assets/tools.ron";

#[derive(Parser)]
#[command(version, about = "Regenerate the embedded tool configuration")]
struct Args {
    /// Output path for the generated RON file
    #[arg(long, default_value = TOOLS_RON_PATH)]
    out: PathBuf,
}

fn main() -> color_eyre::Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let args = Args::parse();

    let tools = ToolsConfig::fallback();
    println!("Generating {} tool sliders", tools.sliders.len());

    // Serialize to RON with pretty formatting
    let pretty_config = PrettyConfig::new()
        .depth_limit(10)
        .indentor("  ".to_string())
        .struct_names(true)
        .enumerate_arrays(false);

    let ron_string = ron::ser::to_string_pretty(&tools, pretty_config)?;
    fs::write(&args.out, ron_string + "\n")?;
    println!("Wrote {}", args.out.display());

    Ok(())
}
