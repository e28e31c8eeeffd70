use clap::{Parser, Subcommand};
use lazy_image::{ImageArgs, StaticSource, config, render, resolve};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lazy-image")]
#[command(about = "Resolve responsive, lazy-loading image attributes")]
#[command(long_about = "\
Resolve responsive, lazy-loading image attributes

Takes a JSON request describing one image (materialized source metadata
plus layout arguments) and produces either the resolved view model as JSON
or a rendered HTML fragment.

Request format:

  {
    \"source\": {
      \"width\": 1200,
      \"height\": 800,
      \"alt\": \"A museum\",
      \"defaultSrc\": \"museum.jpg\",
      \"srcSets\": [
        {\"descriptor\": \"400w\", \"url\": \"museum-400.jpg\"},
        {\"descriptor\": \"800w\", \"url\": \"museum-800.jpg\"}
      ],
      \"placeholder\": {\"src\": \"data:image/gif;base64,...\"}
    },
    \"args\": {
      \"layout\": \"constrained\",
      \"width\": 800,
      \"backgroundColor\": \"#0a0a0a\"
    }
  }

All args are optional: layout defaults to fullWidth, loading to lazy, and
dimensions fall back to the source's. Site defaults (background color,
LQIP) come from config.toml next to the working directory, or stock
defaults when no file exists.

Run 'lazy-image gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Site defaults file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a request file into view-model JSON
    Resolve {
        /// JSON request file
        input: PathBuf,
        /// Indent the output
        #[arg(long)]
        pretty: bool,
    },
    /// Resolve a request file and print the rendered HTML fragment
    Render {
        /// JSON request file
        input: PathBuf,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

/// One image to resolve: materialized source metadata plus layout args.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Request {
    source: StaticSource,
    args: ImageArgs,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Resolve { input, pretty } => {
            let request: Request = serde_json::from_str(&std::fs::read_to_string(&input)?)?;
            let defaults = config::SiteConfig::load_or_default(&cli.config)?.image_defaults();
            let view = resolve(&request.source, &request.args, &defaults)?;
            let json = if pretty {
                serde_json::to_string_pretty(&view)?
            } else {
                serde_json::to_string(&view)?
            };
            println!("{json}");
        }
        Command::Render { input } => {
            let request: Request = serde_json::from_str(&std::fs::read_to_string(&input)?)?;
            let defaults = config::SiteConfig::load_or_default(&cli.config)?.image_defaults();
            let view = resolve(&request.source, &request.args, &defaults)?;
            println!("{}", render::render_image(&view).into_string());
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
