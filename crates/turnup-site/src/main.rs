use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use turnup_site::{assets, page};

#[derive(Parser)]
#[command(name = "turnup-site")]
#[command(about = "Generate a static HTML site from Markdown content")]
struct Cli {
    /// Directory of Markdown content files
    #[arg(long, default_value = "content")]
    content: PathBuf,

    /// Directory of static assets copied into the output as-is
    #[arg(long = "static", default_value = "static")]
    static_dir: PathBuf,

    /// HTML template containing {{ Title }} and {{ Content }} placeholders
    #[arg(long, default_value = "template.html")]
    template: PathBuf,

    /// Output directory (recreated from scratch on every run)
    #[arg(short, long, default_value = "public")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let template = fs::read_to_string(&cli.template)
        .with_context(|| format!("reading template {}", cli.template.display()))?;

    if cli.static_dir.is_dir() {
        assets::copy_dir_recursive(&cli.static_dir, &cli.output)?;
    } else {
        fs::create_dir_all(&cli.output)
            .with_context(|| format!("creating output directory {}", cli.output.display()))?;
    }

    let generated = page::generate_pages_recursive(&cli.content, &template, &cli.output)?;
    println!("Generated {generated} pages into {}", cli.output.display());

    Ok(())
}
