use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "data-view")]
#[command(about = "Loads scraped JSON data and renders it into a page")]
#[command(version)]
pub struct Args {
    /// Base the resource is resolved against (URL or local directory)
    #[arg(short, long)]
    pub base: Option<String>,

    /// Resource locator, relative to the base
    #[arg(short, long)]
    pub resource: Option<String>,

    /// Host HTML page containing the content and loading elements
    #[arg(short, long)]
    pub template: Option<PathBuf>,

    /// Write the rendered page here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
