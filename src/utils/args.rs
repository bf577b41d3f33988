use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(version, author, about, long_about = None)]
pub struct Args {
    /// The logo image to clean up
    #[clap(default_value = "frontend/public/hcv-logo.png")]
    pub input: PathBuf,

    /// Where to write the transparent PNG
    #[clap(default_value = "frontend/public/hcv-logo-transparent.png")]
    pub output: PathBuf,

    /// Print debug information
    #[clap(short, long, action)]
    pub verbose: bool,
}
