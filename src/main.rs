use clap::Parser;
use colored::Colorize;
use log::LevelFilter;
use logo::Logo;
use utils::{args::Args, format_pixel::format_pixel};

mod logo;
mod utils {
    pub mod args;
    pub mod background;
    pub mod format_pixel;
    pub mod rgb_distance;
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    init_logger(args.verbose);

    let mut logo = Logo::from_args(args);

    logo.load()?;

    let removal = logo.remove_background()?;

    println!("Top-left pixel: {}", format_pixel(removal.top_left));
    log::info!("Background color: {:?}", removal.background.0);

    logo.save()?;

    println!(
        "{} {} ({}/{} pixels cleared)",
        "Saved transparent logo to".green(),
        logo.output.display().to_string().bold(),
        removal.cleared,
        removal.total
    );

    Ok(())
}

// RUST_LOG still wins over the flag
fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
