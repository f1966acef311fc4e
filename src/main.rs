//! portal-bundle - build the single-file File Portal page
//!
//! Inlines the stylesheet and script into the HTML document, strips `//`
//! comments and whitespace, and writes `file-transfer.html`.

use clap::Parser;

mod assets;
mod bundler;
mod cli;
mod error;
mod logging;
mod transform;

use bundler::Bundler;
use cli::Cli;
use error::Result;

fn run(cli: &Cli) -> Result<()> {
    let summary = Bundler::new(cli.asset_dir()).run()?;

    log::info!(
        "Wrote {} ({} bytes from {} bytes of input, {} stylesheet and {} script tag(s) inlined)",
        summary.output_path.display(),
        summary.output_bytes,
        summary.input_bytes,
        summary.inlined.styles,
        summary.inlined.scripts
    );

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    logging::setup_logger(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
