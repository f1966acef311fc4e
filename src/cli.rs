//! CLI definitions using clap derive API

use clap::Parser;
use clap::builder::{Styles, styling::AnsiColor};
use std::path::PathBuf;

/// portal-bundle - single-file page builder for File Portal
///
/// Inlines index.css and index.js into index.html and writes a minified file-transfer.html.
#[derive(Parser, Debug)]
#[command(
    name = "portal-bundle",
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Bundle index.html, index.css and index.js into one minified file-transfer.html",
    long_about = "Replaces the stylesheet link and script tag in index.html with inline \
                  <style> and <script> blocks, removes // line comments and whitespace \
                  runs, and writes the result to file-transfer.html.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  portal-bundle\n    \
                  portal-bundle --dir site\n    \
                  PORTAL_BUNDLE_LOG=debug portal-bundle"
)]
pub struct Cli {
    /// Directory holding the assets (defaults to current directory)
    #[arg(long, short = 'C', value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Asset directory to bundle in
    pub fn asset_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}
