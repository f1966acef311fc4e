//! Input assets and how they are read from disk
//!
//! The three inputs live side by side in one directory under fixed names.
//! Each is read whole, exactly once, in markup, style, script order.

use std::fmt;
use std::path::Path;

use crate::error::{Result, asset};

/// One of the three input files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    Markup,
    Style,
    Script,
}

impl AssetKind {
    /// Fixed file name of this asset, relative to the asset directory
    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Markup => "index.html",
            AssetKind::Style => "index.css",
            AssetKind::Script => "index.js",
        }
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetKind::Markup => "markup",
            AssetKind::Style => "stylesheet",
            AssetKind::Script => "script",
        };
        f.write_str(label)
    }
}

/// In-memory text of the three inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Assets {
    pub markup: String,
    pub style: String,
    pub script: String,
}

impl Assets {
    /// Read all three assets from `dir`
    pub fn load(dir: &Path) -> Result<Self> {
        let markup = read_asset(dir, AssetKind::Markup)?;
        let style = read_asset(dir, AssetKind::Style)?;
        let script = read_asset(dir, AssetKind::Script)?;

        Ok(Self {
            markup,
            style,
            script,
        })
    }

    /// Combined size of the inputs in bytes
    pub fn total_len(&self) -> usize {
        self.markup.len() + self.style.len() + self.script.len()
    }
}

/// Read a single asset as UTF-8 text with line endings normalized to `\n`
pub fn read_asset(dir: &Path, kind: AssetKind) -> Result<String> {
    let path = dir.join(kind.file_name());
    log::debug!("Reading {} from {}", kind, path.display());

    let bytes = std::fs::read(&path).map_err(|e| asset::read_failed(&path, &e))?;
    let text = String::from_utf8(bytes).map_err(|e| asset::invalid_encoding(&path, &e))?;

    Ok(normalize_newlines(text))
}

/// Convert `\r\n` and lone `\r` to `\n`
fn normalize_newlines(text: String) -> String {
    if !text.contains('\r') {
        return text;
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}
