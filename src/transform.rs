//! Text pipeline that turns the three assets into one page
//!
//! The passes run in a fixed order:
//! 1. [`inline_assets`] swaps the stylesheet link and script tag for inline blocks
//! 2. [`strip_line_comments`] deletes `//` up to the end of the line
//! 3. [`strip_whitespace`] deletes whitespace runs of two or more and every newline
//!
//! The comment pass does not know about string literals or URLs. Any `//`
//! in the combined text, including `https://` inside a script string, ends
//! the line's content.

use std::sync::LazyLock;

use regex::Regex;

use crate::assets::Assets;

/// Markup fragment replaced by the inline stylesheet
pub const STYLE_PLACEHOLDER: &str = r#"<link rel="stylesheet" href="index.css">"#;

/// Markup fragment replaced by the inline script
pub const SCRIPT_PLACEHOLDER: &str = r#"<script src="index.js"></script>"#;

#[allow(clippy::expect_used)]
static LINE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"//.*").expect("line comment pattern is valid"));

// `\s` plus U+001C..U+001F, the separators `str.isspace` also counts as whitespace
#[allow(clippy::expect_used)]
static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\s\x1c-\x1f]{2,}|\n").expect("whitespace pattern is valid")
});

/// How many placeholder tags [`inline_assets`] replaced
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InlineCounts {
    pub styles: usize,
    pub scripts: usize,
}

/// Replace both placeholder tags with inline `<style>` and `<script>` blocks
///
/// The stylesheet goes in first. The script replacement then runs over the
/// result, so a script placeholder inside the stylesheet text is replaced too.
pub fn inline_assets(assets: &Assets) -> (String, InlineCounts) {
    let styles = assets.markup.matches(STYLE_PLACEHOLDER).count();
    let with_style = assets
        .markup
        .replace(STYLE_PLACEHOLDER, &format!("<style>{}</style>", assets.style));

    let scripts = with_style.matches(SCRIPT_PLACEHOLDER).count();
    let with_script = with_style.replace(
        SCRIPT_PLACEHOLDER,
        &format!("<script>{}</script>", assets.script),
    );

    (with_script, InlineCounts { styles, scripts })
}

/// Delete every `//` and the rest of its line, leaving the newline
pub fn strip_line_comments(text: &str) -> String {
    LINE_COMMENT.replace_all(text, "").into_owned()
}

/// Delete whitespace runs of length two or more and every single newline
pub fn strip_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, "").into_owned()
}

/// Run the full pipeline over `assets`
pub fn bundle(assets: &Assets) -> (String, InlineCounts) {
    let (inlined, counts) = inline_assets(assets);
    let output = strip_whitespace(&strip_line_comments(&inlined));
    (output, counts)
}
