use regex_lite::{Captures, Regex};

use crate::{error::Result, rewriting::rewriter::Rewriter};

// Double-quoted `href` value, greedy up to the last `"` on the same line.
const HREF_PATTERN: &str = r#"href="([^\n\r\x{2028}\x{2029}]*)""#;
// Any single-quoted run, stopping at the first closing quote. May span lines.
const QUOTED_LITERAL_PATTERN: &str = r"'([^']*)'";

/// How many references each pass rewrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteReport {
    pub href_attributes: usize,
    pub quoted_literals: usize,
}

impl RewriteReport {
    pub fn total(&self) -> usize {
        self.href_attributes + self.quoted_literals
    }
}

/// Prefixes asset references in raw HTML text. Works on text patterns, not on a parsed document,
/// so anything that looks like `href="..."` or `'...'` is rewritten wherever it appears.
pub struct AssetPathRewriter {
    prefix: String,
    href: Regex,
    quoted_literal: Regex,
}

impl AssetPathRewriter {
    pub fn new(prefix: impl Into<String>) -> Result<Self> {
        Ok(Self {
            prefix: prefix.into(),
            href: Regex::new(HREF_PATTERN)?,
            quoted_literal: Regex::new(QUOTED_LITERAL_PATTERN)?,
        })
    }

    /// `href="X"` becomes `href="<prefix>X"` for every match.
    pub fn rewrite_href_attributes(&self, input: &str) -> (String, usize) {
        let mut count = 0;
        let output = self.href.replace_all(input, |caps: &Captures<'_>| {
            count += 1;
            format!(r#"href="{}{}""#, self.prefix, &caps[1])
        });

        (output.into_owned(), count)
    }

    /// `'Y'` becomes `'<prefix>Y'` for every match.
    pub fn rewrite_quoted_literals(&self, input: &str) -> (String, usize) {
        let mut count = 0;
        let output = self.quoted_literal.replace_all(input, |caps: &Captures<'_>| {
            count += 1;
            format!("'{}{}'", self.prefix, &caps[1])
        });

        (output.into_owned(), count)
    }

    /// Runs both passes. The literal pass sees the output of the `href` pass.
    pub fn rewrite_with_report(&self, input: &str) -> (String, RewriteReport) {
        let (after_href, href_attributes) = self.rewrite_href_attributes(input);
        tracing::debug!(matches = href_attributes, "rewrote href attributes");

        let (output, quoted_literals) = self.rewrite_quoted_literals(&after_href);
        tracing::debug!(matches = quoted_literals, "rewrote quoted literals");

        (
            output,
            RewriteReport {
                href_attributes,
                quoted_literals,
            },
        )
    }
}

impl Rewriter for AssetPathRewriter {
    fn rewrite(&self, input: &str) -> String {
        self.rewrite_with_report(input).0
    }
}
