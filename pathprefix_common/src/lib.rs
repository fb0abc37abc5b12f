pub mod document;
pub mod error;
pub mod rewriting;
pub mod state;

use document::{read_document, write_document};
use error::Result;
use rewriting::html::asset_rewriter::{AssetPathRewriter, RewriteReport};
use state::Config;

/// Reads `config.target`, prefixes its asset references with `config.prefix`, and writes the
/// result back to the same path. Nothing is written if the read fails.
pub fn rewrite_file(config: &Config) -> Result<RewriteReport> {
    let rewriter = AssetPathRewriter::new(config.prefix())?;

    let input = read_document(config.target())?;
    tracing::debug!(
        path = %config.target().display(),
        bytes = input.len(),
        "read document"
    );

    let (output, report) = rewriter.rewrite_with_report(&input);

    write_document(config.target(), &output)?;
    tracing::info!(
        path = %config.target().display(),
        href_attributes = report.href_attributes,
        quoted_literals = report.quoted_literals,
        "rewrote asset references"
    );

    Ok(report)
}
