pub mod asset_rewriter;
