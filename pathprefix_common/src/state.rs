use std::path::{Path, PathBuf};

/// The generated page that gets rewritten, relative to the working directory.
pub const DEFAULT_TARGET: &str = "./build/index.html";

/// The subpath the built site is served under.
pub const DEFAULT_PREFIX: &str = "/test_physic_engine";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The file that is read and then overwritten in place
    pub target: PathBuf,
    /// The base path inserted in front of every rewritten asset reference
    pub prefix: String,
}

impl Config {
    pub fn new(target: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Config {
            target: target.into(),
            prefix: prefix.into(),
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_TARGET, DEFAULT_PREFIX)
    }
}
