use core::fmt;
use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures of a single rewrite run. Only I/O can fail; any text is accepted as input.
#[derive(Error, Debug)]
pub enum RewriteError {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid rewrite pattern")]
    Pattern(#[from] regex_lite::Error),
}

impl RewriteError {
    /// The kind of the underlying I/O failure, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            RewriteError::Read { source, .. } | RewriteError::Write { source, .. } => {
                Some(source.kind())
            }
            RewriteError::Pattern(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RewriteError>;

// Top-level error for the binary. Wraps `anyhow::Error` so `main` can `?` anything.
pub struct AppError(anyhow::Error);

pub type AppResult<T> = std::result::Result<T, AppError>;

impl AppError {
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.0.downcast_ref::<E>()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// `main` returning `Err` prints the `Debug` form, so show the whole cause chain there.
impl fmt::Debug for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

// This enables using `?` on any error convertible into `anyhow::Error` inside a function that
// returns `Result<_, AppError>`.
impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
