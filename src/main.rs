use pathprefix_common::{error::AppResult, rewrite_file, state::Config};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();

    if let Err(err) = rewrite_file(&config) {
        tracing::error!(
            path = %config.target().display(),
            error = %err,
            "could not prefix asset paths"
        );
        return Err(err.into());
    }

    Ok(())
}
