//! The chirp IRC bot.

use std::path::{Path, PathBuf};

use argh::FromArgs;
use figment::Figment;
use figment::providers::{Env, Format, Toml};
use miette::{IntoDiagnostic, WrapErr};
use tracing::{info, warn};

use chirp::{Chirp, Config};

/// The prefix of environment variables that override the config file.
const ENV_PREFIX: &str = "CHIRP_";

/// An IRC bot for Twitter
#[derive(Debug, FromArgs)]
struct Opts {
    /// path to config file
    #[argh(option, default = "PathBuf::from(\"config.toml\")")]
    config_path: PathBuf,
}

/// Loads the config file at `path` and merges in environment overrides, e.g.
/// `CHIRP_IRC__NICKNAME=chirp`.
fn load_config(path: &Path) -> Result<Config, figment::Error> {
    Figment::new()
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .extract()
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    // Parse command-line arguments
    let opts: Opts = argh::from_env();

    let config = load_config(&opts.config_path)
        .into_diagnostic()
        .wrap_err_with(|| format!("could not load config from {}", opts.config_path.display()))?;

    chirp::tracing::try_init(&config.tracing)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        "{} starting",
        env!("CARGO_PKG_NAME")
    );

    let chirp = Chirp::new(config)?;
    let result = chirp.run().await;

    warn!("the connection loop stopped");

    result.map_err(miette::Report::from)
}
