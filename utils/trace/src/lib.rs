use tracing_subscriber::prelude::*;
use anyhow::Result;
use thiserror::Error;
use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global subscriber on stderr.
///
/// `RUST_LOG` wins over `level` when set. `json` switches the compact
/// formatter for one line of JSON per event.
pub fn tracing_init(level: &str, json: bool) -> Result<(), TracingInitError> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|source| TracingInitError::InvalidFilter { source })?;

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        registry
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };

    installed.map_err(|source| TracingInitError::SetGlobalDefault { source })?;

    Ok(())
}

#[derive(Debug, Error)]
pub enum TracingInitError {
    #[error("Invalid filter config")]
    InvalidFilter {
        #[from]
        source: tracing_subscriber::filter::ParseError,
    },

    #[error("Failed to set global default subscriber")]
    SetGlobalDefault {
        #[from]
        source: tracing_subscriber::util::TryInitError,
    },
}

