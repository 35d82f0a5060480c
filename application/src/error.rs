//! [`Error`]-related definitions.

use std::{fmt, io, path::PathBuf};

use config::ConfigError;
use derive_more::{Display, Error as StdError, From};
use itertools::Itertools as _;
use tracerr::{Trace, Traced};

use crate::{config::InvalidPricing, request};

/// Error of running the application.
#[derive(Debug, Display, From, StdError)]
pub enum Error {
    /// Command line arguments cannot be parsed.
    #[display("failed to parse command line arguments: {_0}")]
    Args(clap::Error),

    /// [`Config`] cannot be loaded.
    ///
    /// [`Config`]: crate::Config
    #[display("failed to load `Config`: {_0}")]
    Config(ConfigError),

    /// Pricing [`Config`] is invalid.
    ///
    /// [`Config`]: crate::Config
    #[display("invalid `Config`: {_0}")]
    Pricing(InvalidPricing),

    /// Request file cannot be read.
    #[display("failed to read `{}`: {_1}", _0.display())]
    #[from(ignore)]
    Read(PathBuf, #[error(source)] io::Error),

    /// Request file is not a valid JSON.
    #[display("failed to decode request: {_0}")]
    #[from(ignore)]
    Decode(serde_json::Error),

    /// Request contains invalid data.
    #[display("invalid request: {_0}")]
    Request(request::Error),

    /// Quote cannot be encoded.
    #[display("failed to encode quote: {_0}")]
    #[from(ignore)]
    Encode(serde_json::Error),
}

/// Formats the provided [`Traced`] error along with its [`Trace`].
pub fn traced<E: fmt::Display>(err: &Traced<E>) -> impl fmt::Display + '_ {
    Formatted {
        message: err.as_ref(),
        trace: err.trace(),
    }
}

/// [`fmt::Display`] of a [`Traced`] error.
struct Formatted<'a, E> {
    /// Error message.
    message: &'a E,

    /// [`Trace`] of the error.
    trace: &'a Trace,
}

impl<E: fmt::Display> fmt::Display for Formatted<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}",
            self.message,
            self.trace
                .iter()
                .format_with("\n", |frame, f| f(&format_args!("  at {frame}"))),
        )
    }
}
