//! Errors raised while loading text input.

use std::io;

use joinery_core::JoineryError;
use thiserror::Error;

/// Failure to turn text input into a graph or disjoint set.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TextProviderError {
    /// The underlying reader failed.
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    /// Input ended before a mandatory header value.
    #[error("input ended before the {field}")]
    MissingHeader {
        /// Name of the missing header value.
        field: &'static str,
    },
    /// A token was not a non-negative integer.
    #[error("line {line}: expected a non-negative integer but found `{token}`")]
    InvalidInteger {
        /// One-based line holding the token.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A header count is larger than the loaders will allocate for.
    #[error("{field} {value} exceeds the supported maximum of {limit}")]
    CountTooLarge {
        /// Name of the offending header value.
        field: &'static str,
        /// Count declared in the header.
        value: usize,
        /// Largest accepted count.
        limit: usize,
    },
    /// Input ended after the first id of a pair.
    #[error("input ended halfway through pair {pair}")]
    TruncatedPair {
        /// Zero-based index of the incomplete pair.
        pair: usize,
    },
    /// Fewer edge pairs than the declared edge count.
    #[error("expected {expected} edges but input ended after {found}")]
    MissingEdges {
        /// Edge count declared in the header.
        expected: usize,
        /// Complete pairs read before the input ended.
        found: usize,
    },
    /// A pair named an id outside the declared universe.
    #[error("pair {pair}: {source}")]
    OutOfRange {
        /// Zero-based index of the offending pair.
        pair: usize,
        /// Range violation reported by the core.
        #[source]
        source: JoineryError,
    },
}

impl TextProviderError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> TextProviderErrorCode {
        match self {
            Self::Io(_) => TextProviderErrorCode::Io,
            Self::MissingHeader { .. } => TextProviderErrorCode::MissingHeader,
            Self::InvalidInteger { .. } => TextProviderErrorCode::InvalidInteger,
            Self::CountTooLarge { .. } => TextProviderErrorCode::CountTooLarge,
            Self::TruncatedPair { .. } => TextProviderErrorCode::TruncatedPair,
            Self::MissingEdges { .. } => TextProviderErrorCode::MissingEdges,
            Self::OutOfRange { .. } => TextProviderErrorCode::OutOfRange,
        }
    }
}

/// Machine-readable error codes for [`TextProviderError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum TextProviderErrorCode {
    /// The underlying reader failed.
    Io,
    /// Input ended before a mandatory header value.
    MissingHeader,
    /// A token was not a non-negative integer.
    InvalidInteger,
    /// A header count is larger than the loaders will allocate for.
    CountTooLarge,
    /// Input ended after the first id of a pair.
    TruncatedPair,
    /// Fewer edge pairs than the declared edge count.
    MissingEdges,
    /// A pair named an id outside the declared universe.
    OutOfRange,
}

impl TextProviderErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Io => "TEXT_IO",
            Self::MissingHeader => "TEXT_MISSING_HEADER",
            Self::InvalidInteger => "TEXT_INVALID_INTEGER",
            Self::CountTooLarge => "TEXT_COUNT_TOO_LARGE",
            Self::TruncatedPair => "TEXT_TRUNCATED_PAIR",
            Self::MissingEdges => "TEXT_MISSING_EDGES",
            Self::OutOfRange => "TEXT_OUT_OF_RANGE",
        }
    }
}
