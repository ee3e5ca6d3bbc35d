//! Error types for the Joinery core library.
//!
//! The algorithms themselves treat out-of-range ids as programming errors and
//! panic. The checked `try_*` entry points surface the same conditions as
//! [`JoineryError`] so loaders can reject bad input without unwinding.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error returned by the checked graph and union-find operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum JoineryError {
    /// A vertex id fell outside `0..vertex_count`.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// An element id fell outside `0..len` of a disjoint set.
    #[error("element {element} is out of range for a disjoint set of {len} elements")]
    ElementOutOfRange {
        /// The offending element id.
        element: usize,
        /// Number of elements in the disjoint set.
        len: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`JoineryError`] variants.
    enum JoineryErrorCode for JoineryError {
        /// A vertex id fell outside the graph.
        VertexOutOfRange => VertexOutOfRange { .. } => "JOINERY_VERTEX_OUT_OF_RANGE",
        /// An element id fell outside the disjoint set.
        ElementOutOfRange => ElementOutOfRange { .. } => "JOINERY_ELEMENT_OUT_OF_RANGE",
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, JoineryError>;
