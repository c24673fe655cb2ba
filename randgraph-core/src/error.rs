//! Error types for the randgraph core library.
//!
//! Defines the graph contract's error enum, its stable error codes, and a
//! convenient result alias.

use thiserror::Error;

use crate::graph::VertexId;

/// Declares a stable error-code enum mirroring the variants of an error enum.
///
/// Each generated code type offers `as_str` and `Display`, and the error type
/// gains a `code()` accessor. Downstream crates use this to keep their own
/// error codes consistent with the core ones.
#[doc(hidden)]
#[macro_export]
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

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
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

/// An error produced by [`crate::Graph`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex index was not below the current vertex count.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex index.
        vertex: VertexId,
        /// Vertex count of the graph at the time of the call.
        vertex_count: usize,
    },
    /// The requested edge is not stored in the graph.
    ///
    /// Out-of-range endpoints are folded into this variant.
    #[error("edge {from} -> {to} does not exist")]
    NoSuchEdge {
        /// Source endpoint of the missing edge.
        from: VertexId,
        /// Target endpoint of the missing edge.
        to: VertexId,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex index was not below the current vertex count.
        VertexOutOfRange => VertexOutOfRange { .. } => "GRAPH_VERTEX_OUT_OF_RANGE",
        /// The requested edge is not stored in the graph.
        NoSuchEdge => NoSuchEdge { .. } => "GRAPH_NO_SUCH_EDGE",
    }
}

/// Convenient result alias for graph operations.
pub type Result<T> = core::result::Result<T, GraphError>;
