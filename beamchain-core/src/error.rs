//! Error types for the beamchain core library.
//!
//! Connectivity failures ([`ModelError`]) and traversal failures
//! ([`WalkError`]) are raised by the model and walker directly; the
//! [`PartitionError`] wrapper attaches the feed name when they surface
//! through [`crate::Partitioner`].

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::model::{ElementId, NodeId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while building or querying a
/// [`crate::ConnectivityModel`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ModelError {
    /// Two input records share the same element id.
    #[error("element {element} is defined more than once")]
    DuplicateElementId {
        /// The repeated element id.
        element: ElementId,
    },
    /// An element connects a node to itself.
    #[error("element {element} starts and ends at node {node}")]
    SelfLoopElement {
        /// The degenerate element.
        element: ElementId,
        /// The node both ends of the element land on.
        node: NodeId,
    },
    /// A lookup referenced an element the model never stored.
    #[error("element {element} is not part of the model")]
    UnknownElement {
        /// The missing element id.
        element: ElementId,
    },
    /// A lookup referenced a node with no recorded incidence.
    #[error("node {node} is not part of the model")]
    UnknownNode {
        /// The missing node id.
        node: NodeId,
    },
    /// An element was reached through a node it does not touch.
    #[error("element {element} is not incident to node {node}")]
    DetachedElement {
        /// The element whose endpoints do not include `node`.
        element: ElementId,
        /// The node the traversal arrived from.
        node: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`ModelError`] variants.
    enum ModelErrorCode for ModelError {
        /// Two input records share the same element id.
        DuplicateElementId => DuplicateElementId { .. } => "MODEL_DUPLICATE_ELEMENT_ID",
        /// An element connects a node to itself.
        SelfLoopElement => SelfLoopElement { .. } => "MODEL_SELF_LOOP_ELEMENT",
        /// A lookup referenced an element the model never stored.
        UnknownElement => UnknownElement { .. } => "MODEL_UNKNOWN_ELEMENT",
        /// A lookup referenced a node with no recorded incidence.
        UnknownNode => UnknownNode { .. } => "MODEL_UNKNOWN_NODE",
        /// An element was reached through a node it does not touch.
        DetachedElement => DetachedElement { .. } => "MODEL_DETACHED_ELEMENT",
    }
}

/// An error produced by [`crate::ChainWalker`] traversals.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum WalkError {
    /// The walk closed back on its seed without meeting an endpoint or
    /// junction node.
    #[error(
        "chain through element {seed} is a closed loop of pass-through nodes ({} elements)",
        elements.len()
    )]
    NonTerminatingChain {
        /// Element the walk started from.
        seed: ElementId,
        /// Elements visited before the loop closed, in walk order.
        elements: Vec<ElementId>,
    },
    /// A model lookup failed mid-walk.
    #[error(transparent)]
    Model(#[from] ModelError),
}

define_error_codes! {
    /// Stable codes describing [`WalkError`] variants.
    enum WalkErrorCode for WalkError {
        /// The walk closed back on its seed.
        NonTerminatingChain => NonTerminatingChain { .. } => "WALK_NON_TERMINATING_CHAIN",
        /// A model lookup failed mid-walk.
        ModelLookup => Model(..) => "WALK_MODEL_LOOKUP",
    }
}

impl WalkError {
    /// Retrieve the inner [`ModelErrorCode`] when the walk failed on a model lookup.
    #[must_use]
    pub const fn model_code(&self) -> Option<ModelErrorCode> {
        match self {
            Self::Model(error) => Some(error.code()),
            Self::NonTerminatingChain { .. } => None,
        }
    }
}

/// Error type produced when running [`crate::Partitioner`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum PartitionError {
    /// The supplied [`crate::ElementFeed`] contained no elements.
    #[error("element feed `{feed}` contains no elements")]
    EmptyFeed {
        /// Identifier for the empty feed.
        feed: Arc<str>,
    },
    /// The connectivity model could not be built from the feed.
    #[error("element feed `{feed}` is not a valid beam mesh: {error}")]
    Model {
        /// Identifier for the offending feed.
        feed: Arc<str>,
        /// Underlying model error.
        #[source]
        error: ModelError,
    },
    /// Walking a chain failed.
    #[error("element feed `{feed}` could not be partitioned: {error}")]
    Walk {
        /// Identifier for the offending feed.
        feed: Arc<str>,
        /// Underlying traversal error.
        #[source]
        error: WalkError,
    },
}

define_error_codes! {
    /// Stable codes describing [`PartitionError`] variants.
    enum PartitionErrorCode for PartitionError {
        /// The supplied [`crate::ElementFeed`] contained no elements.
        EmptyFeed => EmptyFeed { .. } => "PARTITION_EMPTY_FEED",
        /// The connectivity model could not be built from the feed.
        ModelFailure => Model { .. } => "PARTITION_MODEL_FAILURE",
        /// Walking a chain failed.
        WalkFailure => Walk { .. } => "PARTITION_WALK_FAILURE",
    }
}

impl PartitionError {
    /// Retrieve the [`ModelErrorCode`] of the innermost model failure, if any.
    #[must_use]
    pub const fn model_code(&self) -> Option<ModelErrorCode> {
        match self {
            Self::Model { error, .. } => Some(error.code()),
            Self::Walk { error, .. } => error.model_code(),
            Self::EmptyFeed { .. } => None,
        }
    }

    /// Retrieve the [`WalkErrorCode`] when the failure happened during traversal.
    #[must_use]
    pub const fn walk_code(&self) -> Option<WalkErrorCode> {
        match self {
            Self::Walk { error, .. } => Some(error.code()),
            _ => None,
        }
    }

    /// Element ids implicated by the failure, for diagnostics.
    ///
    /// For a closed loop this is every element of the loop; for model
    /// failures it is the single offending element when one is known.
    #[must_use]
    pub fn implicated_elements(&self) -> Vec<ElementId> {
        match self {
            Self::Walk {
                error: WalkError::NonTerminatingChain { elements, .. },
                ..
            } => elements.clone(),
            Self::Walk {
                error: WalkError::Model(error),
                ..
            }
            | Self::Model { error, .. } => error.element().into_iter().collect(),
            Self::EmptyFeed { .. } => Vec::new(),
        }
    }
}

impl ModelError {
    /// The element id carried by this error, when it names one.
    #[must_use]
    pub const fn element(&self) -> Option<ElementId> {
        match self {
            Self::DuplicateElementId { element }
            | Self::SelfLoopElement { element, .. }
            | Self::UnknownElement { element }
            | Self::DetachedElement { element, .. } => Some(*element),
            Self::UnknownNode { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the partitioning API.
pub type Result<T> = core::result::Result<T, PartitionError>;
