//! Version-space concept learning with the Candidate-Elimination algorithm.
//!
//! This crate learns a boolean target concept from a stream of labeled
//! examples. Hypotheses are conjunctions of per-attribute constraints, each
//! either a concrete value, the wildcard `?` or the empty constraint `∅`.
//! Rather than enumerating every hypothesis consistent with the data, the
//! learner keeps only the two boundaries of the version space:
//! - `S`, the maximally specific consistent hypotheses;
//! - `G`, the maximally general consistent hypotheses.
//!
//! Every consistent hypothesis lies between a member of `S` and a member of `G`.
//!
//! # References
//!
//! - Mitchell, T. "Version spaces: a candidate elimination approach to rule learning" (1977)
//! - Mitchell, T. "Generalization as search" (1982)
//! - Mitchell, T. "Machine Learning", Chapter 2 (1997)
//!
//! # Example
//!
//! ```
//! use version_space::prelude::*;
//!
//! let examples = vec![
//!     Example::new(vec!["sunny", "warm", "normal"], true),
//!     Example::new(vec!["sunny", "warm", "high"], true),
//!     Example::new(vec!["rainy", "cold", "high"], false),
//! ];
//! let space = candidate_elimination(&examples).unwrap();
//! assert_eq!(space.specific().members()[0].to_string(), "<sunny, warm, ?>");
//! assert_eq!(space.classify(&["sunny", "warm", "low"]), Ok(Classification::Positive));
//! ```

pub mod boundary;
pub mod core;
pub mod domain;
pub mod elimination;
pub mod fingerprint;
pub mod label;
pub mod operations;
pub mod trace;

pub use crate::boundary::{BoundaryKind, BoundarySet};
pub use crate::core::{Attribute, Example, Hypothesis};
pub use crate::domain::{AttributeDomain, DomainError};
pub use crate::elimination::{
    candidate_elimination, candidate_elimination_with, CandidateElimination, Classification,
    LearnError, LearnerConfig, VersionSpace,
};
pub use crate::label::{LabelDomain, LabelError, LabelPolicy, Polarity};
pub use crate::trace::{LearningTrace, TraceStep};

/// Prelude for convenient usage.
pub mod prelude {
    pub use crate::boundary::{prune_boundaries, BoundaryKind, BoundarySet};
    pub use crate::core::{Attribute, Example, Hypothesis};
    pub use crate::domain::{AttributeDomain, DomainError};
    pub use crate::elimination::{
        candidate_elimination, candidate_elimination_with, CandidateElimination, Classification,
        LearnError, LearnerConfig, VersionSpace,
    };
    pub use crate::fingerprint::HashValue;
    pub use crate::label::{LabelPolicy, Polarity};
    pub use crate::operations::{covers_any, generalize, least_general_cover, specialize};
    pub use crate::trace::{LearningTrace, TraceStep};
}
