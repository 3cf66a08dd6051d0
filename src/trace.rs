//! Per-example record of boundary evolution.
//!
//! Each processed example leaves one [`TraceStep`] describing how many
//! hypotheses left and entered each boundary and the sizes afterwards. The
//! trace is what lets callers check the boundary invariants after every prefix
//! of the example stream, not only at the end.
//!
//! # Citations
//! - Mitchell, "Machine Learning", Figures 2.4–2.7 (1997) – boundary traces on EnjoySport

use crate::label::Polarity;
use serde::{Deserialize, Serialize};

/// How one example changed the boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TraceStep {
    /// Zero-based position of the example in the stream.
    pub index: usize,
    /// Polarity the example was classified as.
    pub polarity: Polarity,
    /// Members removed from `S` (discarded, replaced or pruned).
    pub specific_removed: usize,
    /// Members admitted to `S`.
    pub specific_added: usize,
    /// Members removed from `G` (discarded, replaced or pruned).
    pub general_removed: usize,
    /// Members admitted to `G`.
    pub general_added: usize,
    /// `|S|` after the example.
    pub specific_size: usize,
    /// `|G|` after the example.
    pub general_size: usize,
}

impl TraceStep {
    /// Returns whether the example left both boundaries untouched.
    pub fn is_noop(&self) -> bool {
        self.specific_removed == 0
            && self.specific_added == 0
            && self.general_removed == 0
            && self.general_added == 0
    }
}

/// Ordered sequence of trace steps for one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTrace {
    steps: Vec<TraceStep>,
}

impl LearningTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn record_step(&mut self, step: TraceStep) {
        debug_assert_eq!(step.index, self.steps.len(), "trace steps must be contiguous");
        self.steps.push(step);
    }

    /// Number of recorded steps.
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Returns the step for example `index`.
    pub fn get_step(&self, index: usize) -> Option<&TraceStep> {
        self.steps.get(index)
    }

    /// The most recent step.
    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    /// Iterates over steps in stream order.
    pub fn steps(&self) -> impl Iterator<Item = &TraceStep> {
        self.steps.iter()
    }

    /// Number of examples that changed neither boundary.
    pub fn noop_count(&self) -> usize {
        self.steps.iter().filter(|s| s.is_noop()).count()
    }
}
