//! Two-valued label domain.
//!
//! The learner distinguishes target from non-target examples. Raw labels are
//! arbitrary caller values; the first example's label is the target and the
//! first differing label becomes the negative label. Under the strict policy a
//! third distinct label is rejected instead of being folded into the negative
//! class.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Whether an example belongs to the target concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Polarity {
    /// Example carries the target label.
    Positive,
    /// Example carries the non-target label.
    Negative,
}

impl Polarity {
    /// Returns whether this is the positive polarity.
    #[inline]
    pub fn is_positive(self) -> bool {
        self == Polarity::Positive
    }
}

/// How labels other than the target are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LabelPolicy {
    /// Exactly two distinct labels may appear; a third is an error.
    #[default]
    Strict,
    /// Every label other than the target is negative.
    MergeNegatives,
}

/// Error raised when a label falls outside the two-valued domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("label {found} is neither the target {target} nor the negative label {negative}")]
pub struct LabelError {
    /// Debug rendering of the target label.
    pub target: String,
    /// Debug rendering of the negative label already in use.
    pub negative: String,
    /// Debug rendering of the offending label.
    pub found: String,
}

/// Maps raw labels onto [`Polarity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelDomain<L> {
    target: L,
    negative: Option<L>,
    policy: LabelPolicy,
}

impl<L: Clone + PartialEq + Debug> LabelDomain<L> {
    /// Creates a domain whose target is `target`.
    pub fn new(target: L, policy: LabelPolicy) -> Self {
        Self {
            target,
            negative: None,
            policy,
        }
    }

    /// The target label.
    #[inline]
    pub fn target(&self) -> &L {
        &self.target
    }

    /// The negative label, once one has been seen.
    #[inline]
    pub fn negative(&self) -> Option<&L> {
        self.negative.as_ref()
    }

    /// The active policy.
    #[inline]
    pub fn policy(&self) -> LabelPolicy {
        self.policy
    }

    /// Classifies a label, recording the first non-target label seen.
    pub fn classify(&mut self, label: &L) -> Result<Polarity, LabelError> {
        if *label == self.target {
            return Ok(Polarity::Positive);
        }
        let Some(negative) = self.negative.as_ref() else {
            self.negative = Some(label.clone());
            return Ok(Polarity::Negative);
        };
        if self.policy == LabelPolicy::Strict && negative != label {
            return Err(LabelError {
                target: format!("{:?}", self.target),
                negative: format!("{:?}", negative),
                found: format!("{:?}", label),
            });
        }
        Ok(Polarity::Negative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_and_first_other_label() {
        let mut domain = LabelDomain::new("yes", LabelPolicy::Strict);
        assert_eq!(domain.classify(&"yes"), Ok(Polarity::Positive));
        assert_eq!(domain.negative(), None);
        assert_eq!(domain.classify(&"no"), Ok(Polarity::Negative));
        assert_eq!(domain.negative(), Some(&"no"));
        assert_eq!(domain.classify(&"no"), Ok(Polarity::Negative));
    }

    #[test]
    fn strict_rejects_third_label() {
        let mut domain = LabelDomain::new('Y', LabelPolicy::Strict);
        domain.classify(&'N').unwrap();
        let err = domain.classify(&'M').unwrap_err();
        assert_eq!(err.found, "'M'");
        assert_eq!(err.negative, "'N'");
        assert!(err.to_string().contains("neither the target"));
    }

    #[test]
    fn merge_policy_folds_all_others() {
        let mut domain = LabelDomain::new(1u8, LabelPolicy::MergeNegatives);
        assert_eq!(domain.classify(&2), Ok(Polarity::Negative));
        assert_eq!(domain.classify(&3), Ok(Polarity::Negative));
        assert_eq!(domain.classify(&1), Ok(Polarity::Positive));
        assert_eq!(domain.negative(), Some(&2));
    }
}
