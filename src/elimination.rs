//! The Candidate-Elimination learner.
//!
//! Folds a stream of labeled examples into the two boundary sets of the version
//! space. The first example fixes the arity and the target label; every later
//! example either shrinks `G` and generalizes `S` (positive) or shrinks `S` and
//! specializes `G` (negative). Each candidate hypothesis must pass the
//! consistency gate against the examples seen so far, and after every example
//! the boundaries are pruned against each other.
//!
//! # Citations
//! - Mitchell, "Version spaces: a candidate elimination approach to rule learning", IJCAI (1977)
//! - Mitchell, "Machine Learning", Table 2.5 (1997) – the Candidate-Elimination algorithm
//! - Hirsh, Mishra & Pitt, "Version spaces and the consistency problem", Artificial Intelligence 156 (2004)

use crate::boundary::{prune_boundaries, BoundaryKind, BoundarySet};
use crate::core::{Example, Hypothesis};
use crate::domain::{AttributeDomain, DomainError};
use crate::fingerprint::{boundary_fingerprint, FingerprintError, HashValue};
use crate::label::{LabelDomain, LabelError, LabelPolicy, Polarity};
use crate::operations::{covers_any, least_general_cover, specialize};
use crate::trace::{LearningTrace, TraceStep};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;
use tracing::{debug, trace, warn};

/// Error type for a learning run.
///
/// Every variant aborts the run; no partial boundary sets are returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LearnError {
    /// The input cannot start a run (no examples, or examples without features).
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// An example's length disagrees with the run's arity.
    #[error("example {index} has {found} features, expected {expected}")]
    Schema {
        /// Zero-based example position.
        index: usize,
        /// Arity fixed by the first example.
        expected: usize,
        /// Arity of the offending example.
        found: usize,
    },
    /// A third distinct label appeared under the strict label policy.
    #[error("example {index}: {source}")]
    LabelDomain {
        /// Zero-based example position.
        index: usize,
        /// Underlying label error.
        #[source]
        source: LabelError,
    },
    /// A feature value lies outside the declared attribute domain.
    #[error("example {index} has a value at position {position} outside the attribute domain")]
    UnknownValue {
        /// Zero-based example position.
        index: usize,
        /// Offending feature position.
        position: usize,
    },
    /// No hypothesis is consistent with the examples seen so far.
    #[error("version space collapsed at example {index}: boundary {boundary} is empty")]
    EmptyVersionSpace {
        /// Example after which the boundary became empty.
        index: usize,
        /// The boundary that emptied.
        boundary: BoundaryKind,
    },
}

impl LearnError {
    fn from_domain(index: usize, err: DomainError) -> Self {
        match err {
            DomainError::ArityMismatch { expected, found } => LearnError::Schema {
                index,
                expected,
                found,
            },
            DomainError::UnknownValue { position } => LearnError::UnknownValue { index, position },
        }
    }
}

/// Options for a learning run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Prune `S` and `G` against each other after every example.
    pub prune: bool,
    /// How labels other than the target are handled.
    pub label_policy: LabelPolicy,
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            prune: true,
            label_policy: LabelPolicy::Strict,
        }
    }
}

impl LearnerConfig {
    /// Sets whether the pruning pass runs.
    pub fn with_pruning(mut self, prune: bool) -> Self {
        self.prune = prune;
        self
    }

    /// Sets the label policy.
    pub fn with_label_policy(mut self, label_policy: LabelPolicy) -> Self {
        self.label_policy = label_policy;
        self
    }
}

/// How a version space labels an unseen feature vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// Every hypothesis in the version space covers it.
    Positive,
    /// No hypothesis in the version space covers it.
    Negative,
    /// The version space is split.
    Ambiguous,
}

/// The result of a run: the target label and both boundary sets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionSpace<V, L> {
    arity: usize,
    target: L,
    specific: BoundarySet<V>,
    general: BoundarySet<V>,
}

impl<V, L> VersionSpace<V, L> {
    /// Number of feature positions.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The label treated as the target concept.
    pub fn target(&self) -> &L {
        &self.target
    }

    /// The specific boundary `S`.
    pub fn specific(&self) -> &BoundarySet<V> {
        &self.specific
    }

    /// The general boundary `G`.
    pub fn general(&self) -> &BoundarySet<V> {
        &self.general
    }

    /// Splits into `(S, G)`.
    pub fn into_boundaries(self) -> (BoundarySet<V>, BoundarySet<V>) {
        (self.specific, self.general)
    }
}

impl<V: PartialEq, L> VersionSpace<V, L> {
    /// Returns whether `S` and `G` have met in a single hypothesis.
    pub fn is_converged(&self) -> bool {
        self.specific.len() == 1 && self.specific.members() == self.general.members()
    }

    /// Classifies a feature vector by unanimous vote of the version space.
    ///
    /// Every consistent hypothesis lies above some `S` member and below some
    /// `G` member, so checking the boundaries is enough.
    ///
    /// A vector whose length differs from the arity fails with
    /// [`LearnError::Schema`] at index 0.
    pub fn classify(&self, features: &[V]) -> Result<Classification, LearnError> {
        if features.len() != self.arity {
            return Err(LearnError::Schema {
                index: 0,
                expected: self.arity,
                found: features.len(),
            });
        }
        let vote = if !self.specific.is_empty() && self.specific.iter().all(|s| s.covers(features)) {
            Classification::Positive
        } else if self.general.iter().all(|g| !g.covers(features)) {
            Classification::Negative
        } else {
            Classification::Ambiguous
        };
        Ok(vote)
    }
}

impl<V: Serialize, L> VersionSpace<V, L> {
    /// Content fingerprint of both boundaries.
    pub fn fingerprint(&self) -> Result<HashValue, FingerprintError> {
        boundary_fingerprint(&self.specific, &self.general)
    }
}

/// Incremental Candidate-Elimination learner.
///
/// Created from the first example of a stream; each further example is folded
/// in with [`observe`](Self::observe). Once the version space collapses the
/// learner keeps returning the collapse error.
#[derive(Debug, Clone)]
pub struct CandidateElimination<V: Ord, L> {
    arity: usize,
    labels: LabelDomain<L>,
    domain: AttributeDomain<V>,
    prune: bool,
    specific: BoundarySet<V>,
    general: BoundarySet<V>,
    history: Vec<Example<V, Polarity>>,
    trace: LearningTrace,
    collapsed: Option<LearnError>,
}

impl<V, L> CandidateElimination<V, L>
where
    V: Clone + Ord + Debug,
    L: Clone + PartialEq + Debug,
{
    /// Starts a run from its first example.
    ///
    /// The example's label becomes the target and its length the arity. The
    /// domain supplies the values specialization may pin a position to.
    pub fn new(
        first: &Example<V, L>,
        domain: AttributeDomain<V>,
        config: LearnerConfig,
    ) -> Result<Self, LearnError> {
        let arity = first.arity();
        if arity == 0 {
            return Err(LearnError::InvalidInput(
                "examples must carry at least one feature".to_string(),
            ));
        }
        if domain.arity() != arity {
            return Err(LearnError::Schema {
                index: 0,
                expected: domain.arity(),
                found: arity,
            });
        }
        let mut learner = Self {
            arity,
            labels: LabelDomain::new(first.label.clone(), config.label_policy),
            domain,
            prune: config.prune,
            specific: BoundarySet::specific(arity),
            general: BoundarySet::general(arity),
            history: Vec::new(),
            trace: LearningTrace::new(),
            collapsed: None,
        };
        learner.observe(first)?;
        Ok(learner)
    }

    /// Runs the learner over a whole example sequence.
    ///
    /// Arity and labels of every example are validated before any boundary
    /// work. Without a declared domain, the domain is the set of values
    /// observed across the sequence.
    pub fn run(
        examples: &[Example<V, L>],
        domain: Option<AttributeDomain<V>>,
        config: LearnerConfig,
    ) -> Result<Self, LearnError> {
        let (first, rest) = examples.split_first().ok_or_else(|| {
            LearnError::InvalidInput("at least one example is required".to_string())
        })?;
        let arity = first.arity();
        let mut labels = LabelDomain::new(first.label.clone(), config.label_policy);
        for (index, example) in examples.iter().enumerate() {
            if example.arity() != arity {
                return Err(LearnError::Schema {
                    index,
                    expected: arity,
                    found: example.arity(),
                });
            }
            labels
                .classify(&example.label)
                .map_err(|source| LearnError::LabelDomain { index, source })?;
        }
        let domain = match domain {
            Some(domain) => domain,
            None => AttributeDomain::observed(arity, examples)
                .map_err(|err| LearnError::from_domain(0, err))?,
        };

        let mut learner = Self::new(first, domain, config)?;
        for example in rest {
            learner.observe(example)?;
        }
        debug!(
            examples = examples.len(),
            specific = learner.specific.len(),
            general = learner.general.len(),
            "run complete"
        );
        Ok(learner)
    }

    /// Folds one example into the boundaries.
    pub fn observe(&mut self, example: &Example<V, L>) -> Result<TraceStep, LearnError> {
        if let Some(err) = &self.collapsed {
            return Err(err.clone());
        }
        let index = self.history.len();
        if example.arity() != self.arity {
            return Err(LearnError::Schema {
                index,
                expected: self.arity,
                found: example.arity(),
            });
        }
        self.domain
            .validate(&example.features)
            .map_err(|err| LearnError::from_domain(index, err))?;
        let polarity = self
            .labels
            .classify(&example.label)
            .map_err(|source| LearnError::LabelDomain { index, source })?;

        self.history
            .push(Example::new(example.features.clone(), polarity));
        let mut step = TraceStep {
            index,
            polarity,
            specific_removed: 0,
            specific_added: 0,
            general_removed: 0,
            general_added: 0,
            specific_size: 0,
            general_size: 0,
        };
        match polarity {
            Polarity::Positive => self.include(&example.features, &mut step),
            Polarity::Negative => self.exclude(&example.features, &mut step),
        }
        if self.prune {
            let (removed_s, removed_g) = prune_boundaries(&mut self.specific, &mut self.general);
            step.specific_removed += removed_s;
            step.general_removed += removed_g;
        }
        step.specific_size = self.specific.len();
        step.general_size = self.general.len();
        self.trace.record_step(step);
        debug!(
            index,
            ?polarity,
            specific = step.specific_size,
            general = step.general_size,
            "processed example"
        );

        let emptied = if self.specific.is_empty() {
            Some(BoundaryKind::Specific)
        } else if self.general.is_empty() {
            Some(BoundaryKind::General)
        } else {
            None
        };
        if let Some(boundary) = emptied {
            warn!(index, %boundary, "version space collapsed");
            let err = LearnError::EmptyVersionSpace { index, boundary };
            self.collapsed = Some(err.clone());
            return Err(err);
        }
        Ok(step)
    }

    /// Positive example: drop `G` members that miss it, generalize `S` members
    /// that miss it.
    fn include(&mut self, features: &[V], step: &mut TraceStep) {
        step.general_removed += self.general.take_where(|g| !g.covers(features)).len();
        let stale = self.specific.take_where(|s| !s.covers(features));
        step.specific_removed += stale.len();
        for s in &stale {
            let candidate = least_general_cover(s, features);
            if self.admit_specific(&candidate) && self.specific.insert(candidate) {
                step.specific_added += 1;
            }
        }
    }

    /// Negative example: drop `S` members that cover it, specialize `G`
    /// members that cover it.
    fn exclude(&mut self, features: &[V], step: &mut TraceStep) {
        step.specific_removed += self.specific.take_where(|s| s.covers(features)).len();
        let stale = self.general.take_where(|g| g.covers(features));
        step.general_removed += stale.len();
        for g in &stale {
            for candidate in specialize(g, features, &self.domain) {
                if self.admit_general(&candidate) && self.general.insert(candidate) {
                    step.general_added += 1;
                }
            }
        }
    }

    fn admit_specific(&self, candidate: &Hypothesis<V>) -> bool {
        if covers_any(&self.history, std::slice::from_ref(candidate), &Polarity::Negative) {
            trace!(?candidate, "specific candidate covers a negative example");
            return false;
        }
        if !self.general.encloses(candidate) {
            trace!(?candidate, "specific candidate lies outside G");
            return false;
        }
        trace!(?candidate, "specific candidate admitted");
        true
    }

    fn admit_general(&self, candidate: &Hypothesis<V>) -> bool {
        if covers_any(&self.history, std::slice::from_ref(candidate), &Polarity::Negative) {
            trace!(?candidate, "general candidate covers a negative example");
            return false;
        }
        if !self.specific.encloses(candidate) {
            trace!(?candidate, "general candidate lies outside S");
            return false;
        }
        trace!(?candidate, "general candidate admitted");
        true
    }

    /// Number of feature positions.
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// The target label.
    pub fn target(&self) -> &L {
        self.labels.target()
    }

    /// The attribute domain in use.
    pub fn domain(&self) -> &AttributeDomain<V> {
        &self.domain
    }

    /// The current specific boundary.
    pub fn specific(&self) -> &BoundarySet<V> {
        &self.specific
    }

    /// The current general boundary.
    pub fn general(&self) -> &BoundarySet<V> {
        &self.general
    }

    /// Examples folded in so far, relabeled by polarity.
    pub fn history(&self) -> &[Example<V, Polarity>] {
        &self.history
    }

    /// Per-example record of boundary changes.
    pub fn trace(&self) -> &LearningTrace {
        &self.trace
    }

    /// Returns whether the version space has collapsed.
    pub fn is_collapsed(&self) -> bool {
        self.collapsed.is_some()
    }

    /// Snapshot of the current version space.
    pub fn version_space(&self) -> VersionSpace<V, L> {
        VersionSpace {
            arity: self.arity,
            target: self.labels.target().clone(),
            specific: self.specific.clone(),
            general: self.general.clone(),
        }
    }

    /// Consumes the learner, returning its version space.
    pub fn into_version_space(self) -> VersionSpace<V, L> {
        VersionSpace {
            arity: self.arity,
            target: self.labels.target().clone(),
            specific: self.specific,
            general: self.general,
        }
    }
}

/// Learns the version space of an example sequence with default options.
///
/// The first example's label is the target; the attribute domain is the set of
/// values observed in the sequence.
///
/// # Examples
/// ```
/// use version_space::core::{Attribute, Example, Hypothesis};
/// use version_space::elimination::candidate_elimination;
///
/// let examples = vec![
///     Example::new(vec![1, 1], "Y"),
///     Example::new(vec![1, 0], "Y"),
///     Example::new(vec![0, 1], "N"),
/// ];
/// let space = candidate_elimination(&examples).unwrap();
/// let expected = Hypothesis::new(vec![Attribute::Value(1), Attribute::Wildcard]);
/// assert_eq!(space.specific().members(), &[expected.clone()]);
/// assert_eq!(space.general().members(), &[expected]);
/// ```
pub fn candidate_elimination<V, L>(examples: &[Example<V, L>]) -> Result<VersionSpace<V, L>, LearnError>
where
    V: Clone + Ord + Debug,
    L: Clone + PartialEq + Debug,
{
    candidate_elimination_with(examples, None, LearnerConfig::default())
}

/// Learns the version space of an example sequence with explicit options and,
/// optionally, a declared attribute domain.
pub fn candidate_elimination_with<V, L>(
    examples: &[Example<V, L>],
    domain: Option<AttributeDomain<V>>,
    config: LearnerConfig,
) -> Result<VersionSpace<V, L>, LearnError>
where
    V: Clone + Ord + Debug,
    L: Clone + PartialEq + Debug,
{
    CandidateElimination::run(examples, domain, config).map(CandidateElimination::into_version_space)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Attribute;

    pub(crate) fn init_logger() {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("version_space=trace"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    }

    fn h(attrs: &[Option<u8>]) -> Hypothesis<u8> {
        Hypothesis::new(
            attrs
                .iter()
                .map(|a| a.map(Attribute::Value).unwrap_or(Attribute::Wildcard))
                .collect(),
        )
    }

    fn ex(features: &[u8], label: char) -> Example<u8, char> {
        Example::new(features.to_vec(), label)
    }

    #[test]
    fn two_feature_scenario_trace() {
        init_logger();
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[1, 0], 'Y'), ex(&[0, 1], 'N')];
        let domain = AttributeDomain::observed(2, &examples).unwrap();
        let mut learner =
            CandidateElimination::new(&examples[0], domain, LearnerConfig::default()).unwrap();
        assert_eq!(learner.specific().members(), &[h(&[Some(1), Some(1)])]);
        assert_eq!(learner.general().members(), &[h(&[None, None])]);

        learner.observe(&examples[1]).unwrap();
        assert_eq!(learner.specific().members(), &[h(&[Some(1), None])]);
        assert_eq!(learner.general().members(), &[h(&[None, None])]);

        let step = learner.observe(&examples[2]).unwrap();
        assert_eq!(step.polarity, Polarity::Negative);
        assert_eq!(step.general_removed, 1);
        assert_eq!(step.general_added, 1);
        assert_eq!(learner.general().members(), &[h(&[Some(1), None])]);
        assert!(learner.version_space().is_converged());
        assert_eq!(learner.trace().step_count(), 3);
    }

    #[test]
    fn empty_input_is_invalid() {
        let examples: Vec<Example<u8, char>> = Vec::new();
        assert!(matches!(
            candidate_elimination(&examples),
            Err(LearnError::InvalidInput(_))
        ));
    }

    #[test]
    fn zero_features_are_invalid() {
        let examples = vec![ex(&[], 'Y')];
        assert!(matches!(
            candidate_elimination(&examples),
            Err(LearnError::InvalidInput(_))
        ));
    }

    #[test]
    fn ragged_examples_are_schema_errors() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[1, 0, 1], 'N')];
        assert_eq!(
            candidate_elimination(&examples).unwrap_err(),
            LearnError::Schema { index: 1, expected: 2, found: 3 }
        );
    }

    #[test]
    fn third_label_is_rejected_under_strict_policy() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N'), ex(&[0, 1], 'M')];
        match candidate_elimination(&examples) {
            Err(LearnError::LabelDomain { index, source }) => {
                assert_eq!(index, 2);
                assert_eq!(source.found, "'M'");
            }
            other => panic!("expected label domain error, got {:?}", other),
        }
    }

    #[test]
    fn merge_policy_treats_other_labels_as_negative() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N'), ex(&[0, 1], 'M')];
        let config = LearnerConfig::default().with_label_policy(LabelPolicy::MergeNegatives);
        let space = candidate_elimination_with(&examples, None, config).unwrap();
        for negative in [[0u8, 0], [0, 1]] {
            assert!(space.general().iter().all(|g| !g.covers(&negative)));
        }
    }

    #[test]
    fn contradiction_collapses() {
        init_logger();
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[1, 1], 'N')];
        assert_eq!(
            candidate_elimination(&examples).unwrap_err(),
            LearnError::EmptyVersionSpace {
                index: 1,
                boundary: BoundaryKind::Specific
            }
        );
    }

    #[test]
    fn collapsed_learner_stays_collapsed() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[1, 1], 'N')];
        let domain = AttributeDomain::observed(2, &examples).unwrap();
        let mut learner =
            CandidateElimination::new(&examples[0], domain, LearnerConfig::default()).unwrap();
        let first = learner.observe(&examples[1]).unwrap_err();
        assert!(learner.is_collapsed());
        assert_eq!(learner.observe(&examples[0]).unwrap_err(), first);
    }

    #[test]
    fn declared_domain_rejects_unknown_values() {
        let domain = AttributeDomain::declared(vec![vec![0u8, 1], vec![0, 1]]);
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[2, 1], 'N')];
        assert_eq!(
            candidate_elimination_with(&examples, Some(domain), LearnerConfig::default())
                .unwrap_err(),
            LearnError::UnknownValue { index: 1, position: 0 }
        );
    }

    #[test]
    fn declared_domain_arity_must_match() {
        let domain = AttributeDomain::declared(vec![vec![0u8, 1]]);
        let examples = vec![ex(&[1, 1], 'Y')];
        assert_eq!(
            candidate_elimination_with(&examples, Some(domain), LearnerConfig::default())
                .unwrap_err(),
            LearnError::Schema { index: 0, expected: 1, found: 2 }
        );
    }

    #[test]
    fn unused_declared_values_do_not_change_the_result() {
        // Value 2 never appears; G may only keep specializations that agree with S.
        let domain = AttributeDomain::declared(vec![vec![0u8, 1, 2], vec![0, 1, 2]]);
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N'), ex(&[1, 0], 'Y')];
        let declared =
            candidate_elimination_with(&examples, Some(domain), LearnerConfig::default()).unwrap();
        let observed = candidate_elimination(&examples).unwrap();
        assert_eq!(declared, observed);
        assert_eq!(declared.general().members(), &[h(&[Some(1), None])]);
    }

    #[test]
    fn classify_uses_boundary_vote() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N')];
        let space = candidate_elimination(&examples).unwrap();
        // S = {<1, 1>}, G = {<1, ?>, <?, 1>}
        assert_eq!(space.general().len(), 2);
        assert_eq!(space.classify(&[1, 1]), Ok(Classification::Positive));
        assert_eq!(space.classify(&[0, 0]), Ok(Classification::Negative));
        assert_eq!(space.classify(&[1, 0]), Ok(Classification::Ambiguous));
        assert!(!space.is_converged());
    }

    #[test]
    fn classify_rejects_wrong_length() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N')];
        let space = candidate_elimination(&examples).unwrap();
        assert_eq!(space.arity(), 2);
        assert_eq!(
            space.classify(&[1]),
            Err(LearnError::Schema { index: 0, expected: 2, found: 1 })
        );
        assert_eq!(
            space.classify(&[1, 1, 0]),
            Err(LearnError::Schema { index: 0, expected: 2, found: 3 })
        );
    }

    #[test]
    fn pruning_can_be_disabled() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 0], 'N')];
        let config = LearnerConfig::default().with_pruning(false);
        let space = candidate_elimination_with(&examples, None, config).unwrap();
        assert_eq!(space.general().len(), 2);
        assert_eq!(*space.target(), 'Y');
    }

    #[test]
    fn runs_are_deterministic() {
        let examples = vec![
            ex(&[0, 1, 2], 'Y'),
            ex(&[0, 2, 2], 'Y'),
            ex(&[1, 1, 0], 'N'),
            ex(&[0, 0, 1], 'N'),
        ];
        let a = candidate_elimination(&examples).unwrap();
        let b = candidate_elimination(&examples).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.fingerprint().unwrap(), b.fingerprint().unwrap());
    }

    #[test]
    fn schema_error_does_not_poison_learner() {
        let examples = vec![ex(&[1, 1], 'Y'), ex(&[0, 1], 'N')];
        let domain = AttributeDomain::observed(2, &examples).unwrap();
        let mut learner =
            CandidateElimination::new(&examples[0], domain, LearnerConfig::default()).unwrap();
        assert!(learner.observe(&ex(&[1], 'N')).is_err());
        assert!(!learner.is_collapsed());
        assert_eq!(learner.history().len(), 1);
        assert!(learner.observe(&examples[1]).is_ok());
    }
}
