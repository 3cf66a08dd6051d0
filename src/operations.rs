//! Refinement operators and the consistency filter.
//!
//! These are the pure building blocks of Candidate-Elimination. None of them
//! touches learner state: the generalizer and specializer produce candidate
//! hypotheses one lattice step away from their input, and `covers_any` tells the
//! learner whether a candidate still agrees with the example history.
//!
//! # Citations
//! - Mitchell, "Version spaces: a candidate elimination approach to rule learning", IJCAI (1977)
//! - Mitchell, "Machine Learning", Section 2.5.4 (1997) – minimal generalization and specialization
//! - Plotkin, "A note on inductive generalization", Machine Intelligence 5 (1970) – least general generalization

use crate::core::{Attribute, Example, Hypothesis};
use crate::domain::AttributeDomain;

/// Returns the one-step generalizations of `hypothesis` toward `features`.
///
/// For every position whose constraint does not match the example value, one
/// candidate is produced with that single position relaxed: a differing value
/// becomes `?`, and `∅` becomes the example's value. Positions that already
/// match are left alone, so the result is empty exactly when the hypothesis
/// already covers the example.
///
/// Candidates come out in position order.
///
/// A candidate is strictly more general than its input unless the input holds
/// `∅` in more than one position: lifting one of them leaves another `∅`, so the
/// candidate still covers nothing. `⟨∅, ∅⟩` against `[3, 4]` yields `⟨3, ∅⟩`,
/// which sits one lattice step higher yet covers exactly what `⟨∅, ∅⟩` covers.
/// [`least_general_cover`] follows such steps until the example is covered.
pub fn generalize<V: Clone + PartialEq>(
    hypothesis: &Hypothesis<V>,
    features: &[V],
) -> Vec<Hypothesis<V>> {
    let mut candidates = Vec::new();
    for (position, (attribute, value)) in hypothesis.iter().zip(features).enumerate() {
        let relaxed = match attribute {
            Attribute::Bottom => Attribute::Value(value.clone()),
            Attribute::Value(v) if v != value => Attribute::Wildcard,
            _ => continue,
        };
        candidates.push(hypothesis.with_attribute(position, relaxed));
    }
    candidates
}

/// Returns the least general hypothesis that covers `features` and is at least
/// as general as `hypothesis`.
///
/// Applies [`generalize`] repeatedly, always following the candidate for the
/// lowest mismatching position. Positions are independent in a conjunctive
/// language, so the order does not affect the result.
///
/// # Examples
/// ```
/// use version_space::core::{Attribute, Hypothesis};
/// use version_space::operations::least_general_cover;
///
/// let bottom = Hypothesis::<u8>::most_specific(2);
/// assert_eq!(least_general_cover(&bottom, &[1, 1]), Hypothesis::from_features(&[1, 1]));
///
/// let seen = Hypothesis::from_features(&[1u8, 1]);
/// let cover = least_general_cover(&seen, &[1, 0]);
/// assert_eq!(cover, Hypothesis::new(vec![Attribute::Value(1), Attribute::Wildcard]));
/// ```
pub fn least_general_cover<V: Clone + PartialEq>(
    hypothesis: &Hypothesis<V>,
    features: &[V],
) -> Hypothesis<V> {
    let mut current = hypothesis.clone();
    while let Some(next) = generalize(&current, features).into_iter().next() {
        current = next;
    }
    current
}

/// Returns the one-step specializations of `hypothesis` that exclude `features`.
///
/// For each wildcard position, and each domain value at that position other
/// than the example's, one candidate pins the position to that value.
/// Positions already holding a value are not touched. Candidates come out in
/// position order, values ascending within a position.
pub fn specialize<V: Clone + Ord>(
    hypothesis: &Hypothesis<V>,
    features: &[V],
    domain: &AttributeDomain<V>,
) -> Vec<Hypothesis<V>> {
    let mut candidates = Vec::new();
    for (position, (attribute, excluded)) in hypothesis.iter().zip(features).enumerate() {
        if !attribute.is_wildcard() {
            continue;
        }
        for value in domain.values(position).filter(|v| *v != excluded) {
            candidates.push(hypothesis.with_attribute(position, Attribute::Value(value.clone())));
        }
    }
    candidates
}

/// Returns whether any hypothesis covers any example carrying `label`.
///
/// Used as the admission gate for boundary candidates: a candidate meant to
/// exclude a class is rejected if it covers some example of that class.
pub fn covers_any<V: PartialEq, L: PartialEq>(
    examples: &[Example<V, L>],
    hypotheses: &[Hypothesis<V>],
    label: &L,
) -> bool {
    examples
        .iter()
        .filter(|example| example.label == *label)
        .any(|example| hypotheses.iter().any(|h| h.covers(&example.features)))
}
