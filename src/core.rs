//! Core data structures for conjunctive hypotheses.
//!
//! A hypothesis is a fixed-length vector of attribute constraints, one per
//! feature position. Each constraint is either the empty constraint `∅`
//! (matches nothing), a concrete value (matches exactly that value) or the
//! wildcard `?` (matches anything). The constraints form a three-level lattice
//! per position, and hypotheses are ordered by the product of those lattices.
//!
//! # Citations
//! - Mitchell, "Generalization as search", Artificial Intelligence 18 (1982)
//! - Mitchell, "Machine Learning", Chapter 2: Concept learning and the general-to-specific ordering (1997)

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// Constraint placed on a single feature position.
///
/// Variant order is the generality order: `Bottom < Value(_) < Wildcard`.
/// The derived `Ord` therefore sorts more specific constraints first, which the
/// boundary sets rely on for deterministic iteration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Attribute<V> {
    /// Empty constraint; no value satisfies it.
    Bottom,
    /// Exactly this value.
    Value(V),
    /// Any value.
    Wildcard,
}

impl<V> Attribute<V> {
    /// Returns whether this is the wildcard constraint.
    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Attribute::Wildcard)
    }

    /// Returns whether this is the empty constraint.
    #[inline]
    pub fn is_bottom(&self) -> bool {
        matches!(self, Attribute::Bottom)
    }

    /// Returns the concrete value, if any.
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Attribute::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<V: PartialEq> Attribute<V> {
    /// Returns whether a feature value satisfies this constraint.
    #[inline]
    pub fn matches(&self, value: &V) -> bool {
        match self {
            Attribute::Wildcard => true,
            Attribute::Value(v) => v == value,
            Attribute::Bottom => false,
        }
    }

    /// Returns whether this constraint admits every value `other` admits.
    pub fn more_general_or_equal(&self, other: &Attribute<V>) -> bool {
        match (self, other) {
            (Attribute::Wildcard, _) | (_, Attribute::Bottom) => true,
            (Attribute::Value(a), Attribute::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl<V: fmt::Display> fmt::Display for Attribute<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Bottom => write!(f, "∅"),
            Attribute::Value(v) => write!(f, "{}", v),
            Attribute::Wildcard => write!(f, "?"),
        }
    }
}

/// A conjunctive hypothesis: one constraint per feature position.
///
/// # Invariant
/// - A hypothesis is only ever evaluated against feature vectors of its own
///   length. The learner checks arity when an example enters a run, so the
///   coverage test itself does not re-validate it in release builds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hypothesis<V> {
    attributes: Vec<Attribute<V>>,
}

impl<V> Hypothesis<V> {
    /// Creates a hypothesis from explicit constraints.
    pub fn new(attributes: Vec<Attribute<V>>) -> Self {
        Self { attributes }
    }

    /// The most specific hypothesis of the given arity (all `∅`); covers nothing.
    pub fn most_specific(arity: usize) -> Self {
        Self {
            attributes: (0..arity).map(|_| Attribute::Bottom).collect(),
        }
    }

    /// The most general hypothesis of the given arity (all `?`); covers everything.
    pub fn most_general(arity: usize) -> Self {
        Self {
            attributes: (0..arity).map(|_| Attribute::Wildcard).collect(),
        }
    }

    /// Number of feature positions.
    #[inline]
    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    /// Returns whether the hypothesis has no positions at all.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Returns the constraint at `index`, if in range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Attribute<V>> {
        self.attributes.get(index)
    }

    /// Returns all constraints in position order.
    #[inline]
    pub fn attributes(&self) -> &[Attribute<V>] {
        &self.attributes
    }

    /// Iterates over constraints in position order.
    pub fn iter(&self) -> impl Iterator<Item = &Attribute<V>> + '_ {
        self.attributes.iter()
    }

    /// Returns whether some position holds `∅`, making the hypothesis cover nothing.
    pub fn is_unsatisfiable(&self) -> bool {
        self.attributes.iter().any(Attribute::is_bottom)
    }

    /// Number of wildcard positions.
    pub fn wildcard_count(&self) -> usize {
        self.attributes.iter().filter(|a| a.is_wildcard()).count()
    }
}

impl<V: Clone> Hypothesis<V> {
    /// The hypothesis that covers exactly the given feature vector.
    pub fn from_features(features: &[V]) -> Self {
        Self {
            attributes: features.iter().cloned().map(Attribute::Value).collect(),
        }
    }

    /// Returns a copy with the constraint at `index` replaced.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn with_attribute(&self, index: usize, attribute: Attribute<V>) -> Self {
        let mut attributes = self.attributes.clone();
        attributes[index] = attribute;
        Self { attributes }
    }
}

impl<V: PartialEq> Hypothesis<V> {
    /// Returns whether this hypothesis covers (classifies as target) a feature vector.
    ///
    /// Every wildcard position matches; every other position matches only the
    /// identical value, and `∅` matches nothing. A vector of a different length
    /// is never covered.
    pub fn covers(&self, features: &[V]) -> bool {
        if self.attributes.len() != features.len() {
            return false;
        }
        self.attributes
            .iter()
            .zip(features)
            .all(|(attribute, value)| attribute.matches(value))
    }

    /// Returns whether every vector covered by `other` is covered by `self`.
    ///
    /// An unsatisfiable `other` covers nothing and sits below every hypothesis.
    pub fn more_general_or_equal(&self, other: &Hypothesis<V>) -> bool {
        if other.is_unsatisfiable() {
            return true;
        }
        self.attributes
            .iter()
            .zip(&other.attributes)
            .all(|(a, b)| a.more_general_or_equal(b))
    }

    /// Returns whether `self` covers a strict superset of what `other` covers.
    pub fn strictly_more_general(&self, other: &Hypothesis<V>) -> bool {
        self.more_general_or_equal(other) && !other.more_general_or_equal(self)
    }
}

impl<V> Index<usize> for Hypothesis<V> {
    type Output = Attribute<V>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.attributes[index]
    }
}

impl<V> From<Vec<Attribute<V>>> for Hypothesis<V> {
    fn from(attributes: Vec<Attribute<V>>) -> Self {
        Self::new(attributes)
    }
}

impl<V: fmt::Display> fmt::Display for Hypothesis<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, attribute) in self.attributes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", attribute)?;
        }
        write!(f, ">")
    }
}

/// A labeled training example: a feature vector and its label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Example<V, L> {
    /// Feature values in position order.
    pub features: Vec<V>,
    /// Class label.
    pub label: L,
}

impl<V, L> Example<V, L> {
    /// Creates a new example.
    #[inline]
    pub fn new(features: Vec<V>, label: L) -> Self {
        Self { features, label }
    }

    /// Number of feature positions.
    #[inline]
    pub fn arity(&self) -> usize {
        self.features.len()
    }

    /// Returns the same features under a different label.
    pub fn relabel<M>(self, label: M) -> Example<V, M> {
        Example {
            features: self.features,
            label,
        }
    }
}

impl<V, L> From<(Vec<V>, L)> for Example<V, L> {
    fn from((features, label): (Vec<V>, L)) -> Self {
        Self::new(features, label)
    }
}
