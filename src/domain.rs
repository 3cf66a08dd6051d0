//! Attribute value domains.
//!
//! Specialization needs to know which concrete values a position can take.
//! A domain is either declared by the caller up front or collected from the
//! example sequence of a run.

use crate::core::Example;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use thiserror::Error;

/// Error type for domain construction and validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Feature vector length differs from the domain arity.
    #[error("feature vector has {found} positions, domain has {expected}")]
    ArityMismatch {
        /// Domain arity.
        expected: usize,
        /// Observed vector length.
        found: usize,
    },
    /// A value is not part of its position's domain.
    #[error("value at position {position} is outside the declared domain")]
    UnknownValue {
        /// Offending position.
        position: usize,
    },
}

/// Per-position sets of admissible concrete values.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeDomain<V: Ord> {
    positions: Vec<BTreeSet<V>>,
}

impl<V: Ord + Clone> AttributeDomain<V> {
    /// Declares the domain explicitly, one value list per position.
    ///
    /// Duplicates within a position are collapsed.
    pub fn declared<I, P>(positions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: IntoIterator<Item = V>,
    {
        Self {
            positions: positions
                .into_iter()
                .map(|values| values.into_iter().collect())
                .collect(),
        }
    }

    /// Collects every value observed at each position.
    ///
    /// Fails if the examples disagree on arity.
    pub fn observed<'a, L: 'a>(
        arity: usize,
        examples: impl IntoIterator<Item = &'a Example<V, L>>,
    ) -> Result<Self, DomainError>
    where
        V: 'a,
    {
        let mut positions = vec![BTreeSet::new(); arity];
        for example in examples {
            if example.arity() != arity {
                return Err(DomainError::ArityMismatch {
                    expected: arity,
                    found: example.arity(),
                });
            }
            for (set, value) in positions.iter_mut().zip(&example.features) {
                set.insert(value.clone());
            }
        }
        Ok(Self { positions })
    }

    /// Number of positions.
    #[inline]
    pub fn arity(&self) -> usize {
        self.positions.len()
    }

    /// Values admissible at `position`, in ascending order.
    pub fn values(&self, position: usize) -> impl Iterator<Item = &V> + '_ {
        self.positions
            .get(position)
            .into_iter()
            .flat_map(|set| set.iter())
    }

    /// Returns whether `value` is admissible at `position`.
    pub fn contains(&self, position: usize, value: &V) -> bool {
        self.positions
            .get(position)
            .map(|set| set.contains(value))
            .unwrap_or(false)
    }

    /// Size of the instance space the domain spans.
    pub fn instance_count(&self) -> usize {
        self.positions
            .iter()
            .map(BTreeSet::len)
            .fold(1usize, usize::saturating_mul)
    }

    /// Checks that a feature vector lies inside the domain.
    pub fn validate(&self, features: &[V]) -> Result<(), DomainError> {
        if features.len() != self.arity() {
            return Err(DomainError::ArityMismatch {
                expected: self.arity(),
                found: features.len(),
            });
        }
        for (position, value) in features.iter().enumerate() {
            if !self.contains(position, value) {
                return Err(DomainError::UnknownValue { position });
            }
        }
        Ok(())
    }
}
