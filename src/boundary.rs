//! Boundary sets of a version space.
//!
//! A version space is represented by its two boundaries: the specific boundary
//! `S` (maximally specific consistent hypotheses) and the general boundary `G`
//! (maximally general consistent hypotheses). Every consistent hypothesis lies
//! between some member of `S` and some member of `G` in the generality order.
//!
//! # Citations
//! - Mitchell, "Generalization as search", Section 4 (1982) – boundary set representation
//! - Hirsh, "Polynomial-time learning with version spaces", AAAI (1992)

use crate::core::Hypothesis;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which side of the version space a boundary set represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BoundaryKind {
    /// The specific boundary `S`.
    Specific,
    /// The general boundary `G`.
    General,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryKind::Specific => write!(f, "S"),
            BoundaryKind::General => write!(f, "G"),
        }
    }
}

/// A set of hypotheses forming one boundary of a version space.
///
/// # Invariants
/// - Members are kept sorted and free of duplicates, so iteration order is
///   deterministic and independent of insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundarySet<V> {
    kind: BoundaryKind,
    members: Vec<Hypothesis<V>>,
}

impl<V> BoundarySet<V> {
    /// Initial `S`: the single all-`∅` hypothesis.
    pub fn specific(arity: usize) -> Self {
        Self {
            kind: BoundaryKind::Specific,
            members: vec![Hypothesis::most_specific(arity)],
        }
    }

    /// Initial `G`: the single all-`?` hypothesis.
    pub fn general(arity: usize) -> Self {
        Self {
            kind: BoundaryKind::General,
            members: vec![Hypothesis::most_general(arity)],
        }
    }

    /// Which boundary this is.
    #[inline]
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns whether the boundary has no members.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in sorted order.
    #[inline]
    pub fn members(&self) -> &[Hypothesis<V>] {
        &self.members
    }

    /// Iterates over members in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &Hypothesis<V>> + '_ {
        self.members.iter()
    }

    /// Removes and returns every member for which `pred` holds, keeping order.
    pub fn take_where(&mut self, mut pred: impl FnMut(&Hypothesis<V>) -> bool) -> Vec<Hypothesis<V>> {
        let (taken, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.members)
            .into_iter()
            .partition(|h| pred(h));
        self.members = kept;
        taken
    }
}

impl<V: Ord> BoundarySet<V> {
    /// Builds a boundary from arbitrary members, sorting and deduplicating them.
    pub fn from_members(kind: BoundaryKind, mut members: Vec<Hypothesis<V>>) -> Self {
        members.sort();
        members.dedup();
        Self { kind, members }
    }

    /// Inserts a member. Returns `false` if it was already present.
    pub fn insert(&mut self, hypothesis: Hypothesis<V>) -> bool {
        match self.members.binary_search(&hypothesis) {
            Ok(_) => false,
            Err(slot) => {
                self.members.insert(slot, hypothesis);
                true
            }
        }
    }

    /// Returns whether `hypothesis` is a member.
    pub fn contains(&self, hypothesis: &Hypothesis<V>) -> bool {
        self.members.binary_search(hypothesis).is_ok()
    }

    /// Returns whether `candidate` lies on the version-space side of this boundary.
    ///
    /// For `G` that means some member is at least as general as the candidate;
    /// for `S`, the candidate is at least as general as some member.
    pub fn encloses(&self, candidate: &Hypothesis<V>) -> bool {
        match self.kind {
            BoundaryKind::General => self.members.iter().any(|g| g.more_general_or_equal(candidate)),
            BoundaryKind::Specific => self.members.iter().any(|s| candidate.more_general_or_equal(s)),
        }
    }

    /// Drops members that another member makes redundant.
    ///
    /// `S` keeps only its minimal members and `G` only its maximal ones.
    /// Returns the number of members removed.
    pub fn prune_redundant(&mut self) -> usize {
        let before = self.members.len();
        let keep: Vec<bool> = self
            .members
            .iter()
            .map(|h| {
                !self.members.iter().any(|other| match self.kind {
                    BoundaryKind::Specific => h.strictly_more_general(other),
                    BoundaryKind::General => other.strictly_more_general(h),
                })
            })
            .collect();
        // `retain` visits members in order, matching `keep`.
        let mut keep = keep.into_iter();
        self.members.retain(|_| keep.next().unwrap_or(true));
        before - self.members.len()
    }

    /// Drops members that fall outside the opposite boundary.
    ///
    /// Returns the number of members removed.
    pub fn retain_enclosed_by(&mut self, opposite: &BoundarySet<V>) -> usize {
        debug_assert_ne!(self.kind, opposite.kind, "pruning against the same boundary kind");
        let before = self.members.len();
        self.members.retain(|h| opposite.encloses(h));
        before - self.members.len()
    }
}

impl<V: fmt::Display> fmt::Display for BoundarySet<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {{", self.kind)?;
        for (i, h) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", h)?;
        }
        write!(f, "}}")
    }
}

/// Prunes `S` and `G` against each other and themselves.
///
/// Removes redundant members within each boundary, then members of either
/// boundary that no member of the other encloses. Returns the number of
/// members removed from `S` and from `G`.
pub fn prune_boundaries<V: Ord>(
    specific: &mut BoundarySet<V>,
    general: &mut BoundarySet<V>,
) -> (usize, usize) {
    let mut removed_s = specific.prune_redundant();
    let mut removed_g = general.prune_redundant();
    removed_s += specific.retain_enclosed_by(general);
    removed_g += general.retain_enclosed_by(specific);
    (removed_s, removed_g)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Attribute;

    fn h(attrs: &[Option<u8>]) -> Hypothesis<u8> {
        Hypothesis::new(
            attrs
                .iter()
                .map(|a| a.map(Attribute::Value).unwrap_or(Attribute::Wildcard))
                .collect(),
        )
    }

    #[test]
    fn initial_boundaries() {
        let s = BoundarySet::<u8>::specific(2);
        let g = BoundarySet::<u8>::general(2);
        assert_eq!(s.len(), 1);
        assert!(s.members()[0].is_unsatisfiable());
        assert_eq!(g.members()[0], h(&[None, None]));
        assert!(g.encloses(&s.members()[0]));
        assert!(s.encloses(&g.members()[0]));
    }

    #[test]
    fn members_are_sorted_and_unique() {
        let mut set = BoundarySet::from_members(
            BoundaryKind::General,
            vec![h(&[None, Some(0)]), h(&[Some(1), None]), h(&[None, Some(0)])],
        );
        assert_eq!(set.len(), 2);
        assert!(!set.insert(h(&[Some(1), None])));
        assert!(set.insert(h(&[Some(0), None])));
        let mut sorted = set.members().to_vec();
        sorted.sort();
        assert_eq!(sorted, set.members());
    }

    #[test]
    fn general_keeps_maximal_members() {
        let mut g = BoundarySet::from_members(
            BoundaryKind::General,
            vec![h(&[Some(1), None]), h(&[Some(1), Some(0)]), h(&[None, Some(1)])],
        );
        assert_eq!(g.prune_redundant(), 1);
        assert!(!g.contains(&h(&[Some(1), Some(0)])));
    }

    #[test]
    fn specific_keeps_minimal_members() {
        let mut s = BoundarySet::from_members(
            BoundaryKind::Specific,
            vec![h(&[Some(1), None]), h(&[Some(1), Some(0)])],
        );
        assert_eq!(s.prune_redundant(), 1);
        assert_eq!(s.members(), &[h(&[Some(1), Some(0)])]);
    }

    #[test]
    fn cross_pruning_drops_unbracketed_members() {
        let mut s = BoundarySet::from_members(BoundaryKind::Specific, vec![h(&[Some(1), Some(1)])]);
        let mut g = BoundarySet::from_members(
            BoundaryKind::General,
            vec![h(&[Some(1), None]), h(&[None, Some(0)])],
        );
        assert_eq!(prune_boundaries(&mut s, &mut g), (0, 1));
        assert_eq!(g.members(), &[h(&[Some(1), None])]);
    }

    /// Pruning works on values that are only ordered, never cloned.
    #[test]
    fn pruning_does_not_require_clone() {
        #[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
        struct Token(u8);

        let hyp = |attrs: Vec<Attribute<Token>>| Hypothesis::new(attrs);
        let mut s = BoundarySet::from_members(
            BoundaryKind::Specific,
            vec![
                hyp(vec![Attribute::Value(Token(1)), Attribute::Value(Token(1))]),
                hyp(vec![Attribute::Value(Token(1)), Attribute::Wildcard]),
            ],
        );
        let mut g = BoundarySet::from_members(
            BoundaryKind::General,
            vec![
                hyp(vec![Attribute::Value(Token(1)), Attribute::Wildcard]),
                hyp(vec![Attribute::Wildcard, Attribute::Value(Token(0))]),
            ],
        );
        assert_eq!(prune_boundaries(&mut s, &mut g), (1, 1));
        assert_eq!(
            s.members(),
            &[hyp(vec![Attribute::Value(Token(1)), Attribute::Value(Token(1))])]
        );
        assert_eq!(
            g.members(),
            &[hyp(vec![Attribute::Value(Token(1)), Attribute::Wildcard])]
        );
    }

    #[test]
    fn take_where_splits_members() {
        let mut g = BoundarySet::from_members(
            BoundaryKind::General,
            vec![h(&[Some(1), None]), h(&[None, Some(0)])],
        );
        let taken = g.take_where(|m| m.covers(&[1, 1]));
        assert_eq!(taken, vec![h(&[Some(1), None])]);
        assert_eq!(g.members(), &[h(&[None, Some(0)])]);
    }

    #[test]
    fn display_lists_members() {
        let g = BoundarySet::<u8>::general(2);
        assert_eq!(g.to_string(), "G = {<?, ?>}");
    }
}
