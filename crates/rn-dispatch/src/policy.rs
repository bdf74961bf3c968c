//! Departure policies.
//!
//! A policy decides whether a waiting train may be released onto a path
//! whose entry station is free.  It is consulted only for paths with at
//! least one intermediate station; a direct origin-to-destination link is
//! rate-limited by the turn loop instead.

/// Decides whether a train may depart onto a path.
pub trait DeparturePolicy {
    /// `path_len` and `shortest_len` are edge counts; `waiting` counts the
    /// trains still at the origin, including the one being considered.
    fn may_depart(&self, path_len: usize, shortest_len: usize, waiting: usize) -> bool;
}

/// A path may take a train only if it is at most `waiting` edges longer
/// than the shortest planned path.
#[derive(Debug, Default, Clone, Copy)]
pub struct SlackPolicy;

impl DeparturePolicy for SlackPolicy {
    #[inline]
    fn may_depart(&self, path_len: usize, shortest_len: usize, waiting: usize) -> bool {
        path_len.saturating_sub(shortest_len) <= waiting
    }
}

/// Release onto any free path.
#[derive(Debug, Default, Clone, Copy)]
pub struct GreedyPolicy;

impl DeparturePolicy for GreedyPolicy {
    #[inline]
    fn may_depart(&self, _path_len: usize, _shortest_len: usize, _waiting: usize) -> bool {
        true
    }
}
