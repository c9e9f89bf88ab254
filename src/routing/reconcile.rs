//! Route collection reconciliation.
//!
//! # Responsibilities
//! - Replace-or-insert a route keyed by the identity it was edited under
//! - Detect a candidate that would collide with an unrelated route
//! - Remove a route by key
//!
//! # Design Decisions
//! - Pure functions over owned collections; the read/write around them
//!   lives in the editor session
//! - Editing a route's method or path is a delete of the old key plus an
//!   insert of the new one
//! - The merged route is always last; the rest keep their order

use crate::model::{Route, RouteKey};

/// Merge `candidate` into `collection`, replacing the route at `original`.
///
/// Any route already sitting at the candidate's own key is dropped as well,
/// so at most one route per (method, path) survives.
pub fn merge(collection: Vec<Route>, candidate: Route, original: &RouteKey) -> Vec<Route> {
    let new_key = candidate.key();
    let mut merged: Vec<Route> = collection
        .into_iter()
        .filter(|r| !r.has_key(original) && !r.has_key(&new_key))
        .collect();
    merged.push(candidate);
    merged
}

/// The unrelated route `candidate` would overwrite, if any.
///
/// A route at `original` is the one being edited and never counts.
pub fn find_conflict<'a>(
    collection: &'a [Route],
    candidate: &Route,
    original: Option<&RouteKey>,
) -> Option<&'a Route> {
    let new_key = candidate.key();
    if original == Some(&new_key) {
        return None;
    }
    collection.iter().find(|r| r.has_key(&new_key))
}

/// Drop the route at `key`. Returns the collection and whether anything went.
pub fn remove(collection: Vec<Route>, key: &RouteKey) -> (Vec<Route>, bool) {
    let before = collection.len();
    let kept: Vec<Route> = collection.into_iter().filter(|r| !r.has_key(key)).collect();
    let removed = kept.len() != before;
    (kept, removed)
}
