//! Decoration reconciliation: old state vs. declared state, per resource.
//!
//! The differ is a stateless pure function. Given the previously applied
//! list and the newly declared list for one group, it emits the minimal
//! change set, partitioned by the resource each change must be applied to.

use std::collections::{HashMap, HashSet};

use log::warn;

use crate::decoration::{Decoration, DecorationChange};

/// The changes targeting one resource.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceChanges {
    /// Href of the resource the changes apply to.
    pub href: String,
    /// Changes in discovery order.
    pub changes: Vec<DecorationChange>,
}

/// Diff two decoration lists, keyed by decoration id.
///
/// - An id only in `target` is [`Added`].
/// - An id in both whose locator or style differ is [`Updated`]; identical
///   decorations produce nothing. `extras` never triggers an update.
/// - An id only in `source` is [`Removed`].
/// - An id whose locator moved to a different resource splits into a
///   [`Removed`] routed to the old resource and an [`Added`] routed to the
///   new one, so both resources converge.
///
/// Resources are returned in order of first encounter; within a resource,
/// changes keep scan order (`source` order for removals, updates and moves,
/// then `target` order for additions). A duplicated id within one list
/// resolves to its last occurrence.
///
/// [`Added`]: DecorationChange::Added
/// [`Updated`]: DecorationChange::Updated
/// [`Removed`]: DecorationChange::Removed
pub fn changes_by_href(source: &[Decoration], target: &[Decoration]) -> Vec<ResourceChanges> {
    let source = dedup_by_id(source);
    let target = dedup_by_id(target);

    let source_ids: HashSet<&str> = source.iter().map(|d| d.id.as_str()).collect();
    let target_by_id: HashMap<&str, &Decoration> =
        target.iter().map(|d| (d.id.as_str(), *d)).collect();

    let mut partitions: Vec<ResourceChanges> = Vec::new();
    let mut push = |href: &str, change: DecorationChange| {
        match partitions.iter_mut().find(|p| p.href == href) {
            Some(partition) => partition.changes.push(change),
            None => partitions.push(ResourceChanges {
                href: href.to_string(),
                changes: vec![change],
            }),
        }
    };

    for old in &source {
        match target_by_id.get(old.id.as_str()) {
            None => push(
                &old.locator.href,
                DecorationChange::Removed((*old).clone()),
            ),
            Some(new) if old.locator.href != new.locator.href => {
                push(
                    &old.locator.href,
                    DecorationChange::Removed((*old).clone()),
                );
                push(&new.locator.href, DecorationChange::Added((*new).clone()));
            }
            Some(new) if !old.renders_same_as(new) => push(
                &new.locator.href,
                DecorationChange::Updated((*new).clone()),
            ),
            Some(_) => {}
        }
    }

    for new in &target {
        if !source_ids.contains(new.id.as_str()) {
            push(&new.locator.href, DecorationChange::Added((*new).clone()));
        }
    }

    partitions
}

/// Collapse duplicated ids, keeping the position of the first occurrence and
/// the payload of the last.
pub(crate) fn dedup_by_id(decorations: &[Decoration]) -> Vec<&Decoration> {
    let mut slot_by_id: HashMap<&str, usize> = HashMap::new();
    let mut out: Vec<&Decoration> = Vec::new();

    for decoration in decorations {
        match slot_by_id.get(decoration.id.as_str()) {
            Some(&slot) => {
                warn!(
                    "duplicate decoration id {:?}; keeping the later declaration",
                    decoration.id
                );
                out[slot] = decoration;
            }
            None => {
                slot_by_id.insert(&decoration.id, out.len());
                out.push(decoration);
            }
        }
    }

    out
}
