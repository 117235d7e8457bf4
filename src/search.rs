use tracing::{debug, info};

use crate::frontier::FrontierStore;
use crate::link_source::LinkSource;
use crate::path::{reconstruct, Path};

/// Hop budget used when none is given on the command line.
pub const DEFAULT_MAX_DEPTH: usize = 5;

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

// Expands one whole level of `own`. Returns the first node of that level
// already known to `other` within the combined budget.
fn expand_level<S: LinkSource + ?Sized>(
    direction: Direction,
    own: &mut FrontierStore,
    other: &FrontierStore,
    max_combined_depth: usize,
    source: &mut S,
) -> Option<String> {
    let level = own.pop_level();
    if level.is_empty() {
        return None;
    }
    debug!(?direction, size = level.len(), depth = level[0].1, "expanding level");

    for (node, depth) in level {
        if depth > max_combined_depth {
            continue;
        }
        if let Some(seen) = other.lookup(&node) {
            if depth + seen.depth <= max_combined_depth {
                return Some(node);
            }
        }
        // children of a node at the budget could never fit in a meeting
        if depth == max_combined_depth {
            continue;
        }
        for neighbor in source.fetch_neighbors(&node) {
            own.record_if_new(&neighbor, &node, depth + 1);
        }
    }
    None
}

/// Bidirectional breadth-first search from `start` and `end` at once.
///
/// Both directions follow the same "links to" relation, so the backward
/// side really explores what `end` links to rather than what links to it.
/// The returned path fits in `max_combined_depth` hops but is not
/// guaranteed to be the shortest one.
pub fn find_path<S: LinkSource + ?Sized>(
    start: &str,
    end: &str,
    max_combined_depth: usize,
    source: &mut S,
) -> Option<Path> {
    if start == end {
        return Some(Path::single(start));
    }

    let mut forward = FrontierStore::seed(start);
    let mut backward = FrontierStore::seed(end);

    while !forward.is_empty() || !backward.is_empty() {
        if let Some(meet) = expand_level(
            Direction::Forward,
            &mut forward,
            &backward,
            max_combined_depth,
            source,
        ) {
            info!(meet = %meet, "frontiers met");
            return Some(reconstruct(&meet, &forward, &backward));
        }
        if let Some(meet) = expand_level(
            Direction::Backward,
            &mut backward,
            &forward,
            max_combined_depth,
            source,
        ) {
            info!(meet = %meet, "frontiers met");
            return Some(reconstruct(&meet, &forward, &backward));
        }
    }

    debug!(
        forward_seen = forward.len(),
        backward_seen = backward.len(),
        "frontiers exhausted"
    );
    None
}
