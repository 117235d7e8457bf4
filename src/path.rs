use std::fmt;

use serde::Serialize;

use crate::frontier::FrontierStore;

/// Ordered chain of page identifiers from the start page to the end page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<String>);

impl Path {
    pub fn single(node: &str) -> Self {
        Path(vec![node.to_string()])
    }

    pub fn nodes(&self) -> &[String] {
        &self.0
    }

    /// Number of link hops, one less than the node count.
    pub fn hops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn lines(&self) -> String {
        self.0.join("\n")
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(" => "))
    }
}

// follows predecessors from `node` until the root of `store`
fn chain_to_root(node: &str, store: &FrontierStore) -> Vec<String> {
    let mut chain = vec![node.to_string()];
    let mut current = store.lookup(node).and_then(|r| r.predecessor.clone());
    while let Some(prev) = current {
        current = store.lookup(&prev).and_then(|r| r.predecessor.clone());
        chain.push(prev);
    }
    chain
}

/// Splices the start->meet chain and the meet->end chain into one path.
pub fn reconstruct(meet: &str, forward: &FrontierStore, backward: &FrontierStore) -> Path {
    let mut nodes = chain_to_root(meet, forward);
    nodes.reverse(); // start -> meet

    let to_end = chain_to_root(meet, backward); // already meet -> end
    nodes.extend(to_end.into_iter().skip(1));
    Path(nodes)
}
