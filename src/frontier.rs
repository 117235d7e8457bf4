use std::collections::{HashMap, VecDeque};

/// Where a node was first reached from in one search direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitRecord {
    pub predecessor: Option<String>, // None only for the root
    pub depth: usize,
}

/// Visited map plus FIFO expansion queue for one direction of the search.
#[derive(Debug)]
pub struct FrontierStore {
    visited: HashMap<String, VisitRecord>,
    queue: VecDeque<(String, usize)>,
}

impl FrontierStore {
    pub fn seed(root: &str) -> Self {
        let mut visited = HashMap::new();
        visited.insert(
            root.to_string(),
            VisitRecord {
                predecessor: None,
                depth: 0,
            },
        );
        let mut queue = VecDeque::new();
        queue.push_back((root.to_string(), 0));
        FrontierStore { visited, queue }
    }

    /// Records `node` unless it was already seen. First discovery wins, so
    /// depth and predecessor never change afterwards.
    pub fn record_if_new(&mut self, node: &str, predecessor: &str, depth: usize) -> bool {
        if self.visited.contains_key(node) {
            return false;
        }
        self.visited.insert(
            node.to_string(),
            VisitRecord {
                predecessor: Some(predecessor.to_string()),
                depth,
            },
        );
        self.queue.push_back((node.to_string(), depth));
        true
    }

    /// Drains everything queued at call time, which is exactly one level.
    pub fn pop_level(&mut self) -> Vec<(String, usize)> {
        self.queue.drain(..).collect()
    }

    pub fn lookup(&self, node: &str) -> Option<&VisitRecord> {
        self.visited.get(node)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.visited.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed() {
        let store = FrontierStore::seed("A");
        assert_eq!(store.len(), 1);
        assert!(!store.is_empty());
        let record = store.lookup("A").unwrap();
        assert_eq!(record.predecessor, None);
        assert_eq!(record.depth, 0);
    }

    #[test]
    fn test_record_if_new_keeps_first_discovery() {
        let mut store = FrontierStore::seed("A");
        assert!(store.record_if_new("B", "A", 1));
        assert!(!store.record_if_new("B", "C", 2)); // rediscovery is ignored
        assert!(!store.record_if_new("A", "B", 2)); // so is the root
        let record = store.lookup("B").unwrap();
        assert_eq!(record.predecessor.as_deref(), Some("A"));
        assert_eq!(record.depth, 1);
        assert_eq!(store.lookup("A").unwrap().depth, 0);
    }

    #[test]
    fn test_pop_level_is_one_level_at_a_time() {
        let mut store = FrontierStore::seed("A");
        let level = store.pop_level();
        assert_eq!(level, vec![("A".to_string(), 0)]);
        assert!(store.is_empty());

        store.record_if_new("B", "A", 1);
        store.record_if_new("C", "A", 1);
        let level = store.pop_level();
        assert_eq!(level, vec![("B".to_string(), 1), ("C".to_string(), 1)]);

        store.record_if_new("D", "B", 2);
        let level = store.pop_level();
        assert!(level.iter().all(|(_, depth)| *depth >= 1));
        assert_eq!(level, vec![("D".to_string(), 2)]);
        assert!(store.pop_level().is_empty());
    }

    #[test]
    fn test_lookup_missing() {
        let store = FrontierStore::seed("A");
        assert!(store.lookup("Z").is_none());
    }
}
