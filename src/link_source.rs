use std::thread;
use std::time::{Duration, Instant};

/// Anything that can list the pages a page links to.
///
/// Implementations must absorb their own failures and return an empty list
/// instead; an empty result is treated as a permanent dead end.
pub trait LinkSource {
    fn fetch_neighbors(&mut self, node: &str) -> Vec<String>;
}

impl<F> LinkSource for F
where
    F: FnMut(&str) -> Vec<String>,
{
    fn fetch_neighbors(&mut self, node: &str) -> Vec<String> {
        self(node)
    }
}

/// Wraps a link source so that consecutive fetches start at least
/// `min_interval` apart, whichever search direction issues them.
pub struct Paced<S> {
    inner: S,
    min_interval: Duration,
    last_start: Option<Instant>,
}

impl<S: LinkSource> Paced<S> {
    pub fn new(inner: S, min_interval: Duration) -> Self {
        Paced {
            inner,
            min_interval,
            last_start: None,
        }
    }
}

impl<S: LinkSource> LinkSource for Paced<S> {
    fn fetch_neighbors(&mut self, node: &str) -> Vec<String> {
        if let Some(last) = self.last_start {
            let elapsed = last.elapsed();
            if elapsed < self.min_interval {
                thread::sleep(self.min_interval - elapsed);
            }
        }
        self.last_start = Some(Instant::now());
        self.inner.fetch_neighbors(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_is_a_link_source() {
        let mut source = |node: &str| vec![format!("{}/next", node)];
        assert_eq!(source.fetch_neighbors("A"), vec!["A/next".to_string()]);
    }

    #[test]
    fn test_paced_spaces_out_fetch_starts() {
        let mut starts: Vec<Instant> = Vec::new();
        let source = |_: &str| {
            starts.push(Instant::now());
            Vec::<String>::new()
        };
        let mut paced = Paced::new(source, Duration::from_millis(30));
        for node in ["A", "B", "C"] {
            assert!(paced.fetch_neighbors(node).is_empty());
        }
        drop(paced);

        assert_eq!(starts.len(), 3);
        for pair in starts.windows(2) {
            assert!(pair[1].duration_since(pair[0]) >= Duration::from_millis(25));
        }
    }

    #[test]
    fn test_first_fetch_is_not_delayed() {
        let mut paced = Paced::new(|_: &str| Vec::<String>::new(), Duration::from_secs(5));
        let before = Instant::now();
        paced.fetch_neighbors("A");
        assert!(before.elapsed() < Duration::from_secs(1));
    }
}
