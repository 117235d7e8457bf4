use tracing::{debug, warn};

use crate::error::{Error, Result};

/// Calls `picker` until it yields a page, giving up after `max_attempts`.
pub fn pick_endpoint<F>(max_attempts: usize, mut picker: F) -> Result<String>
where
    F: FnMut() -> Option<String>,
{
    for attempt in 1..=max_attempts {
        if let Some(page) = picker() {
            debug!(attempt, page = %page, "picked endpoint");
            return Ok(page);
        }
        warn!(attempt, max_attempts, "endpoint selection failed");
    }
    Err(Error::EndpointSelection {
        attempts: max_attempts,
    })
}

/// Uses `fixed` when given, otherwise picks one with retries.
pub fn resolve_endpoint<F>(fixed: Option<&str>, max_attempts: usize, picker: F) -> Result<String>
where
    F: FnMut() -> Option<String>,
{
    match fixed {
        Some(page) => Ok(page.to_string()),
        None => pick_endpoint(max_attempts, picker),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retries_until_success() {
        let mut answers = vec![None, None, Some("B".to_string())].into_iter();
        let page = pick_endpoint(5, || answers.next().flatten()).unwrap();
        assert_eq!(page, "B");
    }

    #[test]
    fn test_gives_up_after_ceiling() {
        let mut calls = 0;
        let result = pick_endpoint(3, || {
            calls += 1;
            None
        });
        assert!(matches!(result, Err(Error::EndpointSelection { attempts: 3 })));
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_fixed_endpoint_skips_picker() {
        let mut calls = 0;
        let page = resolve_endpoint(Some("A"), 3, || {
            calls += 1;
            None
        })
        .unwrap();
        assert_eq!(page, "A");
        assert_eq!(calls, 0);
    }
}
