use std::collections::HashSet;
use std::sync::Mutex;

/// Plain-mode results that were already emitted during this run.
#[derive(Debug, Default)]
pub struct SeenSet {
    inner: Mutex<HashSet<String>>,
}

impl SeenSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` and report whether this is its first appearance.
    /// Check and insert happen under one lock, so concurrent callers with the
    /// same value get `true` exactly once.
    pub fn first_sight(&self, value: &str) -> bool {
        let mut seen = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if seen.contains(value) {
            return false;
        }
        seen.insert(value.to_string())
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_first_sight() {
        let seen = SeenSet::new();
        assert!(seen.is_empty());
        assert!(seen.first_sight("a.example.com"));
        assert!(!seen.first_sight("a.example.com"));
        assert!(seen.first_sight("b.example.com"));
        assert_eq!(seen.len(), 2);
        assert!(!seen.is_empty());
    }

    #[test]
    fn test_first_sight_across_threads() {
        let seen = Arc::new(SeenSet::new());
        let firsts = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..16)
            .map(|_| {
                let seen = seen.clone();
                let firsts = firsts.clone();
                std::thread::spawn(move || {
                    for _ in 0..100 {
                        if seen.first_sight("cdn.example.com") {
                            firsts.fetch_add(1, Ordering::SeqCst);
                        }
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(firsts.load(Ordering::SeqCst), 1);
    }
}
