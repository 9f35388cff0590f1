use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

/// Page-wide scroll lock.
///
/// Cloning yields another handle to the same lock. The page is locked while
/// at least one [`ScrollGuard`] is alive; dropping the last guard unlocks it.
#[derive(Debug, Clone, Default)]
pub struct ScrollLock {
    holders: Arc<AtomicUsize>,
}

impl ScrollLock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn acquire(&self) -> ScrollGuard {
        let held = self.holders.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::trace!(held, "scroll lock acquired");

        ScrollGuard {
            holders: Arc::clone(&self.holders),
        }
    }

    pub fn is_locked(&self) -> bool {
        self.holders() > 0
    }

    pub fn holders(&self) -> usize {
        self.holders.load(Ordering::Acquire)
    }
}

/// Releases its hold on the [`ScrollLock`] when dropped.
#[derive(Debug)]
#[must_use = "the scroll lock is released as soon as the guard is dropped"]
pub struct ScrollGuard {
    holders: Arc<AtomicUsize>,
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        let held = self.holders.fetch_sub(1, Ordering::AcqRel) - 1;
        tracing::trace!(held, "scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guard_releases_on_drop() {
        let lock = ScrollLock::new();
        assert!(!lock.is_locked());

        let guard = lock.acquire();
        assert!(lock.is_locked());
        assert_eq!(lock.holders(), 1);

        drop(guard);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_clones_share_state() {
        let lock = ScrollLock::new();
        let page = lock.clone();

        let first = lock.acquire();
        let second = page.acquire();
        assert_eq!(page.holders(), 2);

        drop(first);
        assert!(page.is_locked());
        drop(second);
        assert!(!lock.is_locked());
    }
}
