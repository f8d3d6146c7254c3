//! Page-level scroll lock shared by the project overlay and the mobile menu.
//!
//! Either feature may lock scrolling. The page is only unlocked once every
//! holder has released, so whichever closes last restores the default.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LockHolder {
    Overlay,
    Menu,
}

impl LockHolder {
    const fn bit(self) -> u8 {
        match self {
            Self::Overlay => 0b01,
            Self::Menu => 0b10,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollLock {
    holders: u8,
}

impl ScrollLock {
    pub fn acquire(&mut self, holder: LockHolder) {
        self.holders |= holder.bit();
    }

    /// No-op when `holder` does not hold the lock.
    pub fn release(&mut self, holder: LockHolder) {
        self.holders &= !holder.bit();
    }

    pub fn set(&mut self, holder: LockHolder, locked: bool) {
        if locked {
            self.acquire(holder);
        } else {
            self.release(holder);
        }
    }

    pub fn is_held_by(&self, holder: LockHolder) -> bool {
        self.holders & holder.bit() != 0
    }

    pub fn is_locked(&self) -> bool {
        self.holders != 0
    }

    /// Value for `document.body.style.overflow`.
    pub fn overflow(&self) -> &'static str {
        if self.is_locked() {
            "hidden"
        } else {
            "auto"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_holder() {
        let mut lock = ScrollLock::default();
        assert_eq!(lock.overflow(), "auto");
        lock.acquire(LockHolder::Overlay);
        assert!(lock.is_locked());
        assert_eq!(lock.overflow(), "hidden");
        lock.release(LockHolder::Overlay);
        assert!(!lock.is_locked());
        assert_eq!(lock.overflow(), "auto");
    }

    #[test]
    fn test_last_closer_restores_default() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockHolder::Menu);
        lock.acquire(LockHolder::Overlay);

        lock.release(LockHolder::Menu);
        assert!(lock.is_locked(), "overlay still open");
        assert!(lock.is_held_by(LockHolder::Overlay));

        lock.release(LockHolder::Overlay);
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_release_without_acquire_is_noop() {
        let mut lock = ScrollLock::default();
        lock.acquire(LockHolder::Overlay);
        lock.release(LockHolder::Menu);
        assert!(lock.is_held_by(LockHolder::Overlay));
        assert!(!lock.is_held_by(LockHolder::Menu));
    }

    #[test]
    fn test_set() {
        let mut lock = ScrollLock::default();
        lock.set(LockHolder::Menu, true);
        lock.set(LockHolder::Menu, true);
        assert!(lock.is_locked());
        lock.set(LockHolder::Menu, false);
        assert!(!lock.is_locked());
    }
}
