use crate::content::{project, Project, ProjectId};
use crate::scroll_lock::{LockHolder, ScrollLock};

/// Project detail overlay. Open while a project is selected; holds the page
/// scroll lock for as long as it is open.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Overlay {
    selected: Option<ProjectId>,
}

impl Overlay {
    /// Opens the detail view for `id`. Unknown ids leave the overlay closed.
    pub fn open(&mut self, id: ProjectId, lock: &mut ScrollLock) -> bool {
        if project(id).is_none() {
            log::warn!("no project with id {id}");
            return false;
        }
        self.selected = Some(id);
        lock.acquire(LockHolder::Overlay);
        true
    }

    pub fn close(&mut self, lock: &mut ScrollLock) {
        self.selected = None;
        lock.release(LockHolder::Overlay);
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected(&self) -> Option<ProjectId> {
        self.selected
    }

    pub fn project(&self) -> Option<&'static Project> {
        self.selected.and_then(project)
    }
}

/// Keys that activate a focused card or indicator dot.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PROJECTS;

    #[test]
    fn test_open_shows_that_project() {
        let mut overlay = Overlay::default();
        let mut lock = ScrollLock::default();
        for expected in PROJECTS.iter() {
            assert!(overlay.open(expected.id, &mut lock));
            let shown = overlay.project().expect("overlay is open");
            assert_eq!(shown.title, expected.title);
            assert_eq!(shown.subtitle, expected.subtitle);
            assert_eq!(shown.description, expected.description);
        }
        assert!(lock.is_locked());
    }

    #[test]
    fn test_close_clears_and_unlocks() {
        let mut overlay = Overlay::default();
        let mut lock = ScrollLock::default();
        overlay.open(1, &mut lock);
        overlay.close(&mut lock);
        assert!(!overlay.is_open());
        assert_eq!(overlay.selected(), None);
        assert_eq!(lock.overflow(), "auto");
    }

    #[test]
    fn test_close_keeps_menu_lock() {
        let mut overlay = Overlay::default();
        let mut lock = ScrollLock::default();
        lock.acquire(LockHolder::Menu);
        overlay.open(3, &mut lock);
        overlay.close(&mut lock);
        assert!(lock.is_locked());
    }

    #[test]
    fn test_unknown_id_stays_closed() {
        let mut overlay = Overlay::default();
        let mut lock = ScrollLock::default();
        assert!(!overlay.open(99, &mut lock));
        assert!(!overlay.is_open());
        assert!(!lock.is_locked());
    }

    #[test]
    fn test_activation_keys() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Escape"));
    }
}
