//! Scroll geometry: which indicators are visible and which nav section is
//! active, computed from the viewport-relative tops of the page landmarks.

use std::time::Duration;

/// Minimum spacing between two indicator updates while scrolling.
pub const THROTTLE: Duration = Duration::from_millis(100);

pub const RESUME_LANDMARK: &str = "resume-section";
pub const TECH_LANDMARK: &str = "tech-section";
pub const PROJECTS_LANDMARK: &str = "projects-section";
pub const FOOTER_LANDMARK: &str = "footer-section";

/// Top offsets of the landmarks relative to the viewport. A landmark that is
/// not in the document counts as offset 0.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Landmarks {
    pub resume: Option<f64>,
    pub tech: Option<f64>,
    pub projects: Option<f64>,
    pub footer: Option<f64>,
}

impl Landmarks {
    /// Reads every landmark through `top_of`, which receives an element id.
    pub fn measure(mut top_of: impl FnMut(&str) -> Option<f64>) -> Self {
        Self {
            resume: top_of(RESUME_LANDMARK),
            tech: top_of(TECH_LANDMARK),
            projects: top_of(PROJECTS_LANDMARK),
            footer: top_of(FOOTER_LANDMARK),
        }
    }

    fn resume_top(&self) -> f64 {
        self.resume.unwrap_or(0.0)
    }

    fn tech_top(&self) -> f64 {
        self.tech.unwrap_or(0.0)
    }

    fn projects_top(&self) -> f64 {
        self.projects.unwrap_or(0.0)
    }

    fn footer_top(&self) -> f64 {
        self.footer.unwrap_or(0.0)
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Indicators {
    /// Bouncing scroll hint, until the resume reaches the top.
    pub scroll_hint: bool,
    /// "Scroll Down" label, while the tech grid is on screen.
    pub scroll_label: bool,
    /// Back-to-top button, once the footer is on screen.
    pub back_to_top: bool,
}

impl Indicators {
    pub fn from_geometry(landmarks: &Landmarks, viewport_height: f64) -> Self {
        Self {
            scroll_hint: landmarks.resume_top() > 0.0,
            scroll_label: landmarks.tech_top() < viewport_height && landmarks.projects_top() > 0.0,
            back_to_top: landmarks.footer_top() < viewport_height,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavSection {
    #[default]
    Home,
    Resume,
    Projects,
    Contact,
}

impl NavSection {
    pub const ALL: [NavSection; 4] = [Self::Home, Self::Resume, Self::Projects, Self::Contact];

    /// The section whose landmark has crossed the middle of the viewport, by
    /// priority footer > projects > resume > home.
    pub fn from_geometry(landmarks: &Landmarks, viewport_height: f64) -> Self {
        let middle = viewport_height / 2.0;
        if landmarks.footer_top() < middle {
            Self::Contact
        } else if landmarks.projects_top() < middle {
            Self::Projects
        } else if landmarks.resume_top() < middle {
            Self::Resume
        } else {
            Self::Home
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Resume => "Resume",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    /// Element scrolled into view on a nav click; `None` scrolls to the top.
    pub fn landmark(self) -> Option<&'static str> {
        match self {
            Self::Home => None,
            Self::Resume => Some(RESUME_LANDMARK),
            Self::Projects => Some(PROJECTS_LANDMARK),
            Self::Contact => Some(FOOTER_LANDMARK),
        }
    }

    /// Scrolls to the section with `to_landmark`, or `to_top` for Home.
    /// Returns false when the landmark is missing from the page.
    pub fn scroll_with(
        self,
        to_landmark: impl FnOnce(&'static str) -> bool,
        to_top: impl FnOnce(),
    ) -> bool {
        match self.landmark() {
            Some(id) => to_landmark(id),
            None => {
                to_top();
                true
            }
        }
    }
}

/// Trailing-edge throttle. The first event of a burst schedules one run after
/// [`THROTTLE`]; further events are absorbed until that run fires.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TrailingThrottle {
    pending: bool,
}

impl TrailingThrottle {
    /// Returns true when the caller must schedule a run.
    pub fn trigger(&mut self) -> bool {
        if self.pending {
            false
        } else {
            self.pending = true;
            true
        }
    }

    /// Like [`TrailingThrottle::trigger`], but calls `schedule` for the
    /// first event of a burst. When `schedule` reports failure the burst is
    /// dropped so the next event can schedule again.
    pub fn trigger_with(&mut self, schedule: impl FnOnce() -> bool) {
        if self.trigger() && !schedule() {
            self.pending = false;
        }
    }

    /// Marks the scheduled run as done.
    pub fn fire(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

/// Share of an element that must be on screen before it counts as seen.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_DURATION: Duration = Duration::from_millis(500);

/// Latches the first time an element is seen; leaving the viewport again does
/// not hide it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealOnce {
    seen: bool,
}

impl RevealOnce {
    /// Records a visibility report. Returns true only on the report that
    /// latches.
    pub fn observe(&mut self, visible: bool) -> bool {
        if visible && !self.seen {
            self.seen = true;
            true
        } else {
            false
        }
    }

    pub fn is_seen(&self) -> bool {
        self.seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: f64 = 800.0;

    fn landmarks(resume: f64, tech: f64, projects: f64, footer: f64) -> Landmarks {
        Landmarks {
            resume: Some(resume),
            tech: Some(tech),
            projects: Some(projects),
            footer: Some(footer),
        }
    }

    #[test]
    fn test_scroll_hint_boundary() {
        let at = |resume| Indicators::from_geometry(&landmarks(resume, 2000.0, 3000.0, 4000.0), VIEWPORT);
        assert!(at(1.0).scroll_hint);
        assert!(at(0.5).scroll_hint);
        assert!(!at(0.0).scroll_hint);
        assert!(!at(-10.0).scroll_hint);
    }

    #[test]
    fn test_scroll_label_window() {
        let label = |tech, projects| {
            Indicators::from_geometry(&landmarks(-100.0, tech, projects, 4000.0), VIEWPORT).scroll_label
        };
        assert!(!label(900.0, 1500.0), "tech below the fold");
        assert!(label(500.0, 1500.0));
        assert!(label(-200.0, 10.0));
        assert!(!label(-900.0, 0.0), "projects reached the top");
    }

    #[test]
    fn test_back_to_top() {
        let at = |footer| Indicators::from_geometry(&landmarks(-1.0, -1.0, -1.0, footer), VIEWPORT);
        assert!(!at(VIEWPORT).back_to_top);
        assert!(at(VIEWPORT - 1.0).back_to_top);
    }

    #[test]
    fn test_missing_landmarks_count_as_zero() {
        let empty = Landmarks::default();
        let indicators = Indicators::from_geometry(&empty, VIEWPORT);
        assert_eq!(
            indicators,
            Indicators {
                scroll_hint: false,
                scroll_label: false,
                back_to_top: true,
            }
        );
        assert_eq!(NavSection::from_geometry(&empty, VIEWPORT), NavSection::Contact);
    }

    #[test]
    fn test_footer_wins_when_all_qualify() {
        let all = landmarks(-300.0, -200.0, -100.0, 10.0);
        assert_eq!(NavSection::from_geometry(&all, VIEWPORT), NavSection::Contact);
    }

    #[test]
    fn test_nav_priority() {
        let nav = |resume, projects, footer| {
            NavSection::from_geometry(&landmarks(resume, 0.0, projects, footer), VIEWPORT)
        };
        assert_eq!(nav(900.0, 1800.0, 2600.0), NavSection::Home);
        assert_eq!(nav(400.0, 1800.0, 2600.0), NavSection::Home, "exactly half is not above");
        assert_eq!(nav(399.0, 1800.0, 2600.0), NavSection::Resume);
        assert_eq!(nav(-900.0, 100.0, 900.0), NavSection::Projects);
        assert_eq!(nav(-900.0, -500.0, 399.0), NavSection::Contact);
    }

    #[test]
    fn test_measure_reads_each_landmark() {
        let mut seen = Vec::new();
        let measured = Landmarks::measure(|id| {
            seen.push(id.to_string());
            if id == TECH_LANDMARK {
                None
            } else {
                Some(seen.len() as f64)
            }
        });
        assert_eq!(seen, vec![RESUME_LANDMARK, TECH_LANDMARK, PROJECTS_LANDMARK, FOOTER_LANDMARK]);
        assert_eq!(measured.resume, Some(1.0));
        assert_eq!(measured.tech, None);
        assert_eq!(measured.footer, Some(4.0));
    }

    #[test]
    fn test_landmark_for_section() {
        assert_eq!(NavSection::Home.landmark(), None);
        assert_eq!(NavSection::Contact.landmark(), Some(FOOTER_LANDMARK));
        assert_eq!(NavSection::ALL.map(NavSection::label), ["Home", "Resume", "Projects", "Contact"]);
    }

    #[test]
    fn test_throttle_absorbs_burst() {
        let mut throttle = TrailingThrottle::default();
        let scheduled = (0..10).filter(|_| throttle.trigger()).count();
        assert_eq!(scheduled, 1);
        assert!(throttle.is_pending());
        throttle.fire();
        assert!(!throttle.is_pending());
        assert!(throttle.trigger());
    }

    #[test]
    fn test_throttle_failed_schedule_rearms() {
        let mut throttle = TrailingThrottle::default();
        throttle.trigger_with(|| false);
        assert!(!throttle.is_pending());

        let mut scheduled = 0;
        for _ in 0..5 {
            throttle.trigger_with(|| {
                scheduled += 1;
                true
            });
        }
        assert_eq!(scheduled, 1);
        assert!(throttle.is_pending());
        throttle.fire();
        assert!(!throttle.is_pending());
    }

    #[test]
    fn test_reveal_latches_once() {
        let mut reveal = RevealOnce::default();
        assert!(!reveal.observe(false));
        assert!(!reveal.is_seen());
        assert!(reveal.observe(true));
        assert!(reveal.is_seen());
        assert!(!reveal.observe(false));
        assert!(reveal.is_seen());
        assert!(!reveal.observe(true));
    }

    #[test]
    fn test_scroll_with_missing_landmark() {
        let mut asked = None;
        let found = NavSection::Projects.scroll_with(
            |id| {
                asked = Some(id);
                false
            },
            || panic!("only Home scrolls to the top"),
        );
        assert!(!found);
        assert_eq!(asked, Some(PROJECTS_LANDMARK));

        let mut to_top = false;
        assert!(NavSection::Home.scroll_with(|_| false, || to_top = true));
        assert!(to_top);
        assert!(NavSection::Contact.scroll_with(|id| id == FOOTER_LANDMARK, || ()));
    }
}
