//! Hero title choreography.
//!
//! The intro is a fixed list of [`Step`]s laid out on a time line and compiled
//! into a flat, time-sorted list of [`Cue`]s. Every cue is a pure transition on
//! [`HeroState`]; the view only has to fire them at the right offsets and
//! cancel whatever is still pending when it unmounts. After the intro the
//! changing phrase is swapped forever by the [`WipePhase`] state machine.

use std::time::Duration;

pub const TITLE: &str = "Full Stack Developer";
pub const SEPARATOR: &str = "+";
pub const PHRASES: [&str; 4] = [
    "UI/UX Designer",
    "Solver",
    "Mobile Developer",
    "Aspiring ML Engineer",
];

/// Duration of every fade/slide-in; the view uses it for its CSS transition.
pub const FADE_IN: Duration = Duration::from_millis(500);
/// How far a step may start before the previous one finished.
pub const STEP_OVERLAP: Duration = Duration::from_millis(300);
pub const WIPE_DELAY: Duration = Duration::from_millis(2000);
pub const WIPE_SWEEP: Duration = Duration::from_millis(500);
pub const CONTACT_FADE_AT: Duration = Duration::from_millis(2500);
pub const DESCRIPTION_FADE_AT: Duration = Duration::from_millis(2800);
/// Duration of the contact and description fade-ins.
pub const SECONDARY_FADE_IN: Duration = Duration::from_millis(1000);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroPart {
    Title,
    Separator,
    Phrase,
    Contact,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Fade and slide the part into place.
    FadeIn(HeroPart),
    /// Type the part's text out linearly over `duration`.
    Reveal { part: HeroPart, duration: Duration },
}

impl Step {
    fn duration(&self) -> Duration {
        match self {
            Self::FadeIn(_) => FADE_IN,
            Self::Reveal { duration, .. } => *duration,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Show(HeroPart),
    /// Show the first `chars` characters of the part's text.
    Reveal { part: HeroPart, chars: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cue {
    pub at: Duration,
    pub action: Action,
}

/// Steps placed one after another. A step with an overlap starts that much
/// before the current end of the time line.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    steps: Vec<(Step, Duration)>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, step: Step) -> Self {
        self.steps.push((step, Duration::ZERO));
        self
    }

    pub fn overlapping(mut self, step: Step, overlap: Duration) -> Self {
        self.steps.push((step, overlap));
        self
    }

    /// The hero intro: title, separator, then the first phrase.
    pub fn intro() -> Self {
        Self::new()
            .then(Step::FadeIn(HeroPart::Title))
            .then(Step::Reveal {
                part: HeroPart::Title,
                duration: Duration::from_millis(1000),
            })
            .overlapping(Step::FadeIn(HeroPart::Separator), STEP_OVERLAP)
            .then(Step::Reveal {
                part: HeroPart::Separator,
                duration: Duration::from_millis(200),
            })
            .overlapping(Step::FadeIn(HeroPart::Phrase), STEP_OVERLAP)
            .then(Step::Reveal {
                part: HeroPart::Phrase,
                duration: Duration::from_millis(1000),
            })
    }

    fn placed(&self) -> Vec<(Step, Duration)> {
        let mut end = Duration::ZERO;
        let mut placed = Vec::with_capacity(self.steps.len());
        for (step, overlap) in &self.steps {
            let start = end.saturating_sub(*overlap);
            end = end.max(start + step.duration());
            placed.push((*step, start));
        }
        placed
    }

    pub fn duration(&self) -> Duration {
        self.placed()
            .iter()
            .map(|(step, start)| *start + step.duration())
            .max()
            .unwrap_or_default()
    }

    /// Flattens the steps into cues, one per revealed character.
    pub fn cues(&self) -> Vec<Cue> {
        let state = HeroState::default();
        let mut cues = Vec::new();
        for (step, start) in self.placed() {
            match step {
                Step::FadeIn(part) => cues.push(Cue {
                    at: start,
                    action: Action::Show(part),
                }),
                Step::Reveal { part, duration } => {
                    let len = state.full_text(part).chars().count() as u32;
                    for k in 1..=len {
                        cues.push(Cue {
                            at: start + duration * k / len,
                            action: Action::Reveal {
                                part,
                                chars: k as usize,
                            },
                        });
                    }
                }
            }
        }
        cues.sort_by_key(|c| c.at);
        cues
    }
}

/// Everything the hero needs to run from mount until the first wipe.
#[derive(Debug, Clone)]
pub struct Schedule {
    pub cues: Vec<Cue>,
    pub first_wipe_at: Duration,
}

impl Schedule {
    pub fn intro() -> Self {
        let timeline = Timeline::intro();
        let mut cues = timeline.cues();
        // contact and description fade in at fixed offsets from mount
        cues.push(Cue {
            at: CONTACT_FADE_AT,
            action: Action::Show(HeroPart::Contact),
        });
        cues.push(Cue {
            at: DESCRIPTION_FADE_AT,
            action: Action::Show(HeroPart::Description),
        });
        cues.sort_by_key(|c| c.at);
        Self {
            cues,
            first_wipe_at: timeline.duration() + WIPE_DELAY,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WipePhase {
    #[default]
    Waiting,
    Covering,
    Uncovering,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OverlayPosition {
    #[default]
    OffLeft,
    Covering,
    OffRight,
}

impl OverlayPosition {
    pub fn transform(self) -> &'static str {
        match self {
            Self::OffLeft => "translateX(-100%)",
            Self::Covering => "translateX(0%)",
            Self::OffRight => "translateX(100%)",
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct PartState {
    shown: bool,
    revealed: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HeroState {
    title: PartState,
    separator: PartState,
    phrase: PartState,
    contact: PartState,
    description: PartState,
    phrase_index: usize,
    phase: WipePhase,
    overlay: OverlayPosition,
    /// Whether the overlay moves with a transition or jumps.
    overlay_animated: bool,
    cycles: usize,
}

fn prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

impl HeroState {
    fn part(&self, part: HeroPart) -> &PartState {
        match part {
            HeroPart::Title => &self.title,
            HeroPart::Separator => &self.separator,
            HeroPart::Phrase => &self.phrase,
            HeroPart::Contact => &self.contact,
            HeroPart::Description => &self.description,
        }
    }

    fn part_mut(&mut self, part: HeroPart) -> &mut PartState {
        match part {
            HeroPart::Title => &mut self.title,
            HeroPart::Separator => &mut self.separator,
            HeroPart::Phrase => &mut self.phrase,
            HeroPart::Contact => &mut self.contact,
            HeroPart::Description => &mut self.description,
        }
    }

    fn full_text(&self, part: HeroPart) -> &'static str {
        match part {
            HeroPart::Title => TITLE,
            HeroPart::Separator => SEPARATOR,
            HeroPart::Phrase => self.phrase(),
            HeroPart::Contact | HeroPart::Description => "",
        }
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Show(part) => self.part_mut(part).shown = true,
            Action::Reveal { part, chars } => self.part_mut(part).revealed = chars,
        }
    }

    pub fn is_shown(&self, part: HeroPart) -> bool {
        self.part(part).shown
    }

    /// The currently displayed text of a part.
    pub fn text(&self, part: HeroPart) -> &'static str {
        prefix(self.full_text(part), self.part(part).revealed)
    }

    pub fn phrase(&self) -> &'static str {
        PHRASES[self.phrase_index]
    }

    pub fn phase(&self) -> WipePhase {
        self.phase
    }

    pub fn overlay(&self) -> OverlayPosition {
        self.overlay
    }

    pub fn overlay_animated(&self) -> bool {
        self.overlay_animated
    }

    /// Completed phrase swaps since mount.
    pub fn cycles(&self) -> usize {
        self.cycles
    }

    /// Advances the wipe cycle by one phase and returns the delay before the
    /// next call.
    pub fn wipe_step(&mut self) -> Duration {
        match self.phase {
            WipePhase::Waiting => {
                self.overlay = OverlayPosition::Covering;
                self.overlay_animated = true;
                self.phase = WipePhase::Covering;
                WIPE_SWEEP
            }
            WipePhase::Covering => {
                self.phrase_index = (self.phrase_index + 1) % PHRASES.len();
                self.phrase.revealed = self.phrase().chars().count();
                self.cycles += 1;
                self.overlay = OverlayPosition::OffRight;
                self.overlay_animated = true;
                self.phase = WipePhase::Uncovering;
                WIPE_SWEEP
            }
            WipePhase::Uncovering => {
                self.overlay = OverlayPosition::OffLeft;
                self.overlay_animated = false;
                self.phase = WipePhase::Waiting;
                WIPE_DELAY
            }
        }
    }
}
