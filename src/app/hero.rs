use std::time::Duration;

use leptos::prelude::*;

use super::timers::Timers;
use crate::content::EMAIL;
use crate::sequencer::{HeroPart, HeroState, Schedule, FADE_IN, SECONDARY_FADE_IN, WIPE_SWEEP};

/// Inline style of a part that fades in from `hidden_transform`.
fn fade_style(shown: bool, hidden_transform: &str, duration: Duration) -> String {
    let secs = duration.as_secs_f32();
    if shown {
        format!(
            "opacity: 1; transform: none; transition: opacity {secs}s ease-out, transform {secs}s ease-out;"
        )
    } else {
        format!("opacity: 0; transform: {hidden_transform};")
    }
}

fn wipe_style(state: &HeroState) -> String {
    let transition = if state.overlay_animated() {
        format!("transition: transform {}s ease-in-out;", WIPE_SWEEP.as_secs_f32())
    } else {
        "transition: none;".to_string()
    };
    format!("transform: {}; {transition}", state.overlay().transform())
}

/// Runs one wipe phase and schedules the next. Stops once the hero is gone.
fn run_wipe(hero: RwSignal<HeroState>, timers: Timers) {
    let Some(next) = hero.try_update(|h| h.wipe_step()) else {
        return;
    };
    timers.replace(next, move || run_wipe(hero, timers));
}

#[component]
pub fn Hero() -> impl IntoView {
    let hero = RwSignal::new(HeroState::default());
    let intro_timers = Timers::new();
    let wipe_timers = Timers::new();

    Effect::new(move |_| {
        let schedule = Schedule::intro();
        for cue in schedule.cues {
            intro_timers.after(cue.at, move || {
                hero.try_update(|h| h.apply(cue.action));
            });
        }
        wipe_timers.replace(schedule.first_wipe_at, move || run_wipe(hero, wipe_timers));
    });

    let part_style = move |part: HeroPart| {
        move || fade_style(hero.with(|h| h.is_shown(part)), "translateY(20px)", FADE_IN)
    };
    let text = move |part: HeroPart| move || hero.with(|h| h.text(part));

    view! {
        <section id="main-section" class="hero flex flex-col justify-center min-h-screen px-4 md:px-8">
            <h1 class="hero-title font-bold leading-tight text-5xl md:text-7xl">
                <span class="block" style=part_style(HeroPart::Title)>
                    {text(HeroPart::Title)}
                </span>
                <span class="relative inline-flex items-center gap-4 overflow-hidden">
                    <span style=part_style(HeroPart::Separator)>{text(HeroPart::Separator)}</span>
                    <span style=part_style(HeroPart::Phrase)>{text(HeroPart::Phrase)}</span>
                    <div
                        class="absolute inset-0 bg-foreground opacity-70 pointer-events-none"
                        aria-hidden="true"
                        style=move || hero.with(wipe_style)
                    ></div>
                </span>
            </h1>
            <div class="flex flex-col md:flex-row justify-between gap-8 mt-16">
                <div
                    class="contact-info"
                    style=move || {
                        fade_style(
                            hero.with(|h| h.is_shown(HeroPart::Contact)),
                            "translateX(-50px)",
                            SECONDARY_FADE_IN,
                        )
                    }
                >
                    <h3 class="text-xl font-bold">"Let's Talk"</h3>
                    <p>{EMAIL}</p>
                </div>
                <p
                    class="max-w-md text-lg"
                    style=move || {
                        fade_style(
                            hero.with(|h| h.is_shown(HeroPart::Description)),
                            "translateY(50px)",
                            SECONDARY_FADE_IN,
                        )
                    }
                >
                    "Hello, I'm Harsh, an online Fullstack developer focusing on brand identity, user experience, and AI focused software."
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fade_style() {
        assert_eq!(
            fade_style(false, "translateY(20px)", FADE_IN),
            "opacity: 0; transform: translateY(20px);"
        );
        assert!(fade_style(true, "translateY(20px)", FADE_IN).contains("transition: opacity 0.5s"));
    }

    #[test]
    fn test_wipe_style_follows_state() {
        let mut state = HeroState::default();
        assert_eq!(wipe_style(&state), "transform: translateX(-100%); transition: none;");
        state.wipe_step();
        assert_eq!(
            wipe_style(&state),
            "transform: translateX(0%); transition: transform 0.5s ease-in-out;"
        );
    }
}
