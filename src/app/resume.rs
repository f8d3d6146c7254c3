use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use super::dom::open_in_new_tab;
use crate::content::{TimelineItem, TimelineSection, RESUME_PATH, TIMELINE};
use crate::scroll::{RevealOnce, RESUME_LANDMARK, REVEAL_DURATION, REVEAL_THRESHOLD};

fn reveal_style(seen: bool) -> String {
    if seen {
        format!(
            "opacity: 1; transform: none; transition: opacity {0}s ease-out, transform {0}s ease-out;",
            REVEAL_DURATION.as_secs_f32()
        )
    } else {
        "opacity: 0; transform: translateY(20px);".to_string()
    }
}

#[component]
pub fn Resume() -> impl IntoView {
    view! {
        <section id=RESUME_LANDMARK class="px-4 md:px-8 py-24">
            <div class="flex items-center justify-between mb-12">
                <h2 class="text-5xl font-bold">"Resume"</h2>
                <button
                    class="flex items-center gap-2 px-6 py-3 rounded-full bg-nav text-nav-foreground hover:opacity-80"
                    aria-label="Download resume"
                    title="Download resume"
                    on:click=move |_| open_in_new_tab(RESUME_PATH)
                >
                    <svg
                        xmlns="http://www.w3.org/2000/svg"
                        viewBox="0 0 24 24"
                        fill="none"
                        stroke="currentColor"
                        stroke-width="2"
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        class="w-5 h-5"
                        aria-hidden="true"
                    >
                        <path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4" />
                        <polyline points="7 10 12 15 17 10" />
                        <line x1="12" y1="15" x2="12" y2="3" />
                    </svg>
                    "Download"
                </button>
            </div>
            {TIMELINE
                .iter()
                .map(|section| view! { <Timeline section=*section /> })
                .collect_view()}
        </section>
    }
}

#[component]
fn Timeline(section: TimelineSection) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-[1fr_2fr] gap-8 py-12 border-t border-foreground/20">
            <div class="flex items-baseline gap-4">
                <span class="text-sm opacity-50">{format!("({})", section.number)}</span>
                <h3 class="text-3xl font-bold">{section.title}</h3>
            </div>
            <div class="flex flex-col gap-8">
                {section.items.iter().map(|item| view! { <Entry item=*item /> }).collect_view()}
            </div>
        </div>
    }
}

/// One timeline row. Slides in the first time it scrolls into view.
#[component]
fn Entry(item: TimelineItem) -> impl IntoView {
    let el = NodeRef::<html::Div>::new();
    let reveal = RwSignal::new(RevealOnce::default());

    let observer = use_intersection_observer_with_options(
        el,
        move |entries, _| {
            let visible = entries.iter().any(|entry| entry.is_intersecting());
            reveal.try_update(|r| r.observe(visible));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![REVEAL_THRESHOLD]),
    );
    // once seen, nothing more to watch
    Effect::new(move |_| {
        if reveal.with(RevealOnce::is_seen) {
            (observer.stop)();
        }
    });

    view! {
        <div
            node_ref=el
            class="flex flex-col md:flex-row md:justify-between gap-2"
            style=move || reveal_style(reveal.with(RevealOnce::is_seen))
        >
            <div>
                <h4 class="text-xl font-bold">{item.title}</h4>
                {item.subtitle.map(|s| view! { <p class="opacity-70">{s}</p> })}
                {item.gpa.map(|g| view! { <p class="text-sm opacity-50">{g}</p> })}
            </div>
            <span class="text-sm opacity-50 whitespace-nowrap">{item.date}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_style() {
        assert_eq!(reveal_style(false), "opacity: 0; transform: translateY(20px);");
        assert!(reveal_style(true).starts_with("opacity: 1; transform: none;"));
        assert!(reveal_style(true).contains("opacity 0.5s ease-out"));
    }
}
