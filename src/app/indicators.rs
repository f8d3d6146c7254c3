use leptos::{ev, prelude::*};

use super::dom::{measure_landmarks, scroll_to_top, viewport_height};
use super::timers::Timers;
use crate::scroll::{Indicators, TrailingThrottle, THROTTLE};

fn visibility(visible: bool) -> &'static str {
    if visible {
        "opacity: 1; visibility: visible; transition: opacity 0.3s, visibility 0.3s;"
    } else {
        "opacity: 0; visibility: hidden; transition: opacity 0.3s, visibility 0.3s;"
    }
}

/// Scroll hint, "Scroll Down" label and back-to-top button, toggled from the
/// landmark geometry at most once per throttle window.
#[component]
pub fn ScrollIndicators() -> impl IntoView {
    let indicators = RwSignal::new(Indicators {
        scroll_hint: true,
        ..Default::default()
    });
    let throttle = StoredValue::new(TrailingThrottle::default());
    let timers = Timers::new();

    let update = move || {
        indicators.try_set(Indicators::from_geometry(&measure_landmarks(), viewport_height()));
    };

    Effect::new(move |_| {
        update();
        let handle = window_event_listener(ev::scroll, move |_| {
            // at most one run is pending, so it reuses a single timer slot
            throttle.try_update_value(|t| {
                t.trigger_with(|| {
                    timers.replace(THROTTLE, move || {
                        throttle.try_update_value(|t| t.fire());
                        update();
                    })
                })
            });
        });
        on_cleanup(move || handle.remove());
    });

    view! {
        <div
            class="fixed bottom-8 left-1/2 -translate-x-1/2 w-6 h-10 rounded-full border-2 border-foreground animate-bounce"
            aria-hidden="true"
            style=move || visibility(indicators.with(|i| i.scroll_hint))
        ></div>
        <div
            class="fixed bottom-8 left-8 text-sm uppercase tracking-widest"
            style=move || visibility(indicators.with(|i| i.scroll_label))
        >
            "Scroll Down"
        </div>
        <button
            class="fixed bottom-8 right-8 w-12 h-12 rounded-full flex items-center justify-center bg-nav text-nav-foreground hover:-translate-y-1"
            aria-label="Scroll to top of page"
            title="Scroll to top"
            style=move || visibility(indicators.with(|i| i.back_to_top))
            on:click=move |_| scroll_to_top()
        >
            <svg
                xmlns="http://www.w3.org/2000/svg"
                viewBox="0 0 48 48"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="w-6 h-6"
                aria-hidden="true"
            >
                <polyline points="36 30 24 18 12 30"></polyline>
            </svg>
        </button>
    }
}
