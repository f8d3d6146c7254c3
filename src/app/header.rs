use leptos::{either::Either, ev, prelude::*};

use super::dom::{measure_landmarks, scroll_to_landmark, scroll_to_top, viewport_height};
use super::{use_page_state, PageState};
use crate::content::{OWNER, PROJECTS};
use crate::scroll::NavSection;
use crate::scroll_lock::LockHolder;

fn set_menu(page: PageState, open: bool) {
    page.menu_open.set(open);
    page.scroll_lock.update(|lock| lock.set(LockHolder::Menu, open));
}

#[component]
pub fn Header() -> impl IntoView {
    let page = use_page_state();
    let active = RwSignal::new(NavSection::default());

    // Active section follows the scroll position, except while the mobile
    // menu covers the page.
    Effect::new(move |_| {
        if page.menu_open.get() {
            return;
        }
        let update = move || {
            active.try_set(NavSection::from_geometry(&measure_landmarks(), viewport_height()));
        };
        update();
        let handle = window_event_listener(ev::scroll, move |_| {
            if !page.menu_open.get_untracked() {
                update();
            }
        });
        on_cleanup(move || handle.remove());
    });

    on_cleanup(move || {
        page.scroll_lock.try_update(|lock| lock.release(LockHolder::Menu));
    });

    // a section whose landmark is missing from the page leaves everything as is
    let navigate = move |section: NavSection| {
        if !section.scroll_with(scroll_to_landmark, scroll_to_top) {
            return;
        }
        if page.menu_open.get_untracked() {
            set_menu(page, false);
        }
        active.set(section);
    };

    let menu_label = move || {
        if page.menu_open.get() {
            "Close menu"
        } else {
            "Open menu"
        }
    };

    view! {
        <header class="fixed top-0 inset-x-0 z-50 flex items-center justify-between h-[100px] px-4 md:px-8 bg-header shadow-sm transition-colors">
            <div class="text-2xl font-bold">{OWNER}</div>
            <button
                class="md:hidden flex flex-col gap-1.5 p-2"
                aria-label=menu_label
                title=menu_label
                on:click=move |_| set_menu(page, !page.menu_open.get_untracked())
            >
                <span class="block w-6 h-0.5 bg-foreground"></span>
                <span class="block w-6 h-0.5 bg-foreground"></span>
                <span class="block w-6 h-0.5 bg-foreground"></span>
            </button>
            <nav class=move || {
                if page.menu_open.get() {
                    "fixed inset-0 top-[100px] flex flex-col items-center justify-center gap-8 bg-background md:static md:flex-row md:bg-transparent"
                } else {
                    "hidden md:flex md:flex-row gap-2"
                }
            }>
                {NavSection::ALL
                    .into_iter()
                    .map(|section| {
                        view! {
                            <button
                                class=move || {
                                    if active.get() == section {
                                        "relative px-4 py-2 rounded-full bg-nav text-nav-foreground"
                                    } else {
                                        "relative px-4 py-2 rounded-full hover:opacity-70"
                                    }
                                }
                                on:click=move |_| navigate(section)
                            >
                                {(section == NavSection::Projects)
                                    .then(|| {
                                        view! {
                                            <span class="absolute -top-1 -right-1 text-xs rounded-full px-1.5 bg-foreground text-background">
                                                {PROJECTS.len()}
                                            </span>
                                        }
                                    })}
                                {section.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <ThemeToggle />
        </header>
    }
}

#[component]
fn ThemeToggle() -> impl IntoView {
    let page = use_page_state();
    let label = move || page.theme.get().aria_label();

    view! {
        <button
            class="w-10 h-10 p-2 rounded-full hover:opacity-70"
            aria-label=label
            title=label
            on:click=move |_| page.toggle_theme()
        >
            {move || {
                if page.theme.get().is_dark() {
                    Either::Left(
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                aria-hidden="true"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M12 3v1m0 16v1m9-9h-1M4 12H3m15.364 6.364l-.707-.707M6.343 6.343l-.707-.707m12.728 0l-.707.707M6.343 17.657l-.707.707M16 12a4 4 0 11-8 0 4 4 0 018 0z"
                                />
                            </svg>
                        },
                    )
                } else {
                    Either::Right(
                        view! {
                            <svg
                                xmlns="http://www.w3.org/2000/svg"
                                viewBox="0 0 24 24"
                                fill="none"
                                stroke="currentColor"
                                stroke-width="2"
                                aria-hidden="true"
                            >
                                <path
                                    stroke-linecap="round"
                                    stroke-linejoin="round"
                                    d="M20.354 15.354A9 9 0 018.646 3.646 9.003 9.003 0 0012 21a9.003 9.003 0 008.354-5.646z"
                                />
                            </svg>
                        },
                    )
                }
            }}
        </button>
    }
}
