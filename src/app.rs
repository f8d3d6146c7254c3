mod dom;
#[cfg(feature = "hydrate")]
mod fetch;
mod footer;
mod header;
mod hero;
mod homepage;
mod indicators;
mod projects;
mod resume;
mod tech;
mod testimonials;
mod timers;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};
use leptos_use::use_preferred_dark;

use crate::content::OWNER;
use crate::scroll_lock::ScrollLock;
use crate::theme::ThemeMode;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Page-wide state shared through context.
#[derive(Clone, Copy)]
pub struct PageState {
    pub theme: RwSignal<ThemeMode>,
    pub scroll_lock: RwSignal<ScrollLock>,
    pub menu_open: RwSignal<bool>,
    /// Set once the user picks a mode; system preference changes are ignored
    /// from then on.
    theme_chosen: StoredValue<bool>,
}

impl PageState {
    fn new() -> Self {
        Self {
            theme: RwSignal::new(ThemeMode::default()),
            scroll_lock: RwSignal::new(ScrollLock::default()),
            menu_open: RwSignal::new(false),
            theme_chosen: StoredValue::new(false),
        }
    }

    pub fn toggle_theme(&self) {
        self.theme_chosen.set_value(true);
        self.theme.update(|t| *t = t.toggle());
    }
}

pub fn use_page_state() -> PageState {
    expect_context::<PageState>()
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let page = PageState::new();
    provide_context(page);

    let prefers_dark = use_preferred_dark();
    Effect::watch(
        move || prefers_dark.get(),
        move |dark, _, _| {
            if !page.theme_chosen.get_value() {
                page.theme.set(ThemeMode::from_preference(*dark));
            }
        },
        true,
    );

    // body overflow mirrors the shared scroll lock
    Effect::new(move |_| {
        let overflow = page.scroll_lock.with(ScrollLock::overflow);
        dom::set_body_overflow(overflow);
    });
    on_cleanup(|| {
        if cfg!(feature = "hydrate") {
            dom::set_body_overflow("");
        }
    });

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div
                class="page min-h-screen bg-background text-foreground transition-colors"
                data-theme=move || page.theme.get().as_str()
                style=move || page.theme.get().css_vars()
            >
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </div>
        </Router>
    }
}
