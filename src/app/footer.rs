use leptos::prelude::*;

use crate::content::{build_year, EMAIL, OWNER, SOCIAL_LINKS};
use crate::scroll::FOOTER_LANDMARK;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer id=FOOTER_LANDMARK class="px-4 md:px-8 py-24 bg-nav text-nav-foreground">
            <div class="flex flex-col md:flex-row md:items-center justify-between gap-8 pb-16">
                <h2 class="text-6xl font-bold">"Let's talk!"</h2>
                <a
                    href=format!("mailto:{EMAIL}")
                    class="flex items-center gap-2 text-xl border-b border-current pb-1 hover:opacity-70"
                >
                    {EMAIL}
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
                        <path d="M7 17L17 7" />
                        <polyline points="7 7 17 7 17 17" />
                    </svg>
                </a>
            </div>
            <div class="flex flex-col sm:flex-row justify-between gap-4 pt-8 border-t border-current/20">
                <p>{format!("{} © — Made by {OWNER}", build_year())}</p>
                <div class="flex gap-10">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|link| {
                            view! {
                                <a
                                    href=link.href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="hover:opacity-70"
                                >
                                    {link.label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
