use leptos::prelude::*;

use crate::content::TECH;
use crate::scroll::TECH_LANDMARK;

#[component]
pub fn TechGrid() -> impl IntoView {
    view! {
        <section id=TECH_LANDMARK class="px-4 md:px-8 py-24">
            <div class="max-w-2xl mb-12">
                <h2 class="text-4xl font-bold mb-4">"Technologies I work with"</h2>
                <p class="opacity-70">
                    "As a frontend developer using modern ideas simplicity design and universal visual identification tailored to dedicated and current market"
                </p>
            </div>
            <div class="grid grid-cols-2 sm:grid-cols-4 gap-4">
                {TECH
                    .iter()
                    .map(|tech| {
                        view! {
                            <div
                                class="group relative flex items-center justify-center aspect-square rounded-lg bg-tech hover:bg-tech-hover text-6xl"
                                title=tech.name
                            >
                                <i
                                    class=format!("{} group-hover:hidden", tech.plain_class())
                                    aria-label=tech.name
                                ></i>
                                <i
                                    class=format!("{} hidden group-hover:inline", tech.colored_class())
                                    aria-hidden="true"
                                ></i>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
