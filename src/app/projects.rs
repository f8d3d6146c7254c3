use leptos::{ev::KeyboardEvent, ev::MouseEvent, prelude::*};

use super::use_page_state;
use crate::content::{Project, ProjectId, PROJECTS};
use crate::overlay::{is_activation_key, Overlay};
use crate::scroll::PROJECTS_LANDMARK;
use crate::scroll_lock::LockHolder;

fn image_class(project: &Project) -> &'static str {
    if project.gradient {
        "rounded-2xl overflow-hidden bg-gradient-to-br from-neutral-200 to-neutral-500"
    } else {
        "rounded-2xl overflow-hidden bg-neutral-100"
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    let page = use_page_state();
    let overlay = RwSignal::new(Overlay::default());

    let open = move |id: ProjectId| {
        page.scroll_lock.update(|lock| {
            overlay.update(|o| {
                o.open(id, lock);
            });
        });
    };
    let close = move || {
        page.scroll_lock.update(|lock| overlay.update(|o| o.close(lock)));
    };

    on_cleanup(move || {
        page.scroll_lock.try_update(|lock| lock.release(LockHolder::Overlay));
    });

    view! {
        <section id=PROJECTS_LANDMARK class="px-4 md:px-8 py-24">
            <div class="flex items-end justify-between mb-12">
                <div class="max-w-2xl">
                    <h2 class="text-5xl font-bold mb-4">"Projects"</h2>
                    <p class="opacity-70">
                        "As a frontend developer using modern ideas simplicity design and universal visual identification tailored to dedicated and current market"
                    </p>
                </div>
            </div>
            <div class="grid md:grid-cols-2 gap-8">
                {PROJECTS
                    .iter()
                    .map(|project| {
                        let id = project.id;
                        view! {
                            <div
                                class="cursor-pointer transition-transform duration-300 hover:-translate-y-2"
                                role="button"
                                tabindex="0"
                                aria-label=format!("View project: {}", project.title)
                                on:click=move |_| open(id)
                                on:keydown=move |ev: KeyboardEvent| {
                                    if is_activation_key(&ev.key()) {
                                        ev.prevent_default();
                                        open(id);
                                    }
                                }
                            >
                                <div class=image_class(project)>
                                    <img
                                        src=project.image
                                        alt=project.title
                                        loading="lazy"
                                        width="686"
                                        height="500"
                                        class="w-full h-auto"
                                    />
                                </div>
                                <div class="mt-4">
                                    <h3 class="text-2xl font-bold">{project.title}</h3>
                                    <p class="opacity-70">{project.subtitle}</p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                overlay
                    .with(Overlay::project)
                    .map(|project| {
                        view! {
                            <div
                                class="fixed inset-0 z-[200] flex items-center justify-center p-4 bg-black/70"
                                on:click=move |_| close()
                            >
                                <div
                                    class="max-w-3xl w-full max-h-[90vh] overflow-y-auto rounded-2xl p-8 bg-background text-foreground"
                                    role="dialog"
                                    aria-modal="true"
                                    on:click=|ev: MouseEvent| ev.stop_propagation()
                                >
                                    <div class=image_class(project)>
                                        <img
                                            src=project.image
                                            alt=project.title
                                            width="686"
                                            height="500"
                                            class="w-full h-auto"
                                        />
                                    </div>
                                    <div class="mt-6">
                                        <h3 class="text-4xl font-bold">{project.title}</h3>
                                        <p class="text-2xl opacity-70">{project.subtitle}</p>
                                        <p class="mt-4 leading-relaxed whitespace-pre-line">
                                            {project.description}
                                        </p>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
