use leptos::{ev::KeyboardEvent, prelude::*};

use crate::carousel::{Carousel, ROTATE_EVERY};
use crate::content::Testimonial;
use crate::overlay::is_activation_key;

#[component]
pub fn Testimonials() -> impl IntoView {
    let testimonials = RwSignal::new(Vec::<Testimonial>::new());
    let carousel = RwSignal::new(Carousel::default());

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        let fetch = super::fetch::TestimonialFetch::spawn(testimonials);
        on_cleanup(move || fetch.cancel());
    });

    // (re)start the rotation whenever the list changes; nothing runs while empty
    Effect::new(move |_| {
        let len = testimonials.with(Vec::len);
        carousel.update(|c| c.resize(len));
        if len == 0 {
            return;
        }
        match set_interval_with_handle(move || carousel.update(Carousel::advance), ROTATE_EVERY) {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(e) => log::warn!("couldn't start testimonial rotation: {e:?}"),
        }
    });

    let current = move || {
        let index = carousel.with(Carousel::current)?;
        testimonials.with(|list| list.get(index).cloned())
    };

    view! {
        <section id="testimonial-section" class="px-4 md:px-8 py-24 text-center">
            <Show when=move || carousel.with(Carousel::is_active)>
                {move || {
                    current()
                        .map(|t| {
                            view! {
                                <blockquote class="max-w-3xl mx-auto">
                                    <p class="text-2xl md:text-3xl leading-snug">
                                        {format!("\u{201C}{}\u{201D}", t.quote)}
                                    </p>
                                    <footer class="mt-6">
                                        <p class="font-bold">{t.author}</p>
                                        <p class="opacity-60">{t.role}</p>
                                    </footer>
                                </blockquote>
                            }
                        })
                }}
                <div
                    class="flex justify-center gap-2 mt-8"
                    role="tablist"
                    aria-label="Testimonial navigation"
                >
                    {move || {
                        testimonials
                            .with(|list| {
                                list.iter()
                                    .enumerate()
                                    .map(|(index, t)| {
                                        let select = move || {
                                            carousel.update(|c| {
                                                c.select(index);
                                            })
                                        };
                                        view! {
                                            <div
                                                role="tab"
                                                tabindex="0"
                                                class=move || {
                                                    if carousel.with(|c| c.is_current(index)) {
                                                        "w-2.5 h-2.5 rounded-full cursor-pointer transition-all bg-foreground"
                                                    } else {
                                                        "w-2.5 h-2.5 rounded-full cursor-pointer transition-all bg-neutral-500/30"
                                                    }
                                                }
                                                aria-selected=move || {
                                                    carousel.with(|c| c.is_current(index)).to_string()
                                                }
                                                aria-label=format!(
                                                    "Show testimonial {} from {}",
                                                    index + 1,
                                                    t.author,
                                                )
                                                on:click=move |_| select()
                                                on:keydown=move |ev: KeyboardEvent| {
                                                    if is_activation_key(&ev.key()) {
                                                        ev.prevent_default();
                                                        select();
                                                    }
                                                }
                                            ></div>
                                        }
                                    })
                                    .collect_view()
                            })
                    }}
                </div>
            </Show>
        </section>
    }
}
