//! Carousel Component
//!
//! Featured listing images with a caption and one dot per slide.

use admindash::format::humanize_slug;
use admindash::model::CarouselSpec;
use admindash::state::CarouselState;
use leptos::*;

use crate::components::active_class;

#[component]
pub fn Carousel(spec: CarouselSpec) -> impl IntoView {
    let carousel = match CarouselState::for_spec(&spec) {
        Ok(initial) => create_rw_signal(initial),
        Err(e) => {
            web_sys::console::error_1(&e.to_string().into());
            return view! {}.into_view();
        }
    };

    let slug = spec.slug;
    let slides = carousel.get_untracked().len();
    let title = move || {
        carousel
            .get()
            .title(&spec)
            .unwrap_or_default()
            .to_string()
    };

    view! {
        <div class="max-h-[286px] h-[286px] rounded-xl relative overflow-hidden">
            <img
                src=move || carousel.get().image_src(slug)
                alt=slug
                class="size-full object-cover"
            />
            <div class="absolute carousel-gradient text-white top-0 left-0 size-full flex flex-col justify-end p-4">
                <h2 class="text-sm font-medium uppercase">{humanize_slug(slug)}</h2>
                <p class="text-lg font-semibold">{title}</p>
            </div>
            <div class="absolute bottom-[8.8px] -translate-x-1/2 left-1/2 flex gap-2">
                {(0..slides)
                    .map(|index| {
                        view! {
                            <button
                                aria-label=format!("Show slide {}", index + 1)
                                on:click=move |_| {
                                    carousel.update(|c| {
                                        if let Err(e) = c.select(index) {
                                            web_sys::console::warn_1(&e.to_string().into());
                                        }
                                    })
                                }
                                class=move || {
                                    active_class(
                                        "bg-white size-[6.63px] rounded-full border-gray-200 opacity-20",
                                        "border-[1.1px] !opacity-100",
                                        carousel.get().is_active(index),
                                    )
                                }
                            />
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
    .into_view()
}
