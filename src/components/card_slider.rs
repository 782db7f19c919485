use leptos::prelude::*;

use crate::models::{WasteCategory, WasteTypeId};

const VISIBLE_CARDS: usize = 4;

/// Indices shown for a carousel of `len` items starting at `offset`, wrapping.
fn visible_window(len: usize, offset: usize, count: usize) -> Vec<usize> {
    if len == 0 {
        return Vec::new();
    }
    (0..count.min(len)).map(|i| (offset + i) % len).collect()
}

/// Horizontal category carousel.
#[component]
pub fn CardSlider(
    categories: &'static [WasteCategory],
    selected: Signal<Option<WasteTypeId>>,
    #[prop(into)]
    on_category_select: Callback<WasteTypeId>,
) -> impl IntoView {
    let (offset, set_offset) = signal(0usize);
    let len = categories.len();
    let fits = len <= VISIBLE_CARDS;

    let prev = move |_| set_offset.update(|o| *o = (*o + len.max(1) - 1) % len.max(1));
    let next = move |_| set_offset.update(|o| *o = (*o + 1) % len.max(1));

    view! {
        <div class="card-slider">
            <style>{include_str!("card_slider.css")}</style>
            <button class="slider-arrow" on:click=prev disabled=fits>"\u{2039}"</button>
            <div class="slider-track">
                {move || {
                    visible_window(len, offset.get(), VISIBLE_CARDS)
                        .into_iter()
                        .map(|i| {
                            let category = &categories[i];
                            let id = category.waste_type_id;
                            view! {
                                <button
                                    class="category-card"
                                    class:category-card-active=move || selected.get() == Some(id)
                                    on:click=move |_| on_category_select.run(id)
                                >
                                    <img src=category.image alt=category.name class="category-image" />
                                    <span class="category-name">{category.name}</span>
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
            <button class="slider-arrow" on:click=next disabled=fits>"\u{203A}"</button>
        </div>
    }
}
