//! Pick & Pack: category carousel, search and product grid.

use leptos::prelude::*;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;

use crate::api::ApiClient;
use crate::catalog::{ActiveFilter, ProductCatalog, CATEGORIES};
use crate::components::card_slider::CardSlider;
use crate::components::product_card::ProductGrid;
use crate::components::search_bar::SearchBar;
use crate::models::WasteTypeId;
use crate::request::Lifecycle;

#[component]
pub fn CategoryPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let catalog = RwSignal::new(ProductCatalog::default());
    let load = RwSignal::new(Lifecycle::new());

    // Fetch the product list once on mount
    Effect::new(move |_| {
        let Some(ticket) = load.try_update(|l| l.begin()).flatten() else {
            return;
        };
        let api = api.clone();
        spawn_local(async move {
            let outcome = api.fetch_all_waste().await.map_err(String::from);
            if !load.try_update(|l| l.finish(ticket, &outcome)).unwrap_or(false) {
                return;
            }
            match outcome {
                Ok(products) => {
                    info!("Loaded {} products", products.len());
                    catalog.set(ProductCatalog::new(products));
                }
                Err(e) => error!("Error fetching products: {}", e),
            }
        });
    });

    on_cleanup(move || {
        load.try_update(|l| l.cancel());
    });

    let on_search = move |term: String| catalog.update(|c| c.search(&term));

    let on_category_select = move |id: WasteTypeId| {
        info!("Selected category: {}", id);
        catalog.update(|c| c.select_category(id));
    };

    let is_filtered = move || catalog.with(|c| *c.filter() != ActiveFilter::None);
    let show_all = move |_| catalog.update(|c| c.clear_filter());

    let displayed = Signal::derive(move || catalog.with(|c| c.displayed().to_vec()));
    let selected = Signal::derive(move || catalog.with(|c| c.selected_category()));

    view! {
        <div class="page category-page">
            <CardSlider
                categories=CATEGORIES
                selected=selected
                on_category_select=on_category_select
            />
            <div class="page-heading">
                <h1 class="page-title">"Pick & Pack"</h1>
                <p class="page-description">
                    "Tukarkan poin dari sampahmu dengan produk pilihan."
                </p>
            </div>
            <SearchBar on_search=on_search />
            <Show when=is_filtered>
                <div class="filter-reset">
                    <button class="btn btn-secondary" on:click=show_all>"Tampilkan semua"</button>
                </div>
            </Show>
            <Show when=move || load.with(|l| l.is_in_flight())>
                <div class="loading-state">
                    <div class="spinner"></div>
                    <span>"Memuat produk..."</span>
                </div>
            </Show>
            <ProductGrid products=displayed />
        </div>
    }
}
