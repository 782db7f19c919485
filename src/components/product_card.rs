use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::config::CARD_BACKGROUND;
use crate::models::Product;

#[component]
pub fn ProductCard(
    product: Product,
    /// Receives the product name
    #[prop(into)]
    on_add_to_cart: Callback<String>,
) -> impl IntoView {
    let title = product.waste_name.clone();
    let alt = product.waste_name.clone();
    let backdrop = format!("background-image: url({})", CARD_BACKGROUND);

    view! {
        <div class="product-card">
            <div class="product-card-media" style=backdrop>
                <img src=product.image class="product-card-image" alt=alt />
            </div>
            <div class="product-card-body">
                <h3 class="product-card-title">{product.waste_name}</h3>
                <p class="product-card-points">{format!("{} Points", product.point)}</p>
            </div>
            <button
                class="btn btn-primary product-card-button"
                on:click=move |_| on_add_to_cart.run(title.clone())
            >
                "Masukkan ke keranjang"
            </button>
        </div>
    }
}

/// Product grid. Adding to cart only announces the action in a dialog.
#[component]
pub fn ProductGrid(products: Signal<Vec<Product>>) -> impl IntoView {
    let (selected, set_selected) = signal::<Option<String>>(None);

    view! {
        <div class="product-grid-wrapper">
            <style>{include_str!("product_card.css")}</style>
            <div class="product-grid">
                <For
                    each=move || products.get().into_iter().enumerate()
                    key=|(i, p)| (*i, p.waste_name.clone())
                    children=move |(_, product)| {
                        view! {
                            <ProductCard
                                product=product
                                on_add_to_cart=move |title: String| set_selected.set(Some(title))
                            />
                        }
                    }
                />
            </div>
            {move || selected.get().map(|title| {
                view! {
                    <Modal
                        title=format!("{} telah dimasukkan ke keranjang", title)
                        on_close=move |_| set_selected.set(None)
                    />
                }
            })}
        </div>
    }
}
