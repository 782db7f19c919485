use leptos::prelude::*;

/// Search box that reports the term on every keystroke and on submit.
#[component]
pub fn SearchBar(
    #[prop(into)]
    on_search: Callback<String>,
    #[prop(default = "Cari produk...")]
    placeholder: &'static str,
) -> impl IntoView {
    let (term, set_term) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_search.run(term.get());
    };

    view! {
        <form class="search-bar" on:submit=on_submit>
            <input
                type="search"
                class="input search-input"
                placeholder=placeholder
                prop:value=move || term.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    set_term.set(value.clone());
                    on_search.run(value);
                }
            />
            <button type="submit" class="btn btn-primary search-button">"Cari"</button>
        </form>
    }
}
