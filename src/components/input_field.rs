use leptos::prelude::*;

/// Labelled text input with an inline error line.
#[component]
pub fn InputField(
    /// Element id, also used for the label's `for`
    id: &'static str,
    #[prop(into)]
    label: String,
    /// HTML input type: "text", "email", "date", ...
    #[prop(default = "text")]
    input_type: &'static str,
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    /// Error message; empty means valid
    error: Signal<String>,
) -> impl IntoView {
    let has_error = move || !error.get().is_empty();

    view! {
        <div class="form-group">
            <label for=id class="input-label">{label}</label>
            <input
                id=id
                type=input_type
                class="input"
                class:input-invalid=has_error
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
            <Show when=has_error>
                <div class="field-error">{move || error.get()}</div>
            </Show>
        </div>
    }
}

/// Email variant of [`InputField`].
#[component]
pub fn EmailField(
    id: &'static str,
    #[prop(into)]
    label: String,
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    error: Signal<String>,
) -> impl IntoView {
    view! {
        <InputField
            id=id
            label=label
            input_type="email"
            value=value
            on_input=on_input
            error=error
        />
    }
}
