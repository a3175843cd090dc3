use leptos::*;

const BRAND_BUTTON_CLASSES: &str = "btn-brand bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus";

#[component]
pub fn Button(
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(default = "button")] button_type: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type=button_type
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    BRAND_BUTTON_CLASSES,
                    class
                )
            }
            disabled=move || disabled.get()
        >
            {children()}
        </button>
    }
}

#[component]
pub fn Label(
    #[prop(into)] html_for: String,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <label for=html_for class=format!("block text-sm font-medium leading-none {}", class)>
            {children()}
        </label>
    }
}

/// Controlled text input. `input_type` may be reactive (password reveal).
#[component]
pub fn Input(
    #[prop(into)] id: String,
    #[prop(into)] name: String,
    #[prop(into)] input_type: MaybeSignal<&'static str>,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional, into)] placeholder: String,
    #[prop(optional, into)] autocomplete: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    view! {
        <input
            id=id
            name=name
            type=move || input_type.get()
            placeholder=placeholder
            autocomplete=autocomplete
            required=required
            class=format!(
                "flex w-full rounded-md border border-input px-3 py-2 text-sm text-foreground placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary {}",
                class
            )
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(event_target_value(&ev))
        />
    }
}
