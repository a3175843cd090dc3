use leptos::*;

#[component]
pub fn InlineErrorMessage(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div role="alert" class="p-4 text-sm text-red-600 bg-red-50 border border-red-200 rounded-md">
                {move || error.get().unwrap_or_default()}
            </div>
        </Show>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_message_when_present() {
        let html = render_to_string(move || {
            let error = create_rw_signal(Some("Please fill in all fields".to_string()));
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(html.contains("Please fill in all fields"));
        assert!(html.contains("role=\"alert\""));
    }

    #[test]
    fn renders_nothing_without_error() {
        let html = render_to_string(move || {
            let error = create_rw_signal(None::<String>);
            view! { <InlineErrorMessage error=error /> }
        });
        assert!(!html.contains("role=\"alert\""));
    }
}
