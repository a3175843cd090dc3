use leptos::*;

pub const BRAND_NAME: &str = "ClaimEase";

#[component]
pub fn ClaimEaseLogo() -> impl IntoView {
    view! {
        <a href="/" class="inline-flex items-center gap-2" aria-label=BRAND_NAME>
            <span class="w-9 h-9 gradient-primary rounded-xl flex items-center justify-center glow-primary text-primary-foreground font-bold">
                "C"
            </span>
            <span class="text-xl font-bold text-foreground tracking-tight">{BRAND_NAME}</span>
        </a>
    }
}

#[component]
pub fn FooterSlim() -> impl IntoView {
    view! {
        <footer class="py-6 text-center text-xs text-muted-foreground">
            {format!("© {}. All rights reserved.", BRAND_NAME)}
        </footer>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn logo_and_footer_render_brand() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <ClaimEaseLogo />
                    <FooterSlim />
                </div>
            }
        });
        assert!(html.contains("ClaimEase"));
        assert!(html.contains("<footer"));
    }
}
