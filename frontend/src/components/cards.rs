use leptos::*;

#[component]
pub fn Card(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <div class=format!("rounded-lg border bg-card text-card-foreground shadow-sm {}", class)>
            {children()}
        </div>
    }
}

#[component]
pub fn CardHeader(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("flex flex-col space-y-1.5 p-6 {}", class)>{children()}</div> }
}

#[component]
pub fn CardTitle(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! {
        <h3 class=format!("font-semibold leading-none tracking-tight {}", class)>{children()}</h3>
    }
}

#[component]
pub fn CardDescription(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <p class=format!("text-sm text-muted-foreground {}", class)>{children()}</p> }
}

#[component]
pub fn CardContent(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    view! { <div class=format!("p-6 pt-0 {}", class)>{children()}</div> }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn card_sections_render_children() {
        let html = render_to_string(move || {
            view! {
                <Card class="max-w-md">
                    <CardHeader>
                        <CardTitle>"Title"</CardTitle>
                        <CardDescription>"Description"</CardDescription>
                    </CardHeader>
                    <CardContent>"Body"</CardContent>
                </Card>
            }
        });
        assert!(html.contains("max-w-md"));
        assert!(html.contains("Title"));
        assert!(html.contains("Description"));
        assert!(html.contains("Body"));
    }
}
