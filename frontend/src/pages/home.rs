use crate::{
    api::User,
    components::{
        cards::{Card, CardContent, CardDescription, CardHeader, CardTitle},
        layout::{ClaimEaseLogo, FooterSlim},
    },
    state::session::{self, use_session},
};
use leptos::*;
use leptos_router::*;

pub fn claims_summary(user: &User) -> String {
    format!(
        "{} of {} claims used ({} remaining)",
        user.claims_used,
        user.max_claims,
        user.claims_remaining()
    )
}

#[component]
pub fn HomePage() -> impl IntoView {
    let (session, set_session) = use_session();

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=|| view! { <Redirect path="/login" /> }
        >
            <div class="min-h-screen bg-background flex flex-col">
                <div class="flex justify-center pt-8">
                    <ClaimEaseLogo />
                </div>
                <main class="flex-1 flex items-center justify-center px-4 py-8">
                    {move || {
                        session
                            .get()
                            .user
                            .map(|user| view! { <AccountSummary user=user /> })
                    }}
                </main>
                <div class="flex justify-center">
                    <button
                        type="button"
                        class="text-sm font-medium text-muted-foreground hover:text-foreground"
                        on:click=move |_| session::sign_out(set_session)
                    >
                        "Sign out"
                    </button>
                </div>
                <FooterSlim />
            </div>
        </Show>
    }
}

#[component]
fn AccountSummary(user: User) -> impl IntoView {
    let summary = claims_summary(&user);
    view! {
        <Card class="w-full max-w-md">
            <CardHeader>
                <CardTitle class="text-2xl">{format!("Hi, {}", user.name)}</CardTitle>
                <CardDescription>{user.email.clone()}</CardDescription>
            </CardHeader>
            <CardContent class="space-y-2 text-sm">
                <p>{format!("{} tier", user.tier.label())}</p>
                <p>{summary}</p>
            </CardContent>
        </Card>
    }
}
