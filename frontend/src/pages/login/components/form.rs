use crate::{
    components::{
        common::{Button, Input, Label},
        icons::{EyeIcon, EyeOffIcon, LockIcon, MailIcon},
    },
    pages::login::{components::messages::InlineErrorMessage, utils},
};
use leptos::{ev::SubmitEvent, *};

const FIELD_ICON_CLASS: &str =
    "absolute left-3 top-1/2 transform -translate-y-1/2 h-4 w-4 text-muted-foreground";

#[component]
pub fn LoginForm(
    #[prop(into)] email: Signal<String>,
    #[prop(into)] password: Signal<String>,
    #[prop(into)] remember_me: Signal<bool>,
    #[prop(into)] show_password: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(into)] pending: Signal<bool>,
    #[prop(into)] forgot_password_href: String,
    #[prop(into)] sign_up_href: String,
    on_email_input: Callback<String>,
    on_password_input: Callback<String>,
    on_remember_me_change: Callback<bool>,
    on_toggle_password: Callback<()>,
    on_submit: Callback<SubmitEvent>,
) -> impl IntoView {
    let password_type = Signal::derive(move || utils::password_input_type(show_password.get()));

    view! {
        <form class="space-y-6" on:submit=move |ev| on_submit.call(ev)>
            <InlineErrorMessage error=error />

            <div class="space-y-3">
                <Label html_for="email" class="text-foreground">"Email Address"</Label>
                <div class="relative">
                    <MailIcon class=FIELD_ICON_CLASS />
                    <Input
                        id="email"
                        name="email"
                        input_type="email"
                        placeholder="Enter your email"
                        autocomplete="email"
                        value=email
                        on_input=on_email_input
                        class="pl-10 h-12 bg-background/50 border-primary/30"
                        required=true
                    />
                </div>
            </div>

            <div class="space-y-3">
                <Label html_for="password" class="text-foreground">"Password"</Label>
                <div class="relative">
                    <LockIcon class=FIELD_ICON_CLASS />
                    <Input
                        id="password"
                        name="password"
                        input_type=password_type
                        placeholder="Enter your password"
                        autocomplete="current-password"
                        value=password
                        on_input=on_password_input
                        class="pl-10 pr-10 h-12 bg-background/50 border-primary/30"
                        required=true
                    />
                    <button
                        type="button"
                        class="absolute right-3 top-1/2 transform -translate-y-1/2 text-muted-foreground hover:text-foreground"
                        aria-label=move || if show_password.get() { "Hide password" } else { "Show password" }
                        on:click=move |_| on_toggle_password.call(())
                    >
                        {move || {
                            if show_password.get() {
                                view! { <EyeOffIcon class="h-4 w-4" /> }.into_view()
                            } else {
                                view! { <EyeIcon class="h-4 w-4" /> }.into_view()
                            }
                        }}
                    </button>
                </div>
            </div>

            <div class="flex items-center justify-between text-sm pt-2">
                <label class="flex items-center space-x-2 cursor-pointer">
                    <input
                        type="checkbox"
                        name="remember_me"
                        class="rounded border-input"
                        prop:checked=move || remember_me.get()
                        on:change=move |ev| on_remember_me_change.call(event_target_checked(&ev))
                    />
                    <span class="text-muted-foreground">"Remember me"</span>
                </label>
                <a href=forgot_password_href class="text-primary hover:text-primary/80 font-medium">
                    "Forgot password?"
                </a>
            </div>

            <Button button_type="submit" disabled=pending class="w-full h-12 mt-8">
                {move || if pending.get() { "Signing in..." } else { "Sign In" }}
            </Button>
        </form>

        <div class="mt-8 text-center">
            <p class="text-sm text-muted-foreground">
                "Don't have an account? "
                <a href=sign_up_href class="text-primary hover:text-primary/80 font-medium">
                    "Sign up here"
                </a>
            </p>
        </div>
    }
}
