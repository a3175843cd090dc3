use crate::{
    api::User,
    components::{
        cards::{Card, CardContent, CardDescription, CardHeader, CardTitle},
        icons::LockIcon,
        layout::{ClaimEaseLogo, FooterSlim},
    },
    config::AppConfig,
    pages::login::{
        components::form::LoginForm,
        repository::LoginRepository,
        view_model::{self, LoginViewModel},
    },
};
use leptos::{ev::SubmitEvent, Callback, *};

#[component]
pub fn LoginPanel(
    on_login: Callback<User>,
    #[prop(optional)] config: Option<AppConfig>,
    #[prop(optional)] repository: Option<LoginRepository>,
) -> impl IntoView {
    let config = config.unwrap_or_else(crate::config::current);
    let repository = repository.unwrap_or_else(|| LoginRepository::from_config(&config));
    let vm = view_model::use_login_view_model(repository, on_login);

    view! { <LoginPanelContent vm=vm config=config /> }
}

#[component]
fn LoginPanelContent(vm: LoginViewModel, config: AppConfig) -> impl IntoView {
    let handle_submit = Callback::new(move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    });

    view! {
        <div class="min-h-screen bg-background">
            <div class="relative">
                <div class="absolute inset-0 gradient-dark-brand pointer-events-none"></div>
                <div class="relative max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 pt-8 pb-28 md:pb-12 flex flex-col min-h-screen">
                    <div class="flex justify-center mb-4 sm:mb-6">
                        <ClaimEaseLogo />
                    </div>

                    <main class="flex-1 flex items-center justify-center px-4 py-8">
                        <Card class="w-full max-w-md glass-effect backdrop-blur-lg border-primary/30">
                            <CardHeader class="text-center space-y-2 pb-6">
                                <div class="w-12 h-12 sm:w-14 sm:h-14 gradient-primary rounded-2xl flex items-center justify-center mx-auto glow-primary">
                                    <LockIcon class="h-6 w-6 sm:h-7 sm:w-7 text-primary-foreground" />
                                </div>
                                <CardTitle class="text-2xl font-bold text-foreground font-display">
                                    "Welcome Back"
                                </CardTitle>
                                <CardDescription>"Sign in to your ClaimEase account"</CardDescription>
                            </CardHeader>

                            <CardContent class="px-6 py-8">
                                <LoginForm
                                    email=vm.form.email
                                    password=vm.form.password
                                    remember_me=vm.form.remember_me
                                    show_password=vm.show_password
                                    error=vm.error
                                    pending=vm.is_submitting()
                                    forgot_password_href=config.forgot_password_url.clone()
                                    sign_up_href=config.sign_up_url.clone()
                                    on_email_input=Callback::new(move |value: String| vm.set_email(value))
                                    on_password_input=Callback::new(move |value: String| vm.set_password(value))
                                    on_remember_me_change=Callback::new(move |value: bool| vm.set_remember_me(value))
                                    on_toggle_password=Callback::new(move |_: ()| vm.toggle_password_visibility())
                                    on_submit=handle_submit
                                />
                            </CardContent>
                        </Card>
                    </main>

                    <FooterSlim />
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::SimulatedAuthenticator;
    use crate::test_support::ssr::{has_disabled_attribute, render_to_string};
    use std::rc::Rc;
    use tokio::task::LocalSet;

    #[test]
    fn panel_renders_card_and_configured_links() {
        let html = render_to_string(move || {
            let config = AppConfig {
                forgot_password_url: "/forgot".into(),
                sign_up_url: "/register".into(),
                ..AppConfig::default()
            };
            view! { <LoginPanel on_login=Callback::new(|_: User| {}) config=config /> }
        });
        assert!(html.contains("Welcome Back"));
        assert!(html.contains("Sign in to your ClaimEase account"));
        assert!(html.contains("href=\"/forgot\""));
        assert!(html.contains("href=\"/register\""));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn panel_defaults_to_placeholder_links() {
        let html = render_to_string(move || {
            view! { <LoginPanel on_login=Callback::new(|_: User| {}) /> }
        });
        assert!(html.contains("href=\"#\""));
        assert!(html.contains("Sign In"));
    }

    #[tokio::test(start_paused = true)]
    async fn valid_submit_disables_button_while_signing_in() {
        LocalSet::new()
            .run_until(async {
                let runtime = create_runtime();
                let repo = LoginRepository::new_with_authenticator(Rc::new(
                    SimulatedAuthenticator::default(),
                ));
                let vm = view_model::use_login_view_model(repo, Callback::new(|_: User| {}));
                let idle = view! { <LoginPanelContent vm=vm config=AppConfig::default() /> }
                    .into_view()
                    .render_to_string()
                    .to_string();
                assert!(!has_disabled_attribute(&idle));

                vm.set_email("alice@example.com".into());
                vm.set_password("anything".into());
                vm.submit();

                let html = view! { <LoginPanelContent vm=vm config=AppConfig::default() /> }
                    .into_view()
                    .render_to_string()
                    .to_string();
                assert!(html.contains("Signing in..."));
                assert!(has_disabled_attribute(&html));
                runtime.dispose();
            })
            .await;
    }
}
