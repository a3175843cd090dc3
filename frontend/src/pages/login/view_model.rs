use super::{
    repository::LoginRepository,
    utils::{self, LoginFormState, LoginValidationError, LOGIN_FAILED_MESSAGE},
};
use crate::api::{ApiError, LoginRequest, User};
use leptos::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already in flight.
    Ignored,
    Rejected(LoginValidationError),
    Dispatched(LoginRequest),
}

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: LoginFormState,
    pub show_password: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

pub fn use_login_action(repository: LoginRepository) -> Action<LoginRequest, Result<User, ApiError>> {
    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repository.clone();
        async move { repo.login(payload).await }
    })
}

pub fn use_login_view_model(repository: LoginRepository, on_login: Callback<User>) -> LoginViewModel {
    let form = LoginFormState::default();
    let error = create_rw_signal(None::<String>);
    let login_action = use_login_action(repository);

    // Isomorphic so the outcome is applied under SSR as well as in the browser.
    create_isomorphic_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            untrack(move || match result {
                Ok(user) => {
                    error.set(None);
                    on_login.call(user);
                }
                Err(_) => error.set(Some(LOGIN_FAILED_MESSAGE.to_string())),
            });
        }
    });

    LoginViewModel {
        form,
        show_password: create_rw_signal(false),
        error,
        login_action,
    }
}

impl LoginViewModel {
    pub fn is_submitting(&self) -> ReadSignal<bool> {
        self.login_action.pending()
    }

    pub fn set_email(&self, value: String) {
        self.form.email.set(value);
        self.clear_error();
    }

    pub fn set_password(&self, value: String) {
        self.form.password.set(value);
        self.clear_error();
    }

    pub fn set_remember_me(&self, value: bool) {
        self.form.remember_me.set(value);
    }

    pub fn toggle_password_visibility(&self) {
        self.show_password.update(|visible| *visible = !*visible);
    }

    pub fn password_input_type(&self) -> Signal<&'static str> {
        let show_password = self.show_password;
        Signal::derive(move || utils::password_input_type(show_password.get()))
    }

    fn clear_error(&self) {
        if self.error.get_untracked().is_some() {
            self.error.set(None);
        }
    }

    /// Validates the form and, when it passes, dispatches the login action.
    pub fn submit(&self) -> SubmitOutcome {
        if self.login_action.pending().get_untracked() {
            return SubmitOutcome::Ignored;
        }
        self.error.set(None);
        match self.form.to_request() {
            Ok(request) => {
                self.login_action.dispatch(request.clone());
                SubmitOutcome::Dispatched(request)
            }
            Err(err) => {
                self.error.set(Some(err.to_string()));
                SubmitOutcome::Rejected(err)
            }
        }
    }
}
