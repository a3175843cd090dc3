use crate::api::LoginRequest;
use leptos::*;
use thiserror::Error;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed. Please check your credentials and try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// First failing check wins. Values are taken as typed, without trimming.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), LoginValidationError> {
    if email.is_empty() || password.is_empty() {
        return Err(LoginValidationError::MissingFields);
    }
    if !email.contains('@') {
        return Err(LoginValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn password_input_type(show_password: bool) -> &'static str {
    if show_password {
        "text"
    } else {
        "password"
    }
}

#[derive(Clone, Copy)]
pub struct LoginFormState {
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub remember_me: RwSignal<bool>,
}

impl Default for LoginFormState {
    fn default() -> Self {
        Self {
            email: create_rw_signal(String::new()),
            password: create_rw_signal(String::new()),
            remember_me: create_rw_signal(false),
        }
    }
}

impl LoginFormState {
    pub fn to_request(&self) -> Result<LoginRequest, LoginValidationError> {
        let email = self.email.get_untracked();
        let password = self.password.get_untracked();
        validate_credentials(&email, &password)?;
        Ok(LoginRequest {
            email,
            password,
            remember_me: self.remember_me.get_untracked(),
        })
    }
}
