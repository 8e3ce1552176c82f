// ============================================================================
// AUTH VIEWMODEL - Login and signup modals
// ============================================================================
// Which modal shows is owned by the AuthModalCoordinator; the form machines
// here hold the input and the in-flight flag for each of them.
// ============================================================================

use crate::error::FieldErrors;
use crate::models::{LoginRequest, LoginResponse, SignupRequest, User};
use crate::state::AppState;
use crate::utils::validation::{normalize_text, required, validate_email, validate_password, validate_phone};
use crate::viewmodels::form_modal::{FormFields, FormModal};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginFields {
    pub email: String,
    pub password: String,
}

impl FormFields for LoginFields {
    type Payload = LoginRequest;

    fn validate(&self) -> Result<LoginRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("email", validate_email(&self.email));
        errors.check("password", required(&self.password, "Password"));
        errors.into_result(LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupFields {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl FormFields for SignupFields {
    type Payload = SignupRequest;

    fn validate(&self) -> Result<SignupRequest, FieldErrors> {
        let full_name = normalize_text(&self.full_name);
        let mut errors = FieldErrors::new();
        errors.check("fullName", required(&full_name, "Full name"));
        errors.check("email", validate_email(&self.email));
        errors.check("phone", validate_phone(&self.phone));
        errors.check("password", validate_password(&self.password));
        if self.confirm_password != self.password {
            errors.insert("confirmPassword", "Passwords do not match");
        }

        errors.into_result(SignupRequest {
            full_name,
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            password: self.password.clone(),
        })
    }
}

#[derive(Clone)]
pub struct AuthViewModel {
    state: AppState,
    pub login: FormModal<LoginFields>,
    pub signup: FormModal<SignupFields>,
}

impl AuthViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            login: FormModal::new(state.notifier.clone()),
            signup: FormModal::new(state.notifier.clone()),
            state,
        }
    }

    /// Keep the form machines in step with the coordinator
    pub fn sync(&self) {
        let visibility = self.state.modals.visibility();
        if visibility.login_open && !self.login.is_open() {
            self.login.open();
        }
        if visibility.signup_open && !self.signup.is_open() {
            self.signup.open();
        }
        if !visibility.login_open {
            self.login.close();
        }
        if !visibility.signup_open {
            self.signup.close();
        }
    }

    pub fn open_login(&self) {
        if self.signup.is_submitting() {
            return;
        }
        self.state.modals.open_login_modal();
        self.sync();
    }

    pub fn open_signup(&self) {
        if self.login.is_submitting() {
            return;
        }
        self.state.modals.open_signup_modal();
        self.sync();
    }

    /// Refused while either form is submitting
    pub fn close(&self) -> bool {
        if self.login.is_submitting() || self.signup.is_submitting() {
            return false;
        }
        self.state.modals.close_modals();
        self.sync();
        true
    }

    pub async fn submit_login(&self) -> bool {
        let api = self.state.backends.auth.clone();
        let response = self
            .login
            .submit(
                &self.state.toasts,
                "AUTH",
                |response: &LoginResponse| format!("Welcome back, {}", response.user.full_name),
                |request| async move { api.login(&request).await },
            )
            .await;

        match response {
            Some(response) => {
                self.state.session.set_auth(response.user, response.token);
                self.state.after_sign_in();
                self.sync();
                true
            }
            None => false,
        }
    }

    pub async fn submit_signup(&self) -> bool {
        let api = self.state.backends.auth.clone();
        let created = self
            .signup
            .submit(
                &self.state.toasts,
                "AUTH",
                |_: &User| "Account created. Please sign in.".to_string(),
                |request| async move { api.signup(&request).await },
            )
            .await;

        match created {
            Some(user) => {
                log::info!("🆕 [AUTH] Account created for {}", user.email);
                self.open_login();
                self.login.update(|f| f.email = user.email.clone());
                true
            }
            None => false,
        }
    }
}
