// ============================================================================
// PROFILE VIEWMODEL - Edit the signed-in user's contact details
// ============================================================================

use crate::error::FieldErrors;
use crate::models::{ProfileUpdate, User};
use crate::state::AppState;
use crate::utils::validation::{max_len, normalize_text, required, validate_email, validate_phone};
use crate::viewmodels::form_modal::{FormFields, FormModal};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFields {
    pub full_name: String,
    pub phone: String,
    pub email: String,
}

impl From<&User> for ProfileFields {
    fn from(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            phone: user.phone.clone().unwrap_or_default(),
            email: user.email.clone(),
        }
    }
}

impl FormFields for ProfileFields {
    type Payload = ProfileUpdate;

    fn validate(&self) -> Result<ProfileUpdate, FieldErrors> {
        let full_name = normalize_text(&self.full_name);
        let mut errors = FieldErrors::new();
        errors.check("fullName", required(&full_name, "Full name"));
        errors.check("fullName", max_len(&full_name, 100, "Full name"));
        errors.check("phone", validate_phone(&self.phone));
        errors.check("email", validate_email(&self.email));

        errors.into_result(ProfileUpdate {
            full_name,
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Clone)]
pub struct ProfileViewModel {
    state: AppState,
    pub form: FormModal<ProfileFields>,
}

impl ProfileViewModel {
    pub fn new(state: AppState) -> Self {
        Self { form: FormModal::new(state.notifier.clone()), state }
    }

    pub fn user(&self) -> Option<User> {
        self.state.session.user()
    }

    /// Open the editor pre-filled from the session
    pub fn edit(&self) {
        match self.state.session.user() {
            Some(user) => self.form.open_with(ProfileFields::from(&user)),
            None => log::warn!("⚠️ [PROFILE] No signed-in user to edit"),
        }
    }

    pub async fn submit(&self) -> bool {
        let api = self.state.backends.users.clone();
        let updated = self
            .form
            .submit(
                &self.state.toasts,
                "PROFILE",
                |_: &User| "Profile updated".to_string(),
                |update| async move { api.update_profile(&update).await },
            )
            .await;

        match updated {
            Some(user) => {
                self.state.session.update_user(user);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{nurse_user, state_at};
    use futures::executor::block_on;

    #[test]
    fn saved_profile_patches_session_but_keeps_token() {
        let (state, fake) = state_at("/nurse/profile");
        state.session.set_auth(nurse_user(), "tok".into());
        let vm = ProfileViewModel::new(state.clone());

        vm.edit();
        assert_eq!(vm.form.fields().full_name, "Tran Thi Lan");
        vm.form.update(|f| f.full_name = "Tran  Lan".into());

        assert!(block_on(vm.submit()));
        assert_eq!(fake.profile_updates.borrow()[0].full_name, "Tran Lan");
        assert_eq!(state.session.user().map(|u| u.full_name), Some("Tran Lan".to_string()));
        assert_eq!(state.session.token().as_deref(), Some("tok"));
    }

    #[test]
    fn edit_without_session_stays_closed() {
        let (state, _) = state_at("/nurse/profile");
        let vm = ProfileViewModel::new(state);
        vm.edit();
        assert!(!vm.form.is_open());
    }
}
