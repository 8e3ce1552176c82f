// ============================================================================
// CONSULTATION VIEWMODEL - Public "request a consultation" modal
// ============================================================================

use crate::error::FieldErrors;
use crate::models::ConsultationRequest;
use crate::state::AppState;
use crate::utils::validation::{max_len, normalize_text, required, validate_email, validate_phone};
use crate::viewmodels::form_modal::{FormFields, FormModal};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConsultationFields {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl FormFields for ConsultationFields {
    type Payload = ConsultationRequest;

    fn validate(&self) -> Result<ConsultationRequest, FieldErrors> {
        let name = normalize_text(&self.name);
        let mut errors = FieldErrors::new();
        errors.check("name", required(&name, "Full name"));
        errors.check("name", max_len(&name, 100, "Full name"));
        errors.check("phone", validate_phone(&self.phone));
        errors.check("email", validate_email(&self.email));

        errors.into_result(ConsultationRequest {
            name,
            phone: self.phone.trim().to_string(),
            email: self.email.trim().to_string(),
        })
    }
}

#[derive(Clone)]
pub struct ConsultationViewModel {
    state: AppState,
    pub form: FormModal<ConsultationFields>,
}

impl ConsultationViewModel {
    pub fn new(state: AppState) -> Self {
        Self { form: FormModal::new(state.notifier.clone()), state }
    }

    pub async fn submit(&self) -> bool {
        let api = self.state.backends.consultations.clone();
        self.form
            .submit(
                &self.state.toasts,
                "CONSULTATION",
                |message: &Option<String>| {
                    message
                        .clone()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| "Thank you! Our team will contact you soon.".to_string())
                },
                |request| async move { api.create(&request).await },
            )
            .await
            .is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::state::ToastKind;
    use crate::testing::state_at;
    use futures::executor::block_on;

    #[test]
    fn name_is_normalized_and_contact_fields_are_kept() {
        let (state, fake) = state_at("/");
        let vm = ConsultationViewModel::new(state.clone());
        vm.form.open();
        vm.form.update(|f| {
            f.name = "  Nguyen   Van A ".into();
            f.phone = "0912345678".into();
            f.email = "a@example.com".into();
        });

        assert!(block_on(vm.submit()));
        assert_eq!(
            *fake.consultations_sent.borrow(),
            vec![ConsultationRequest {
                name: "Nguyen Van A".into(),
                phone: "0912345678".into(),
                email: "a@example.com".into(),
            }]
        );
        assert!(!vm.form.is_open());
        assert_eq!(state.toasts.last().map(|t| t.kind), Some(ToastKind::Success));
    }

    #[test]
    fn invalid_phone_blocks_the_request() {
        let (state, fake) = state_at("/");
        let vm = ConsultationViewModel::new(state);
        vm.form.open();
        vm.form.update(|f| {
            f.name = "Nguyen Van A".into();
            f.phone = "912345678".into();
            f.email = "a@example.com".into();
        });

        assert!(!block_on(vm.submit()));
        assert!(fake.consultations_sent.borrow().is_empty());
        assert!(vm.form.visible_errors().contains("phone"));
    }

    #[test]
    fn business_error_keeps_modal_open() {
        let (state, fake) = state_at("/");
        fake.fail_with(AppError::Business("Phone already registered".into()));
        let vm = ConsultationViewModel::new(state.clone());
        vm.form.open();
        vm.form.update(|f| {
            f.name = "Nguyen Van A".into();
            f.phone = "0912345678".into();
            f.email = "a@example.com".into();
        });

        assert!(!block_on(vm.submit()));
        assert!(vm.form.is_open());
        assert_eq!(state.toasts.last().map(|t| t.message), Some("Phone already registered".to_string()));
    }
}
