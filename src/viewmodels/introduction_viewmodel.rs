// ============================================================================
// INTRODUCTION VIEWMODEL - Admin / manager "new introduction" modal
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::error::FieldErrors;
use crate::models::{Introduction, IntroductionDraft, IntroductionStatus};
use crate::state::AppState;
use crate::utils::validation::{max_len, normalize_text, required};
use crate::viewmodels::form_modal::{FormFields, FormModal};

const MAX_TITLE_LEN: usize = 200;
const MAX_SUMMARY_LEN: usize = 1000;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntroductionFields {
    pub title: String,
    pub summary: String,
    pub status: IntroductionStatus,
    pub thumbnail_file: Option<web_sys::File>,
}

impl FormFields for IntroductionFields {
    type Payload = IntroductionDraft;

    fn validate(&self) -> Result<IntroductionDraft, FieldErrors> {
        let title = normalize_text(&self.title);
        let summary = normalize_text(&self.summary);
        let mut errors = FieldErrors::new();
        errors.check("title", required(&title, "Title"));
        errors.check("title", max_len(&title, MAX_TITLE_LEN, "Title"));
        errors.check("summary", required(&summary, "Summary"));
        errors.check("summary", max_len(&summary, MAX_SUMMARY_LEN, "Summary"));

        errors.into_result(IntroductionDraft {
            title,
            summary,
            status: self.status,
            thumbnail_file: self.thumbnail_file.clone(),
        })
    }
}

type CreatedHook = Rc<dyn Fn(&Introduction)>;

#[derive(Clone)]
pub struct IntroductionViewModel {
    state: AppState,
    pub form: FormModal<IntroductionFields>,
    on_created: Rc<RefCell<Option<CreatedHook>>>,
    created: Rc<RefCell<Vec<Introduction>>>,
}

impl IntroductionViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            form: FormModal::new(state.notifier.clone()),
            on_created: Rc::new(RefCell::new(None)),
            created: Rc::new(RefCell::new(Vec::new())),
            state,
        }
    }

    pub fn set_on_created<F>(&self, hook: F)
    where
        F: Fn(&Introduction) + 'static,
    {
        *self.on_created.borrow_mut() = Some(Rc::new(hook));
    }

    /// Introductions created during this visit, newest first
    pub fn created(&self) -> Vec<Introduction> {
        self.created.borrow().clone()
    }

    pub async fn submit(&self) -> Option<Introduction> {
        let api = self.state.backends.introductions.clone();
        let introduction = self
            .form
            .submit(
                &self.state.toasts,
                "INTRODUCTION",
                |intro: &Introduction| format!("Introduction \"{}\" created", intro.title),
                |draft| async move { api.create_introduction(&draft).await },
            )
            .await?;

        self.created.borrow_mut().insert(0, introduction.clone());
        let hook = self.on_created.borrow().clone();
        if let Some(hook) = hook {
            hook(&introduction);
        }
        Some(introduction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::state_at;
    use futures::executor::block_on;
    use std::cell::Cell;

    #[test]
    fn created_introduction_reaches_the_caller() {
        let (state, fake) = state_at("/admin/accounts");
        let vm = IntroductionViewModel::new(state);
        let seen = Rc::new(Cell::new(0));
        let counter = seen.clone();
        vm.set_on_created(move |_| counter.set(counter.get() + 1));

        vm.form.open();
        vm.form.update(|f| {
            f.title = " Spring   check-up week ".into();
            f.summary = "Free blood pressure checks".into();
            f.status = IntroductionStatus::Published;
        });

        let created = block_on(vm.submit()).map(|i| i.title);
        assert_eq!(created.as_deref(), Some("Spring check-up week"));
        assert_eq!(seen.get(), 1);
        assert_eq!(vm.created().len(), 1);
        assert_eq!(fake.introductions_sent.borrow()[0].status, IntroductionStatus::Published);
    }

    #[test]
    fn title_and_summary_are_required() {
        let errors = IntroductionFields::default().validate().unwrap_err();
        assert!(errors.contains("title"));
        assert!(errors.contains("summary"));

        let long = IntroductionFields { title: "x".repeat(201), summary: "ok".into(), ..Default::default() };
        assert!(long.validate().unwrap_err().contains("title"));
    }
}
