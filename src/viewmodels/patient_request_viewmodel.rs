use std::cell::Cell;
use std::rc::Rc;
use crate::models::{ConsultationInfo, Page};
use crate::state::AppState;
use crate::viewmodels::remote_data::Resource;

#[derive(Clone)]
pub struct PatientRequestViewModel {
    state: AppState,
    page: Rc<Cell<u32>>,
    size: u32,
    pub requests: Resource<Page<ConsultationInfo>>,
}

impl PatientRequestViewModel {
    pub fn new(state: AppState, size: u32) -> Self {
        Self {
            requests: Resource::new(state.notifier.clone()),
            page: Rc::new(Cell::new(1)),
            size,
            state,
        }
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.consultations.clone();
        let (page, size) = (self.page.get(), self.size);
        self.requests
            .load(&self.state.toasts, "PATIENT_REQUESTS", async move { api.list(page, size).await })
            .await
    }

    pub async fn go_to_page(&self, page: u32) -> bool {
        let page = self.requests.value().map_or(page.max(1), |current| current.clamp_page(page));
        self.page.set(page);
        self.enter().await
    }
}
