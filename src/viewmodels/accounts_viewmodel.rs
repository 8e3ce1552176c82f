use std::cell::Cell;
use std::rc::Rc;
use crate::models::{Page, User};
use crate::state::AppState;
use crate::viewmodels::introduction_viewmodel::IntroductionViewModel;
use crate::viewmodels::remote_data::Resource;

#[derive(Clone)]
pub struct AccountsViewModel {
    state: AppState,
    page: Rc<Cell<u32>>,
    size: u32,
    pub users: Resource<Page<User>>,
    pub introduction: IntroductionViewModel,
}

impl AccountsViewModel {
    pub fn new(state: AppState, size: u32) -> Self {
        Self {
            users: Resource::new(state.notifier.clone()),
            introduction: IntroductionViewModel::new(state.clone()),
            page: Rc::new(Cell::new(1)),
            size,
            state,
        }
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.users.clone();
        let (page, size) = (self.page.get(), self.size);
        self.users
            .load(&self.state.toasts, "ACCOUNTS", async move { api.list_users(page, size).await })
            .await
    }

    pub async fn go_to_page(&self, page: u32) -> bool {
        let page = self.users.value().map_or(page.max(1), |current| current.clamp_page(page));
        self.page.set(page);
        self.enter().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::testing::{nurse_user, staff_user, state_at};
    use futures::executor::block_on;

    #[test]
    fn failed_user_list_is_toasted() {
        let (state, fake) = state_at("/admin/accounts");
        fake.users.borrow_mut().extend([staff_user(), nurse_user()]);
        let vm = AccountsViewModel::new(state.clone(), 10);

        assert!(block_on(vm.enter()));
        assert_eq!(vm.users.value().map(|p| p.total_items), Some(2));

        fake.fail_with(AppError::Network("offline".into()));
        assert!(!block_on(vm.go_to_page(1)));
        assert!(vm.users.get().error().is_some());
        assert_eq!(state.toasts.list().len(), 1);
    }
}
