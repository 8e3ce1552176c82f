// ============================================================================
// HOME VIEWMODEL - Public landing page and news detail
// ============================================================================

use crate::models::{Blog, Page};
use crate::state::AppState;
use crate::viewmodels::consultation_viewmodel::ConsultationViewModel;
use crate::viewmodels::remote_data::Resource;

const LATEST_NEWS: u32 = 6;

#[derive(Clone)]
pub struct HomeViewModel {
    state: AppState,
    pub blogs: Resource<Page<Blog>>,
    pub consultation: ConsultationViewModel,
}

impl HomeViewModel {
    pub fn new(state: AppState) -> Self {
        Self {
            blogs: Resource::new(state.notifier.clone()),
            consultation: ConsultationViewModel::new(state.clone()),
            state,
        }
    }

    pub async fn enter(&self) -> bool {
        let api = self.state.backends.blogs.clone();
        self.blogs
            .load(&self.state.toasts, "HOME", async move { api.get_public_blogs(1, LATEST_NEWS).await })
            .await
    }
}

#[derive(Clone)]
pub struct NewsDetailViewModel {
    state: AppState,
    pub article: Resource<Blog>,
}

impl NewsDetailViewModel {
    pub fn new(state: AppState) -> Self {
        Self { article: Resource::new(state.notifier.clone()), state }
    }

    pub async fn enter(&self, id: i64) -> bool {
        let api = self.state.backends.blogs.clone();
        self.article
            .load(&self.state.toasts, "NEWS", async move { api.get_public_blog_detail(id).await })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::state_at;
    use futures::executor::block_on;

    fn blog(id: i64) -> Blog {
        Blog {
            id,
            title: format!("Health tip {}", id),
            summary: None,
            content: "Drink water".into(),
            thumbnail_url: None,
            published_at: None,
        }
    }

    #[test]
    fn home_shows_latest_news_only() {
        let (state, fake) = state_at("/");
        fake.blogs.borrow_mut().extend((1..=8).map(blog));
        let vm = HomeViewModel::new(state);
        assert!(block_on(vm.enter()));
        assert_eq!(vm.blogs.value().map(|p| p.items.len()), Some(6));
    }

    #[test]
    fn missing_article_fails_with_toast() {
        let (state, fake) = state_at("/news/4");
        fake.blogs.borrow_mut().push(blog(1));
        let vm = NewsDetailViewModel::new(state.clone());

        assert!(!block_on(vm.enter(4)));
        assert!(vm.article.get().error().is_some());
        assert!(block_on(vm.enter(1)));
        assert_eq!(vm.article.value().map(|b| b.title), Some("Health tip 1".to_string()));
        assert_eq!(state.toasts.list().len(), 1);
    }
}
