//! Grid loading and detail-page navigation

use crate::model::{ApiGateway as _, TrackDetail};

use super::AppController;

impl AppController {
    /// Load the browse grid from the backend
    pub async fn load_track_grid(&self) {
        self.model.set_content_loading(true).await;

        match self.gateway.list_tracks().await {
            Ok(tracks) => {
                tracing::info!(count = tracks.len(), "Loaded track grid");
                self.model.set_track_grid(tracks).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load track grid");
                self.model.set_track_grid(Vec::new()).await;
            }
        }
    }

    /// Open the detail page for a slug.
    ///
    /// The similar-tracks fetch is only issued once the primary fetch has
    /// succeeded; any primary failure ends in the terminal not-found view
    /// with no retry. A failed similar fetch hides the section but the page
    /// still renders.
    pub async fn open_track_detail(&self, slug: &str) {
        tracing::debug!(slug, "Opening track detail");
        self.model.set_content_loading(true).await;

        let track = match self.gateway.track_by_slug(slug).await {
            Ok(track) => track,
            Err(e) => {
                tracing::info!(slug, error = %e, "Track fetch failed, showing not found");
                self.model.set_not_found(slug.to_string()).await;
                return;
            }
        };

        let similar = match self.gateway.similar_tracks(slug).await {
            Ok(similar) => similar,
            Err(e) => {
                tracing::debug!(slug, error = %e, "Similar tracks unavailable");
                Vec::new()
            }
        };

        self.model
            .set_track_detail(TrackDetail::new(track, similar))
            .await;
    }

    /// Open the detail page for the currently selected card
    pub async fn open_selected_track(&self) {
        let selected = self
            .model
            .selected_grid_track()
            .await
            .or(self.model.selected_similar_track().await);

        if let Some((track, _)) = selected {
            self.open_track_detail(&track.slug).await;
        }
    }

    pub async fn go_back(&self) {
        self.model.navigate_back().await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::model::gateway::testing::FakeGateway;
    use crate::model::test_util::sample_track;
    use crate::model::{AppModel, ContentView};

    fn setup(gateway: FakeGateway) -> (Arc<AppModel>, Arc<FakeGateway>, AppController) {
        let model = Arc::new(AppModel::new(false));
        let gateway = Arc::new(gateway);
        let controller = AppController::new(
            model.clone(),
            gateway.clone(),
            "https://viberfy.example".to_string(),
        );
        (model, gateway, controller)
    }

    #[tokio::test]
    async fn missing_track_is_terminal_and_skips_similar_fetch() {
        let (model, gateway, controller) = setup(FakeGateway::new());

        controller.open_track_detail("missing").await;

        let state = model.get_content_state().await;
        assert!(!state.is_loading);
        match &state.view {
            ContentView::NotFound { slug } => assert_eq!(slug, "missing"),
            other => panic!("expected not-found view, got {other:?}"),
        }
        assert_eq!(gateway.similar_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn detail_opens_with_similar_tracks() {
        let track = sample_track(1, "a");
        let (model, gateway, controller) = setup(
            FakeGateway::new()
                .with_track(track.clone())
                .with_similar("a", vec![sample_track(2, "b"), sample_track(3, "c")]),
        );

        controller.open_track_detail("a").await;

        assert_eq!(gateway.similar_calls.load(Ordering::SeqCst), 1);
        let state = model.get_content_state().await;
        let ContentView::TrackDetail { detail, .. } = &state.view else {
            panic!("expected detail view");
        };
        assert_eq!(detail.track.slug, "a");
        assert_eq!(detail.similar.len(), 2);
    }

    #[tokio::test]
    async fn failed_similar_fetch_still_renders_the_page() {
        let track = sample_track(1, "a");
        let gateway = FakeGateway::new().with_track(track.clone());
        gateway.fail_similar.store(true, Ordering::SeqCst);
        let (model, _gateway, controller) = setup(gateway);

        controller.open_track_detail("a").await;

        let state = model.get_content_state().await;
        let ContentView::TrackDetail { detail, .. } = &state.view else {
            panic!("expected detail view");
        };
        assert!(detail.similar.is_empty());
    }

    #[tokio::test]
    async fn empty_backend_yields_an_empty_grid() {
        let (model, _gateway, controller) = setup(FakeGateway::new());

        controller.load_track_grid().await;

        let state = model.get_content_state().await;
        assert!(!state.is_loading);
        let ContentView::TrackGrid { tracks, .. } = &state.view else {
            panic!("expected grid view");
        };
        assert!(tracks.is_empty());
    }
}
