//! Play and like intent handlers
//!
//! Both presentation contexts funnel through here. A play press must register
//! a play with the backend exactly once per start of playback: the handler
//! captures whether the pressed track was already current and playing before
//! calling `toggle_play`, and only issues the registration when it was not.
//! Pausing and resuming the same track therefore never double-counts, while
//! starting a different track (or the first one) always counts once.

use crate::model::{ApiGateway as _, Track};

use super::AppController;

impl AppController {
    /// Play pressed on a card. `context` is the list the card was rendered
    /// in; it replaces the queue before the current track changes.
    pub async fn play_from_card(&self, track: Track, context: Vec<Track>) {
        self.model.set_queue(context).await;
        let was_playing = self.model.is_current_and_playing(track.id).await;
        self.model.toggle_play(&track).await;
        tracing::debug!(slug = %track.slug, resumed = was_playing, "Play toggled from card");

        if !was_playing {
            self.register_play(&track.slug).await;
        }
    }

    /// Play pressed on the detail page. The queue becomes just this track.
    pub async fn play_from_detail(&self) {
        let Some(track) = self.model.detail_track().await else {
            return;
        };

        let was_playing = self.model.is_current_and_playing(track.id).await;
        self.model.set_queue(vec![track.clone()]).await;
        self.model.toggle_play(&track).await;
        tracing::debug!(slug = %track.slug, resumed = was_playing, "Play toggled from detail");

        if !was_playing {
            self.register_play(&track.slug).await;
        }
    }

    /// The displayed counter is only replaced once the backend answers, so
    /// the display lags the press by one round trip instead of drifting when
    /// the request fails.
    async fn register_play(&self, slug: &str) {
        match self.gateway.register_play(slug).await {
            Ok(response) => {
                self.model.set_plays_count(slug, response.plays_count).await;
            }
            Err(e) => {
                tracing::warn!(slug, error = %e, "Play registration failed");
            }
        }
    }

    /// Like pressed on a card: flip the shared overlay immediately so every
    /// component showing this slug updates at once, shift the card's counter
    /// by one in the direction of the pre-flip status, then persist. The
    /// confirmed counter overwrites the pending adjustment when the response
    /// lands; a failed request is logged and swallowed, leaving the
    /// optimistic state in place.
    pub async fn toggle_like_from_card(&self, track: &Track) {
        let was_liked = self.model.liked_status(&track.slug, track.is_liked).await;
        self.model.toggle_like(&track.slug).await;
        self.model.adjust_likes_count(&track.slug, was_liked).await;

        match self.gateway.toggle_like(&track.slug).await {
            Ok(response) => {
                tracing::debug!(slug = %track.slug, is_liked = response.is_liked, "Like persisted");
                self.model
                    .set_likes_count(&track.slug, response.likes_count)
                    .await;
            }
            Err(e) => {
                tracing::warn!(slug = %track.slug, error = %e, "Like toggle failed, keeping local state");
            }
        }
    }

    /// Like pressed on the detail page: no optimistic step. The liked flag
    /// and counter are taken from the backend response once it arrives.
    pub async fn toggle_like_from_detail(&self) {
        let Some(track) = self.model.detail_track().await else {
            return;
        };

        match self.gateway.toggle_like(&track.slug).await {
            Ok(response) => {
                tracing::debug!(slug = %track.slug, is_liked = response.is_liked, "Like confirmed");
                self.model.apply_like_confirmation(&track.slug, response).await;
            }
            Err(e) => {
                tracing::warn!(slug = %track.slug, error = %e, "Like toggle failed");
            }
        }
    }

    /// Open the share popover for the detail page's track
    pub async fn open_share_menu(&self) {
        if let Some(track) = self.model.detail_track().await {
            self.model.open_share(self.share_links(&track)).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::model::gateway::testing::FakeGateway;
    use crate::model::test_util::sample_track;
    use crate::model::{AppModel, ContentView, TrackDetail};

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

    fn grid_track<'a>(view: &'a ContentView, slug: &str) -> &'a Track {
        let ContentView::TrackGrid { tracks, .. } = view else {
            panic!("expected grid view");
        };
        tracks.iter().find(|t| t.slug == slug).expect("track in grid")
    }

    #[tokio::test]
    async fn play_registers_once_per_start_of_playback() {
        let track = sample_track(1, "a");
        let (model, gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model.set_track_grid(vec![track.clone()]).await;

        // Idle -> playing: registers
        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 1);

        // Playing -> paused: no registration
        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 1);

        // Paused -> playing again: a fresh start, registers
        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn switching_tracks_registers_each_start() {
        let a = sample_track(1, "a");
        let b = sample_track(2, "b");
        let (model, gateway, controller) = setup(
            FakeGateway::new()
                .with_track(a.clone())
                .with_track(b.clone()),
        );
        let grid = vec![a.clone(), b.clone()];
        model.set_track_grid(grid.clone()).await;

        controller.play_from_card(a.clone(), grid.clone()).await;
        controller.play_from_card(b.clone(), grid.clone()).await;
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 2);

        let view = model.playback_view().await;
        assert_eq!(view.track.map(|t| t.id), Some(2));
        assert!(view.playing);
    }

    #[tokio::test]
    async fn play_response_replaces_displayed_counter() {
        let mut track = sample_track(1, "a");
        track.plays_count = 10;
        let (model, _gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model.set_track_grid(vec![track.clone()]).await;

        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;

        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").plays_count, 11);

        // Pause: counter untouched
        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;
        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").plays_count, 11);
    }

    #[tokio::test]
    async fn failed_play_registration_leaves_counter_alone() {
        let mut track = sample_track(1, "a");
        track.plays_count = 10;
        let gateway = FakeGateway::new().with_track(track.clone());
        gateway.fail_mutations.store(true, Ordering::SeqCst);
        let (model, gateway, controller) = setup(gateway);
        model.set_track_grid(vec![track.clone()]).await;

        controller
            .play_from_card(track.clone(), vec![track.clone()])
            .await;

        // The request went out and failed; playback still started locally
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 1);
        assert!(model.playback_view().await.playing);
        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").plays_count, 10);
    }

    #[tokio::test]
    async fn card_like_applies_optimistically_before_the_backend_answers() {
        let mut track = sample_track(1, "a");
        track.likes_count = 5;
        let (model, gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model.set_track_grid(vec![track.clone()]).await;

        controller.toggle_like_from_card(&track).await;

        assert!(model.liked_status("a", track.is_liked).await);
        assert_eq!(gateway.like_calls.load(Ordering::SeqCst), 1);
        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").likes_count, 6);
    }

    #[tokio::test]
    async fn card_like_survives_a_rejected_mutation() {
        let track = sample_track(1, "a");
        let gateway = FakeGateway::new().with_track(track.clone());
        gateway.fail_mutations.store(true, Ordering::SeqCst);
        let (model, _gateway, controller) = setup(gateway);
        model.set_track_grid(vec![track.clone()]).await;

        controller.toggle_like_from_card(&track).await;

        // Overlay and counter stay as optimistically applied
        assert!(model.liked_status("a", false).await);
        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").likes_count, 1);
    }

    #[tokio::test]
    async fn card_like_direction_comes_from_the_preflip_status() {
        // Server baseline says liked; no overlay entry yet
        let mut track = sample_track(1, "a");
        track.is_liked = true;
        track.likes_count = 5;
        let (model, _gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model.set_track_grid(vec![track.clone()]).await;

        controller.toggle_like_from_card(&track).await;

        // Direction used the merged pre-flip value (liked), so the count
        // went down even though the overlay's first flip lands on true.
        let state = model.get_content_state().await;
        assert_eq!(grid_track(&state.view, "a").likes_count, 4);
        assert!(model.liked_status("a", track.is_liked).await);
    }

    #[tokio::test]
    async fn detail_like_waits_for_the_confirmed_response() {
        let mut track = sample_track(1, "a");
        track.likes_count = 5;
        let (model, gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model
            .set_track_detail(TrackDetail::new(track.clone(), vec![]))
            .await;

        controller.toggle_like_from_detail().await;

        assert_eq!(gateway.like_calls.load(Ordering::SeqCst), 1);
        let state = model.get_content_state().await;
        let ContentView::TrackDetail { detail, .. } = &state.view else {
            panic!("expected detail view");
        };
        assert!(detail.is_liked);
        assert_eq!(detail.track.likes_count, 6);

        // The shared overlay is not written on this path
        assert!(!model.liked_status("a", false).await);
    }

    #[tokio::test]
    async fn detail_like_failure_changes_nothing() {
        let mut track = sample_track(1, "a");
        track.likes_count = 5;
        let gateway = FakeGateway::new().with_track(track.clone());
        gateway.fail_mutations.store(true, Ordering::SeqCst);
        let (model, _gateway, controller) = setup(gateway);
        model
            .set_track_detail(TrackDetail::new(track.clone(), vec![]))
            .await;

        controller.toggle_like_from_detail().await;

        let state = model.get_content_state().await;
        let ContentView::TrackDetail { detail, .. } = &state.view else {
            panic!("expected detail view");
        };
        assert!(!detail.is_liked);
        assert_eq!(detail.track.likes_count, 5);
    }

    #[tokio::test]
    async fn detail_play_uses_a_single_track_queue() {
        let track = sample_track(1, "a");
        let (model, gateway, controller) = setup(FakeGateway::new().with_track(track.clone()));
        model
            .set_track_detail(TrackDetail::new(track.clone(), vec![sample_track(2, "b")]))
            .await;

        controller.play_from_detail().await;

        let view = model.playback_view().await;
        assert_eq!(view.queue_len, 1);
        assert_eq!(view.queue_pos, Some(0));
        assert!(view.playing);
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 1);

        // Toggling again from the page pauses without re-registering
        controller.play_from_detail().await;
        assert!(!model.playback_view().await.playing);
        assert_eq!(gateway.play_calls.load(Ordering::SeqCst), 1);
    }
}
