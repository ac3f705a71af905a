//! Shared playback and liked-status state
//!
//! One instance of [`PlayerState`] lives behind the app model for the whole
//! session; every component reads playback/liked state from it and mutates it
//! through the operations below. Mutations are plain synchronous flips, so
//! wrapped in the app model's mutex they are atomic with respect to the event
//! loop.

use std::collections::HashMap;

use super::types::Track;

/// The single source of truth for the current track, the play/pause flag,
/// the active queue and the per-slug liked overlay.
#[derive(Clone, Debug, Default)]
pub struct PlayerState {
    queue: Vec<Track>,
    current: Option<Track>,
    playing: bool,
    /// Locally-known liked status by slug. Entries, once written, win over
    /// the `is_liked` baseline embedded in any track snapshot and are never
    /// removed for the rest of the session.
    liked: HashMap<String, bool>,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the queue wholesale. Does not touch the current track or the
    /// playing flag; callers replace the queue before changing the current
    /// track so the queue always contains it.
    pub fn set_queue(&mut self, tracks: Vec<Track>) {
        self.queue = tracks;
    }

    /// Single entry point for the play affordance.
    ///
    /// Pressing play on the track that is already current flips the playing
    /// flag (pause/resume). Pressing play on any other track makes it current
    /// and always starts playing; there is no "select without playing".
    pub fn toggle_play(&mut self, track: &Track) {
        match &self.current {
            Some(current) if current.id == track.id => {
                self.playing = !self.playing;
            }
            _ => {
                self.current = Some(track.clone());
                self.playing = true;
            }
        }
    }

    /// Flip the liked overlay for a slug: absent becomes true, true becomes
    /// false, false becomes true. Purely local; persisting the like is the
    /// caller's job.
    pub fn toggle_like(&mut self, slug: &str) {
        let entry = self.liked.entry(slug.to_string()).or_insert(false);
        *entry = !*entry;
    }

    /// Liked status for a slug: the overlay entry when one exists, otherwise
    /// the supplied server-declared baseline.
    pub fn is_liked(&self, slug: &str, baseline: bool) -> bool {
        self.liked.get(slug).copied().unwrap_or(baseline)
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.current.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn queue(&self) -> &[Track] {
        &self.queue
    }

    /// The raw overlay, for views that render many cards per frame
    pub fn overlay(&self) -> &HashMap<String, bool> {
        &self.liked
    }

    /// Whether `track_id` is the current track and it is playing right now.
    ///
    /// Callers capture this before `toggle_play` to decide whether the action
    /// starts playback (and therefore must register a play with the backend)
    /// or merely pauses/resumes it.
    pub fn is_current_and_playing(&self, track_id: u64) -> bool {
        self.playing && self.current.as_ref().is_some_and(|t| t.id == track_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::test_util::sample_track as track;

    #[test]
    fn toggling_same_track_alternates_playing_flag() {
        let mut state = PlayerState::new();
        let a = track(1, "a");

        state.toggle_play(&a);
        assert!(state.is_playing());
        assert_eq!(state.current_track().map(|t| t.id), Some(1));

        state.toggle_play(&a);
        assert!(!state.is_playing());
        assert_eq!(state.current_track().map(|t| t.id), Some(1));

        state.toggle_play(&a);
        assert!(state.is_playing());
    }

    #[test]
    fn switching_tracks_always_starts_playing() {
        let mut state = PlayerState::new();
        let a = track(1, "a");
        let b = track(2, "b");

        state.toggle_play(&a);
        state.toggle_play(&a); // pause
        assert!(!state.is_playing());

        state.toggle_play(&b);
        assert_eq!(state.current_track().map(|t| t.id), Some(2));
        assert!(state.is_playing());

        // And from a playing state too
        state.toggle_play(&a);
        assert_eq!(state.current_track().map(|t| t.id), Some(1));
        assert!(state.is_playing());
    }

    #[test]
    fn play_registration_predicate_across_states() {
        let mut state = PlayerState::new();
        let a = track(1, "a");

        // Idle: starting A must register a play
        assert!(!state.is_current_and_playing(a.id));
        state.toggle_play(&a);

        // Already playing A: toggling only pauses, no registration
        assert!(state.is_current_and_playing(a.id));
        state.toggle_play(&a);

        // Paused on A: resuming counts as a fresh start
        assert!(!state.is_current_and_playing(a.id));
        state.toggle_play(&a);
        assert!(state.is_current_and_playing(a.id));
    }

    #[test]
    fn toggle_like_is_an_involution() {
        let mut state = PlayerState::new();

        state.toggle_like("song");
        assert!(state.is_liked("song", false));
        state.toggle_like("song");
        assert!(!state.is_liked("song", false));

        // The entry stays present after the round trip; the baseline no
        // longer applies to this slug.
        assert!(!state.is_liked("song", true));
    }

    #[test]
    fn liked_lookup_falls_back_to_baseline() {
        let state = PlayerState::new();
        assert!(state.is_liked("unknown", true));
        assert!(!state.is_liked("unknown", false));

        let mut state = state;
        state.toggle_like("known");
        assert!(state.is_liked("known", false));
        assert!(state.is_liked("known", true));
    }

    #[test]
    fn set_queue_leaves_playback_untouched() {
        let mut state = PlayerState::new();
        let a = track(1, "a");
        state.toggle_play(&a);

        state.set_queue(vec![track(2, "b"), track(3, "c")]);
        assert_eq!(state.queue().len(), 2);
        assert_eq!(state.current_track().map(|t| t.id), Some(1));
        assert!(state.is_playing());

        state.set_queue(vec![]);
        assert!(state.queue().is_empty());
        assert!(state.is_playing());
    }
}
