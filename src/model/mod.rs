//! Model module - Application state and data types
//!
//! This module contains all the data structures and state management for the
//! application. It is organized into submodules by responsibility:
//!
//! - `types`: Domain entities (tracks, albums, artists) and chrome state
//! - `player`: Shared playback state, queue and liked overlay
//! - `content`: Content view data (track grid, detail page, not-found)
//! - `gateway`: Backend API client
//! - `app_model`: Main application model with state management methods

mod app_model;
mod content;
pub mod gateway;
mod player;
mod types;

pub use types::{
    ACCOUNT_MENU, Album, AlbumSummary, Artist, ArtistSummary, Genre, Profile, SessionState,
    ShareLink, Track, UiState,
};

pub use content::{ContentState, ContentView, InfoPanel, TrackDetail};

pub use app_model::{AppModel, PlaybackView};

pub use gateway::{ApiError, ApiGateway, HttpGateway, LikeResponse, PlayResponse};

#[cfg(test)]
pub(crate) mod test_util {
    use super::types::{ArtistSummary, Track};

    /// Minimal published track for exercising state and intent handlers
    pub(crate) fn sample_track(id: u64, slug: &str) -> Track {
        Track {
            id,
            name: format!("Track {id}"),
            slug: slug.to_string(),
            duration: 180,
            audio: format!("/media/{slug}.mp3"),
            cover: format!("/media/{slug}.jpg"),
            description: None,
            lyrics: None,
            plays_count: 0,
            likes_count: 0,
            download_count: 0,
            is_liked: false,
            is_explicit: false,
            is_published: true,
            genres: vec![],
            artist: ArtistSummary {
                id: 1,
                name: "Artist".into(),
                slug: "artist".into(),
                avatar: None,
            },
            featured_artists: vec![],
            album: None,
            language: None,
            mood: None,
            bpm: None,
            bitrate: None,
            release_date: None,
            created_at: None,
            updated_at: None,
        }
    }
}
