//! Domain entities returned by the Viberfy backend, plus chrome/session state

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A genre tag attached to tracks
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Genre {
    pub id: u64,
    pub name: String,
    pub slug: String,
}

/// Artist as embedded in track/album payloads
#[derive(Clone, Debug, Deserialize)]
pub struct ArtistSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Full artist profile with owned catalog
#[allow(dead_code)]
#[derive(Clone, Debug, Deserialize)]
pub struct Artist {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub albums: Vec<AlbumSummary>,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub albums_count: u64,
    #[serde(default)]
    pub tracks_count: u64,
    #[serde(default)]
    pub total_plays: Option<u64>,
    #[serde(default)]
    pub total_likes: Option<u64>,
    #[serde(default)]
    pub is_verified: bool,
}

/// Album as embedded in track payloads
#[derive(Clone, Debug, Deserialize)]
pub struct AlbumSummary {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<String>,
}

/// Full album with its (unordered) track set and aggregate counters
#[allow(dead_code)]
#[derive(Clone, Debug, Deserialize)]
pub struct Album {
    pub id: u64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub cover: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub artist: ArtistSummary,
    #[serde(default)]
    pub tracks: Vec<Track>,
    #[serde(default)]
    pub tracks_count: u64,
    #[serde(default)]
    pub plays_count: u64,
    #[serde(default)]
    pub likes_count: u64,
    #[serde(default)]
    pub listens_last_week: u64,
    #[serde(default)]
    pub listens_last_month: u64,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// A track snapshot as served by the backend.
///
/// `slug` is the external identity used for every mutation call; the numeric
/// `id` is only used for UI equality checks such as "is this the track that
/// is currently playing".
#[derive(Clone, Debug, Deserialize)]
pub struct Track {
    pub id: u64,
    pub name: String,
    pub slug: String,
    /// Duration in whole seconds
    pub duration: u32,
    pub audio: String,
    pub cover: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub lyrics: Option<String>,
    pub plays_count: u64,
    pub likes_count: u64,
    #[serde(default)]
    pub download_count: u64,
    /// Server-declared liked status at fetch time; the shared overlay takes
    /// precedence once the user has toggled this slug in the session.
    #[serde(default)]
    pub is_liked: bool,
    #[serde(default)]
    pub is_explicit: bool,
    #[serde(default = "default_true")]
    pub is_published: bool,
    #[serde(default)]
    pub genres: Vec<Genre>,
    pub artist: ArtistSummary,
    #[serde(default)]
    pub featured_artists: Vec<ArtistSummary>,
    #[serde(default)]
    pub album: Option<AlbumSummary>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub mood: Option<String>,
    #[serde(default)]
    pub bpm: Option<u32>,
    #[serde(default)]
    pub bitrate: Option<u32>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_true() -> bool {
    true
}

/// Profile summary returned by the identity endpoint
#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Session/identity display state for the header chrome.
///
/// `logged_in` starts from the configuration-provided flag and is refined by
/// the identity fetch, which may only ever downgrade it to false.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub logged_in: bool,
    pub profile: Option<Profile>,
}

/// Entries of the account dropdown, in display order
pub const ACCOUNT_MENU: [&str; 3] = ["Profile", "History", "Logout"];

/// A single entry in the share popover
#[derive(Clone, Debug)]
pub struct ShareLink {
    pub label: &'static str,
    pub url: String,
}

/// Local open/closed state of the chrome widgets.
///
/// Both menus are purely local toggles; any key outside their bounds closes
/// them again.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dropdown_open: bool,
    pub dropdown_selected: usize,
    pub share_open: bool,
    pub share_selected: usize,
    pub share_links: Vec<ShareLink>,
}
