//! Content view state: the track grid, the track detail page and navigation

use super::types::Track;

/// Which collapsible text panel is open on the detail page.
///
/// Description and lyrics never show at the same time; opening one closes the
/// other by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InfoPanel {
    #[default]
    None,
    Description,
    Lyrics,
}

impl InfoPanel {
    pub fn toggle_description(self) -> Self {
        if self == Self::Description {
            Self::None
        } else {
            Self::Description
        }
    }

    pub fn toggle_lyrics(self) -> Self {
        if self == Self::Lyrics {
            Self::None
        } else {
            Self::Lyrics
        }
    }
}

/// Track detail page data.
///
/// `is_liked` is page-local: it starts from the fetched snapshot and is only
/// ever replaced by the value the backend returns for a like toggle, never by
/// the shared overlay's guess.
#[derive(Clone, Debug)]
pub struct TrackDetail {
    pub track: Track,
    pub similar: Vec<Track>,
    pub is_liked: bool,
    pub panel: InfoPanel,
}

impl TrackDetail {
    pub fn new(track: Track, similar: Vec<Track>) -> Self {
        let is_liked = track.is_liked;
        Self {
            track,
            similar,
            is_liked,
            panel: InfoPanel::None,
        }
    }
}

/// Represents the current view in the main content area
#[derive(Clone, Debug, Default)]
pub enum ContentView {
    #[default]
    Empty,
    /// Browse grid of track cards; the grid list becomes the queue when play
    /// is pressed on any card
    TrackGrid {
        tracks: Vec<Track>,
        selected: usize,
    },
    TrackDetail {
        detail: TrackDetail,
        /// Selection within the similar-tracks section
        similar_selected: usize,
    },
    /// Terminal state after a failed track fetch; nothing to retry
    NotFound {
        slug: String,
    },
}

/// State for the main content area
#[derive(Clone, Debug, Default)]
pub struct ContentState {
    pub view: ContentView,
    pub navigation_stack: Vec<ContentView>,
    pub is_loading: bool,
}
