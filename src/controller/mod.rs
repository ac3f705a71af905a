//! Controller module - Application logic and event handling
//!
//! This module contains the application controller that handles user input
//! and coordinates between the model and the backend gateway. It is organized
//! into submodules by responsibility:
//!
//! - `input`: Key event handling
//! - `playback`: Play and like intent handlers
//! - `navigation`: Grid loading and detail-page navigation
//! - `session`: Identity refinement and logout

mod input;
mod navigation;
mod playback;
mod session;

use std::sync::Arc;

use crate::model::{AppModel, ShareLink, Track, gateway::ApiGateway};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: Arc<AppModel>,
    pub(crate) gateway: Arc<dyn ApiGateway>,
    site_url: String,
}

impl AppController {
    pub fn new(model: Arc<AppModel>, gateway: Arc<dyn ApiGateway>, site_url: String) -> Self {
        Self {
            model,
            gateway,
            site_url: site_url.trim_end_matches('/').to_string(),
        }
    }

    /// Share targets for a track's public page
    pub(crate) fn share_links(&self, track: &Track) -> Vec<ShareLink> {
        let page = format!("{}/tracks/{}", self.site_url, track.slug);
        let url = urlencoding::encode(&page).into_owned();
        let text = urlencoding::encode(&track.name).into_owned();

        vec![
            ShareLink {
                label: "Facebook",
                url: format!("https://www.facebook.com/sharer/sharer.php?u={url}"),
            },
            ShareLink {
                label: "Twitter",
                url: format!("https://twitter.com/intent/tweet?url={url}&text={text}"),
            },
            ShareLink {
                label: "Telegram",
                url: format!("https://t.me/share/url?url={url}&text={text}"),
            },
            ShareLink {
                label: "Email",
                url: format!("mailto:?subject={text}&body={url}"),
            },
        ]
    }
}
