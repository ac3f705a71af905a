//! Identity refinement and logout

use crate::model::ApiGateway as _;

use super::AppController;

impl AppController {
    /// Refine the configuration-provided login flag with a "who am I" fetch.
    ///
    /// Only runs when the session currently displays as logged in; a failed
    /// fetch downgrades the display to logged out. Nothing ever upgrades it.
    pub async fn refresh_identity(&self) {
        if !self.model.is_logged_in().await {
            return;
        }

        match self.gateway.me().await {
            Ok(profile) => {
                tracing::debug!(username = %profile.username, "Identity confirmed");
                self.model.set_profile(profile).await;
            }
            Err(e) => {
                tracing::info!(error = %e, "Identity fetch failed, displaying logged out");
                self.model.downgrade_identity().await;
            }
        }
    }

    /// Log out: the display clears no matter what the backend says.
    pub async fn logout(&self) {
        if let Err(e) = self.gateway.logout().await {
            tracing::debug!(error = %e, "Logout request failed");
        }
        self.model.clear_identity().await;
        self.model.close_dropdown().await;
        tracing::info!("Logged out");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use super::*;
    use crate::model::gateway::testing::FakeGateway;
    use crate::model::{AppModel, Profile};

    fn profile() -> Profile {
        Profile {
            id: 1,
            username: "mira".to_string(),
            avatar: None,
        }
    }

    fn setup(
        logged_in: bool,
        gateway: FakeGateway,
    ) -> (Arc<AppModel>, Arc<FakeGateway>, AppController) {
        let model = Arc::new(AppModel::new(logged_in));
        let gateway = Arc::new(gateway);
        let controller = AppController::new(
            model.clone(),
            gateway.clone(),
            "https://viberfy.example".to_string(),
        );
        (model, gateway, controller)
    }

    #[tokio::test]
    async fn identity_fetch_fills_in_the_profile() {
        let (model, _gateway, controller) = setup(true, FakeGateway::new().with_profile(profile()));

        controller.refresh_identity().await;

        let session = model.get_session().await;
        assert!(session.logged_in);
        assert_eq!(session.profile.map(|p| p.username), Some("mira".to_string()));
    }

    #[tokio::test]
    async fn failed_identity_fetch_downgrades_to_logged_out() {
        let (model, _gateway, controller) = setup(true, FakeGateway::new());

        controller.refresh_identity().await;

        let session = model.get_session().await;
        assert!(!session.logged_in);
        assert!(session.profile.is_none());
    }

    #[tokio::test]
    async fn identity_is_never_upgraded_by_a_fetch() {
        // A valid profile exists on the backend, but the session starts
        // logged out, so no fetch is made and the display stays logged out.
        let (model, _gateway, controller) =
            setup(false, FakeGateway::new().with_profile(profile()));

        controller.refresh_identity().await;

        assert!(!model.is_logged_in().await);
    }

    #[tokio::test]
    async fn logout_clears_the_display_and_fires_the_request() {
        let (model, gateway, controller) = setup(true, FakeGateway::new().with_profile(profile()));
        controller.refresh_identity().await;

        controller.logout().await;

        assert_eq!(gateway.logout_calls.load(Ordering::SeqCst), 1);
        let session = model.get_session().await;
        assert!(!session.logged_in);
        assert!(session.profile.is_none());
    }
}
