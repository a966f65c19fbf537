//! Application root: owns the session, theme and roster stores plus the
//! catalog client, and exposes the composite operations the view layer
//! dispatches. The view never talks to the stores behind this type's
//! back, so single-writer discipline holds structurally.

use thiserror::Error;
use tracing::{error, info, warn};

use catalog::{CatalogClient, CatalogError};
use roster::RosterStore;
use shared::{
    domain::{CreatureId, Identity, TeamId, Theme},
    error::{AuthError, RosterError},
    protocol::{CreatureDetail, CreatureSummary},
};

pub mod auth;
pub mod routes;

pub use auth::{AcceptAnyCredentials, IdentityVerifier};
pub use routes::Route;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Roster(#[from] RosterError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Holds at most one logged-in identity.
#[derive(Debug, Default)]
pub struct SessionStore {
    current: Option<Identity>,
}

impl SessionStore {
    pub fn login(&mut self, identity: Identity) {
        self.current = Some(identity);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

#[derive(Debug, Default)]
pub struct ThemeStore {
    theme: Theme,
}

impl ThemeStore {
    pub fn toggle(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn current(&self) -> Theme {
        self.theme
    }
}

pub struct AppCore<V = AcceptAnyCredentials> {
    verifier: V,
    pub session: SessionStore,
    pub theme: ThemeStore,
    pub roster: RosterStore,
    catalog: CatalogClient,
}

impl AppCore<AcceptAnyCredentials> {
    pub fn new(catalog: CatalogClient) -> Self {
        Self::with_verifier(catalog, AcceptAnyCredentials)
    }
}

impl<V: IdentityVerifier> AppCore<V> {
    pub fn with_verifier(catalog: CatalogClient, verifier: V) -> Self {
        Self {
            verifier,
            session: SessionStore::default(),
            theme: ThemeStore::default(),
            roster: RosterStore::new(),
            catalog,
        }
    }

    pub async fn login(&mut self, username: &str, password: &str) -> Result<(), AuthError> {
        let identity = self.verifier.verify(username, password).await?;
        info!(username = %identity.username, "login accepted");
        self.session.login(identity);
        Ok(())
    }

    pub fn logout(&mut self) {
        if let Some(identity) = self.session.current() {
            info!(username = %identity.username, "logout");
        }
        self.session.logout();
    }

    /// Parses `path` and applies the authentication guard: everything but
    /// the login page redirects to login while no one is signed in.
    pub fn resolve(&self, path: &str) -> Route {
        let route = Route::parse(path);
        if route != Route::Login && !self.session.is_authenticated() {
            return Route::Login;
        }
        route
    }

    /// Picks the team the builder page works on: the requested team when
    /// it exists, otherwise the most recently created one, otherwise a
    /// freshly created default-named team. The choice becomes current.
    pub fn open_team_builder(&mut self, requested: Option<TeamId>) -> TeamId {
        if let Some(team_id) = requested {
            if self.roster.set_current_team(team_id) {
                return team_id;
            }
            warn!(%team_id, "requested team unknown; falling back");
        }
        if let Some(team_id) = self.roster.latest_team_id() {
            self.roster.set_current_team(team_id);
            return team_id;
        }
        self.roster.create_team(None)
    }

    /// Fetches the creature's detail document and appends the snapshot to
    /// the team. Skips the fetch entirely when the team is already full,
    /// mirroring the builder UI's capacity pre-check.
    pub async fn add_creature_to_team(
        &mut self,
        team_id: TeamId,
        creature_id: CreatureId,
    ) -> Result<(), AppError> {
        if let Some(team) = self.roster.team(team_id) {
            if team.is_full() {
                warn!(%team_id, %creature_id, "team full; skipping detail fetch");
                return Ok(());
            }
        }
        let detail = self
            .catalog
            .get_creature_detail(creature_id)
            .await
            .map_err(|err| {
                error!(%creature_id, %err, "could not fetch creature detail");
                err
            })?;
        self.roster.add_entry(team_id, &detail)?;
        Ok(())
    }

    pub async fn browse_catalog(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<CreatureSummary>, CatalogError> {
        self.catalog.list_creatures(limit, offset).await
    }

    pub async fn creature_detail(
        &self,
        creature_id: CreatureId,
    ) -> Result<CreatureDetail, CatalogError> {
        self.catalog.get_creature_detail(creature_id).await
    }
}

#[cfg(test)]
mod tests;
