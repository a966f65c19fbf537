use super::*;
use async_trait::async_trait;
use shared::protocol::{NamedResource, SpriteSet, TypeSlot};

// Points at a port nothing listens on, so any accidental request fails
// loudly instead of hitting the real catalog.
fn offline_app() -> AppCore {
    AppCore::new(CatalogClient::new("http://127.0.0.1:1"))
}

fn detail(id: u32, name: &str) -> CreatureDetail {
    CreatureDetail {
        id: CreatureId(id),
        name: name.into(),
        types: vec![TypeSlot {
            type_: NamedResource {
                name: "normal".into(),
            },
        }],
        stats: Vec::new(),
        abilities: Vec::new(),
        moves: Vec::new(),
        sprites: SpriteSet::default(),
    }
}

#[tokio::test]
async fn login_accepts_any_non_empty_credentials() {
    let mut app = offline_app();
    app.login("ash", "whatever").await.expect("login");

    let identity = app.session.current().expect("identity");
    assert_eq!(identity.username, "ash");
    assert!(!identity.id.is_empty());
}

#[tokio::test]
async fn login_rejects_empty_fields() {
    let mut app = offline_app();

    let err = app.login("", "secret").await.expect_err("must fail");
    assert_eq!(err, AuthError::MissingCredentials);
    let err = app.login("ash", "").await.expect_err("must fail");
    assert_eq!(err, AuthError::MissingCredentials);
    assert!(!app.session.is_authenticated());
}

#[tokio::test]
async fn logout_clears_the_session() {
    let mut app = offline_app();
    app.login("ash", "pw").await.expect("login");
    app.logout();
    assert!(app.session.current().is_none());
}

struct FixedIdentity;

#[async_trait]
impl IdentityVerifier for FixedIdentity {
    async fn verify(&self, username: &str, _password: &str) -> Result<Identity, AuthError> {
        Ok(Identity {
            id: "42".into(),
            username: username.to_string(),
        })
    }
}

#[tokio::test]
async fn verifier_seam_controls_the_minted_identity() {
    let mut app = AppCore::with_verifier(CatalogClient::new("http://127.0.0.1:1"), FixedIdentity);
    app.login("misty", "ignored").await.expect("login");
    assert_eq!(app.session.current().expect("identity").id, "42");
}

#[test]
fn theme_starts_light_and_toggles() {
    let mut app = offline_app();
    assert_eq!(app.theme.current(), Theme::Light);
    app.theme.toggle();
    assert_eq!(app.theme.current(), Theme::Dark);
    app.theme.toggle();
    assert_eq!(app.theme.current(), Theme::Light);
}

#[test]
fn open_team_builder_creates_a_default_team_when_none_exist() {
    let mut app = offline_app();
    let team_id = app.open_team_builder(None);

    assert_eq!(app.roster.len(), 1);
    assert_eq!(app.roster.team(team_id).expect("team").name(), "Team 1");
    assert_eq!(app.roster.current_team_id(), Some(team_id));
}

#[test]
fn open_team_builder_prefers_requested_then_latest() {
    let mut app = offline_app();
    let first = app.roster.create_team(Some("First"));
    let second = app.roster.create_team(Some("Second"));

    assert_eq!(app.open_team_builder(Some(first)), first);
    assert_eq!(app.roster.current_team_id(), Some(first));

    // Unknown request falls back to the most recently created team.
    assert_eq!(app.open_team_builder(Some(TeamId::generate())), second);
    assert_eq!(app.open_team_builder(None), second);
    assert_eq!(app.roster.len(), 2);
}

#[tokio::test]
async fn add_creature_skips_the_fetch_when_team_is_full() {
    let mut app = offline_app();
    let team_id = app.roster.create_team(None);
    for id in 1..=6 {
        app.roster
            .add_entry(team_id, &detail(id, &format!("c{id}")))
            .expect("add");
    }

    // The catalog client points at a dead port; reaching it would error.
    app.add_creature_to_team(team_id, CreatureId(7))
        .await
        .expect("silent no-op");
    assert_eq!(app.roster.team(team_id).expect("team").entries().len(), 6);
}

#[tokio::test]
async fn add_creature_surfaces_remote_failure_and_leaves_roster_unchanged() {
    let mut app = offline_app();
    let team_id = app.roster.create_team(None);

    let err = app
        .add_creature_to_team(team_id, CreatureId(25))
        .await
        .expect_err("must fail");
    assert!(matches!(err, AppError::Catalog(_)));
    assert!(app.roster.team(team_id).expect("team").entries().is_empty());
}
