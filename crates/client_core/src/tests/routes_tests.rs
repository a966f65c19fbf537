use super::*;
use uuid::Uuid;

#[test]
fn parses_known_paths() {
    assert_eq!(Route::parse("/login"), Route::Login);
    assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
    assert_eq!(Route::parse("/team-builder"), Route::TeamBuilder(None));

    let raw = "8b5c8c2e-8f6a-4f42-9c51-2f4f7a1b9d10";
    let team_id = TeamId(Uuid::parse_str(raw).expect("uuid"));
    assert_eq!(
        Route::parse(&format!("/team-builder/{raw}")),
        Route::TeamBuilder(Some(team_id))
    );

    assert_eq!(
        Route::parse("/detail/25"),
        Route::CreatureDetail(CreatureId(25))
    );
}

#[test]
fn root_and_unknown_paths_redirect_to_dashboard() {
    assert_eq!(Route::parse("/"), Route::Dashboard);
    assert_eq!(Route::parse(""), Route::Dashboard);
    assert_eq!(Route::parse("/nope"), Route::Dashboard);
    // Malformed parameters fold into the redirect as well.
    assert_eq!(Route::parse("/detail/abc"), Route::Dashboard);
    assert_eq!(Route::parse("/team-builder/not-a-uuid"), Route::TeamBuilder(None));
}

#[tokio::test]
async fn guard_redirects_unauthenticated_traffic_to_login() {
    let mut app = AppCore::new(CatalogClient::new("http://127.0.0.1:1"));

    assert_eq!(app.resolve("/dashboard"), Route::Login);
    assert_eq!(app.resolve("/team-builder"), Route::Login);
    assert_eq!(app.resolve("/"), Route::Login);
    assert_eq!(app.resolve("/login"), Route::Login);

    app.login("ash", "pw").await.expect("login");
    assert_eq!(app.resolve("/"), Route::Dashboard);
    assert_eq!(app.resolve("/detail/25"), Route::CreatureDetail(CreatureId(25)));
}
