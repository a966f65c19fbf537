use shared::domain::{CreatureId, TeamId};
use uuid::Uuid;

/// Client-side navigation targets. Paths that match nothing fold into
/// the root redirect (dashboard).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    TeamBuilder(Option<TeamId>),
    CreatureDetail(CreatureId),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let mut segments = path.split('/').filter(|s| !s.is_empty());
        match segments.next() {
            Some("login") => Route::Login,
            Some("dashboard") => Route::Dashboard,
            Some("team-builder") => {
                let team_id = segments
                    .next()
                    .and_then(|raw| Uuid::parse_str(raw).ok())
                    .map(TeamId);
                Route::TeamBuilder(team_id)
            }
            Some("detail") => match segments.next().and_then(|raw| raw.parse::<u32>().ok()) {
                Some(id) => Route::CreatureDetail(CreatureId(id)),
                None => Route::Dashboard,
            },
            _ => Route::Dashboard,
        }
    }
}
