use thiserror::Error;

use crate::domain::TeamId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    #[error("team {team_id} not found")]
    TeamNotFound { team_id: TeamId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("username and password are both required")]
    MissingCredentials,
}
