pub(crate) use crate::*;
pub(crate) use catalog::CatalogClient;
pub(crate) use shared::{
    domain::{CreatureId, Identity, TeamId, Theme},
    error::AuthError,
    protocol::CreatureDetail,
};

mod lib_tests;
mod routes_tests;
