pub(crate) use crate::*;
pub(crate) use shared::{
    domain::{CreatureId, TeamId},
    error::RosterError,
    protocol::{CreatureDetail, StatEntry},
};
