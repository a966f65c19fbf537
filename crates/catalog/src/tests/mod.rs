pub(crate) use crate::*;
pub(crate) use shared::domain::CreatureId;
