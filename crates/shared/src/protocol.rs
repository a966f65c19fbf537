//! Wire documents exchanged with the external creature catalog API.
//!
//! Field names mirror the remote JSON exactly; nothing here is re-shaped
//! beyond what serde needs to deserialize the payloads.

use serde::{Deserialize, Serialize};

use crate::domain::CreatureId;

/// One page of the paginated catalog listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreaturePage {
    pub count: u64,
    pub results: Vec<PageItem>,
}

/// A listed catalog entry: display name plus the absolute detail URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageItem {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub type_: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityEntry {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteSet {
    pub front_default: Option<String>,
}

/// Full detail document for one creature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureDetail {
    pub id: CreatureId,
    pub name: String,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
    pub abilities: Vec<AbilityEntry>,
    pub moves: Vec<MoveEntry>,
    #[serde(default)]
    pub sprites: SpriteSet,
}

/// Listing projection of a detail document: just enough to render a
/// catalog card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureSummary {
    pub id: CreatureId,
    pub name: String,
    pub types: Vec<String>,
    pub sprite: Option<String>,
}

impl From<CreatureDetail> for CreatureSummary {
    fn from(detail: CreatureDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name,
            types: detail.types.into_iter().map(|t| t.type_.name).collect(),
            sprite: detail.sprites.front_default,
        }
    }
}
