//! In-memory roster store: named teams of up to six creature snapshots.
//!
//! The store is the single stateful core of the application. All mutation
//! goes through `&mut self` methods and completes before the caller
//! observes anything, matching the one-event-at-a-time discipline of the
//! surrounding UI loop; no interior locking is needed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use shared::{
    domain::{CreatureId, TeamId},
    error::RosterError,
    protocol::{CreatureDetail, StatEntry},
};

/// Fixed six-slot stat record, filled from the remote document's
/// free-form stat list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl StatBlock {
    /// Maps well-known stat names into the fixed slots. Unrecognized
    /// names are dropped; names absent from the input stay 0.
    fn from_entries(entries: &[StatEntry]) -> Self {
        let mut block = StatBlock::default();
        for entry in entries {
            match entry.stat.name.as_str() {
                "hp" => block.hp = entry.base_stat,
                "attack" => block.attack = entry.base_stat,
                "defense" => block.defense = entry.base_stat,
                "special-attack" => block.special_attack = entry.base_stat,
                "special-defense" => block.special_defense = entry.base_stat,
                "speed" => block.speed = entry.base_stat,
                _ => {}
            }
        }
        block
    }
}

/// Denormalized snapshot of a creature at the moment it was added to a
/// team. Never refreshed from the remote catalog afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: CreatureId,
    pub name: String,
    pub types: Vec<String>,
    pub stats: StatBlock,
    pub abilities: Vec<String>,
    pub moves: Vec<String>,
}

impl RosterEntry {
    pub const MOVE_LIMIT: usize = 4;

    fn snapshot(detail: &CreatureDetail) -> Self {
        Self {
            id: detail.id,
            name: detail.name.clone(),
            types: detail.types.iter().map(|t| t.type_.name.clone()).collect(),
            stats: StatBlock::from_entries(&detail.stats),
            abilities: detail
                .abilities
                .iter()
                .map(|a| a.ability.name.clone())
                .collect(),
            moves: detail
                .moves
                .iter()
                .take(Self::MOVE_LIMIT)
                .map(|m| m.move_.name.clone())
                .collect(),
        }
    }
}

/// A named, ordered roster of at most six entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    id: TeamId,
    name: String,
    entries: Vec<RosterEntry>,
}

impl Team {
    pub const MAX_ENTRIES: usize = 6;

    fn new(id: TeamId, name: String) -> Self {
        Self {
            id,
            name,
            entries: Vec::new(),
        }
    }

    pub fn id(&self) -> TeamId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in display order.
    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= Self::MAX_ENTRIES
    }

    fn position(&self, creature_id: CreatureId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == creature_id)
    }
}

/// All teams, in creation order, plus the current-team pointer used for
/// navigation continuity.
#[derive(Debug, Default)]
pub struct RosterStore {
    teams: Vec<Team>,
    current_team: Option<TeamId>,
}

impl RosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty team and makes it current. A missing or empty
    /// name falls back to `Team {n}` where `n` counts existing teams.
    pub fn create_team(&mut self, name: Option<&str>) -> TeamId {
        let team_id = TeamId::generate();
        let name = match name {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => format!("Team {}", self.teams.len() + 1),
        };
        self.teams.push(Team::new(team_id, name));
        self.current_team = Some(team_id);
        team_id
    }

    /// Overwrites the team's display name. Addressing an unknown team is
    /// silently ignored (logged only), unlike `add_entry`.
    pub fn rename_team(&mut self, team_id: TeamId, new_name: impl Into<String>) {
        match self.team_mut(team_id) {
            Some(team) => team.name = new_name.into(),
            None => warn!(%team_id, "rename ignored: unknown team"),
        }
    }

    /// Snapshots `detail` onto the end of the team's roster.
    ///
    /// Fails when the team does not exist. A team already holding
    /// [`Team::MAX_ENTRIES`] entries is left unchanged without error.
    pub fn add_entry(
        &mut self,
        team_id: TeamId,
        detail: &CreatureDetail,
    ) -> Result<(), RosterError> {
        let team = self
            .team_mut(team_id)
            .ok_or(RosterError::TeamNotFound { team_id })?;
        if team.is_full() {
            warn!(%team_id, creature_id = %detail.id, "add ignored: team at capacity");
            return Ok(());
        }
        team.entries.push(RosterEntry::snapshot(detail));
        Ok(())
    }

    /// Removes the first entry matching `creature_id`. Unknown team or
    /// entry is a no-op.
    pub fn remove_entry(&mut self, team_id: TeamId, creature_id: CreatureId) {
        let Some(team) = self.team_mut(team_id) else {
            warn!(%team_id, "remove ignored: unknown team");
            return;
        };
        let Some(index) = team.position(creature_id) else {
            warn!(%team_id, %creature_id, "remove ignored: creature not on team");
            return;
        };
        let mut next = team.entries.clone();
        next.remove(index);
        team.entries = next;
    }

    /// Moves the entry identified by `source_id` to the position currently
    /// occupied by `destination_id`, shifting the entries in between.
    /// Unknown team or either id missing from the team is a no-op.
    pub fn reorder_entries(
        &mut self,
        team_id: TeamId,
        source_id: CreatureId,
        destination_id: CreatureId,
    ) {
        let Some(team) = self.team_mut(team_id) else {
            warn!(%team_id, "reorder ignored: unknown team");
            return;
        };
        let (Some(source), Some(destination)) =
            (team.position(source_id), team.position(destination_id))
        else {
            warn!(%team_id, %source_id, %destination_id, "reorder ignored: entry not on team");
            return;
        };
        let mut next = team.entries.clone();
        let moved = next.remove(source);
        next.insert(destination, moved);
        team.entries = next;
    }

    /// Teams in creation order.
    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn current_team_id(&self) -> Option<TeamId> {
        self.current_team
    }

    /// Points the current-team marker at an existing team. Returns false
    /// (and changes nothing) when the team is unknown.
    pub fn set_current_team(&mut self, team_id: TeamId) -> bool {
        if self.team(team_id).is_some() {
            self.current_team = Some(team_id);
            true
        } else {
            false
        }
    }

    /// Most recently created team, if any.
    pub fn latest_team_id(&self) -> Option<TeamId> {
        self.teams.last().map(|t| t.id)
    }

    fn team_mut(&mut self, team_id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == team_id)
    }
}

#[cfg(test)]
mod tests;
