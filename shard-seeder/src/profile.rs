//! Character profile lookup
//!
//! Read model behind the character page: display names instead of stored
//! ids, town name as residence, last login as a timestamp.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::EntityKind;
use crate::storage::{RepoResult, StoreError, WorldStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CharacterProfile {
    pub name: String,
    pub level: u32,
    pub vocation: &'static str,
    pub sex: &'static str,
    /// Name of the home town
    pub residence: String,
    /// `None` for characters that never logged in
    pub last_login: Option<DateTime<Utc>>,
}

/// Look a character up by exact name
pub async fn character_profile(
    store: &dyn WorldStore,
    name: &str,
) -> RepoResult<Option<CharacterProfile>> {
    let Some(character) = store.character_by_name(name).await? else {
        return Ok(None);
    };

    let town = store.town(character.town_id).await?.ok_or_else(|| {
        StoreError::Constraint(format!(
            "{} {} references missing town {}",
            EntityKind::Character,
            character.id,
            character.town_id
        ))
    })?;

    let last_login = match character.last_login {
        0 => None,
        secs => DateTime::from_timestamp(secs, 0),
    };

    Ok(Some(CharacterProfile {
        name: character.name,
        level: character.level.get(),
        vocation: character.vocation.name(),
        sex: character.sex.name(),
        residence: town.name,
        last_login,
    }))
}
