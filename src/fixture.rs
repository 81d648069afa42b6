//! Shape of the trimmed Sonarr series fixture.
//!
//! Deserializing a full `/api/v3/series` record into these types drops every
//! field the collectors do not read; serializing them back yields the fixture.
//! Field declaration order is the key order of the written JSON. Kept fields
//! hold raw JSON values: only the presence of a required key is checked.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// A value that is either missing from its object or present with any value,
/// `null` included.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    Absent,
    Present(T),
}

impl<T> Default for Field<T> {
    fn default() -> Self {
        Field::Absent
    }
}

impl<T> Field<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }
}

// Only reached when the key exists, so every outcome is `Present`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Field::Present)
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Field::Present(v) => v.serialize(serializer),
            Field::Absent => serializer.serialize_none(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    pub id: Value,
    pub monitored: Value,
    pub seasons: Vec<Season>,
    pub statistics: SeriesStatistics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Season {
    pub monitored: Value,
    pub statistics: SeasonStatistics,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub episode_file_count: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub episode_count: Field<Value>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub total_episode_count: Field<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStatistics {
    pub season_count: Value,
    pub episode_file_count: Value,
    pub episode_count: Value,
    pub total_episode_count: Value,
    pub size_on_disk: Value,
    pub percent_of_episodes: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeasonStatistics {
    pub episode_file_count: Value,
    pub episode_count: Value,
    pub total_episode_count: Value,
    pub size_on_disk: Value,
    pub percent_of_episodes: Value,
}
