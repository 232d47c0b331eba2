use serde::{Deserialize, Serialize};

/// Writable fields of a song. Request bodies deserialize into this type, so an `id` sent by
/// the client is never read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "test", derive(fake::Dummy))]
#[serde(rename_all = "camelCase", default)]
pub struct Data {
    pub artist: String,
    pub title: String,
    pub length_in_seconds: i32,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: i32,
    #[serde(flatten)]
    pub data: Data,
}
