use serde::{Deserialize, Serialize};

/// Stored actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: i32,
    pub name: String,
}

/// Stored movie with its actors in list order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub actors: Vec<Actor>,
}

/// Actor as submitted by a client; any `id` in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorInput {
    #[serde(default)]
    pub name: String,
}

impl ActorInput {
    pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

/// Movie as submitted by a client.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub actors: Vec<ActorInput>,
}

impl MovieInput {
    pub fn new(title: &str, release_date: &str, actors: &[&str]) -> Self {
        Self {
            title: Some(title.to_string()),
            release_date: Some(release_date.to_string()),
            actors: actors.iter().map(|n| ActorInput::new(*n)).collect(),
        }
    }
}

/// Validated movie ready for persistence, actors already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMovie {
    pub title: String,
    pub release_date: String,
    pub actors: Vec<Actor>,
}

impl From<models::actor::Model> for Actor {
    fn from(m: models::actor::Model) -> Self { Self { id: m.id, name: m.name } }
}
