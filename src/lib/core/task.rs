use serde::{Serialize, Deserialize};

/// A single task record. The store assigns `id` on insert; request bodies
/// may omit it (or any other field) and it is ignored on creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, rename = "isDone")]
    pub is_done: bool,
}
