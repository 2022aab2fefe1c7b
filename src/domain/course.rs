//! Course domain entity.

use serde::Serialize;

/// A course offered by the gym (e.g. "Pilates", "Spinning")
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
