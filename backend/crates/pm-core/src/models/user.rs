use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity record. Tasks and projects reference users, they never own them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

impl User {
    /// Initials for avatar badges ("Ada Lovelace" -> "AL", "ada" -> "A", none -> "?")
    pub fn initials(&self) -> String {
        let Some(name) = self.name.as_deref() else {
            return "?".to_string();
        };

        let parts: Vec<&str> = name.split_whitespace().collect();
        let initial = |part: &str| part.chars().next().map(|c| c.to_uppercase().to_string());

        match parts.as_slice() {
            [] => "?".to_string(),
            [only] => initial(*only).unwrap_or_default(),
            [first, .., last] => format!(
                "{}{}",
                initial(*first).unwrap_or_default(),
                initial(*last).unwrap_or_default()
            ),
        }
    }
}
