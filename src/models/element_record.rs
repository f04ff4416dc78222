use serde::{Deserialize, Serialize};

/// One object template element as supplied by the element store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElementRecord {
    pub id: u64,
    /// Owning object template.
    #[serde(default)]
    pub template_id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub priority: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub defaults: Vec<String>,
    #[serde(default, rename = "allowedValues", alias = "allowed_values")]
    pub allowed_values: Vec<String>,
}
