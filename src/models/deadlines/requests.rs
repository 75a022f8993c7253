use serde::Deserialize;

// POST /deadlines
#[derive(Debug, Clone, Deserialize)]
pub struct SetDeadlineRequest {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub batch: String,
    #[serde(default)]
    pub deadline: String,
}
