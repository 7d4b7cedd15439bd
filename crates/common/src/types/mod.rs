use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Health {
    pub status: String,
}

impl Health {
    pub fn healthy() -> Self {
        Self { status: "Healthy".into() }
    }
}
