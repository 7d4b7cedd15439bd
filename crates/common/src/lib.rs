//! Helpers shared by the server and the bulk loader: logging setup,
//! the health payload and runtime directory checks.

pub mod types;
pub mod utils;
pub mod env;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_serializes_as_status_object() {
        let json = serde_json::to_value(types::Health::healthy()).unwrap();
        assert_eq!(json, serde_json::json!({"status": "Healthy"}));
    }
}
