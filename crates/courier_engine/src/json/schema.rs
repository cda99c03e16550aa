use schemars::schema_for;

use crate::json::snapshot;

pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(snapshot::BatchSnapshot))
}

pub fn generate_kitchen_json_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(snapshot::KitchenSnapshot))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_schema_names_record_fields() {
        let schema = generate_json_schema().unwrap();

        assert!(schema.contains("\"BatchSnapshot\""));
        assert!(schema.contains("\"orderIds\""));
        assert!(schema.contains("\"operatingHours\""));
    }

    #[test]
    fn test_kitchen_schema() {
        let schema: serde_json::Value =
            serde_json::from_str(&generate_kitchen_json_schema().unwrap()).unwrap();

        assert_eq!(schema["title"], "KitchenSnapshot");
        assert!(schema["properties"]["batches"].is_object());
    }
}
