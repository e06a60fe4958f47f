pub mod types;
pub mod utils;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_type_ok() {
        let h = types::Health { status: "ok" };
        assert_eq!(h.status, "ok");
    }

    #[test]
    fn hello_data_serializes_with_plain_field_names() {
        let data = types::HelloData { username: "userA".into(), age: 20 };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"username": "userA", "age": 20}));
    }
}
