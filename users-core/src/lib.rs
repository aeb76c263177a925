//! Core types for the users service.
//!
//! Defines the user record, the writable input shared by create and update,
//! and the validation routine applied before every write.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod id;
pub mod user;
pub mod validation;

pub use error::CoreError;
pub use id::UserId;
pub use user::{User, UserInput};
pub use validation::{validate_user_input, ValidationError, MAX_FIELD_LEN, MIN_AGE};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_serializes_with_flat_integer_id() {
        let user = UserInput::new("Alice", "alice@example.com", 22).into_user(UserId(1));
        let json = match serde_json::to_value(&user) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Alice", "email": "alice@example.com", "age": 22})
        );
    }

    #[test]
    fn user_input_decodes_and_ignores_unknown_fields() {
        let raw = r#"{"name":"Bob","email":"bob@example.com","age":30,"id":99}"#;
        let input: UserInput = match serde_json::from_str(raw) {
            Ok(i) => i,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(input, UserInput::new("Bob", "bob@example.com", 30));
    }

    #[test]
    fn user_input_missing_fields_decode_empty() {
        let input: UserInput = match serde_json::from_str(r#"{"name":"Bob"}"#) {
            Ok(i) => i,
            Err(e) => panic!("decode failed: {e}"),
        };
        assert_eq!(input, UserInput::new("Bob", "", 0));
        let fields: Vec<_> = input.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["email", "age"]);
    }

    #[test]
    fn user_input_rejects_wrong_types() {
        assert!(serde_json::from_str::<UserInput>(r#""Bob""#).is_err());
        assert!(
            serde_json::from_str::<UserInput>(r#"{"name":"Bob","email":"b@x","age":"30"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<UserInput>(r#"{"name":"Bob","email":"b@x","age":4294967296}"#)
                .is_err(),
            "age beyond i32 must be a decode failure"
        );
    }

    #[test]
    fn user_input_validate_delegates_to_routine() {
        let input = UserInput::new("", "bad@example.com", 10);
        let fields: Vec<_> = input.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, ["name", "age"]);
    }

    #[test]
    fn into_user_keeps_all_fields() {
        let user = UserInput::new("Carol", "carol@example.com", 40).into_user(UserId(7));
        assert_eq!(user.id, UserId(7));
        assert_eq!(user.name, "Carol");
        assert_eq!(user.email, "carol@example.com");
        assert_eq!(user.age, 40);
    }
}
