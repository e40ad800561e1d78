//! Input-shape checks run by the controller before any use case.
//!
//! Each schema takes the raw JSON body and either yields the typed input or
//! a list of every field that failed.

use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::FieldError;
use crate::models::{CreateTodoInput, UpdateTodoDoneInput, UpdateTodoInput};

pub const TITLE_MAX_CHARS: usize = 255;

/// Constraints for a single string field.
#[derive(Debug, Clone, Copy)]
struct StringRule {
    field: &'static str,
    label: &'static str,
    max_chars: Option<usize>,
}

const TITLE: StringRule = StringRule {
    field: "title",
    label: "Title",
    max_chars: Some(TITLE_MAX_CHARS),
};

const DESCRIPTION: StringRule = StringRule {
    field: "description",
    label: "Description",
    max_chars: None,
};

impl StringRule {
    fn check(&self, value: &Value, errors: &mut Vec<FieldError>) -> Option<String> {
        let Value::String(s) = value else {
            errors.push(FieldError::new(
                self.field,
                format!("{} must be a string", self.label),
            ));
            return None;
        };

        let len = s.chars().count();
        if len == 0 {
            errors.push(FieldError::new(self.field, format!("{} is required", self.label)));
            return None;
        }
        if let Some(max) = self.max_chars {
            if len > max {
                errors.push(FieldError::new(
                    self.field,
                    format!("{} must be at most {} characters", self.label, max),
                ));
                return None;
            }
        }
        Some(s.clone())
    }

    fn required(&self, body: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
        match body.get(self.field) {
            None | Some(Value::Null) => {
                errors.push(FieldError::new(self.field, format!("{} is required", self.label)));
                None
            }
            Some(value) => self.check(value, errors),
        }
    }

    fn optional(&self, body: &Map<String, Value>, errors: &mut Vec<FieldError>) -> Option<String> {
        match body.get(self.field) {
            None => None,
            Some(value) => self.check(value, errors),
        }
    }
}

fn object(body: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    body.as_object()
        .ok_or_else(|| vec![FieldError::new("body", "Expected a JSON object")])
}

fn finish<T>(errors: Vec<FieldError>, value: impl FnOnce() -> T) -> Result<T, Vec<FieldError>> {
    if errors.is_empty() { Ok(value()) } else { Err(errors) }
}

pub fn validate_create(body: &Value) -> Result<CreateTodoInput, Vec<FieldError>> {
    let body = object(body)?;
    let mut errors = Vec::new();

    let title = TITLE.required(body, &mut errors);
    let description = DESCRIPTION.required(body, &mut errors);

    finish(errors, || CreateTodoInput {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
    })
}

/// Both fields are optional; an empty object is a valid no-op update.
/// An explicit `null` is rejected rather than treated as absent.
pub fn validate_update(body: &Value) -> Result<UpdateTodoInput, Vec<FieldError>> {
    let body = object(body)?;
    let mut errors = Vec::new();

    let title = TITLE.optional(body, &mut errors);
    let description = DESCRIPTION.optional(body, &mut errors);

    finish(errors, || UpdateTodoInput { title, description })
}

pub fn validate_update_done(body: &Value) -> Result<UpdateTodoDoneInput, Vec<FieldError>> {
    let body = object(body)?;

    match body.get("isDone") {
        Some(Value::Bool(is_done)) => Ok(UpdateTodoDoneInput { is_done: *is_done }),
        None | Some(Value::Null) => Err(vec![FieldError::new("isDone", "isDone is required")]),
        Some(_) => Err(vec![FieldError::new("isDone", "isDone must be a boolean")]),
    }
}

/// Accepts only the hyphenated form and returns it lowercased, which is how
/// ids are stored.
pub fn validate_id(id: &str) -> Result<String, Vec<FieldError>> {
    let invalid = || vec![FieldError::new("id", "Invalid UUID format")];

    if id.len() != 36 {
        return Err(invalid());
    }
    Uuid::try_parse(id)
        .map(|uuid| uuid.hyphenated().to_string())
        .map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn fields(errors: &[FieldError]) -> Vec<&str> {
        errors.iter().map(|e| e.field.as_str()).collect()
    }

    #[test]
    fn create_accepts_valid_input() {
        let input = validate_create(&json!({ "title": "Buy milk", "description": "2%" })).unwrap();
        assert_eq!(input.title, "Buy milk");
        assert_eq!(input.description, "2%");
    }

    #[test]
    fn create_accepts_title_at_limit() {
        let title = "a".repeat(TITLE_MAX_CHARS);
        let input = validate_create(&json!({ "title": title, "description": "d" })).unwrap();
        assert_eq!(input.title.len(), TITLE_MAX_CHARS);
    }

    #[test]
    fn create_rejects_title_over_limit() {
        let title = "a".repeat(TITLE_MAX_CHARS + 1);
        let errors = validate_create(&json!({ "title": title, "description": "d" })).unwrap_err();
        assert_eq!(fields(&errors), vec!["title"]);
        assert!(errors[0].message.contains("Title"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX_CHARS);
        assert!(validate_create(&json!({ "title": title, "description": "d" })).is_ok());
    }

    #[rstest]
    #[case(json!({ "title": "", "description": "d" }), vec!["title"])]
    #[case(json!({ "title": "t", "description": "" }), vec!["description"])]
    #[case(json!({ "description": "d" }), vec!["title"])]
    #[case(json!({}), vec!["title", "description"])]
    #[case(json!({ "title": 42, "description": null }), vec!["title", "description"])]
    #[case(json!(["title"]), vec!["body"])]
    fn create_reports_every_failing_field(#[case] body: Value, #[case] expected: Vec<&str>) {
        let errors = validate_create(&body).unwrap_err();
        assert_eq!(fields(&errors), expected);
    }

    #[test]
    fn update_allows_empty_body() {
        assert_eq!(validate_update(&json!({})).unwrap(), UpdateTodoInput::default());
    }

    #[test]
    fn update_keeps_only_present_fields() {
        let input = validate_update(&json!({ "description": "new" })).unwrap();
        assert_eq!(input.title, None);
        assert_eq!(input.description.as_deref(), Some("new"));
    }

    #[test]
    fn update_ignores_is_done() {
        let input = validate_update(&json!({ "title": "t", "isDone": true })).unwrap();
        assert_eq!(input.title.as_deref(), Some("t"));
    }

    #[rstest]
    #[case(json!({ "title": "" }), vec!["title"])]
    #[case(json!({ "title": "a".repeat(256) }), vec!["title"])]
    #[case(json!({ "description": "" }), vec!["description"])]
    #[case(json!({ "title": null }), vec!["title"])]
    fn update_validates_present_fields(#[case] body: Value, #[case] expected: Vec<&str>) {
        let errors = validate_update(&body).unwrap_err();
        assert_eq!(fields(&errors), expected);
    }

    #[rstest]
    #[case(json!({ "isDone": true }), true)]
    #[case(json!({ "isDone": false }), false)]
    fn update_done_accepts_booleans(#[case] body: Value, #[case] expected: bool) {
        assert_eq!(validate_update_done(&body).unwrap().is_done, expected);
    }

    #[rstest]
    #[case(json!({}))]
    #[case(json!({ "isDone": "true" }))]
    #[case(json!({ "isDone": 1 }))]
    #[case(json!({ "is_done": true }))]
    fn update_done_rejects_non_booleans(#[case] body: Value) {
        let errors = validate_update_done(&body).unwrap_err();
        assert_eq!(fields(&errors), vec!["isDone"]);
    }

    #[test]
    fn id_is_normalized_to_lowercase() {
        let id = validate_id("67E55044-10B1-426F-9247-BB680E5FE0C8").unwrap();
        assert_eq!(id, "67e55044-10b1-426f-9247-bb680e5fe0c8");
    }

    #[rstest]
    #[case("")]
    #[case("not-a-uuid")]
    #[case("67e5504410b1426f9247bb680e5fe0c8")]
    #[case("{67e55044-10b1-426f-9247-bb680e5fe0c8}")]
    #[case("67e55044-10b1-426f-9247-bb680e5fe0cz")]
    fn id_rejects_malformed_values(#[case] id: &str) {
        assert_eq!(fields(&validate_id(id).unwrap_err()), vec!["id"]);
    }
}
