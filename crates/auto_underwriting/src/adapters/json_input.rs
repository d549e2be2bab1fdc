// Rust guideline compliant 2026-02-23

//! JSON input adapter.
//!
//! Reads a JSON array of application objects. Each required key maps to a
//! `domain::Field`: absent keys become `Missing`, values of the wrong JSON type
//! (including `null`) become `Malformed` with their raw JSON text. Unknown keys
//! are ignored.

use anyhow::{Context as _, anyhow, bail};
use domain::{Application, Field};
use serde_json::{Map, Value};

/// Parse a JSON document holding an array of application objects.
///
/// # Errors
///
/// Fails when the text is not valid JSON, the top level is not an array, or
/// an element is not an object.
pub fn parse_applications(text: &str) -> anyhow::Result<Vec<Application>> {
    let document: Value = serde_json::from_str(text).context("input is not valid JSON")?;
    let Value::Array(items) = document else {
        bail!("input must be a JSON array of application objects");
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(fields) => Ok(application_from_object(fields)),
            other => Err(anyhow!("application {index} is not a JSON object: {other}")),
        })
        .collect()
}

/// Convert one JSON object into an `Application`.
#[must_use]
pub fn application_from_object(fields: &Map<String, Value>) -> Application {
    Application {
        age: read_field(fields, "age", Value::as_i64),
        smoker: read_field(fields, "smoker", Value::as_bool),
        chronic_illness: read_field(fields, "chronic_illness", Value::as_bool),
    }
}

fn read_field<T>(fields: &Map<String, Value>, key: &str, read: fn(&Value) -> Option<T>) -> Field<T> {
    match fields.get(key) {
        None => Field::Missing,
        Some(value) => match read(value) {
            Some(v) => Field::Present(v),
            None => {
                tracing::debug!(field = key, raw = %value, "json_input.field.malformed");
                Field::Malformed { raw: value.to_string() }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ------------------------------------------------------------------
    // Document shape
    // ------------------------------------------------------------------

    #[test]
    fn parses_array_of_objects_in_order() {
        let apps = parse_applications(
            r#"[{"age": 30, "smoker": false, "chronic_illness": false},
                {"age": 45, "smoker": false}]"#,
        )
        .unwrap();
        assert_eq!(apps.len(), 2);
        assert_eq!(apps[0], Application::new(30, false, false));
        assert_eq!(apps[1].chronic_illness, Field::Missing);
    }

    #[test]
    fn non_array_document_is_an_error() {
        let err = parse_applications(r#"{"age": 30}"#).unwrap_err();
        assert!(err.to_string().contains("JSON array"), "{err}");
    }

    #[test]
    fn non_object_element_names_its_index() {
        let err = parse_applications(r#"[{"age": 30}, 42]"#).unwrap_err();
        assert!(err.to_string().contains("application 1"), "{err}");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(parse_applications("[{").is_err());
    }

    // ------------------------------------------------------------------
    // Field typing
    // ------------------------------------------------------------------

    #[test]
    fn wrong_types_become_malformed() {
        let apps = parse_applications(
            r#"[{"age": "forty", "smoker": 1, "chronic_illness": null}]"#,
        )
        .unwrap();
        assert_eq!(apps[0].age, Field::Malformed { raw: "\"forty\"".to_owned() });
        assert_eq!(apps[0].smoker, Field::Malformed { raw: "1".to_owned() });
        assert_eq!(apps[0].chronic_illness, Field::Malformed { raw: "null".to_owned() });
    }

    #[test]
    fn fractional_age_is_malformed() {
        let apps = parse_applications(r#"[{"age": 30.5, "smoker": true, "chronic_illness": true}]"#)
            .unwrap();
        assert_eq!(apps[0].age, Field::Malformed { raw: "30.5".to_owned() });
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let apps = parse_applications(
            r#"[{"age": 25, "smoker": false, "chronic_illness": false, "name": "Ada"}]"#,
        )
        .unwrap();
        assert_eq!(apps[0], Application::new(25, false, false));
    }
}
