//! Published-artifact validation.

use std::path::Path;

use serde_json::Value;

use crate::error::ValidationError;

/// Check that every sink exists and holds a well-formed report whose skill
/// entries all carry a non-empty `name`, `description`, and `location`.
///
/// Returns the number of skills in the first sink.
///
/// # Errors
///
/// Returns the first failed check with a specific diagnostic.
pub fn validate(sinks: &[impl AsRef<Path>]) -> Result<usize, ValidationError> {
    let mut first_count = None;

    for sink in sinks {
        let sink = sink.as_ref();
        if !sink.is_file() {
            return Err(ValidationError::MissingFile(sink.to_path_buf()));
        }
        let count = validate_payload(sink)?;
        first_count.get_or_insert(count);
    }

    Ok(first_count.unwrap_or(0))
}

fn validate_payload(path: &Path) -> Result<usize, ValidationError> {
    let raw = std::fs::read_to_string(path)?;
    let json: Value = serde_json::from_str(&raw).map_err(|source| ValidationError::InvalidJson {
        path: path.to_path_buf(),
        source,
    })?;

    let Some(skills) = json.get("skills").and_then(Value::as_array) else {
        return Err(ValidationError::SkillsNotArray(path.to_path_buf()));
    };

    for (index, entry) in skills.iter().enumerate() {
        for field in ["name", "description", "location"] {
            let present = entry
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| !s.is_empty());
            if !present {
                return Err(ValidationError::InvalidEntry {
                    path: path.to_path_buf(),
                    index,
                    field,
                });
            }
        }
    }

    Ok(skills.len())
}
