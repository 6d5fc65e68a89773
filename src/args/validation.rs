use serde_json::Value;
use std::{fs, path::PathBuf};

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The input file '{file}' is not readable."));
    }
    Ok(path)
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not a json request
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = check_readable_file(file)?;
    let contents = fs::read_to_string(&path)
        .map_err(|e| format!("The json file '{file}' could not be read: {e}"))?;
    let json: Value = serde_json::from_str(&contents)
        .map_err(|e| format!("The json file '{file}' is not valid json: {e}"))?;
    validate_json_format(&json)?;
    Ok(json)
}

/// Requests are objects with a string `kind`:
/// {"kind": "competition", "competition": {...}, "holes": [...], ...}
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
fn validate_json_format(json: &Value) -> Result<(), String> {
    let Some(object) = json.as_object() else {
        return Err("The json file is not in the correct format. Expected an object.".to_string());
    };
    match object.get("kind") {
        Some(Value::String(_)) => Ok(()),
        Some(_) => Err(
            "The json key kind is not in the correct format. Expected a string.".to_string(),
        ),
        None => Err("The json file is missing the key kind.".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_rejected() {
        let err = check_readable_file("/definitely/not/here.json").unwrap_err();
        assert!(err.contains("not readable"));
    }

    #[test]
    fn request_with_kind_is_accepted() {
        let file = write_temp(r#"{"kind": "tournament_status", "roundStatuses": ["open"]}"#);
        let json = check_readable_file_and_json(file.path().to_str().unwrap()).unwrap();
        assert_eq!(json["kind"], "tournament_status");
    }

    #[test]
    fn json_without_kind_is_rejected() {
        let file = write_temp(r#"{"holes": []}"#);
        let err = check_readable_file_and_json(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("kind"));
    }

    #[test]
    fn array_is_rejected() {
        let file = write_temp("[1, 2, 3]");
        assert!(check_readable_file_and_json(file.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn garbage_is_rejected() {
        let file = write_temp("not json at all");
        let err = check_readable_file_and_json(file.path().to_str().unwrap()).unwrap_err();
        assert!(err.contains("not valid json"));
    }
}
