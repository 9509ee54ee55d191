//! JSON reading operations.

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Reads a JSON array of records from `path`.
pub(crate) fn read_json_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)
        .with_context(|| format!("[io::json] Failed to open JSON file: {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("[io::json] Failed to parse JSON records from {:?}", path))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::types::County;

    #[test]
    fn reads_array_of_counties() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"name":"Inyo","county_seat":"Independence","population":19016,"area_sq_mi":10227.0}}]"#).unwrap();

        let counties: Vec<County> = read_json_records(file.path()).unwrap();
        assert_eq!(counties.len(), 1);
        assert_eq!(counties[0].county_seat, "Independence");
    }

    #[test]
    fn malformed_json_is_an_error() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"name":"Inyo"}}]"#).unwrap();

        let result: Result<Vec<County>> = read_json_records(file.path());
        assert!(result.unwrap_err().to_string().contains("Failed to parse"));
    }
}
