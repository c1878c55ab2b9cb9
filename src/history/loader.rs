use anyhow::Context;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Read a JSON artifact (records, prompt list, or policy) from disk.
pub fn load<T, P>(path: P) -> anyhow::Result<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let file = std::fs::File::open(path).with_context(|| format!("open {}", path.display()))?;
    let reader = std::io::BufReader::new(file);
    let value = serde_json::from_reader(reader).with_context(|| format!("parse {}", path.display()))?;
    log::debug!("{:<32}{}", "loaded artifact", path.display());
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::PointRecord;

    fn scratch(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("robotennis-{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_records() {
        let path = scratch("records.json", r#"[{ "server": ["4", "f1"], "receiver": ["b2*"], "won": false }]"#);
        let records = load::<Vec<PointRecord>, _>(&path).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].rally().len(), 3);
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_file_names_path() {
        let error = load::<Vec<PointRecord>, _>("/nonexistent/records.json").unwrap_err();
        assert!(format!("{}", error).contains("/nonexistent/records.json"));
    }

    #[test]
    fn malformed_json_is_error() {
        let path = scratch("broken.json", "[{ \"server\": ");
        assert!(load::<Vec<PointRecord>, _>(&path).is_err());
        std::fs::remove_file(path).unwrap();
    }
}
