use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Column order of the results file
pub const OUTPUT_HEADER: [&str; 8] = ["image", "gender", "age", "race", "left", "top", "width", "height"];

/// One flattened result row: a single face tagged with its source image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputRow {
    pub image: PathBuf,
    pub gender: String,
    pub age: serde_json::Number,
    pub race: String,
    pub left: i32,
    pub top: i32,
    pub width: u32,
    pub height: u32,
}

/// All rows of a run, in manifest order then face order
pub type ResultSet = Vec<OutputRow>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_matches_field_order() {
        let row = OutputRow {
            image: PathBuf::from("a.jpg"),
            gender: "female".to_string(),
            age: 30.into(),
            race: "asian".to_string(),
            left: 10,
            top: 20,
            width: 100,
            height: 120,
        };

        let value = serde_json::to_value(&row).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();

        // serde_json without preserve_order sorts keys, so compare as sets
        let mut expected: Vec<&str> = OUTPUT_HEADER.to_vec();
        let mut actual = keys.clone();
        expected.sort_unstable();
        actual.sort_unstable();
        assert_eq!(actual, expected);
    }
}
