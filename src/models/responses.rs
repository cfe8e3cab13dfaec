use serde::{Deserialize, Serialize};

/// Parsed reply of the face service for a single image.
///
/// `faces` is optional on the wire so that a reply without it can be told
/// apart from a reply with zero faces; the client rejects the former.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DetectionResponse {
    #[serde(default)]
    pub faces: Option<Vec<FaceRecord>>,
}

impl DetectionResponse {
    pub fn with_faces(faces: Vec<FaceRecord>) -> Self {
        Self { faces: Some(faces) }
    }

    /// Faces in reply order, empty when the service found none
    pub fn faces(&self) -> &[FaceRecord] {
        self.faces.as_deref().unwrap_or(&[])
    }
}

/// One detected face as sent by the service.
///
/// Every field is optional here; the flattener checks presence eagerly.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceRecord {
    #[serde(default)]
    pub attributes: Option<FaceAttributes>,
    #[serde(default)]
    pub rectangle: Option<FaceRectangle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FaceAttributes {
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub age: Option<serde_json::Number>,
    #[serde(default)]
    pub race: Option<String>,
}

/// Face bounding box in image pixel coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceRectangle {
    #[serde(default)]
    pub left: Option<i32>,
    #[serde(default)]
    pub top: Option<i32>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_faces_is_distinguished_from_empty() {
        let missing: DetectionResponse = serde_json::from_str("{}").unwrap();
        let empty: DetectionResponse = serde_json::from_str(r#"{"faces": []}"#).unwrap();

        assert!(missing.faces.is_none());
        assert_eq!(empty.faces, Some(vec![]));
        assert!(missing.faces().is_empty());
    }

    #[test]
    fn test_parse_full_face() {
        let json = r#"{
            "faces": [{
                "attributes": {"gender": "male", "age": 41.5, "race": "white"},
                "rectangle": {"left": 3, "top": 4, "width": 50, "height": 60}
            }]
        }"#;

        let response: DetectionResponse = serde_json::from_str(json).unwrap();
        let face = &response.faces()[0];
        let attrs = face.attributes.as_ref().unwrap();

        assert_eq!(attrs.gender.as_deref(), Some("male"));
        assert_eq!(attrs.age.as_ref().and_then(|a| a.as_f64()), Some(41.5));
        assert_eq!(face.rectangle.unwrap().width, Some(50));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"faces": [{"faceId": "abc", "attributes": {"gender": "female", "smile": 0.9}}], "requestId": "x"}"#;
        let response: DetectionResponse = serde_json::from_str(json).unwrap();

        assert_eq!(response.faces().len(), 1);
        assert!(response.faces()[0].rectangle.is_none());
    }
}
