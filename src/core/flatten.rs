use crate::error::PipelineError;
use crate::models::{DetectionResponse, FaceRecord, OutputRow};
use std::path::Path;

/// Flatten one detection response into one row per face, in reply order.
///
/// A face with any required field missing rejects the whole response.
pub fn flatten(image: &Path, response: &DetectionResponse) -> Result<Vec<OutputRow>, PipelineError> {
    response
        .faces()
        .iter()
        .enumerate()
        .map(|(index, face)| flatten_face(image, index, face))
        .collect()
}

fn flatten_face(image: &Path, index: usize, face: &FaceRecord) -> Result<OutputRow, PipelineError> {
    let missing = |field: &'static str| PipelineError::MalformedFace {
        image: image.to_path_buf(),
        index,
        field,
    };

    let attrs = face.attributes.as_ref().ok_or_else(|| missing("attributes"))?;
    let rect = face.rectangle.as_ref().ok_or_else(|| missing("rectangle"))?;

    Ok(OutputRow {
        image: image.to_path_buf(),
        gender: attrs.gender.clone().ok_or_else(|| missing("attributes.gender"))?,
        age: attrs.age.clone().ok_or_else(|| missing("attributes.age"))?,
        race: attrs.race.clone().ok_or_else(|| missing("attributes.race"))?,
        left: rect.left.ok_or_else(|| missing("rectangle.left"))?,
        top: rect.top.ok_or_else(|| missing("rectangle.top"))?,
        width: rect.width.ok_or_else(|| missing("rectangle.width"))?,
        height: rect.height.ok_or_else(|| missing("rectangle.height"))?,
    })
}
