//! Client-side image upload for crop analysis.
//!
//! The upload is a multipart form with one `group_id` text field followed by
//! one `images` part per file. [`UploadRequest::form_fields`] is the single
//! description of that layout; the HTTP client only translates it.

use serde::{Deserialize, Serialize};

/// An image the user attached in the upload modal.
#[derive(Debug, PartialEq, Clone)]
pub struct ImageFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// MIME type guessed from the file extension.
    pub fn mime_type(&self) -> &'static str {
        let ext = self
            .file_name
            .rsplit_once('.')
            .map(|(_, ext)| ext.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            _ => "application/octet-stream",
        }
    }
}

/// One field of a multipart form.
#[derive(Debug, PartialEq, Clone)]
pub enum FormValue<'a> {
    Text(String),
    File(&'a ImageFile),
}

#[derive(Debug, PartialEq, Clone)]
pub struct FormField<'a> {
    pub name: &'static str,
    pub value: FormValue<'a>,
}

/// Multipart payload for `POST /api/greenhouses/crop_groups/upload_analyze`.
#[derive(Debug, PartialEq, Clone)]
pub struct UploadRequest {
    pub group_id: i64,
    pub images: Vec<ImageFile>,
}

impl UploadRequest {
    pub fn form_fields(&self) -> Vec<FormField<'_>> {
        let mut fields = Vec::with_capacity(self.images.len() + 1);
        fields.push(FormField {
            name: "group_id",
            value: FormValue::Text(self.group_id.to_string()),
        });
        fields.extend(self.images.iter().map(|image| FormField {
            name: "images",
            value: FormValue::File(image),
        }));
        fields
    }
}

/// Aggregate counts returned by the analyzer.
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
pub struct UploadResult {
    #[serde(default)]
    pub total_files: u32,
    #[serde(default)]
    pub total_count: u32,
    #[serde(default)]
    pub total_ripe: u32,
    #[serde(default)]
    pub total_unripe: u32,
    #[serde(default)]
    pub has_rotten: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UploadResponse {
    pub result: UploadResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_has_group_id_and_one_part_per_image() {
        let request = UploadRequest {
            group_id: 42,
            images: vec![
                ImageFile::new("a.jpg", vec![1]),
                ImageFile::new("b.png", vec![2]),
                ImageFile::new("c.jpeg", vec![3]),
            ],
        };
        let fields = request.form_fields();
        let image_parts = fields.iter().filter(|f| f.name == "images").count();
        assert_eq!(image_parts, 3);
        let group_ids: Vec<_> = fields.iter().filter(|f| f.name == "group_id").collect();
        assert_eq!(group_ids.len(), 1);
        assert_eq!(group_ids[0].value, FormValue::Text("42".to_string()));
        assert_eq!(fields.len(), 4);
    }

    #[test]
    fn mime_from_extension() {
        assert_eq!(ImageFile::new("x.JPG", vec![]).mime_type(), "image/jpeg");
        assert_eq!(ImageFile::new("x.webp", vec![]).mime_type(), "image/webp");
        assert_eq!(
            ImageFile::new("noext", vec![]).mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn decodes_upload_response() {
        let resp: UploadResponse = serde_json::from_value(json!({
            "result": {"total_files": 3, "total_count": 20, "total_ripe": 12, "total_unripe": 8, "has_rotten": true}
        }))
        .unwrap();
        assert_eq!(resp.result.total_files, 3);
        assert!(resp.result.has_rotten);
    }
}
