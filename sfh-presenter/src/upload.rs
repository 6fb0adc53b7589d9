//! Image upload workflow.
//!
//! The modal opens on the area view. Once a non-path bar is chosen and at
//! least one image attached, the upload can be submitted. While the
//! analyzer runs every input is locked. The result stays on screen until
//! the modal is closed; a failed analysis returns to the file selection.

use sfh_core::analysis::{ImageFile, UploadRequest, UploadResult};
use sfh_core::group::CropGroup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStage {
    Closed,
    AreaOpen,
    FilesSelected,
    Analyzing,
    Result,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct UploadFlow {
    open: bool,
    target: Option<i64>,
    files: Vec<ImageFile>,
    analyzing: bool,
    result: Option<UploadResult>,
    error: Option<String>,
}

impl UploadFlow {
    pub fn stage(&self) -> UploadStage {
        if !self.open {
            UploadStage::Closed
        } else if self.analyzing {
            UploadStage::Analyzing
        } else if self.result.is_some() {
            UploadStage::Result
        } else if !self.files.is_empty() {
            UploadStage::FilesSelected
        } else {
            UploadStage::AreaOpen
        }
    }

    pub fn open(&mut self) {
        *self = UploadFlow {
            open: true,
            ..UploadFlow::default()
        };
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle_target(&mut self, group: &CropGroup) {
        if !self.open || self.analyzing || !group.is_selectable_target() {
            return;
        }
        self.target = match self.target {
            Some(id) if id == group.id => None,
            _ => Some(group.id),
        };
    }

    /// Replace the attached files. A new selection clears any previous
    /// result or error.
    pub fn select_files(&mut self, files: Vec<ImageFile>) {
        if !self.open || self.analyzing {
            return;
        }
        self.files = files;
        self.result = None;
        self.error = None;
    }

    pub fn can_submit(&self) -> bool {
        self.open && !self.analyzing && self.target.is_some() && !self.files.is_empty()
    }

    /// Lock the flow and build the multipart request.
    pub fn begin(&mut self) -> Option<UploadRequest> {
        if !self.can_submit() {
            return None;
        }
        let group_id = self.target?;
        self.analyzing = true;
        self.error = None;
        Some(UploadRequest {
            group_id,
            images: self.files.clone(),
        })
    }

    pub fn finish(&mut self, outcome: Result<UploadResult, String>) {
        if !self.analyzing {
            return;
        }
        self.analyzing = false;
        match outcome {
            Ok(result) => self.result = Some(result),
            Err(message) => self.error = Some(message),
        }
    }

    pub fn close(&mut self) {
        *self = UploadFlow::default();
    }

    pub fn target(&self) -> Option<i64> {
        self.target
    }

    pub fn files(&self) -> &[ImageFile] {
        &self.files
    }

    pub fn result(&self) -> Option<&UploadResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_analyzing(&self) -> bool {
        self.analyzing
    }
}
