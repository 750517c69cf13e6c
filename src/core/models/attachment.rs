//! Evidence attached to a submission

use serde::{Deserialize, Serialize};

/// Kind of media attached to a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttachmentKind {
    /// Screenshot, photo, meme
    Image,
    /// Voice note or recording
    Audio,
}

impl AttachmentKind {
    /// Classify a media type by its top-level prefix (`image/`, `audio/`)
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let lowered = media_type.trim().to_ascii_lowercase();
        if lowered.starts_with("image/") {
            Some(Self::Image)
        } else if lowered.starts_with("audio/") {
            Some(Self::Audio)
        } else {
            None
        }
    }
}

impl std::fmt::Display for AttachmentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Image => write!(f, "image"),
            Self::Audio => write!(f, "audio"),
        }
    }
}

/// A binary file sent along with a claim
#[derive(Clone, PartialEq, Eq)]
pub struct Attachment {
    /// File name as the user supplied it
    pub file_name: String,
    /// Declared media type (e.g. `image/png`)
    pub media_type: String,
    /// Raw file contents
    pub bytes: Vec<u8>,
}

impl Attachment {
    /// Create a new attachment
    #[must_use]
    pub fn new(file_name: impl Into<String>, media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Image or audio, if the media type says so
    #[must_use]
    pub fn kind(&self) -> Option<AttachmentKind> {
        AttachmentKind::from_media_type(&self.media_type)
    }
}

impl std::fmt::Debug for Attachment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Attachment")
            .field("file_name", &self.file_name)
            .field("media_type", &self.media_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}
