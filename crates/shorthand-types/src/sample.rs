//! Image files and the training samples built from them.

use std::fmt;

use uuid::Uuid;

/// An uploaded image held in memory.
#[derive(Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub name: String,
    /// Declared MIME type, e.g. `image/png`.
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

impl fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("mime_type", &self.mime_type)
            .field("size", &self.size())
            .finish()
    }
}

/// A user-supplied (image, transcription) pair.
///
/// Samples live only for the duration of a training session and are
/// discarded once training completes.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingSample {
    pub id: Uuid,
    pub image: ImageFile,
    pub transcription: String,
    /// Data-URI rendering of `image`, used for previews.
    pub preview: String,
}

impl TrainingSample {
    /// Build a sample with a fresh unique id.
    pub fn new(image: ImageFile, transcription: impl Into<String>, preview: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            image,
            transcription: transcription.into(),
            preview: preview.into(),
        }
    }
}
