use serde::{Deserialize, Serialize};

// ===== PRESIGNED UPLOAD CONTRACT =====

const MEGABYTE: u64 = 1024 * 1024;

/// File categories accepted for presigned uploads, with per-kind MIME
/// allowlists and size caps. Validation runs before the upload URL is
/// requested so obviously bad files never reach the API.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UploadKind {
    ProfilePhoto,
    ProgressVideo,
    ProtocolDocument,
}

impl UploadKind {
    pub const ALL: [UploadKind; 3] = [
        UploadKind::ProfilePhoto,
        UploadKind::ProgressVideo,
        UploadKind::ProtocolDocument,
    ];

    pub fn allowed_mime_types(self) -> &'static [&'static str] {
        match self {
            UploadKind::ProfilePhoto => &["image/jpeg", "image/png", "image/webp"],
            UploadKind::ProgressVideo => &["video/mp4", "video/quicktime", "video/webm"],
            UploadKind::ProtocolDocument => &["application/pdf"],
        }
    }

    pub fn max_bytes(self) -> u64 {
        match self {
            UploadKind::ProfilePhoto => 5 * MEGABYTE,
            UploadKind::ProgressVideo => 200 * MEGABYTE,
            UploadKind::ProtocolDocument => 10 * MEGABYTE,
        }
    }

    pub fn validate(self, content_type: &str, byte_size: u64) -> Result<(), UploadRejection> {
        if !self.allowed_mime_types().contains(&content_type) {
            return Err(UploadRejection::UnsupportedMimeType {
                kind: self,
                content_type: content_type.to_string(),
            });
        }
        if byte_size > self.max_bytes() {
            return Err(UploadRejection::TooLarge {
                kind: self,
                byte_size,
                max_bytes: self.max_bytes(),
            });
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum UploadRejection {
    UnsupportedMimeType { kind: UploadKind, content_type: String },
    TooLarge { kind: UploadKind, byte_size: u64, max_bytes: u64 },
}

impl UploadRejection {
    pub fn message(&self) -> String {
        match self {
            UploadRejection::UnsupportedMimeType { kind, content_type } => format!(
                "{content_type} is not accepted here. Allowed: {}",
                kind.allowed_mime_types().join(", ")
            ),
            UploadRejection::TooLarge { byte_size, max_bytes, .. } => format!(
                "File is {:.1} MB, the limit is {} MB",
                *byte_size as f64 / MEGABYTE as f64,
                max_bytes / MEGABYTE
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_has_mime_types_and_a_positive_cap() {
        for kind in UploadKind::ALL {
            assert!(!kind.allowed_mime_types().is_empty());
            assert!(kind.max_bytes() > 0);
        }
    }

    #[test]
    fn accepts_a_valid_photo() {
        assert!(UploadKind::ProfilePhoto.validate("image/png", MEGABYTE).is_ok());
    }

    #[test]
    fn rejects_wrong_mime_type_before_size() {
        let rejection = UploadKind::ProtocolDocument
            .validate("image/png", 1)
            .unwrap_err();
        assert!(matches!(rejection, UploadRejection::UnsupportedMimeType { .. }));
        assert!(rejection.message().contains("application/pdf"));
    }

    #[test]
    fn rejects_oversize_file() {
        let rejection = UploadKind::ProfilePhoto
            .validate("image/jpeg", 6 * MEGABYTE)
            .unwrap_err();
        assert!(matches!(rejection, UploadRejection::TooLarge { .. }));
    }
}
