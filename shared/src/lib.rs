use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod envelope;
pub mod records;
pub mod upload;

pub use envelope::{Envelope, FieldValue, Meta, Row};
pub use records::{ActiveProgram, Cycle, Program, ProtocolStatus, RecoveryProtocol, User, UserRole};
pub use upload::{UploadKind, UploadRejection};

// ===== MESSAGE TYPES =====

#[derive(Serialize, Deserialize, Debug)]
pub enum UpMsg {
    ListRecoveryProtocols { page: u32, page_size: u32 },
    ApproveRecoveryProtocol { protocol_id: u64 },
    ListProgramsByCycle(Cycle),
    GetActiveProgram,
    RequestUploadUrl(UploadRequest),
    LoadConfig,
    SaveConfig(AppConfig),
}

/// Responses from the backend proxy. List endpoints forward the coaching
/// API's body verbatim as `Value` — the envelope shape is inconsistent
/// across endpoints, so unwrapping happens exactly once on the frontend
/// via [`Envelope::parse`].
#[derive(Serialize, Deserialize, Debug)]
pub enum DownMsg {
    RecoveryProtocolsLoaded { body: Value },
    RecoveryProtocolApproved { protocol_id: u64 },
    ProgramsLoaded { cycle: Cycle, body: Value },
    ActiveProgramLoaded { body: Value },
    UploadUrlIssued { upload_url: String, object_key: String },
    ApiFailed { request: RequestKind, failure: ApiFailure },
    ConfigLoaded(AppConfig),
    ConfigSaved,
    ConfigError(String),
}

/// Which outbound call a failure belongs to, for toast titles and logs.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    RecoveryProtocolList,
    RecoveryProtocolApproval,
    ProgramList,
    ActiveProgram,
    UploadUrl,
}

impl RequestKind {
    pub fn label(self) -> &'static str {
        match self {
            RequestKind::RecoveryProtocolList => "Loading recovery protocols",
            RequestKind::RecoveryProtocolApproval => "Approving recovery protocol",
            RequestKind::ProgramList => "Loading programs",
            RequestKind::ActiveProgram => "Loading current program",
            RequestKind::UploadUrl => "Requesting upload URL",
        }
    }
}

/// Failure taxonomy for calls against the coaching API.
///
/// `Transport` covers DNS/connect/read failures where no HTTP response
/// exists; `Server` carries the status and the server-supplied message of a
/// non-2xx response. Malformed-but-2xx bodies are not a failure at this
/// layer — they surface as an unrecognized envelope on the frontend.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum ApiFailure {
    Transport(String),
    Server { status: u16, message: String },
}

impl ApiFailure {
    pub fn detail(&self) -> String {
        match self {
            ApiFailure::Transport(reason) => reason.clone(),
            ApiFailure::Server { status, message } => format!("{status}: {message}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UploadRequest {
    pub file_name: String,
    pub kind: UploadKind,
    pub content_type: String,
    pub byte_size: u64,
}

// ===== CONFIG TYPES =====

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AppConfig {
    pub app: AppSection,
    pub ui: UiSection,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AppSection {
    pub version: String,
}

impl AppSection {
    pub const CURRENT_VERSION: &'static str = "1.0.0";

    pub fn is_supported_version(&self) -> bool {
        self.version == Self::CURRENT_VERSION
    }
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UiSection {
    pub theme: String,
    pub admin_page_size: u32,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            admin_page_size: 25,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_round_trips_through_toml() {
        let config = AppConfig::default();
        let serialized = toml::to_string(&config).unwrap();
        let restored: AppConfig = toml::from_str(&serialized).unwrap();
        assert_eq!(config, restored);
    }

    #[test]
    fn default_config_version_is_supported() {
        assert!(AppSection::default().is_supported_version());
    }

    #[test]
    fn server_failure_detail_includes_status() {
        let failure = ApiFailure::Server {
            status: 403,
            message: "approval requires admin role".to_string(),
        };
        assert_eq!(failure.detail(), "403: approval requires admin role");
    }
}
