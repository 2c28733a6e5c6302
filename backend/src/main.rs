use moon::*;
use shared::{DownMsg, RequestKind, UpMsg};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod api_client;

use api_client::{ApiError, CoachingApi};

static COACHING_API: Lazy<CoachingApi> = Lazy::new(CoachingApi::from_env);

async fn frontend() -> Frontend {
    Frontend::new().title("Stride").index_by_robots(false)
}

// ===== CONFIG PERSISTENCE =====

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("stride").join("config.toml"))
}

/// Tolerant parse: unreadable or outdated config falls back to defaults
/// rather than failing the app.
fn parse_config(text: &str) -> shared::AppConfig {
    match toml::from_str::<shared::AppConfig>(text) {
        Ok(config) if config.app.is_supported_version() => config,
        Ok(config) => {
            tracing::warn!(version = %config.app.version, "unsupported config version, using defaults");
            shared::AppConfig::default()
        }
        Err(error) => {
            tracing::warn!(%error, "malformed config file, using defaults");
            shared::AppConfig::default()
        }
    }
}

async fn load_config(session_id: SessionId, cor_id: CorId) {
    let config = match config_path() {
        Some(path) => match tokio::fs::read_to_string(&path).await {
            Ok(text) => parse_config(&text),
            Err(_) => shared::AppConfig::default(),
        },
        None => shared::AppConfig::default(),
    };
    send_down_msg(DownMsg::ConfigLoaded(config), session_id, cor_id).await;
}

async fn save_config(config: shared::AppConfig, session_id: SessionId, cor_id: CorId) {
    let result: Result<(), String> = async {
        let path = config_path().ok_or_else(|| "no config directory available".to_string())?;
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| error.to_string())?;
        }
        let text = toml::to_string_pretty(&config).map_err(|error| error.to_string())?;
        tokio::fs::write(&path, text)
            .await
            .map_err(|error| error.to_string())
    }
    .await;

    match result {
        Ok(()) => send_down_msg(DownMsg::ConfigSaved, session_id, cor_id).await,
        Err(error) => {
            tracing::error!(%error, "failed to save config");
            send_down_msg(DownMsg::ConfigError(error), session_id, cor_id).await;
        }
    }
}

// ===== COACHING API PROXY =====

async fn api_failed(request: RequestKind, error: ApiError, session_id: SessionId, cor_id: CorId) {
    tracing::warn!(request = request.label(), %error, "coaching api call failed");
    send_down_msg(
        DownMsg::ApiFailed {
            request,
            failure: error.to_failure(),
        },
        session_id,
        cor_id,
    )
    .await;
}

async fn up_msg_handler(req: UpMsgRequest<UpMsg>) {
    let (session_id, cor_id) = (req.session_id, req.cor_id);

    match &req.up_msg {
        UpMsg::ListRecoveryProtocols { page, page_size } => {
            match COACHING_API.list_recovery_protocols(*page, *page_size).await {
                Ok(body) => {
                    send_down_msg(DownMsg::RecoveryProtocolsLoaded { body }, session_id, cor_id)
                        .await;
                }
                Err(error) => {
                    api_failed(RequestKind::RecoveryProtocolList, error, session_id, cor_id).await;
                }
            }
        }
        UpMsg::ApproveRecoveryProtocol { protocol_id } => {
            match COACHING_API.approve_recovery_protocol(*protocol_id).await {
                Ok(()) => {
                    send_down_msg(
                        DownMsg::RecoveryProtocolApproved {
                            protocol_id: *protocol_id,
                        },
                        session_id,
                        cor_id,
                    )
                    .await;
                }
                Err(error) => {
                    api_failed(
                        RequestKind::RecoveryProtocolApproval,
                        error,
                        session_id,
                        cor_id,
                    )
                    .await;
                }
            }
        }
        UpMsg::ListProgramsByCycle(cycle) => match COACHING_API.list_programs(*cycle).await {
            Ok(body) => {
                send_down_msg(
                    DownMsg::ProgramsLoaded { cycle: *cycle, body },
                    session_id,
                    cor_id,
                )
                .await;
            }
            Err(error) => {
                api_failed(RequestKind::ProgramList, error, session_id, cor_id).await;
            }
        },
        UpMsg::GetActiveProgram => match COACHING_API.active_program().await {
            Ok(body) => {
                send_down_msg(DownMsg::ActiveProgramLoaded { body }, session_id, cor_id).await;
            }
            Err(error) => {
                api_failed(RequestKind::ActiveProgram, error, session_id, cor_id).await;
            }
        },
        UpMsg::RequestUploadUrl(request) => match COACHING_API.request_upload_url(request).await {
            Ok((upload_url, object_key)) => {
                send_down_msg(
                    DownMsg::UploadUrlIssued {
                        upload_url,
                        object_key,
                    },
                    session_id,
                    cor_id,
                )
                .await;
            }
            Err(error) => {
                api_failed(RequestKind::UploadUrl, error, session_id, cor_id).await;
            }
        },
        UpMsg::LoadConfig => {
            load_config(session_id, cor_id).await;
        }
        UpMsg::SaveConfig(config) => {
            save_config(config.clone(), session_id, cor_id).await;
        }
    }
}

async fn send_down_msg(msg: DownMsg, session_id: SessionId, cor_id: CorId) {
    if let Some(session) = sessions::by_session_id().wait_for(session_id).await {
        session.send_down_msg(&msg, cor_id).await;
    } else {
        tracing::debug!(?session_id, "session not found, likely disconnected");
    }
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("backend=info")))
        .try_init()
        .ok();

    start(frontend, up_msg_handler, |_error| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_config_text_falls_back_to_defaults() {
        assert_eq!(parse_config("not = [valid"), shared::AppConfig::default());
    }

    #[test]
    fn valid_config_round_trips() {
        let mut config = shared::AppConfig::default();
        config.ui.theme = "light".to_string();
        config.ui.admin_page_size = 50;
        let text = toml::to_string_pretty(&config).unwrap();
        assert_eq!(parse_config(&text), config);
    }

    #[test]
    fn unsupported_version_falls_back_to_defaults() {
        let text = "[app]\nversion = \"9.9.9\"\n\n[ui]\ntheme = \"light\"\nadmin_page_size = 10\n";
        assert_eq!(parse_config(text), shared::AppConfig::default());
    }
}
