//! Backend connection wiring.
//!
//! Wraps zoon's `Connection` so DownMsgs arrive as a stream that a single
//! handler actor dispatches into the owning domains' relays.

use crate::config::AppConfig;
use crate::dataflow::Actor;
use crate::notifications::{Notifications, Toast};
use crate::programs::Programs;
use crate::recovery_protocols::RecoveryProtocols;
use crate::uploads::Uploads;
use futures::stream::StreamExt;
use shared::{DownMsg, RequestKind, UpMsg};
use zoon::*;

pub struct ConnectionAdapter {
    connection: Connection<UpMsg, DownMsg>,
}

impl ConnectionAdapter {
    pub fn new() -> (Self, impl futures::stream::Stream<Item = DownMsg>) {
        let (message_sender, message_stream) = futures::channel::mpsc::unbounded();

        let connection = Connection::new(move |down_msg, _| {
            let _ = message_sender.unbounded_send(down_msg);
        });

        (ConnectionAdapter { connection }, message_stream)
    }

    pub async fn send_up_msg(&self, up_msg: UpMsg) {
        if let Err(error) = self.connection.send_up_msg(up_msg).await {
            zoon::println!("Failed to send message: {:?}", error);
        }
    }
}

/// Spawn the handler actor that drains the DownMsg stream for the whole
/// app lifetime. Responses always land in domain actors, never in views,
/// so a page switch while a request is pending cannot strand a response.
pub fn create_connection_message_handler(
    mut down_msg_stream: impl futures::stream::Stream<Item = DownMsg> + Unpin + Send + 'static,
    recovery_protocols: &RecoveryProtocols,
    programs: &Programs,
    uploads: &Uploads,
    config: &AppConfig,
    notifications: &Notifications,
) -> Actor<()> {
    let recovery_protocols = recovery_protocols.clone();
    let programs = programs.clone();
    let uploads = uploads.clone();
    let config = config.clone();
    let notifications = notifications.clone();

    Actor::new((), async move |_state| {
        while let Some(down_msg) = down_msg_stream.next().await {
            handle_down_msg(
                down_msg,
                &recovery_protocols,
                &programs,
                &uploads,
                &config,
                &notifications,
            );
        }
    })
}

fn handle_down_msg(
    down_msg: DownMsg,
    recovery_protocols: &RecoveryProtocols,
    programs: &Programs,
    uploads: &Uploads,
    config: &AppConfig,
    notifications: &Notifications,
) {
    match down_msg {
        DownMsg::RecoveryProtocolsLoaded { body } => {
            recovery_protocols.list_loaded_relay.send(body);
        }
        DownMsg::RecoveryProtocolApproved { protocol_id } => {
            notifications.toast_added_relay.send(Toast::success(
                "Protocol approved",
                format!("Recovery protocol #{protocol_id} is now active"),
            ));
            recovery_protocols.approval_confirmed_relay.send(protocol_id);
        }
        DownMsg::ProgramsLoaded { cycle, body } => {
            programs.list_loaded_relay.send((cycle, body));
        }
        DownMsg::ActiveProgramLoaded { body } => {
            programs.active_loaded_relay.send(body);
        }
        DownMsg::UploadUrlIssued { upload_url, object_key } => {
            uploads.url_issued_relay.send((upload_url, object_key));
        }
        DownMsg::ApiFailed { request, failure } => {
            notifications
                .toast_added_relay
                .send(Toast::api_failure(request, &failure));
            match request {
                RequestKind::RecoveryProtocolList | RequestKind::RecoveryProtocolApproval => {
                    recovery_protocols.request_failed_relay.send(request);
                }
                RequestKind::ProgramList | RequestKind::ActiveProgram => {
                    programs.request_failed_relay.send(request);
                }
                RequestKind::UploadUrl => {
                    uploads.request_failed_relay.send(request);
                }
            }
        }
        DownMsg::ConfigLoaded(loaded_config) => {
            config.config_loaded_relay.send(loaded_config);
        }
        DownMsg::ConfigSaved => {}
        DownMsg::ConfigError(error) => {
            zoon::println!("Config error: {error}");
        }
    }
}
