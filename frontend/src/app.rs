//! StrideApp — owns every domain and the backend connection.

use crate::config::AppConfig;
use crate::connection::{create_connection_message_handler, ConnectionAdapter};
use crate::dataflow::Actor;
use crate::notifications::Notifications;
use crate::programs::Programs;
use crate::recovery_protocols::RecoveryProtocols;
use crate::uploads::Uploads;
use shared::UpMsg;
use std::sync::Arc;
use zoon::*;

pub struct StrideApp {
    pub config: AppConfig,
    pub notifications: Notifications,
    pub recovery_protocols: RecoveryProtocols,
    pub programs: Programs,
    pub uploads: Uploads,
    pub connection: Arc<ConnectionAdapter>,
    /// Drains DownMsgs for the whole app lifetime.
    #[allow(dead_code)]
    message_handler: Actor<()>,
}

impl StrideApp {
    pub async fn new() -> Self {
        let (connection_adapter, down_msg_stream) = ConnectionAdapter::new();
        let connection = Arc::new(connection_adapter);

        let notifications = Notifications::new().await;
        let config = AppConfig::new(connection.clone()).await;
        let recovery_protocols = RecoveryProtocols::new(connection.clone(), &config).await;
        let programs = Programs::new(connection.clone()).await;
        let uploads = Uploads::new(connection.clone(), &notifications).await;

        let message_handler = create_connection_message_handler(
            Box::pin(down_msg_stream),
            &recovery_protocols,
            &programs,
            &uploads,
            &config,
            &notifications,
        );

        // Theme changes persist through the config domain instead of
        // localStorage.
        moonzoon_strideui::init_theme(None, {
            let theme_changed_relay = config.theme_changed_relay.clone();
            Some(Box::new(move |theme| theme_changed_relay.send(theme)))
        });

        connection.send_up_msg(UpMsg::LoadConfig).await;

        Self {
            config,
            notifications,
            recovery_protocols,
            programs,
            uploads,
            connection,
            message_handler,
        }
    }

    pub fn root(&self) -> impl Element {
        crate::views::root(self)
    }
}
