//! Recovery protocol domain (admin review queue).
//!
//! Owns the fetched list, the loading flag and the approval flow. The
//! actor loop processes one settled event at a time, so the re-fetch after
//! an approval is only issued once the approval response has arrived —
//! requests within this page are sequential, never concurrent. A hung
//! request leaves `loading` set; there is no timeout and no retry.

use crate::config::AppConfig;
use crate::connection::ConnectionAdapter;
use crate::dataflow::{relay, ActorVec, Atom, Relay};
use futures::{select, StreamExt};
use serde_json::Value;
use shared::envelope::{decode_rows, flatten_row, Envelope, Meta};
use shared::{RecoveryProtocol, RequestKind, UpMsg};
use std::sync::Arc;
use zoon::SignalExt;

#[derive(Clone)]
pub struct RecoveryProtocols {
    pub protocols: ActorVec<RecoveryProtocol>,
    pub meta: Atom<Option<Meta>>,
    pub loading: Atom<bool>,
    /// Protocol id with an approval in flight, to disable its button.
    pub approving: Atom<Option<u64>>,
    pub reload_requested_relay: Relay<()>,
    pub approve_requested_relay: Relay<u64>,
    pub list_loaded_relay: Relay<Value>,
    pub approval_confirmed_relay: Relay<u64>,
    pub request_failed_relay: Relay<RequestKind>,
}

impl RecoveryProtocols {
    pub async fn new(connection: Arc<ConnectionAdapter>, config: &AppConfig) -> Self {
        let (reload_requested_relay, mut reload_requested_stream) = relay::<()>();
        let (approve_requested_relay, mut approve_requested_stream) = relay::<u64>();
        let (list_loaded_relay, mut list_loaded_stream) = relay::<Value>();
        let (approval_confirmed_relay, mut approval_confirmed_stream) = relay::<u64>();
        let (request_failed_relay, mut request_failed_stream) = relay::<RequestKind>();

        let meta = Atom::new(None);
        let loading = Atom::new(false);
        let approving = Atom::new(None);

        let protocols = ActorVec::new(vec![], {
            let meta = meta.clone();
            let loading = loading.clone();
            let approving = approving.clone();
            let admin_page_size = config.admin_page_size.clone();
            async move |protocols| {
                let request_list = |page_size: u32| {
                    let connection = connection.clone();
                    async move {
                        connection
                            .send_up_msg(UpMsg::ListRecoveryProtocols { page: 1, page_size })
                            .await;
                    }
                };
                loop {
                    select! {
                        reload = reload_requested_stream.next() => {
                            if reload.is_some() {
                                loading.set(true);
                                let page_size = admin_page_size
                                    .signal()
                                    .to_stream()
                                    .next()
                                    .await
                                    .unwrap_or_else(|| shared::UiSection::default().admin_page_size);
                                request_list(page_size).await;
                            }
                        }
                        protocol_id = approve_requested_stream.next() => {
                            if let Some(protocol_id) = protocol_id {
                                approving.set(Some(protocol_id));
                                connection
                                    .send_up_msg(UpMsg::ApproveRecoveryProtocol { protocol_id })
                                    .await;
                            }
                        }
                        body = list_loaded_stream.next() => {
                            if let Some(body) = body {
                                let envelope = Envelope::parse(&body);
                                if !envelope.recognized() {
                                    zoon::println!(
                                        "Unrecognized recovery protocol envelope, showing empty list"
                                    );
                                }
                                let rows = envelope.into_rows();
                                let (items, dropped) = decode_rows::<RecoveryProtocol>(rows.clone());
                                if dropped > 0 {
                                    // Log the wire fields to spot contract drift.
                                    let fields = rows
                                        .first()
                                        .map(|row| {
                                            flatten_row(row)
                                                .iter()
                                                .map(|(name, value)| {
                                                    format!("{name}={}", value.display())
                                                })
                                                .collect::<Vec<_>>()
                                                .join(", ")
                                        })
                                        .unwrap_or_default();
                                    zoon::println!(
                                        "Dropped {dropped} undecodable protocol rows; first row: {fields}"
                                    );
                                }
                                meta.set(Meta::from_body(&body));
                                protocols.lock_mut().replace_cloned(items);
                                loading.set(false);
                            }
                        }
                        protocol_id = approval_confirmed_stream.next() => {
                            if let Some(_protocol_id) = protocol_id {
                                approving.set(None);
                                // Only a confirmed approval replaces the list,
                                // via a fresh fetch of the page.
                                loading.set(true);
                                let page_size = admin_page_size
                                    .signal()
                                    .to_stream()
                                    .next()
                                    .await
                                    .unwrap_or_else(|| shared::UiSection::default().admin_page_size);
                                request_list(page_size).await;
                            }
                        }
                        request = request_failed_stream.next() => {
                            if let Some(request) = request {
                                match request {
                                    RequestKind::RecoveryProtocolList => loading.set(false),
                                    RequestKind::RecoveryProtocolApproval => approving.set(None),
                                    _ => {}
                                }
                            }
                        }
                    }
                }
            }
        });

        Self {
            protocols,
            meta,
            loading,
            approving,
            reload_requested_relay,
            approve_requested_relay,
            list_loaded_relay,
            approval_confirmed_relay,
            request_failed_relay,
        }
    }
}
