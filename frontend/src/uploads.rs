//! Presigned upload domain.
//!
//! Validates file metadata against the per-kind MIME/size table before any
//! request leaves the app; rejected files surface as an error toast and no
//! upload URL is requested.

use crate::connection::ConnectionAdapter;
use crate::dataflow::{relay, Actor, Atom, Relay};
use crate::notifications::{Notifications, Toast};
use futures::{select, StreamExt};
use shared::{RequestKind, UploadKind, UploadRequest, UpMsg};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq)]
pub struct IssuedUpload {
    pub upload_url: String,
    pub object_key: String,
}

#[derive(Clone)]
pub struct Uploads {
    /// Kind with a URL request in flight.
    pub pending: Atom<Option<UploadKind>>,
    pub last_issued: Actor<Option<IssuedUpload>>,
    pub upload_requested_relay: Relay<UploadRequest>,
    pub url_issued_relay: Relay<(String, String)>,
    pub request_failed_relay: Relay<RequestKind>,
}

impl Uploads {
    pub async fn new(connection: Arc<ConnectionAdapter>, notifications: &Notifications) -> Self {
        let (upload_requested_relay, mut upload_requested_stream) = relay::<UploadRequest>();
        let (url_issued_relay, mut url_issued_stream) = relay::<(String, String)>();
        let (request_failed_relay, mut request_failed_stream) = relay::<RequestKind>();

        let pending = Atom::new(None);

        let last_issued = Actor::new(None, {
            let pending = pending.clone();
            let toast_added_relay = notifications.toast_added_relay.clone();
            async move |state| {
                loop {
                    select! {
                        request = upload_requested_stream.next() => {
                            if let Some(request) = request {
                                match request.kind.validate(&request.content_type, request.byte_size) {
                                    Ok(()) => {
                                        pending.set(Some(request.kind));
                                        connection
                                            .send_up_msg(UpMsg::RequestUploadUrl(request))
                                            .await;
                                    }
                                    Err(rejection) => {
                                        toast_added_relay.send(Toast::error(
                                            format!("Cannot upload {}", request.file_name),
                                            rejection.message(),
                                        ));
                                    }
                                }
                            }
                        }
                        issued = url_issued_stream.next() => {
                            if let Some((upload_url, object_key)) = issued {
                                pending.set(None);
                                toast_added_relay.send(Toast::success(
                                    "Upload link ready",
                                    object_key.clone(),
                                ));
                                state.set(Some(IssuedUpload { upload_url, object_key }));
                            }
                        }
                        request = request_failed_stream.next() => {
                            if let Some(RequestKind::UploadUrl) = request {
                                pending.set(None);
                            }
                        }
                    }
                }
            }
        });

        Self {
            pending,
            last_issued,
            upload_requested_relay,
            url_issued_relay,
            request_failed_relay,
        }
    }
}
