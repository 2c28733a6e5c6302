//! Program browsing domain (athlete and coach views).
//!
//! One actor owns the cycle-bucketed program list, another the athlete's
//! currently assigned program. Both degrade to empty on unrecognized
//! envelopes and keep the previous state on failed requests.

use crate::connection::ConnectionAdapter;
use crate::dataflow::{relay, Actor, ActorVec, Atom, Relay};
use futures::{select, StreamExt};
use serde_json::Value;
use shared::envelope::{decode_rows, flatten_row, single_record, Envelope};
use shared::{ActiveProgram, Cycle, Program, RequestKind, UpMsg};
use std::sync::Arc;

#[derive(Clone)]
pub struct Programs {
    pub programs: ActorVec<Program>,
    pub selected_cycle: Atom<Cycle>,
    pub loading: Atom<bool>,
    pub active_program: Actor<Option<ActiveProgram>>,
    pub active_loading: Atom<bool>,
    pub reload_requested_relay: Relay<()>,
    pub cycle_selected_relay: Relay<Cycle>,
    pub list_loaded_relay: Relay<(Cycle, Value)>,
    pub active_requested_relay: Relay<()>,
    pub active_loaded_relay: Relay<Value>,
    pub request_failed_relay: Relay<RequestKind>,
}

impl Programs {
    pub async fn new(connection: Arc<ConnectionAdapter>) -> Self {
        let (reload_requested_relay, mut reload_requested_stream) = relay::<()>();
        let (cycle_selected_relay, mut cycle_selected_stream) = relay::<Cycle>();
        let (list_loaded_relay, mut list_loaded_stream) = relay::<(Cycle, Value)>();
        let (active_requested_relay, mut active_requested_stream) = relay::<()>();
        let (active_loaded_relay, mut active_loaded_stream) = relay::<Value>();
        let (request_failed_relay, mut request_failed_stream) = relay::<RequestKind>();

        let selected_cycle = Atom::new(Cycle::Green);
        let loading = Atom::new(false);
        let active_loading = Atom::new(false);

        let programs = ActorVec::new(vec![], {
            let selected_cycle = selected_cycle.clone();
            let loading = loading.clone();
            let active_loading = active_loading.clone();
            let connection = connection.clone();
            async move |programs| {
                // Cycle shown by the page, re-fetched on reload.
                let mut current_cycle = Cycle::Green;
                loop {
                    select! {
                        reload = reload_requested_stream.next() => {
                            if reload.is_some() {
                                loading.set(true);
                                connection
                                    .send_up_msg(UpMsg::ListProgramsByCycle(current_cycle))
                                    .await;
                            }
                        }
                        cycle = cycle_selected_stream.next() => {
                            if let Some(cycle) = cycle {
                                current_cycle = cycle;
                                selected_cycle.set(cycle);
                                loading.set(true);
                                connection.send_up_msg(UpMsg::ListProgramsByCycle(cycle)).await;
                            }
                        }
                        loaded = list_loaded_stream.next() => {
                            if let Some((_cycle, body)) = loaded {
                                let envelope = Envelope::parse(&body);
                                if !envelope.recognized() {
                                    zoon::println!(
                                        "Unrecognized program list envelope, showing empty list"
                                    );
                                }
                                let rows = envelope.into_rows();
                                let (items, dropped) = decode_rows::<Program>(rows.clone());
                                if dropped > 0 {
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
                                        "Dropped {dropped} undecodable program rows; first row: {fields}"
                                    );
                                }
                                programs.lock_mut().replace_cloned(items);
                                loading.set(false);
                            }
                        }
                        request = request_failed_stream.next() => {
                            if let Some(request) = request {
                                match request {
                                    RequestKind::ProgramList => loading.set(false),
                                    RequestKind::ActiveProgram => active_loading.set(false),
                                    _ => {}
                                }
                            }
                        }
                    }
                }
            }
        });

        let active_program = Actor::new(None, {
            let active_loading = active_loading.clone();
            async move |state| {
                loop {
                    select! {
                        requested = active_requested_stream.next() => {
                            if requested.is_some() {
                                active_loading.set(true);
                                connection.send_up_msg(UpMsg::GetActiveProgram).await;
                            }
                        }
                        body = active_loaded_stream.next() => {
                            if let Some(body) = body {
                                let active = single_record(&body)
                                    .and_then(|record| {
                                        serde_json::from_value::<ActiveProgram>(record).ok()
                                    });
                                if active.is_none() {
                                    zoon::println!("No decodable active program in response");
                                }
                                state.set(active);
                                active_loading.set(false);
                            }
                        }
                    }
                }
            }
        });

        Self {
            programs,
            selected_cycle,
            loading,
            active_program,
            active_loading,
            reload_requested_relay,
            cycle_selected_relay,
            list_loaded_relay,
            active_requested_relay,
            active_loaded_relay,
            request_failed_relay,
        }
    }
}
