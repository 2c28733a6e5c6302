//! Admin recovery-protocol review page.
//!
//! Fetches the protocol list on entry and renders it through the generic
//! table, with a per-row Approve action. Approval success re-fetches the
//! list; failure leaves it untouched (the toast comes from the
//! notifications boundary).

use crate::dataflow::Atom;
use crate::recovery_protocols::RecoveryProtocols;
use moonzoon_strideui::*;
use shared::{ProtocolStatus, RecoveryProtocol};
use zoon::*;

fn status_badge(status: ProtocolStatus) -> RawElOrText {
    let variant = match status {
        ProtocolStatus::Pending => BadgeVariant::Warning,
        ProtocolStatus::Approved => BadgeVariant::Success,
        ProtocolStatus::Rejected => BadgeVariant::Error,
    };
    badge(status.label())
        .variant(variant)
        .size(BadgeSize::Small)
        .build()
        .unify()
}

fn columns(recovery_protocols: &RecoveryProtocols) -> Vec<TableColumn<RecoveryProtocol>> {
    let approve_relay = recovery_protocols.approve_requested_relay.clone();
    let approving = recovery_protocols.approving.clone();

    vec![
        TableColumn::new("id", "Id", |protocol: &RecoveryProtocol| {
            CellValue::Number(protocol.id as f64)
        })
        .sortable()
        .width(64),
        TableColumn::new("athlete", "Athlete", |protocol: &RecoveryProtocol| {
            CellValue::Text(protocol.athlete_name.clone())
        })
        .sortable(),
        TableColumn::new("title", "Protocol", |protocol: &RecoveryProtocol| {
            CellValue::Text(protocol.title.clone())
        }),
        TableColumn::new("submitted", "Submitted", |protocol: &RecoveryProtocol| {
            CellValue::Text(protocol.submitted_at.clone())
        })
        .sortable(),
        TableColumn::new("status", "Status", |protocol: &RecoveryProtocol| {
            CellValue::Text(protocol.status.label().to_string())
        })
        .render(|protocol| status_badge(protocol.status)),
        TableColumn::new("actions", "", |_: &RecoveryProtocol| CellValue::Empty)
            .width(120)
            .render(move |protocol| {
                let protocol_id = protocol.id;
                let approve = button("Approve")
                    .variant(ButtonVariant::Primary)
                    .size(ButtonSize::Small);
                if protocol.status == ProtocolStatus::Pending {
                    let approve_relay = approve_relay.clone();
                    approve
                        .disabled_signal(
                            approving.signal().map(move |in_flight| {
                                in_flight == Some(protocol_id)
                            }),
                        )
                        .on_press(move || approve_relay.send(protocol_id))
                        .build()
                        .unify()
                } else {
                    approve.disabled(true).build().unify()
                }
            }),
    ]
}

pub fn page(recovery_protocols: &RecoveryProtocols) -> impl Element {
    // Entry-triggered fetch, like the original page lifecycle hook.
    recovery_protocols.reload_requested_relay.send(());

    let pending_only = Atom::new(false);

    let rows = map_ref! {
        let protocols = recovery_protocols.protocols.signal(),
        let pending_only = pending_only.signal() => {
            if *pending_only {
                protocols
                    .iter()
                    .filter(|protocol| protocol.status == ProtocolStatus::Pending)
                    .cloned()
                    .collect()
            } else {
                protocols.clone()
            }
        }
    };

    let mut table = data_table::<RecoveryProtocol>()
        .rows_signal(rows)
        .loading_signal(recovery_protocols.loading.signal())
        .empty_message("No recovery protocols to review");
    for column in columns(recovery_protocols) {
        table = table.column(column);
    }

    let reload_relay = recovery_protocols.reload_requested_relay.clone();
    let pending_only_for_checkbox = pending_only.clone();

    vstack()
        .spacing(StackSpacing::Medium)
        .fill_width()
        .item(h2("Recovery protocols"))
        .item(
            hstack()
                .spacing(StackSpacing::Medium)
                .align(StackAlign::Center)
                .fill_width()
                .item(El::new().child_signal(pending_only.signal().map(move |checked| {
                    let pending_only = pending_only_for_checkbox.clone();
                    checkbox()
                        .checked(checked)
                        .label("Pending only")
                        .on_change(move |next| pending_only.set(next))
                        .build()
                })))
                .item(
                    button("Refresh")
                        .variant(ButtonVariant::Ghost)
                        .size(ButtonSize::Small)
                        .on_press(move || reload_relay.send(()))
                        .build(),
                )
                .item(
                    El::new().child_signal(recovery_protocols.meta.signal().map(|meta| {
                        meta.map(|meta| {
                            muted(format!(
                                "Page {} of {} · {} total",
                                meta.page, meta.pages, meta.total
                            ))
                        })
                    })),
                )
                .build(),
        )
        .item(table.build())
        .build()
}
