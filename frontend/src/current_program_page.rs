//! Athlete home page: the currently assigned program.

use crate::programs::Programs;
use crate::programs_page::cycle_badge_variant;
use crate::uploads::Uploads;
use moonzoon_strideui::*;
use shared::{ActiveProgram, UploadKind, UploadRequest};
use zoon::*;

const MEGABYTE: u64 = 1024 * 1024;

fn program_card(active: &ActiveProgram) -> impl Element {
    vstack()
        .spacing(StackSpacing::Medium)
        .fill_width()
        .item(
            hstack()
                .spacing(StackSpacing::Small)
                .align(StackAlign::Center)
                .item(h3(active.program.name.clone()))
                .item(
                    badge(active.program.cycle.label())
                        .variant(cycle_badge_variant(active.program.cycle))
                        .size(BadgeSize::Small)
                        .build(),
                )
                .build(),
        )
        .item(muted(format!(
            "{} weeks · {}",
            active.program.weeks, active.program.focus
        )))
        .item(
            stepper()
                .steps(active.phases.iter().cloned())
                .active(active.current_phase)
                .size(StepperSize::Medium)
                .build(),
        )
        .build()
}

fn upload_section(uploads: &Uploads) -> impl Element {
    let upload_relay = uploads.upload_requested_relay.clone();
    let video_pending = uploads
        .pending
        .signal()
        .map(|pending| pending == Some(UploadKind::ProgressVideo));
    let document_pending = uploads
        .pending
        .signal()
        .map(|pending| pending == Some(UploadKind::ProtocolDocument));
    let upload_relay_for_video = upload_relay.clone();

    vstack()
        .spacing(StackSpacing::Small)
        .fill_width()
        .item(h4("Progress check-in"))
        .item(muted("Attach this week's video or a scanned protocol"))
        .item(
            hstack()
                .spacing(StackSpacing::Small)
                .align(StackAlign::Center)
                .item(
                    button("Attach progress video")
                        .variant(ButtonVariant::Secondary)
                        .size(ButtonSize::Small)
                        .loading_signal(video_pending)
                        .on_press(move || {
                            upload_relay_for_video.send(UploadRequest {
                                file_name: "session-video.mp4".to_string(),
                                kind: UploadKind::ProgressVideo,
                                content_type: "video/mp4".to_string(),
                                byte_size: 48 * MEGABYTE,
                            })
                        })
                        .build(),
                )
                .item(
                    button("Attach protocol scan")
                        .variant(ButtonVariant::Secondary)
                        .size(ButtonSize::Small)
                        .loading_signal(document_pending)
                        .on_press(move || {
                            upload_relay.send(UploadRequest {
                                file_name: "protocol-scan.pdf".to_string(),
                                kind: UploadKind::ProtocolDocument,
                                content_type: "application/pdf".to_string(),
                                byte_size: 3 * MEGABYTE,
                            })
                        })
                        .build(),
                )
                .build(),
        )
        .item(
            El::new().child_signal(uploads.last_issued.signal().map(|issued| {
                issued.map(|issued| muted(format!("Last upload slot: {}", issued.object_key)))
            })),
        )
        .build()
}

pub fn page(programs: &Programs, uploads: &Uploads) -> impl Element {
    // Entry-triggered fetch.
    programs.active_requested_relay.send(());

    let uploads = uploads.clone();
    let content = map_ref! {
        let loading = programs.active_loading.signal(),
        let active = programs.active_program.signal() => {
            if *loading {
                El::new()
                    .s(Width::fill())
                    .s(Padding::all(SPACING_32))
                    .s(Align::center())
                    .child(
                        spinner()
                            .size(SpinnerSize::Large)
                            .variant(SpinnerVariant::Primary)
                            .build(),
                    )
                    .unify()
            } else {
                match active {
                    Some(active) => vstack()
                        .spacing(StackSpacing::Large)
                        .fill_width()
                        .item(program_card(active))
                        .item(upload_section(&uploads))
                        .build()
                        .unify(),
                    None => paragraph("No program assigned yet. Your coach will set one up.")
                        .unify(),
                }
            }
        }
    };

    vstack()
        .spacing(StackSpacing::Medium)
        .fill_width()
        .item(h2("Current program"))
        .item(El::new().s(Width::fill()).child_signal(content))
        .build()
}
