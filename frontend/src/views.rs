//! App shell: header bar, routed page body, toast overlay.

use crate::app::StrideApp;
use crate::notifications::{Notifications, Toast, ToastVariant};
use crate::router::{router, page_id_signal, PageId, Route};
use crate::session;
use crate::{admin_recovery_page, current_program_page, login_page, programs_page};
use moonzoon_strideui::*;
use shared::UserRole;
use zoon::*;

pub fn root(app: &StrideApp) -> impl Element {
    Stack::new()
        .s(Width::fill())
        .s(Height::fill())
        .s(Background::new().color_signal(neutral_1()))
        .s(Font::new().family([FontFamily::new(FONT_FAMILY_SANS)]))
        .layer(
            Column::new()
                .s(Width::fill())
                .s(Height::fill())
                .item(header_bar())
                .item(
                    El::new()
                        .s(Width::fill())
                        .s(Height::fill())
                        .s(Padding::all(SPACING_24))
                        .s(Scrollbars::both())
                        .child(page_body(app)),
                ),
        )
        .layer(toast_overlay(&app.notifications))
}

fn page_body(app: &StrideApp) -> impl Element {
    let recovery_protocols = app.recovery_protocols.clone();
    let programs = app.programs.clone();
    let uploads = app.uploads.clone();

    El::new()
        .s(Width::fill())
        .child_signal(page_id_signal().map(move |page_id| match page_id {
            PageId::Login => login_page::page().unify(),
            PageId::CurrentProgram => current_program_page::page(&programs, &uploads).unify(),
            PageId::Programs => programs_page::page(&programs).unify(),
            PageId::AdminRecovery => admin_recovery_page::page(&recovery_protocols).unify(),
            PageId::NotFound => El::new()
                .s(Align::center())
                .child(paragraph("This page does not exist."))
                .unify(),
        }))
}

fn nav_links(role: UserRole) -> Vec<(&'static str, Route)> {
    match role {
        UserRole::Athlete => vec![
            ("My program", Route::CurrentProgram),
            ("Programs", Route::Programs),
        ],
        UserRole::Coach => vec![("Programs", Route::Programs)],
        UserRole::CoachHead => vec![
            ("Programs", Route::Programs),
            ("Recovery queue", Route::AdminRecovery),
        ],
        UserRole::Admin => vec![("Recovery queue", Route::AdminRecovery)],
    }
}

fn header_bar() -> impl Element {
    Row::new()
        .s(Width::fill())
        .s(Padding::new().x(SPACING_24).y(SPACING_12))
        .s(Gap::new().x(SPACING_16))
        .s(Align::new().center_y())
        .s(Background::new().color_signal(neutral_2()))
        .item(h4("Stride"))
        .item(El::new().child_signal(session::session().map(|user| {
            user.map(|user| {
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .items(nav_links(user.role).into_iter().map(|(label, route)| {
                        button(label)
                            .variant(ButtonVariant::Ghost)
                            .size(ButtonSize::Small)
                            .on_press(move || router().go(route))
                            .build()
                    }))
            })
        })))
        .item(El::new().s(Width::fill()))
        .item(
            button("Theme")
                .variant(ButtonVariant::Ghost)
                .size(ButtonSize::Small)
                .on_press(toggle_theme)
                .build(),
        )
        .item(El::new().child_signal(session::session().map(|user| {
            user.map(|user| {
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().center_y())
                    .item(badge(user.role.label()).size(BadgeSize::Small).build())
                    .item(small(user.name))
                    .item(
                        button("Sign out")
                            .variant(ButtonVariant::Outline)
                            .size(ButtonSize::Small)
                            .on_press(|| {
                                session::log_out();
                                router().go(Route::Login);
                            })
                            .build(),
                    )
            })
        })))
}

fn toast_overlay(notifications: &Notifications) -> impl Element {
    let dismiss_relay = notifications.toast_dismissed_relay.clone();
    El::new()
        .s(Align::new().bottom().right())
        .s(Padding::all(SPACING_16))
        .child(
            Column::new()
                .s(Gap::new().y(SPACING_8))
                .items_signal_vec(notifications.active_toasts.signal_vec().map(move |toast| {
                    toast_view(toast, dismiss_relay.clone())
                })),
        )
}

fn toast_view(toast: Toast, dismiss_relay: crate::dataflow::Relay<String>) -> impl Element {
    let variant = toast.variant;
    let background = theme().map(move |t| match (variant, t) {
        (ToastVariant::Error, Theme::Light) => "oklch(94% 0.06 30)",
        (ToastVariant::Error, Theme::Dark) => "oklch(20% 0.06 30)",
        (ToastVariant::Success, Theme::Light) => "oklch(94% 0.05 145)",
        (ToastVariant::Success, Theme::Dark) => "oklch(20% 0.05 145)",
        (ToastVariant::Info, Theme::Light) => "oklch(95% 0.03 165)",
        (ToastVariant::Info, Theme::Dark) => "oklch(25% 0.03 165)",
    });
    let border = theme().map(move |t| {
        let color = match (variant, t) {
            (ToastVariant::Error, Theme::Light) => "oklch(50% 0.21 30)",
            (ToastVariant::Error, Theme::Dark) => "oklch(70% 0.21 30)",
            (ToastVariant::Success, Theme::Light) => "oklch(50% 0.15 145)",
            (ToastVariant::Success, Theme::Dark) => "oklch(70% 0.15 145)",
            (ToastVariant::Info, Theme::Light) => "oklch(52% 0.15 165)",
            (ToastVariant::Info, Theme::Dark) => "oklch(65% 0.15 165)",
        };
        Border::new().width(BORDER_WIDTH_1).color(color)
    });

    let toast_id = toast.id.clone();
    Row::new()
        .s(Width::exact(320))
        .s(Padding::all(SPACING_12))
        .s(Gap::new().x(SPACING_12))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .s(Shadows::new([Shadow::new()
            .y(2)
            .blur(8)
            .color(SHADOW_COLOR_BLACK_MEDIUM)]))
        .s(Background::new().color_signal(background))
        .s(Borders::all_signal(border))
        .item(
            Column::new()
                .s(Width::fill())
                .s(Gap::new().y(SPACING_2))
                .item(
                    El::new()
                        .s(Font::new()
                            .size(FONT_SIZE_14)
                            .weight(FontWeight::Number(FONT_WEIGHT_6))
                            .color_signal(neutral_12()))
                        .child(Text::new(&toast.title)),
                )
                .item(
                    El::new()
                        .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_9()))
                        .child(Text::new(&toast.message)),
                ),
        )
        .item(
            El::new()
                .s(Cursor::new(CursorIcon::Pointer))
                .s(Font::new().size(FONT_SIZE_14).color_signal(neutral_8()))
                .child(Text::new("✕"))
                .on_click(move || dismiss_relay.send(toast_id.clone())),
        )
}
