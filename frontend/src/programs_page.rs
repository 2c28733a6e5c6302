//! Program browsing page, bucketed by readiness cycle.

use crate::programs::Programs;
use moonzoon_strideui::*;
use shared::{Cycle, Program};
use zoon::*;

pub fn cycle_badge_variant(cycle: Cycle) -> BadgeVariant {
    match cycle {
        Cycle::Red => BadgeVariant::Error,
        Cycle::Amber => BadgeVariant::Warning,
        Cycle::Green => BadgeVariant::Success,
    }
}

fn cycle_chip(cycle: Cycle, programs: &Programs) -> impl Element {
    let cycle_selected_relay = programs.cycle_selected_relay.clone();
    let selected_for_background = programs.selected_cycle.signal().map(move |current| current == cycle);
    let selected_for_text = programs.selected_cycle.signal().map(move |current| current == cycle);

    El::new()
        .s(Padding::new().x(SPACING_12).y(SPACING_6))
        .s(RoundedCorners::all_max())
        .s(Cursor::new(CursorIcon::Pointer))
        .s(transition_colors())
        .s(Background::new().color_signal(
            map_ref! {
                let theme = theme(),
                let selected = selected_for_background =>
                if *selected {
                    cycle_badge_variant(cycle).background_color(*theme)
                } else {
                    transparent()
                }
            },
        ))
        .s(Borders::all_signal(theme().map(move |t| {
            Border::new()
                .width(BORDER_WIDTH_1)
                .color(cycle_badge_variant(cycle).background_color(t))
        })))
        .s(Font::new().size(FONT_SIZE_14).weight(FontWeight::Number(FONT_WEIGHT_6)).color_signal(
            map_ref! {
                let theme = theme(),
                let selected = selected_for_text =>
                if *selected {
                    cycle_badge_variant(cycle).text_color(*theme)
                } else {
                    match *theme {
                        Theme::Light => "oklch(25% 0.025 255)",
                        Theme::Dark => "oklch(85% 0.025 255)",
                    }
                }
            },
        ))
        .child(Text::new(cycle.label()))
        .on_click(move || cycle_selected_relay.send(cycle))
}

fn columns() -> Vec<TableColumn<Program>> {
    vec![
        TableColumn::new("name", "Program", |program: &Program| {
            CellValue::Text(program.name.clone())
        })
        .sortable(),
        TableColumn::new("cycle", "Cycle", |program: &Program| {
            CellValue::Text(program.cycle.label().to_string())
        })
        .width(96)
        .render(|program| {
            badge(program.cycle.label())
                .variant(cycle_badge_variant(program.cycle))
                .size(BadgeSize::Small)
                .build()
                .unify()
        }),
        TableColumn::new("weeks", "Weeks", |program: &Program| {
            CellValue::Number(program.weeks as f64)
        })
        .sortable()
        .width(80),
        TableColumn::new("focus", "Focus", |program: &Program| {
            CellValue::Text(program.focus.clone())
        }),
    ]
}

pub fn page(programs: &Programs) -> impl Element {
    // Entry-triggered fetch of the currently selected cycle.
    programs.reload_requested_relay.send(());

    let mut table = data_table::<Program>()
        .rows_signal(programs.programs.signal())
        .loading_signal(programs.loading.signal())
        .empty_message("No programs in this cycle");
    for column in columns() {
        table = table.column(column);
    }

    vstack()
        .spacing(StackSpacing::Medium)
        .fill_width()
        .item(h2("Programs"))
        .item(
            hstack()
                .spacing(StackSpacing::Small)
                .align(StackAlign::Center)
                .item(small("Cycle:"))
                .items(Cycle::ALL.map(|cycle| cycle_chip(cycle, programs)))
                .build(),
        )
        .item(table.build())
        .build()
}
