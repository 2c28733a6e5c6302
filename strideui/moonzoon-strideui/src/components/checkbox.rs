// Checkbox Component
// Controlled component: the caller owns the `checked` boolean, the checkbox
// reports toggles through `on_change` and holds no state of its own besides
// a generated accessibility id.

use crate::tokens::*;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use zoon::*;

static NEXT_CHECKBOX_ID: AtomicUsize = AtomicUsize::new(0);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckboxSize {
    Small,
    Medium,
    Large,
}

impl CheckboxSize {
    pub const ALL: [CheckboxSize; 3] = [CheckboxSize::Small, CheckboxSize::Medium, CheckboxSize::Large];

    pub fn box_px(self) -> u32 {
        match self {
            CheckboxSize::Small => 16,
            CheckboxSize::Medium => 20,
            CheckboxSize::Large => 24,
        }
    }

    pub fn mark_font_size(self) -> u32 {
        match self {
            CheckboxSize::Small => FONT_SIZE_12,
            CheckboxSize::Medium => FONT_SIZE_14,
            CheckboxSize::Large => FONT_SIZE_16,
        }
    }

    pub fn label_font_size(self) -> u32 {
        match self {
            CheckboxSize::Small => FONT_SIZE_14,
            CheckboxSize::Medium => FONT_SIZE_16,
            CheckboxSize::Large => FONT_SIZE_16,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckboxVariant {
    Primary,
    Secondary,
}

impl CheckboxVariant {
    pub const ALL: [CheckboxVariant; 2] = [CheckboxVariant::Primary, CheckboxVariant::Secondary];

    /// Box fill. `marked` covers both checked and indeterminate rendering.
    pub fn fill_color(self, theme: Theme, marked: bool, disabled: bool) -> &'static str {
        if disabled {
            return match theme {
                Theme::Light => "oklch(90% 0.025 255)",
                Theme::Dark => "oklch(22% 0.025 255)",
            };
        }
        if !marked {
            return "transparent";
        }
        match (self, theme) {
            (CheckboxVariant::Primary, Theme::Light) => "oklch(52% 0.15 165)",
            (CheckboxVariant::Primary, Theme::Dark) => "oklch(65% 0.15 165)",
            (CheckboxVariant::Secondary, Theme::Light) => "oklch(55% 0.025 255)",
            (CheckboxVariant::Secondary, Theme::Dark) => "oklch(58% 0.025 255)",
        }
    }

    pub fn border_color(self, theme: Theme, marked: bool, disabled: bool) -> &'static str {
        if disabled {
            return match theme {
                Theme::Light => "oklch(80% 0.025 255)",
                Theme::Dark => "oklch(30% 0.025 255)",
            };
        }
        if marked {
            return self.fill_color(theme, true, false);
        }
        match theme {
            Theme::Light => "oklch(65% 0.025 255)",
            Theme::Dark => "oklch(45% 0.025 255)",
        }
    }

    pub fn mark_color(self, theme: Theme, disabled: bool) -> &'static str {
        if disabled {
            return match theme {
                Theme::Light => "oklch(65% 0.025 255)",
                Theme::Dark => "oklch(45% 0.025 255)",
            };
        }
        match (self, theme) {
            (CheckboxVariant::Primary, _) => "oklch(99% 0.01 165)",
            (CheckboxVariant::Secondary, Theme::Light) => "oklch(99% 0.025 255)",
            (CheckboxVariant::Secondary, Theme::Dark) => "oklch(15% 0.025 255)",
        }
    }
}

/// What the box renders. `indeterminate` overrides the checked indicator
/// regardless of the `checked` value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CheckboxIndicator {
    Check,
    Dash,
    Empty,
}

pub fn checkbox_indicator(checked: bool, indeterminate: bool) -> CheckboxIndicator {
    if indeterminate {
        CheckboxIndicator::Dash
    } else if checked {
        CheckboxIndicator::Check
    } else {
        CheckboxIndicator::Empty
    }
}

/// The value to report after a click, or `None` when the click is a no-op.
pub fn checkbox_toggle_outcome(checked: bool, disabled: bool) -> Option<bool> {
    if disabled { None } else { Some(!checked) }
}

pub struct CheckboxBuilder {
    size: CheckboxSize,
    variant: CheckboxVariant,
    checked: bool,
    indeterminate: bool,
    disabled: bool,
    label: Option<String>,
    on_change: Option<Rc<dyn Fn(bool)>>,
}

impl CheckboxBuilder {
    pub fn new() -> Self {
        Self {
            size: CheckboxSize::Medium,
            variant: CheckboxVariant::Primary,
            checked: false,
            indeterminate: false,
            disabled: false,
            label: None,
            on_change: None,
        }
    }

    pub fn size(mut self, size: CheckboxSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: CheckboxVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn indeterminate(mut self, indeterminate: bool) -> Self {
        self.indeterminate = indeterminate;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn on_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(bool) + 'static,
    {
        self.on_change = Some(Rc::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let accessibility_id =
            format!("checkbox-{}", NEXT_CHECKBOX_ID.fetch_add(1, Ordering::Relaxed));

        let size = self.size;
        let variant = self.variant;
        let checked = self.checked;
        let indeterminate = self.indeterminate;
        let disabled = self.disabled;
        let on_change = self.on_change.clone();

        let indicator = checkbox_indicator(checked, indeterminate);
        let marked = indicator != CheckboxIndicator::Empty;
        let box_px = size.box_px();

        let aria_checked = if indeterminate {
            "mixed"
        } else if checked {
            "true"
        } else {
            "false"
        };

        let toggle = {
            let on_change = on_change.clone();
            move || {
                if let Some(next) = checkbox_toggle_outcome(checked, disabled) {
                    if let Some(handler) = &on_change {
                        handler(next);
                    }
                }
            }
        };

        let check_box = El::new()
            .s(Width::exact(box_px))
            .s(Height::exact(box_px))
            .s(RoundedCorners::all(CORNER_RADIUS_4))
            .s(Align::center())
            .s(Cursor::new(if disabled {
                CursorIcon::NotAllowed
            } else {
                CursorIcon::Pointer
            }))
            .s(transition_colors())
            .s(Background::new().color_signal(
                theme().map(move |t| variant.fill_color(t, marked, disabled)),
            ))
            .s(Borders::all_signal(theme().map(move |t| {
                Border::new()
                    .width(BORDER_WIDTH_2)
                    .color(variant.border_color(t, marked, disabled))
            })))
            .update_raw_el({
                let accessibility_id = accessibility_id.clone();
                move |raw_el| {
                    raw_el
                        .attr("id", &accessibility_id)
                        .attr("role", "checkbox")
                        .attr("aria-checked", aria_checked)
                        .attr("tabindex", if disabled { "-1" } else { "0" })
                        .style("outline", "none")
                }
            })
            .update_raw_el({
                let toggle = toggle.clone();
                move |raw_el| {
                    raw_el.event_handler(move |event: events::KeyDown| {
                        if matches!(event.key().as_str(), " " | "Enter") {
                            event.prevent_default();
                            toggle();
                        }
                    })
                }
            })
            .child_signal(theme().map(move |t| match indicator {
                CheckboxIndicator::Check => Some(
                    El::new()
                        .s(Font::new()
                            .size(size.mark_font_size())
                            .weight(FontWeight::Number(FONT_WEIGHT_7))
                            .color(variant.mark_color(t, disabled)))
                        .child(Text::new("✓"))
                        .unify(),
                ),
                CheckboxIndicator::Dash => Some(
                    El::new()
                        .s(Width::exact(box_px / 2))
                        .s(Height::exact(2))
                        .s(RoundedCorners::all_max())
                        .s(Background::new().color(variant.mark_color(t, disabled)))
                        .unify(),
                ),
                CheckboxIndicator::Empty => None,
            }))
            .on_click({
                let toggle = toggle.clone();
                move || toggle()
            });

        if let Some(label_text) = self.label {
            Row::new()
                .s(Gap::new().x(SPACING_8))
                .s(Align::new().center_y())
                .item(check_box)
                .item(
                    El::new()
                        .s(Font::new()
                            .size(size.label_font_size())
                            .weight(FontWeight::Number(FONT_WEIGHT_4))
                            .color_signal(theme().map(move |t| {
                                if disabled {
                                    match t {
                                        Theme::Light => "oklch(65% 0.025 255)",
                                        Theme::Dark => "oklch(45% 0.025 255)",
                                    }
                                } else {
                                    match t {
                                        Theme::Light => "oklch(15% 0.025 255)",
                                        Theme::Dark => "oklch(95% 0.025 255)",
                                    }
                                }
                            })))
                        .s(Cursor::new(if disabled {
                            CursorIcon::NotAllowed
                        } else {
                            CursorIcon::Pointer
                        }))
                        .update_raw_el({
                            let accessibility_id = accessibility_id.clone();
                            move |raw_el| raw_el.attr("for", &accessibility_id)
                        })
                        .child(Text::new(&label_text))
                        .on_click(move || toggle()),
                )
                .unify()
        } else {
            check_box.unify()
        }
    }
}

// Convenience function
pub fn checkbox() -> CheckboxBuilder {
    CheckboxBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indeterminate_overrides_checked_indicator() {
        for checked in [false, true] {
            assert_eq!(checkbox_indicator(checked, true), CheckboxIndicator::Dash);
        }
        assert_eq!(checkbox_indicator(true, false), CheckboxIndicator::Check);
        assert_eq!(checkbox_indicator(false, false), CheckboxIndicator::Empty);
    }

    #[test]
    fn disabled_click_reports_nothing() {
        assert_eq!(checkbox_toggle_outcome(false, true), None);
        assert_eq!(checkbox_toggle_outcome(true, true), None);
        assert_eq!(checkbox_toggle_outcome(false, false), Some(true));
        assert_eq!(checkbox_toggle_outcome(true, false), Some(false));
    }

    #[test]
    fn every_size_resolves_to_positive_dimensions() {
        for size in CheckboxSize::ALL {
            assert!(size.box_px() > 0);
            assert!(size.mark_font_size() > 0);
            assert!(size.label_font_size() > 0);
        }
    }

    #[test]
    fn every_variant_state_resolves_to_a_color() {
        for variant in CheckboxVariant::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                for marked in [false, true] {
                    for disabled in [false, true] {
                        assert!(!variant.fill_color(theme, marked, disabled).is_empty());
                        assert!(!variant.border_color(theme, marked, disabled).is_empty());
                    }
                }
                for disabled in [false, true] {
                    assert!(!variant.mark_color(theme, disabled).is_empty());
                }
            }
        }
    }
}
