// Button Component

use crate::components::spinner::{spinner, SpinnerSize, SpinnerVariant};
use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
    Outline,
    Ghost,
    Destructive,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

impl ButtonSize {
    pub const ALL: [ButtonSize; 3] = [ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    /// (padding_x, padding_y, font_size)
    pub fn metrics(self) -> (u32, u32, u32) {
        match self {
            ButtonSize::Small => (SPACING_12, SPACING_4, FONT_SIZE_14),
            ButtonSize::Medium => (SPACING_16, SPACING_8, FONT_SIZE_16),
            ButtonSize::Large => (SPACING_24, SPACING_12, FONT_SIZE_18),
        }
    }
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Destructive,
    ];

    pub fn background_color(self, theme: Theme, hovered: bool) -> &'static str {
        match (self, theme, hovered) {
            (ButtonVariant::Primary, Theme::Light, false) => "oklch(52% 0.15 165)",
            (ButtonVariant::Primary, Theme::Light, true) => "oklch(42% 0.15 165)",
            (ButtonVariant::Primary, Theme::Dark, false) => "oklch(65% 0.15 165)",
            (ButtonVariant::Primary, Theme::Dark, true) => "oklch(75% 0.15 165)",
            (ButtonVariant::Secondary, Theme::Light, false) => "oklch(92% 0.045 255)",
            (ButtonVariant::Secondary, Theme::Light, true) => "oklch(90% 0.025 255)",
            (ButtonVariant::Secondary, Theme::Dark, false) => "oklch(30% 0.045 255)",
            (ButtonVariant::Secondary, Theme::Dark, true) => "oklch(38% 0.025 255)",
            (ButtonVariant::Outline, _, false) | (ButtonVariant::Ghost, _, false) => "transparent",
            (ButtonVariant::Outline, Theme::Light, true) | (ButtonVariant::Ghost, Theme::Light, true) => {
                "oklch(97% 0.025 255)"
            }
            (ButtonVariant::Outline, Theme::Dark, true) | (ButtonVariant::Ghost, Theme::Dark, true) => {
                "oklch(22% 0.025 255)"
            }
            (ButtonVariant::Destructive, Theme::Light, false) => "oklch(50% 0.21 30)",
            (ButtonVariant::Destructive, Theme::Light, true) => "oklch(40% 0.21 30)",
            (ButtonVariant::Destructive, Theme::Dark, false) => "oklch(70% 0.21 30)",
            (ButtonVariant::Destructive, Theme::Dark, true) => "oklch(80% 0.21 30)",
        }
    }

    pub fn text_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (ButtonVariant::Primary, Theme::Light) => "oklch(99% 0.01 165)",
            (ButtonVariant::Primary, Theme::Dark) => "oklch(15% 0.025 255)",
            (ButtonVariant::Destructive, Theme::Light) => "oklch(99% 0.025 255)",
            (ButtonVariant::Destructive, Theme::Dark) => "oklch(15% 0.025 255)",
            (_, Theme::Light) => "oklch(25% 0.025 255)",
            (_, Theme::Dark) => "oklch(85% 0.025 255)",
        }
    }

    fn border(self, theme: Theme) -> Border {
        if self == ButtonVariant::Outline {
            Border::new().width(BORDER_WIDTH_1).color(match theme {
                Theme::Light => "oklch(75% 0.025 255)",
                Theme::Dark => "oklch(45% 0.025 255)",
            })
        } else {
            Border::new().width(BORDER_WIDTH_0).color("transparent")
        }
    }

    fn spinner_variant(self) -> SpinnerVariant {
        match self {
            ButtonVariant::Primary | ButtonVariant::Destructive => SpinnerVariant::White,
            _ => SpinnerVariant::Default,
        }
    }
}

pub struct ButtonBuilder {
    label: String,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    disabled_signal: Option<Box<dyn Signal<Item = bool> + Unpin>>,
    loading_signal: Option<Box<dyn Signal<Item = bool> + Unpin>>,
    on_press: Option<Box<dyn Fn()>>,
}

impl ButtonBuilder {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Medium,
            disabled: false,
            disabled_signal: None,
            loading_signal: None,
            on_press: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self.disabled_signal = None;
        self
    }

    pub fn disabled_signal<S>(mut self, disabled_signal: S) -> Self
    where
        S: Signal<Item = bool> + Unpin + 'static,
    {
        self.disabled_signal = Some(Box::new(disabled_signal));
        self.disabled = false;
        self
    }

    pub fn loading_signal<S>(mut self, loading_signal: S) -> Self
    where
        S: Signal<Item = bool> + Unpin + 'static,
    {
        self.loading_signal = Some(Box::new(loading_signal));
        self
    }

    pub fn on_press<F>(mut self, handler: F) -> Self
    where
        F: Fn() + 'static,
    {
        self.on_press = Some(Box::new(handler));
        self
    }

    pub fn build(self) -> impl Element {
        let (padding_x, padding_y, font_size) = self.size.metrics();
        let variant = self.variant;

        let disabled = Mutable::new(self.disabled);
        if let Some(disabled_signal) = self.disabled_signal {
            let disabled = disabled.clone();
            Task::start(disabled_signal.for_each_sync(move |value| disabled.set_neq(value)));
        }

        let loading = Mutable::new(false);
        if let Some(loading_signal) = self.loading_signal {
            let loading = loading.clone();
            Task::start(loading_signal.for_each_sync(move |value| loading.set_neq(value)));
        }

        let hovered = Mutable::new(false);
        let on_press = self.on_press;

        El::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all(CORNER_RADIUS_6))
            .s(Align::center())
            .s(transition_colors())
            .s(Cursor::new(CursorIcon::Pointer))
            .s(Background::new().color_signal(
                map_ref! {
                    let theme = theme(),
                    let hovered = hovered.signal(),
                    let disabled = disabled.signal() =>
                    variant.background_color(*theme, *hovered && !*disabled)
                },
            ))
            .s(Borders::all_signal(theme().map(move |t| variant.border(t))))
            .update_raw_el({
                let disabled = disabled.clone();
                move |raw_el| {
                    raw_el
                        .attr("role", "button")
                        .attr_signal(
                            "aria-disabled",
                            disabled.signal().map(|d| if d { "true" } else { "false" }),
                        )
                        .style_signal(
                            "opacity",
                            disabled.signal().map(|d| {
                                if d {
                                    OPACITY_DISABLED.to_string()
                                } else {
                                    OPACITY_ENABLED.to_string()
                                }
                            }),
                        )
                }
            })
            .on_hovered_change({
                let hovered = hovered.clone();
                move |is_hovered| hovered.set_neq(is_hovered)
            })
            .child(
                Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().center_y())
                    .item_signal(loading.signal().map(move |is_loading| {
                        is_loading.then(|| {
                            spinner()
                                .size(SpinnerSize::Small)
                                .variant(variant.spinner_variant())
                                .build()
                        })
                    }))
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(font_size)
                                .weight(FontWeight::Number(FONT_WEIGHT_5))
                                .color_signal(theme().map(move |t| variant.text_color(t))))
                            .child(Text::new(&self.label)),
                    ),
            )
            .on_click({
                let disabled = disabled.clone();
                move || {
                    if disabled.get() {
                        return;
                    }
                    if let Some(handler) = &on_press {
                        handler();
                    }
                }
            })
    }
}

// Convenience function
pub fn button(label: impl Into<String>) -> ButtonBuilder {
    ButtonBuilder::new(label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_resolves_in_both_themes() {
        for variant in ButtonVariant::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                for hovered in [false, true] {
                    assert!(!variant.background_color(theme, hovered).is_empty());
                }
                assert!(variant.text_color(theme).starts_with("oklch("));
            }
        }
    }

    #[test]
    fn every_size_has_metrics() {
        for size in ButtonSize::ALL {
            let (x, y, font) = size.metrics();
            assert!(x > y);
            assert!(font >= FONT_SIZE_14);
        }
    }
}
