// Badge Component
// Pill-shaped status indicator.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeVariant {
    Default,
    Primary,
    Success,
    Warning,
    Error,
    Outline,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BadgeSize {
    Small,
    Medium,
    Large,
}

impl BadgeSize {
    pub const ALL: [BadgeSize; 3] = [BadgeSize::Small, BadgeSize::Medium, BadgeSize::Large];

    /// (padding_x, padding_y, font_size)
    pub fn metrics(self) -> (u32, u32, u32) {
        match self {
            BadgeSize::Small => (SPACING_8, SPACING_2, FONT_SIZE_12),
            BadgeSize::Medium => (SPACING_12, SPACING_4, FONT_SIZE_14),
            BadgeSize::Large => (SPACING_16, SPACING_6, FONT_SIZE_16),
        }
    }
}

impl BadgeVariant {
    pub const ALL: [BadgeVariant; 6] = [
        BadgeVariant::Default,
        BadgeVariant::Primary,
        BadgeVariant::Success,
        BadgeVariant::Warning,
        BadgeVariant::Error,
        BadgeVariant::Outline,
    ];

    pub fn background_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (BadgeVariant::Default, Theme::Light) => "oklch(70% 0.07 255)",
            (BadgeVariant::Default, Theme::Dark) => "oklch(85% 0.025 255)",
            (BadgeVariant::Primary, Theme::Light) => "oklch(52% 0.15 165)",
            (BadgeVariant::Primary, Theme::Dark) => "oklch(65% 0.15 165)",
            (BadgeVariant::Success, Theme::Light) => "oklch(50% 0.15 145)",
            (BadgeVariant::Success, Theme::Dark) => "oklch(70% 0.15 145)",
            (BadgeVariant::Warning, Theme::Light) => "oklch(62% 0.19 85)",
            (BadgeVariant::Warning, Theme::Dark) => "oklch(65% 0.19 85)",
            (BadgeVariant::Error, Theme::Light) => "oklch(55% 0.18 30)",
            (BadgeVariant::Error, Theme::Dark) => "oklch(75% 0.18 30)",
            (BadgeVariant::Outline, _) => "transparent",
        }
    }

    pub fn text_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (BadgeVariant::Outline, Theme::Light) => "oklch(25% 0.025 255)",
            (BadgeVariant::Outline, Theme::Dark) => "oklch(85% 0.025 255)",
            (_, Theme::Light) => "oklch(99% 0.025 255)",
            (_, Theme::Dark) => "oklch(25% 0.025 255)",
        }
    }

    fn border(self, theme: Theme) -> Border {
        if self == BadgeVariant::Outline {
            Border::new().width(BORDER_WIDTH_1).color(match theme {
                Theme::Light => "oklch(70% 0.025 255)",
                Theme::Dark => "oklch(45% 0.025 255)",
            })
        } else {
            Border::new().width(BORDER_WIDTH_0).color("transparent")
        }
    }
}

pub struct BadgeBuilder {
    text: String,
    variant: BadgeVariant,
    size: BadgeSize,
}

impl BadgeBuilder {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::Default,
            size: BadgeSize::Medium,
        }
    }

    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: BadgeSize) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> impl Element {
        let (padding_x, padding_y, font_size) = self.size.metrics();
        let variant = self.variant;

        El::new()
            .s(Padding::new().x(padding_x).y(padding_y))
            .s(RoundedCorners::all_max())
            .s(Align::center())
            .s(Font::new()
                .size(font_size)
                .weight(FontWeight::Number(FONT_WEIGHT_6))
                .color_signal(theme().map(move |t| variant.text_color(t))))
            .s(transition_colors())
            .s(Background::new().color_signal(theme().map(move |t| variant.background_color(t))))
            .s(Borders::all_signal(theme().map(move |t| variant.border(t))))
            .child(Text::new(&self.text))
    }
}

// Convenience function
pub fn badge(text: impl Into<String>) -> BadgeBuilder {
    BadgeBuilder::new(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_theme_pair_resolves_to_colors() {
        for variant in BadgeVariant::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                assert!(!variant.background_color(theme).is_empty());
                assert!(variant.text_color(theme).starts_with("oklch("));
            }
        }
    }

    #[test]
    fn every_size_has_metrics() {
        for size in BadgeSize::ALL {
            let (_, _, font_size) = size.metrics();
            assert!(font_size >= FONT_SIZE_12);
        }
    }
}
