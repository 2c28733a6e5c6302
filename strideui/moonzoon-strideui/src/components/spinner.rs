// Spinner Component
// Rotating arc driven by the Oscillator animation token.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    pub const ALL: [SpinnerSize; 3] = [SpinnerSize::Small, SpinnerSize::Medium, SpinnerSize::Large];

    pub fn diameter_px(self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 24,
            SpinnerSize::Large => 32,
        }
    }

    pub fn stroke_px(self) -> u32 {
        match self {
            SpinnerSize::Small => 2,
            SpinnerSize::Medium => 3,
            SpinnerSize::Large => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpinnerVariant {
    Primary,
    Secondary,
    Default,
    White,
    Success,
    Warning,
    Error,
}

impl SpinnerVariant {
    pub const ALL: [SpinnerVariant; 7] = [
        SpinnerVariant::Primary,
        SpinnerVariant::Secondary,
        SpinnerVariant::Default,
        SpinnerVariant::White,
        SpinnerVariant::Success,
        SpinnerVariant::Warning,
        SpinnerVariant::Error,
    ];

    /// The arc color.
    pub fn color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (SpinnerVariant::Primary, Theme::Light) => "oklch(52% 0.15 165)",
            (SpinnerVariant::Primary, Theme::Dark) => "oklch(65% 0.15 165)",
            (SpinnerVariant::Secondary, Theme::Light) => "oklch(55% 0.025 255)",
            (SpinnerVariant::Secondary, Theme::Dark) => "oklch(58% 0.025 255)",
            (SpinnerVariant::Default, Theme::Light) => "oklch(45% 0.025 255)",
            (SpinnerVariant::Default, Theme::Dark) => "oklch(68% 0.025 255)",
            (SpinnerVariant::White, _) => "oklch(100% 0 0)",
            (SpinnerVariant::Success, Theme::Light) => "oklch(50% 0.15 145)",
            (SpinnerVariant::Success, Theme::Dark) => "oklch(70% 0.15 145)",
            (SpinnerVariant::Warning, Theme::Light) => "oklch(55% 0.20 85)",
            (SpinnerVariant::Warning, Theme::Dark) => "oklch(70% 0.20 85)",
            (SpinnerVariant::Error, Theme::Light) => "oklch(50% 0.21 30)",
            (SpinnerVariant::Error, Theme::Dark) => "oklch(70% 0.21 30)",
        }
    }

    /// The faint remainder of the ring behind the arc.
    pub fn track_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (SpinnerVariant::White, _) => "oklch(100% 0 0 / 0.3)",
            (_, Theme::Light) => "oklch(90% 0.025 255)",
            (_, Theme::Dark) => "oklch(30% 0.045 255)",
        }
    }
}

pub struct SpinnerBuilder {
    size: SpinnerSize,
    variant: SpinnerVariant,
    label: String,
}

impl SpinnerBuilder {
    pub fn new() -> Self {
        Self {
            size: SpinnerSize::Medium,
            variant: SpinnerVariant::Default,
            label: "Loading".to_string(),
        }
    }

    pub fn size(mut self, size: SpinnerSize) -> Self {
        self.size = size;
        self
    }

    pub fn variant(mut self, variant: SpinnerVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Accessible label announced by screen readers.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn build(self) -> impl Element {
        let size = self.size;
        let variant = self.variant;
        let diameter = size.diameter_px();
        let stroke = size.stroke_px();

        let oscillator = create_spinner();
        let rotation = oscillator
            .signal()
            .map(|progress| format!("rotate({}deg)", (progress * 360.0) as i32));

        El::new()
            .s(Width::exact(diameter))
            .s(Height::exact(diameter))
            .s(RoundedCorners::all_max())
            .s(Borders::all_signal(theme().map(move |t| {
                Border::new().width(stroke).color(variant.track_color(t))
            })))
            .update_raw_el({
                let label = self.label;
                move |raw_el| {
                    raw_el
                        .attr("role", "status")
                        .attr("aria-label", &label)
                }
            })
            .update_raw_el(move |raw_el| {
                raw_el.style_signal(
                    "border-top-color",
                    theme().map(move |t| variant.color(t)),
                )
            })
            .update_raw_el(move |raw_el| raw_el.style_signal("transform", rotation))
            .after_remove(move |_| drop(oscillator))
    }
}

// Convenience function
pub fn spinner() -> SpinnerBuilder {
    SpinnerBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_size_has_positive_geometry() {
        for size in SpinnerSize::ALL {
            assert!(size.diameter_px() > 0);
            assert!(size.stroke_px() > 0);
            assert!(size.stroke_px() < size.diameter_px());
        }
    }

    #[test]
    fn every_variant_theme_pair_resolves_to_a_color() {
        for variant in SpinnerVariant::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                assert!(variant.color(theme).starts_with("oklch("));
                assert!(variant.track_color(theme).starts_with("oklch("));
            }
        }
    }
}
