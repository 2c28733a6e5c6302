// Stepper Component
// Ordered step labels with an active index; each step renders as
// completed, active or upcoming.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepperSize {
    Small,
    Medium,
    Large,
}

impl StepperSize {
    pub const ALL: [StepperSize; 3] = [StepperSize::Small, StepperSize::Medium, StepperSize::Large];

    pub fn circle_px(self) -> u32 {
        match self {
            StepperSize::Small => 24,
            StepperSize::Medium => 28,
            StepperSize::Large => 32,
        }
    }

    pub fn label_font_size(self) -> u32 {
        match self {
            StepperSize::Small => FONT_SIZE_12,
            StepperSize::Medium => FONT_SIZE_14,
            StepperSize::Large => FONT_SIZE_16,
        }
    }

    pub fn connector_px(self) -> u32 {
        match self {
            StepperSize::Small => 24,
            StepperSize::Medium => 32,
            StepperSize::Large => 40,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepState {
    Completed,
    Active,
    Upcoming,
}

pub fn step_state(index: usize, active: usize) -> StepState {
    use std::cmp::Ordering;
    match index.cmp(&active) {
        Ordering::Less => StepState::Completed,
        Ordering::Equal => StepState::Active,
        Ordering::Greater => StepState::Upcoming,
    }
}

impl StepState {
    pub const ALL: [StepState; 3] = [StepState::Completed, StepState::Active, StepState::Upcoming];

    pub fn circle_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (StepState::Completed, Theme::Light) => "oklch(50% 0.15 145)",
            (StepState::Completed, Theme::Dark) => "oklch(70% 0.15 145)",
            (StepState::Active, Theme::Light) => "oklch(52% 0.15 165)",
            (StepState::Active, Theme::Dark) => "oklch(65% 0.15 165)",
            (StepState::Upcoming, Theme::Light) => "oklch(90% 0.025 255)",
            (StepState::Upcoming, Theme::Dark) => "oklch(30% 0.045 255)",
        }
    }

    pub fn number_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (StepState::Upcoming, Theme::Light) => "oklch(45% 0.025 255)",
            (StepState::Upcoming, Theme::Dark) => "oklch(68% 0.025 255)",
            (_, Theme::Light) => "oklch(99% 0.025 255)",
            (_, Theme::Dark) => "oklch(15% 0.025 255)",
        }
    }

    pub fn label_color(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (StepState::Active, Theme::Light) => "oklch(15% 0.025 255)",
            (StepState::Active, Theme::Dark) => "oklch(95% 0.025 255)",
            (_, Theme::Light) => "oklch(45% 0.025 255)",
            (_, Theme::Dark) => "oklch(68% 0.025 255)",
        }
    }
}

pub struct StepperBuilder {
    steps: Vec<String>,
    active: usize,
    size: StepperSize,
}

impl StepperBuilder {
    pub fn new() -> Self {
        Self {
            steps: Vec::new(),
            active: 0,
            size: StepperSize::Medium,
        }
    }

    pub fn step(mut self, label: impl Into<String>) -> Self {
        self.steps.push(label.into());
        self
    }

    pub fn steps(mut self, labels: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.steps.extend(labels.into_iter().map(Into::into));
        self
    }

    pub fn active(mut self, active: usize) -> Self {
        self.active = active;
        self
    }

    pub fn size(mut self, size: StepperSize) -> Self {
        self.size = size;
        self
    }

    pub fn build(self) -> impl Element {
        let size = self.size;
        let active = self.active;
        let last_index = self.steps.len().saturating_sub(1);

        Row::new()
            .s(Gap::new().x(SPACING_8))
            .s(Align::new().center_y())
            .items(self.steps.into_iter().enumerate().map(move |(index, label)| {
                let state = step_state(index, active);
                let circle_px = size.circle_px();

                let circle = El::new()
                    .s(Width::exact(circle_px))
                    .s(Height::exact(circle_px))
                    .s(RoundedCorners::all_max())
                    .s(Align::center())
                    .s(transition_colors())
                    .s(Background::new()
                        .color_signal(theme().map(move |t| state.circle_color(t))))
                    .child(
                        El::new()
                            .s(Font::new()
                                .size(size.label_font_size())
                                .weight(FontWeight::Number(FONT_WEIGHT_6))
                                .color_signal(theme().map(move |t| state.number_color(t))))
                            .child(Text::new(match state {
                                StepState::Completed => "✓".to_string(),
                                _ => (index + 1).to_string(),
                            })),
                    );

                let mut step_row = Row::new()
                    .s(Gap::new().x(SPACING_8))
                    .s(Align::new().center_y())
                    .item(circle)
                    .item(
                        El::new()
                            .s(Font::new()
                                .size(size.label_font_size())
                                .weight(FontWeight::Number(match state {
                                    StepState::Active => FONT_WEIGHT_6,
                                    _ => FONT_WEIGHT_4,
                                }))
                                .color_signal(theme().map(move |t| state.label_color(t))))
                            .child(Text::new(&label)),
                    );

                if index < last_index {
                    step_row = step_row.item(
                        El::new()
                            .s(Width::exact(size.connector_px()))
                            .s(Height::exact(2))
                            .s(Background::new().color_signal(theme().map(move |t| {
                                // Connector reflects the step it leads out of
                                match state {
                                    StepState::Completed => StepState::Completed.circle_color(t),
                                    _ => StepState::Upcoming.circle_color(t),
                                }
                            }))),
                    );
                }

                step_row
            }))
    }
}

// Convenience function
pub fn stepper() -> StepperBuilder {
    StepperBuilder::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_classify_around_the_active_index() {
        assert_eq!(step_state(0, 2), StepState::Completed);
        assert_eq!(step_state(1, 2), StepState::Completed);
        assert_eq!(step_state(2, 2), StepState::Active);
        assert_eq!(step_state(3, 2), StepState::Upcoming);
    }

    #[test]
    fn every_state_theme_pair_resolves_to_colors() {
        for state in StepState::ALL {
            for theme in [Theme::Light, Theme::Dark] {
                assert!(state.circle_color(theme).starts_with("oklch("));
                assert!(state.number_color(theme).starts_with("oklch("));
                assert!(state.label_color(theme).starts_with("oklch("));
            }
        }
    }

    #[test]
    fn every_size_has_positive_geometry() {
        for size in StepperSize::ALL {
            assert!(size.circle_px() > 0);
            assert!(size.connector_px() > 0);
        }
    }
}
