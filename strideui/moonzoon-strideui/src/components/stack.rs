// Stack Components
// Direction + enumerated gap layout wrappers over Column/Row.

use crate::tokens::*;
use zoon::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StackDirection {
    Vertical,
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StackSpacing {
    None,
    Small,
    Medium,
    Large,
}

impl StackSpacing {
    pub const ALL: [StackSpacing; 4] = [
        StackSpacing::None,
        StackSpacing::Small,
        StackSpacing::Medium,
        StackSpacing::Large,
    ];

    pub fn gap_px(self) -> u32 {
        match self {
            StackSpacing::None => SPACING_0,
            StackSpacing::Small => SPACING_8,
            StackSpacing::Medium => SPACING_16,
            StackSpacing::Large => SPACING_24,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StackAlign {
    Start,
    Center,
    End,
}

pub struct StackBuilder {
    direction: StackDirection,
    spacing: StackSpacing,
    align: StackAlign,
    fill_width: bool,
    items: Vec<RawElOrText>,
}

impl StackBuilder {
    pub fn new(direction: StackDirection) -> Self {
        Self {
            direction,
            spacing: StackSpacing::Medium,
            align: StackAlign::Start,
            fill_width: false,
            items: Vec::new(),
        }
    }

    pub fn spacing(mut self, spacing: StackSpacing) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn align(mut self, align: StackAlign) -> Self {
        self.align = align;
        self
    }

    pub fn fill_width(mut self) -> Self {
        self.fill_width = true;
        self
    }

    pub fn item(mut self, item: impl Element) -> Self {
        self.items.push(item.unify());
        self
    }

    pub fn items(mut self, items: impl IntoIterator<Item = impl Element>) -> Self {
        self.items.extend(items.into_iter().map(Element::unify));
        self
    }

    pub fn build(self) -> impl Element {
        let gap = self.spacing.gap_px();
        match self.direction {
            StackDirection::Vertical => {
                let mut column = Column::new().s(Gap::new().y(gap));
                if self.fill_width {
                    column = column.s(Width::fill());
                }
                column = match self.align {
                    StackAlign::Start => column.s(Align::new().left()),
                    StackAlign::Center => column.s(Align::new().center_x()),
                    StackAlign::End => column.s(Align::new().right()),
                };
                column.items(self.items).unify()
            }
            StackDirection::Horizontal => {
                let mut row = Row::new().s(Gap::new().x(gap));
                if self.fill_width {
                    row = row.s(Width::fill());
                }
                row = match self.align {
                    StackAlign::Start => row.s(Align::new().top()),
                    StackAlign::Center => row.s(Align::new().center_y()),
                    StackAlign::End => row.s(Align::new().bottom()),
                };
                row.items(self.items).unify()
            }
        }
    }
}

// Convenience functions
pub fn vstack() -> StackBuilder {
    StackBuilder::new(StackDirection::Vertical)
}

pub fn hstack() -> StackBuilder {
    StackBuilder::new(StackDirection::Horizontal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_spacing_resolves_to_a_gap() {
        let gaps: Vec<u32> = StackSpacing::ALL.iter().map(|s| s.gap_px()).collect();
        assert_eq!(gaps, vec![0, 8, 16, 24]);
    }
}
