// Border Token System

pub const BORDER_WIDTH_0: u32 = 0;
pub const BORDER_WIDTH_1: u32 = 1;
pub const BORDER_WIDTH_2: u32 = 2;

pub const BORDER_STYLE_SOLID: &str = "solid";
pub const BORDER_STYLE_DASHED: &str = "dashed";
