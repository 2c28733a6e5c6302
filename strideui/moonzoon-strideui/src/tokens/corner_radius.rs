// Corner Radius Token System

pub const CORNER_RADIUS_4: u32 = 4;
pub const CORNER_RADIUS_6: u32 = 6;
pub const CORNER_RADIUS_8: u32 = 8;
pub const CORNER_RADIUS_12: u32 = 12;
