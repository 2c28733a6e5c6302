// Shadow Token System

pub const SHADOW_COLOR_NEUTRAL: &str = "oklch(70% 0.09 255 / 0.22)";
pub const SHADOW_COLOR_PRIMARY: &str = "oklch(52% 0.15 165 / 0.33)";
pub const SHADOW_COLOR_ERROR: &str = "oklch(60% 0.18 30 / 0.22)";

pub const SHADOW_COLOR_BLACK_LIGHT: &str = "rgba(0, 0, 0, 0.08)";
pub const SHADOW_COLOR_BLACK_MEDIUM: &str = "rgba(0, 0, 0, 0.15)";
pub const SHADOW_COLOR_BLACK_STRONG: &str = "rgba(0, 0, 0, 0.4)";
