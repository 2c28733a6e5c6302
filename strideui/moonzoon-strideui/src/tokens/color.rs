// Color Token System
// Reactive signals resolving against the active theme. Primary hue 165
// (Stride teal), neutrals at 255.

use super::theme::{theme, Theme};
use zoon::*;

// Primary Color Scale
pub fn primary_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(98% 0.01 165)",
        Theme::Dark => "oklch(20% 0.01 165)",
    })
}

pub fn primary_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.05 165)",
        Theme::Dark => "oklch(30% 0.05 165)",
    })
}

pub fn primary_5() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(75% 0.10 165)",
        Theme::Dark => "oklch(45% 0.10 165)",
    })
}

pub fn primary_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(65% 0.13 165)",
        Theme::Dark => "oklch(55% 0.13 165)",
    })
}

pub fn primary_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(52% 0.15 165)",
        Theme::Dark => "oklch(65% 0.15 165)",
    })
}

pub fn primary_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(42% 0.15 165)",
        Theme::Dark => "oklch(75% 0.15 165)",
    })
}

pub fn primary_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(32% 0.13 165)",
        Theme::Dark => "oklch(85% 0.13 165)",
    })
}

// Neutral Color Scale
pub fn neutral_1() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(99% 0.025 255)",
        Theme::Dark => "oklch(12% 0.025 255)",
    })
}

pub fn neutral_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(97% 0.025 255)",
        Theme::Dark => "oklch(15% 0.025 255)",
    })
}

pub fn neutral_3() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(92% 0.045 255)",
        Theme::Dark => "oklch(30% 0.045 255)",
    })
}

pub fn neutral_4() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(90% 0.025 255)",
        Theme::Dark => "oklch(22% 0.025 255)",
    })
}

pub fn neutral_6() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(75% 0.025 255)",
        Theme::Dark => "oklch(38% 0.025 255)",
    })
}

pub fn neutral_8() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.025 255)",
        Theme::Dark => "oklch(58% 0.025 255)",
    })
}

pub fn neutral_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(45% 0.025 255)",
        Theme::Dark => "oklch(68% 0.025 255)",
    })
}

pub fn neutral_11() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(25% 0.025 255)",
        Theme::Dark => "oklch(85% 0.025 255)",
    })
}

pub fn neutral_12() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(15% 0.025 255)",
        Theme::Dark => "oklch(95% 0.025 255)",
    })
}

// Success Color Scale
pub fn success_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(94% 0.05 145)",
        Theme::Dark => "oklch(20% 0.05 145)",
    })
}

pub fn success_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.15 145)",
        Theme::Dark => "oklch(70% 0.15 145)",
    })
}

pub fn success_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(30% 0.13 145)",
        Theme::Dark => "oklch(88% 0.13 145)",
    })
}

// Warning Color Scale
pub fn warning_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(94% 0.07 85)",
        Theme::Dark => "oklch(20% 0.07 85)",
    })
}

pub fn warning_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(55% 0.20 85)",
        Theme::Dark => "oklch(70% 0.20 85)",
    })
}

pub fn warning_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(30% 0.19 85)",
        Theme::Dark => "oklch(88% 0.19 85)",
    })
}

// Error Color Scale
pub fn error_2() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(94% 0.06 30)",
        Theme::Dark => "oklch(20% 0.06 30)",
    })
}

pub fn error_7() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(50% 0.21 30)",
        Theme::Dark => "oklch(70% 0.21 30)",
    })
}

pub fn error_9() -> impl Signal<Item = &'static str> {
    theme().map(|t| match t {
        Theme::Light => "oklch(30% 0.18 30)",
        Theme::Dark => "oklch(88% 0.18 30)",
    })
}

// Static colors that don't change with theme
pub fn transparent() -> &'static str {
    "transparent"
}

pub fn white() -> &'static str {
    "oklch(100% 0 0)"
}
