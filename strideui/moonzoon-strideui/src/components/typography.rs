// Typography Components

use crate::tokens::*;
use zoon::*;

pub fn h1(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_36).weight(FontWeight::Bold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h2(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_30).weight(FontWeight::Bold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h3(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_24).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn h4(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_20).weight(FontWeight::SemiBold))
        .s(Font::new().color_signal(neutral_12()))
        .child(Text::new(text.into()))
}

pub fn paragraph(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_16))
        .s(Font::new().color_signal(neutral_11()))
        .child(Text::new(text.into()))
}

pub fn small(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(neutral_9()))
        .child(Text::new(text.into()))
}

pub fn muted(text: impl Into<String>) -> impl Element {
    El::new()
        .s(Font::new().size(FONT_SIZE_14))
        .s(Font::new().color_signal(neutral_8()))
        .child(Text::new(text.into()))
}
