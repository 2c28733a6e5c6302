// StrideUI Component Library
// Builder-pattern MoonZoon components for the Stride coaching app

pub mod components;
pub mod tokens;

pub use components::*;
pub use tokens::*;
