// Component Library for StrideUI

pub mod badge;
pub mod button;
pub mod checkbox;
pub mod data_table;
pub mod spinner;
pub mod stack;
pub mod stepper;
pub mod typography;

// Re-export components for easy access
pub use badge::*;
pub use button::*;
pub use checkbox::*;
pub use data_table::*;
pub use spinner::*;
pub use stack::*;
pub use stepper::*;
pub use typography::*;
