// Animation Token System

use zoon::*;

pub const DURATION_FAST: u32 = 150;
pub const DURATION_NORMAL: u32 = 300;
pub const DURATION_SLOW: u32 = 500;

pub use zoon::ease;

pub fn transition_fast() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_FAST)])
}

pub fn transition_normal() -> impl Style<'static> {
    Transitions::new([Transition::all().duration(DURATION_NORMAL)])
}

pub fn transition_colors() -> impl Style<'static> {
    Transitions::new([
        Transition::property("background-color").duration(DURATION_NORMAL),
        Transition::property("border-color").duration(DURATION_NORMAL),
        Transition::property("color").duration(DURATION_NORMAL),
    ])
}

pub fn transition_opacity() -> impl Style<'static> {
    Transitions::new([Transition::property("opacity").duration(DURATION_NORMAL)])
}

// Continuous rotation driver for spinners
pub fn create_spinner() -> Oscillator {
    let oscillator = Oscillator::new(Duration::seconds(1));
    oscillator.cycle_wrap();
    oscillator
}
