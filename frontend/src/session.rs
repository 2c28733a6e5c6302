//! Client-side session state.
//!
//! Authentication itself is out of scope — the session is established at
//! the login screen and only drives role-based route guards and header
//! rendering.

use shared::{User, UserRole};
use zoon::*;

static SESSION: Lazy<Mutable<Option<User>>> = Lazy::new(|| Mutable::new(None));

pub fn session() -> impl Signal<Item = Option<User>> {
    SESSION.signal_cloned()
}

pub fn current_user() -> Option<User> {
    SESSION.get_cloned()
}

pub fn current_role() -> Option<UserRole> {
    SESSION.get_cloned().map(|user| user.role)
}

pub fn log_in(user: User) {
    SESSION.set(Some(user));
}

pub fn log_out() {
    SESSION.set(None);
}
