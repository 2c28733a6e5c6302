//! Login page.
//!
//! No real authentication — picking a role establishes the client-side
//! session that drives the route guards.

use crate::router::{home_route, router};
use crate::session;
use moonzoon_strideui::*;
use shared::{User, UserRole};
use zoon::*;

fn demo_user(role: UserRole) -> User {
    match role {
        UserRole::Athlete => User { id: 1, name: "Mia Kovac".to_string(), role },
        UserRole::Coach => User { id: 2, name: "Jonas Berg".to_string(), role },
        UserRole::CoachHead => User { id: 3, name: "Priya Nair".to_string(), role },
        UserRole::Admin => User { id: 4, name: "Alex Chen".to_string(), role },
    }
}

fn role_button(role: UserRole) -> impl Element {
    button(format!("Continue as {}", role.label()))
        .variant(if role == UserRole::Athlete {
            ButtonVariant::Primary
        } else {
            ButtonVariant::Outline
        })
        .size(ButtonSize::Medium)
        .on_press(move || {
            let user = demo_user(role);
            let home = home_route(user.role);
            session::log_in(user);
            router().go(home);
        })
        .build()
}

pub fn page() -> impl Element {
    El::new().s(Width::fill()).s(Height::fill()).s(Align::center()).child(
        vstack()
            .spacing(StackSpacing::Medium)
            .align(StackAlign::Center)
            .item(h2("Sign in to Stride"))
            .item(muted("Pick a role to continue"))
            .item(
                vstack()
                    .spacing(StackSpacing::Small)
                    .align(StackAlign::Center)
                    .items([
                        role_button(UserRole::Athlete),
                        role_button(UserRole::Coach),
                        role_button(UserRole::CoachHead),
                        role_button(UserRole::Admin),
                    ])
                    .build(),
            )
            .build(),
    )
}
