//! Stride frontend entry point.

use std::sync::OnceLock;
use zoon::*;

/// Keeps the main application task alive for the whole session.
static MAIN_TASK: OnceLock<TaskHandle> = OnceLock::new();

mod app;
mod config;
mod connection;
mod dataflow;
mod notifications;
mod router;
mod session;
mod views;

mod admin_recovery_page;
mod current_program_page;
mod login_page;
mod programs;
mod programs_page;
mod recovery_protocols;
mod uploads;

pub fn main() {
    let handle = Task::start_droppable(async {
        let app = app::StrideApp::new().await;

        // Instantiate the router so the current URL resolves into a page.
        router::router();

        let root_element = app.root();
        start_app("app", move || root_element);

        // Domain actors live inside `app`; parking here keeps them running
        // until the tab closes.
        std::future::pending::<()>().await;
    });
    let _ = MAIN_TASK.set(handle);
}
