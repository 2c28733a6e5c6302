//! Static path → page mapping with role-based guards.
//!
//! Unauthenticated visitors are redirected to `/login` from any guarded
//! route; a wrong-role visit redirects to that role's home page instead of
//! rendering a forbidden view.

use crate::session;
use shared::UserRole;
use zoon::*;

#[route]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    #[route("login")]
    Login,
    #[route("program")]
    CurrentProgram,
    #[route("programs")]
    Programs,
    #[route("admin", "recovery")]
    AdminRecovery,
    #[route()]
    Root,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageId {
    Login,
    CurrentProgram,
    Programs,
    AdminRecovery,
    NotFound,
}

static PAGE_ID: Lazy<Mutable<PageId>> = Lazy::new(|| Mutable::new(PageId::Login));

pub fn page_id_signal() -> impl Signal<Item = PageId> {
    PAGE_ID.signal()
}

/// Landing page per role.
pub fn home_route(role: UserRole) -> Route {
    match role {
        UserRole::Athlete => Route::CurrentProgram,
        UserRole::Coach | UserRole::CoachHead => Route::Programs,
        UserRole::Admin => Route::AdminRecovery,
    }
}

pub fn allowed_roles(page: PageId) -> &'static [UserRole] {
    match page {
        PageId::Login | PageId::NotFound => &[
            UserRole::Athlete,
            UserRole::Coach,
            UserRole::CoachHead,
            UserRole::Admin,
        ],
        PageId::CurrentProgram => &[UserRole::Athlete],
        PageId::Programs => &[UserRole::Athlete, UserRole::Coach, UserRole::CoachHead],
        PageId::AdminRecovery => &[UserRole::Admin, UserRole::CoachHead],
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    Show(PageId),
    RedirectToLogin,
    RedirectToHome(UserRole),
}

/// Pure guard resolution; the router handler only executes the decision.
pub fn resolve_route(route: Option<Route>, role: Option<UserRole>) -> RouteDecision {
    match (route, role) {
        (Some(Route::Login), None) => RouteDecision::Show(PageId::Login),
        (Some(Route::Login), Some(role)) => RouteDecision::RedirectToHome(role),
        (Some(Route::Root), None) | (None, None) => RouteDecision::RedirectToLogin,
        (Some(Route::Root), Some(role)) => RouteDecision::RedirectToHome(role),
        (None, Some(_)) => RouteDecision::Show(PageId::NotFound),
        (Some(route), role) => {
            let page = match route {
                Route::CurrentProgram => PageId::CurrentProgram,
                Route::Programs => PageId::Programs,
                Route::AdminRecovery => PageId::AdminRecovery,
                Route::Login | Route::Root => unreachable!("handled above"),
            };
            match role {
                None => RouteDecision::RedirectToLogin,
                Some(role) if allowed_roles(page).contains(&role) => RouteDecision::Show(page),
                Some(role) => RouteDecision::RedirectToHome(role),
            }
        }
    }
}

pub static ROUTER: Lazy<Router<Route>> = Lazy::new(|| {
    Router::new(|route: Option<Route>| async move {
        match resolve_route(route, session::current_role()) {
            RouteDecision::Show(page) => PAGE_ID.set_neq(page),
            RouteDecision::RedirectToLogin => router().go(Route::Login),
            RouteDecision::RedirectToHome(role) => router().go(home_route(role)),
        }
    })
});

pub fn router() -> &'static Router<Route> {
    &ROUTER
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_root_redirects_to_login() {
        assert_eq!(resolve_route(Some(Route::Root), None), RouteDecision::RedirectToLogin);
        assert_eq!(
            resolve_route(Some(Route::AdminRecovery), None),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn roles_land_on_their_home() {
        assert_eq!(
            resolve_route(Some(Route::Root), Some(UserRole::Athlete)),
            RouteDecision::RedirectToHome(UserRole::Athlete)
        );
        assert_eq!(home_route(UserRole::Athlete), Route::CurrentProgram);
        assert_eq!(home_route(UserRole::Coach), Route::Programs);
        assert_eq!(home_route(UserRole::Admin), Route::AdminRecovery);
    }

    #[test]
    fn wrong_role_is_redirected_home_not_shown() {
        assert_eq!(
            resolve_route(Some(Route::AdminRecovery), Some(UserRole::Athlete)),
            RouteDecision::RedirectToHome(UserRole::Athlete)
        );
        assert_eq!(
            resolve_route(Some(Route::CurrentProgram), Some(UserRole::Coach)),
            RouteDecision::RedirectToHome(UserRole::Coach)
        );
    }

    #[test]
    fn allowed_roles_reach_their_pages() {
        assert_eq!(
            resolve_route(Some(Route::Programs), Some(UserRole::Athlete)),
            RouteDecision::Show(PageId::Programs)
        );
        assert_eq!(
            resolve_route(Some(Route::AdminRecovery), Some(UserRole::CoachHead)),
            RouteDecision::Show(PageId::AdminRecovery)
        );
    }

    #[test]
    fn logged_in_login_visit_goes_home() {
        assert_eq!(
            resolve_route(Some(Route::Login), Some(UserRole::Admin)),
            RouteDecision::RedirectToHome(UserRole::Admin)
        );
    }
}
