//! Navigation guard.
//!
//! Pure routing decisions driven by the session store. The guard is a UX
//! convenience only; real access control lives on the API.

use crate::session::AuthSession;

/// All application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Root,
    Login,
    Register,
    Dashboard,
    Profile,
}

/// Where a visit to `route` should land given the current session.
/// Anonymous visitors of protected routes go to login; signed-in visitors
/// of the entry routes go straight to the dashboard.
pub fn resolve(route: Route, session: &AuthSession) -> Route {
    let signed_in = session.is_authenticated();
    match route {
        Route::Root => {
            if signed_in {
                Route::Dashboard
            } else {
                Route::Login
            }
        }
        Route::Login | Route::Register if signed_in => Route::Dashboard,
        Route::Dashboard | Route::Profile if !signed_in => Route::Login,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use matchbook_client::UserProfile;

    fn signed_in_session() -> AuthSession {
        let session = AuthSession::new();
        session.login(UserProfile {
            id: 1,
            name: "A".to_string(),
            age: 30,
            gender: "Female".to_string(),
            email: "a@x.com".to_string(),
            city: "X".to_string(),
            interests: vec![],
        });
        session
    }

    #[test]
    fn test_anonymous_is_sent_to_login() {
        let session = AuthSession::new();
        assert_eq!(resolve(Route::Root, &session), Route::Login);
        assert_eq!(resolve(Route::Dashboard, &session), Route::Login);
        assert_eq!(resolve(Route::Profile, &session), Route::Login);
    }

    #[test]
    fn test_anonymous_can_reach_auth_routes() {
        let session = AuthSession::new();
        assert_eq!(resolve(Route::Login, &session), Route::Login);
        assert_eq!(resolve(Route::Register, &session), Route::Register);
    }

    #[test]
    fn test_signed_in_is_sent_to_dashboard() {
        let session = signed_in_session();
        assert_eq!(resolve(Route::Root, &session), Route::Dashboard);
        assert_eq!(resolve(Route::Login, &session), Route::Dashboard);
        assert_eq!(resolve(Route::Register, &session), Route::Dashboard);
    }

    #[test]
    fn test_signed_in_keeps_protected_routes() {
        let session = signed_in_session();
        assert_eq!(resolve(Route::Dashboard, &session), Route::Dashboard);
        assert_eq!(resolve(Route::Profile, &session), Route::Profile);
    }

    #[test]
    fn test_guard_reacts_to_logout() {
        let session = signed_in_session();
        assert_eq!(resolve(Route::Dashboard, &session), Route::Dashboard);

        session.logout();
        assert_eq!(resolve(Route::Dashboard, &session), Route::Login);
    }
}
