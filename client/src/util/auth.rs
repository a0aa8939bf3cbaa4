//! Route admission for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`decide`] is a pure function of the published auth state, the role a
//! route requires, and the location being requested. `ProtectedRoute`
//! performs the resulting navigation; login pages use the return-path
//! helpers to send the user back where they started.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::Role;
use crate::state::auth::AuthState;
use crate::util::url::encode_component;

pub const HOME_PATH: &str = "/";
pub const ADMIN_LOGIN_PATH: &str = "/admin";
pub const MEMBER_LOGIN_PATH: &str = "/teamlogin";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";
pub const MEMBER_DASHBOARD_PATH: &str = "/member/dashboard";

/// Query parameter carrying the originally requested location.
pub const RETURN_PARAM: &str = "from";

/// What a protected route demands of the visitor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequiredRole {
    /// Any signed-in user.
    Any,
    Admin,
    Member,
}

impl RequiredRole {
    #[must_use]
    pub fn admits(self, role: Role) -> bool {
        match self {
            Self::Any => true,
            Self::Admin => role == Role::Admin,
            Self::Member => role == Role::Member,
        }
    }

    /// Where an anonymous visitor is sent to sign in.
    #[must_use]
    pub fn login_path(self) -> &'static str {
        match self {
            Self::Admin => ADMIN_LOGIN_PATH,
            Self::Any | Self::Member => MEMBER_LOGIN_PATH,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub path: &'static str,
    /// Location to return to after signing in.
    pub from: Option<String>,
}

impl Redirect {
    /// Navigation target including the encoded return location.
    #[must_use]
    pub fn href(&self) -> String {
        match &self.from {
            Some(from) => format!("{}?{RETURN_PARAM}={}", self.path, encode_component(from)),
            None => self.path.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session hydration has not finished; admit nothing yet.
    Loading,
    Admit,
    Redirect(Redirect),
}

/// Decide whether `location` may render for the current session.
///
/// Anonymous visitors go to the login page for the required role. A
/// signed-in user of the wrong role goes home, not to a login page.
#[must_use]
pub fn decide(auth: &AuthState, required: RequiredRole, location: &str) -> GuardDecision {
    if auth.loading {
        return GuardDecision::Loading;
    }
    let Some(user) = &auth.user else {
        return GuardDecision::Redirect(Redirect {
            path: required.login_path(),
            from: Some(location.to_owned()),
        });
    };
    if !required.admits(user.role) {
        return GuardDecision::Redirect(Redirect { path: HOME_PATH, from: None });
    }
    GuardDecision::Admit
}

/// Landing page after a successful login.
#[must_use]
pub fn dashboard_path(role: Role) -> &'static str {
    match role {
        Role::Admin => ADMIN_DASHBOARD_PATH,
        Role::Member => MEMBER_DASHBOARD_PATH,
    }
}

/// Accept only same-origin absolute paths as return locations.
#[must_use]
pub fn sanitize_return_path(from: Option<&str>) -> Option<&str> {
    let from = from?.trim();
    let same_origin = from.starts_with('/') && !from.starts_with("//") && !from.starts_with("/\\");
    same_origin.then_some(from)
}

/// Where to go once `role` has signed in, honoring a safe `from`.
#[must_use]
pub fn post_login_destination(role: Role, from: Option<&str>) -> String {
    sanitize_return_path(from).map_or_else(|| dashboard_path(role).to_owned(), str::to_owned)
}
