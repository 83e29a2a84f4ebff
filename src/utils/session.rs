use base64::{engine::general_purpose, Engine};
use rand::RngCore;
use sha2::{Digest, Sha512};

pub const SESSION_COOKIE: &str = "session";

pub const LOGIN_ROUTE: &str = "/login";
pub const ADMIN_ROUTE: &str = "/admin";

pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Generate a fresh random session token, URL-safe encoded.
pub fn new_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    general_purpose::URL_SAFE_NO_PAD.encode(bytes)
}

/// Resolution state of the current identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthStatus {
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// The two routes that react to the auth status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedRoute {
    Login,
    Admin,
}

/// Where to redirect, if anywhere, for a guarded route and the current
/// auth status. The admin page bounces signed-out visitors to the
/// login page; the login page bounces signed-in visitors to the admin
/// page; an unresolved status never redirects.
pub fn guard_redirect(route: GuardedRoute, status: AuthStatus) -> Option<&'static str> {
    match (route, status) {
        (GuardedRoute::Admin, AuthStatus::Unauthenticated) => Some(LOGIN_ROUTE),
        (GuardedRoute::Login, AuthStatus::Authenticated) => Some(ADMIN_ROUTE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password_is_deterministic() {
        assert_eq!(hash_password("secret"), hash_password("secret"));
        assert_ne!(hash_password("secret"), hash_password("other"));
        // Sha512 hex digest
        assert_eq!(hash_password("secret").len(), 128);
    }

    #[test]
    fn test_session_tokens_are_unique() {
        assert_ne!(new_session_token(), new_session_token());
    }

    #[test]
    fn test_admin_redirects_only_when_unauthenticated() {
        assert_eq!(
            guard_redirect(GuardedRoute::Admin, AuthStatus::Unauthenticated),
            Some(LOGIN_ROUTE)
        );
        assert_eq!(
            guard_redirect(GuardedRoute::Admin, AuthStatus::Authenticated),
            None
        );
        assert_eq!(guard_redirect(GuardedRoute::Admin, AuthStatus::Unknown), None);
    }

    #[test]
    fn test_login_redirects_only_when_authenticated() {
        assert_eq!(
            guard_redirect(GuardedRoute::Login, AuthStatus::Authenticated),
            Some(ADMIN_ROUTE)
        );
        assert_eq!(
            guard_redirect(GuardedRoute::Login, AuthStatus::Unauthenticated),
            None
        );
        assert_eq!(guard_redirect(GuardedRoute::Login, AuthStatus::Unknown), None);
    }
}
