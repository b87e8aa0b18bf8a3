//! Authentication gate and auth screen mode.
//!
//! The application is in one of three top-level states, derived purely from
//! the pushed [`Session`]:
//! - **Loading**: the auth provider has not resolved the user yet
//! - **Unauthenticated**: no user; the auth screen is shown
//! - **Authenticated**: the main shell is shown
//!
//! The auth screen itself toggles between login and register forms.

use crate::domain::{Profile, Session};

/// Top-level application state derived from a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate<'a> {
    /// Placeholder skeleton while the provider is busy.
    Loading,
    /// Login/register screen.
    Unauthenticated,
    /// Main shell for the given user.
    Authenticated(&'a Profile),
}

impl<'a> Gate<'a> {
    /// Resolves the gate for a session.
    ///
    /// `is_loading` wins over everything else, so a stale user is never shown
    /// while the provider is refreshing.
    ///
    /// # Examples
    ///
    /// ```
    /// use socialshell::app::Gate;
    /// use socialshell::domain::{Profile, Session};
    ///
    /// let mut session = Session::signed_in(Profile::new("u1", "Ada"));
    /// assert!(matches!(Gate::from_session(&session), Gate::Authenticated(_)));
    ///
    /// session.is_loading = true;
    /// assert_eq!(Gate::from_session(&session), Gate::Loading);
    /// ```
    #[must_use]
    pub fn from_session(session: &'a Session) -> Self {
        if session.is_loading {
            return Self::Loading;
        }
        session
            .current_user
            .as_ref()
            .map_or(Self::Unauthenticated, Self::Authenticated)
    }
}

/// Which form the auth screen shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Local state of the auth screen.
///
/// The login form offers "switch to register" and the register form offers
/// "switch to login"; these are the only transitions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthScreen {
    mode: AuthMode,
}

impl AuthScreen {
    #[must_use]
    pub const fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn switch_to_register(&mut self) {
        self.mode = AuthMode::Register;
    }

    pub fn switch_to_login(&mut self) {
        self.mode = AuthMode::Login;
    }

    /// Flips to the other form.
    pub fn toggle(&mut self) {
        match self.mode {
            AuthMode::Login => self.switch_to_register(),
            AuthMode::Register => self.switch_to_login(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_wins_regardless_of_user() {
        assert_eq!(Gate::from_session(&Session::loading()), Gate::Loading);

        let mut session = Session::signed_in(Profile::new("u1", "Ada"));
        session.is_loading = true;
        assert_eq!(Gate::from_session(&session), Gate::Loading);
    }

    #[test]
    fn no_user_is_unauthenticated() {
        assert_eq!(Gate::from_session(&Session::signed_out()), Gate::Unauthenticated);
    }

    #[test]
    fn signed_in_user_is_authenticated() {
        let session = Session::signed_in(Profile::new("u1", "Ada"));
        match Gate::from_session(&session) {
            Gate::Authenticated(profile) => assert_eq!(profile.id, "u1"),
            other => panic!("unexpected gate: {other:?}"),
        }
    }

    #[test]
    fn auth_screen_defaults_to_login() {
        assert_eq!(AuthScreen::default().mode(), AuthMode::Login);
    }

    #[test]
    fn switches_are_inverses() {
        let mut screen = AuthScreen::default();
        screen.switch_to_register();
        assert_eq!(screen.mode(), AuthMode::Register);
        screen.switch_to_login();
        assert_eq!(screen, AuthScreen::default());

        screen.toggle();
        screen.toggle();
        assert_eq!(screen.mode(), AuthMode::Login);
    }
}
