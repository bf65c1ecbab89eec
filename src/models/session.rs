use crate::config::ServerConfig;

/// Bearer-token credential identifying the logged-in user. Opaque to the
/// dashboard; the widget only forwards it.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

/// Supplies the current session, if any. Called once at startup; the widgets
/// never refresh it.
pub trait SessionProvider {
    fn get_session(&self) -> Option<Session>;
}

/// Session provider backed by the configuration file.
pub struct ConfigSessionProvider<'a> {
    server: &'a ServerConfig,
}

impl<'a> ConfigSessionProvider<'a> {
    pub fn new(server: &'a ServerConfig) -> Self {
        Self { server }
    }
}

impl SessionProvider for ConfigSessionProvider<'_> {
    fn get_session(&self) -> Option<Session> {
        self.server
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .map(Session::new)
    }
}
