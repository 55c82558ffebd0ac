use dioxus::prelude::*;
use dispatch_core::{Board, Session};
use shared_types::{AppConfig, AppError, UserProfile};

/// Global console session.
///
/// Wraps the engine's `Session` in a signal so every screen re-renders when
/// the operator logs in, logs out, or changes their board.
#[derive(Clone, Copy, PartialEq)]
pub struct SessionState {
    pub session: Signal<Session>,
}

impl SessionState {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            session: Signal::new(Session::from_config(config)),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_logged_in()
    }

    pub fn profile(&self) -> Option<UserProfile> {
        self.session.read().profile().cloned()
    }

    pub fn badge(&self) -> Option<String> {
        self.session.read().badge().map(str::to_string)
    }

    /// Snapshot of the active board for rendering.
    pub fn board(&self) -> Option<Board> {
        self.session.read().board().cloned()
    }

    pub fn login(&mut self, code: &str) -> Result<UserProfile, AppError> {
        self.session.write().login(code).cloned()
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    /// Run a board operation, logging rejections.
    pub fn apply<T>(
        &mut self,
        op: impl FnOnce(&mut Board) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let result = self.session.write().with_board(op);
        if let Err(e) = &result {
            tracing::warn!(kind = %e.kind, message = %e.message, "board operation rejected");
        }
        result
    }
}

/// Hook to access the console session.
pub fn use_session() -> SessionState {
    use_context::<SessionState>()
}
