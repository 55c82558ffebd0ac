//! Logged-in state: who is at the console and the board they are working.

use shared_types::{AppConfig, AppError, Role, UserProfile};

use crate::board::{Board, StatusLink};
use crate::directory;

#[derive(Debug, Clone, PartialEq)]
pub struct ActiveSession {
    pub badge: String,
    pub profile: UserProfile,
    pub board: Board,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    active: Option<ActiveSession>,
    link: StatusLink,
}

impl Session {
    pub fn new(link: StatusLink) -> Self {
        Self { active: None, link }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(StatusLink::from_config(&config.board))
    }

    /// Log in with an exact badge code. On failure the session is unchanged.
    pub fn login(&mut self, code: &str) -> Result<&UserProfile, AppError> {
        let profile = directory::authenticate(code)?;
        let board = Board::seeded(&profile, self.link);
        tracing::info!(badge = code, role = %profile.role, "session started");
        let active = self.active.insert(ActiveSession {
            badge: code.to_string(),
            profile,
            board,
        });
        Ok(&active.profile)
    }

    pub fn logout(&mut self) {
        if let Some(active) = self.active.take() {
            tracing::info!(badge = %active.badge, "session ended");
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.active.is_some()
    }

    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.active.as_ref().map(|a| &a.profile)
    }

    pub fn role(&self) -> Option<Role> {
        self.profile().map(|p| p.role)
    }

    pub fn badge(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.badge.as_str())
    }

    pub fn board(&self) -> Option<&Board> {
        self.active.as_ref().map(|a| &a.board)
    }

    pub fn board_mut(&mut self) -> Option<&mut Board> {
        self.active.as_mut().map(|a| &mut a.board)
    }

    /// Run a board operation against the active board.
    pub fn with_board<T>(
        &mut self,
        op: impl FnOnce(&mut Board) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        match self.board_mut() {
            Some(board) => op(board),
            None => Err(AppError::unauthorized("Not logged in")),
        }
    }
}
