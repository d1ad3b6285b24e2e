//! The live session: which user, if any, is signed in. Passed explicitly
//! to handlers rather than held as ambient state.

#[derive(Debug, Default, Clone)]
pub struct Session {
    user_id: Option<String>,
}

impl Session {
    pub fn user_id(&self) -> Option<&str> {
        self.user_id.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn log_in(&mut self, user_id: impl Into<String>) {
        self.user_id = Some(user_id.into());
    }

    pub fn log_out(&mut self) {
        self.user_id = None;
    }
}
