use backend::Backend;
use tracing::debug;

use crate::{error::LookupError, session::SessionState};

/// Where a session's state lives between calls (the Session Handle Adapter).
///
/// The store holds at most one [`SessionState`]. Absence always means "not
/// created yet", never an error; errors are reserved for a store that cannot
/// resolve its own storage.
pub trait SessionStore<B: Backend> {
    fn fetch(&mut self) -> Result<Option<&mut SessionState<B>>, LookupError>;

    /// Replaces the stored state and hands back the previous one.
    fn store(&mut self, state: Option<SessionState<B>>) -> Result<Option<SessionState<B>>, LookupError>;
}

/// Returns the stored session, creating and storing a fresh one if there is none.
pub fn fetch_or_create<B: Backend, S: SessionStore<B> + ?Sized>(
    store: &mut S,
) -> Result<&mut SessionState<B>, LookupError> {
    if store.fetch()?.is_none() {
        store.store(Some(SessionState::new()))?;
    }
    store.fetch()?.ok_or(LookupError::NotRetained)
}

/// Clears the store, then drops the state it held. Returns whether there was one.
pub fn release<B: Backend, S: SessionStore<B> + ?Sized>(store: &mut S) -> Result<bool, LookupError> {
    match store.store(None)? {
        Some(state) => {
            debug!(plans = state.plan_count(), "session released");
            drop(state);
            Ok(true)
        }
        None => Ok(false),
    }
}

/// In-process store: the session lives right here.
pub struct SessionSlot<B: Backend> {
    state: Option<SessionState<B>>,
}

impl<B: Backend> SessionSlot<B> {
    pub fn new() -> Self {
        Self { state: None }
    }

    pub fn state(&self) -> Option<&SessionState<B>> {
        self.state.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }
}

impl<B: Backend> Default for SessionSlot<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Backend> SessionStore<B> for SessionSlot<B> {
    fn fetch(&mut self) -> Result<Option<&mut SessionState<B>>, LookupError> {
        Ok(self.state.as_mut())
    }

    fn store(&mut self, state: Option<SessionState<B>>) -> Result<Option<SessionState<B>>, LookupError> {
        Ok(std::mem::replace(&mut self.state, state))
    }
}
