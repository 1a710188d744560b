use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core::models::ControllerState;

/// Shared state of one controller plus the generation of the request that owns it.
///
/// Every call and every reset advances the generation. A response that comes
/// back under an older generation is handed to its caller but never written
/// here, so the most recently started request owns the state.
pub(crate) struct RequestSession<R> {
    inner: Mutex<SessionInner<R>>,
}

struct SessionInner<R> {
    generation: u64,
    state: ControllerState,
    last_result: Option<R>,
}

impl<R: Clone> RequestSession<R> {
    pub(crate) fn new() -> Self {
        Self {
            inner: Mutex::new(SessionInner {
                generation: 0,
                state: ControllerState::default(),
                last_result: None,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner<R>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn state(&self) -> ControllerState {
        self.lock().state.clone()
    }

    pub(crate) fn last_result(&self) -> Option<R> {
        self.lock().last_result.clone()
    }

    pub(crate) fn begin(&self) -> RequestTicket<'_, R> {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state.begin_request();
        inner.last_result = None;

        RequestTicket {
            session: self,
            token: inner.generation,
        }
    }

    /// Input was rejected before any request started; only the error is recorded.
    pub(crate) fn record_rejection(&self, message: &str) {
        self.lock().state.last_error = Some(message.to_string());
    }

    pub(crate) fn reset(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.state = ControllerState::default();
        inner.last_result = None;
    }
}

pub(crate) struct RequestTicket<'a, R> {
    session: &'a RequestSession<R>,
    token: u64,
}

impl<R: Clone> RequestTicket<'_, R> {
    /// Returns `false` when a newer request or a reset superseded this one.
    pub(crate) fn succeed(&self, text: &str, result: R) -> bool {
        let mut inner = self.session.lock();
        if inner.generation != self.token {
            return false;
        }
        inner.state.result_text = text.to_string();
        inner.last_result = Some(result);
        true
    }

    /// Returns `false` when a newer request or a reset superseded this one.
    pub(crate) fn fail(&self, message: &str) -> bool {
        let mut inner = self.session.lock();
        if inner.generation != self.token {
            return false;
        }
        inner.state.last_error = Some(message.to_string());
        true
    }
}

impl<R> Drop for RequestTicket<'_, R> {
    fn drop(&mut self) {
        let mut inner = self
            .session
            .inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if inner.generation == self.token {
            inner.state.is_loading = false;
        }
    }
}
