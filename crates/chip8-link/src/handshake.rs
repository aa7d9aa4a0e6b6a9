use std::sync::atomic::{AtomicBool, Ordering};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HandshakeState {
    NotReady,
    Ready,
}

/// Tracks whether the runtime has announced itself.
///
/// Starts out `NotReady` and flips to `Ready` once; there is no way back.
/// Every outbound operation consults it, so it is shared (behind an `Rc`)
/// between the channel and the dispatcher instead of living in a global.
#[derive(Default)]
pub struct Handshake {
    ready: AtomicBool,
}

impl Handshake {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the call that performed the transition
    #[inline]
    pub fn mark_ready(&self) -> bool {
        !self.ready.swap(true, Ordering::Relaxed)
    }

    #[inline]
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }

    pub fn state(&self) -> HandshakeState {
        if self.is_ready() {
            HandshakeState::Ready
        } else {
            HandshakeState::NotReady
        }
    }
}

impl std::fmt::Debug for Handshake {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Handshake").field(&self.state()).finish()
    }
}
