use chip8_link::DirectCall;
use chip8_link::message::HostMessage;

/// Handle on the isolated context the engine runs in.
///
/// Implementations never fail loudly: a message that can't be posted or an
/// entry point that can't be called is logged by the implementation and
/// treated as delivered. Gating on the handshake happens in
/// [`RuntimeChannel`](crate::channel::RuntimeChannel), not here.
pub trait RuntimeTarget {
    /// Structured, copy-based delivery. Fire-and-forget, FIFO with other posts.
    fn post(&self, message: HostMessage);

    /// Same-turn call into the runtime. `Some` carries the new flag state for
    /// entry points that report one.
    fn invoke(&self, call: DirectCall) -> Option<bool>;

    /// Move keyboard focus onto the runtime's surface
    fn focus(&self);
}

impl<T: RuntimeTarget + ?Sized> RuntimeTarget for std::rc::Rc<T> {
    fn post(&self, message: HostMessage) {
        (**self).post(message)
    }

    fn invoke(&self, call: DirectCall) -> Option<bool> {
        (**self).invoke(call)
    }

    fn focus(&self) {
        (**self).focus()
    }
}
