//! Cancel-and-reschedule single-shot timers

/// Something that can run a task later, e.g. `window.setTimeout`.
pub trait TimerHost {
    type Handle;

    /// Schedule `task` after `delay_ms`. `None` when the host cannot schedule.
    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Option<Self::Handle>;

    /// Cancel a scheduled task. Clearing an already-fired handle is a no-op.
    fn clear_timeout(&self, handle: Self::Handle);
}

/// Slot holding at most one pending timer; scheduling replaces the previous one.
#[derive(Debug)]
pub struct SingleShot<H> {
    pending: Option<H>,
}

impl<H> Default for SingleShot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> SingleShot<H> {
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    pub fn schedule<T>(&mut self, host: &T, delay_ms: u32, task: Box<dyn FnOnce()>)
    where
        T: TimerHost<Handle = H>,
    {
        self.cancel(host);
        self.pending = host.set_timeout(delay_ms, task);
    }

    pub fn cancel<T>(&mut self, host: &T)
    where
        T: TimerHost<Handle = H>,
    {
        if let Some(handle) = self.pending.take() {
            host.clear_timeout(handle);
        }
    }
}
