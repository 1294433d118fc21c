/// GlContext - shared GL state for all OpenGL buffer strategies
///
/// Wraps the glow context together with the two pieces of bookkeeping the
/// strategies need: the context guard mutex that serializes native calls
/// issued through the shared context, and the id of the thread that owns
/// the context (GL contexts are only current on one thread).

use std::sync::{Arc, Mutex, MutexGuard};
use std::thread::{self, ThreadId};

use aurora_framework::aurora::{Error, Result};

/// Shared GL context for all OpenGL resources.
///
/// Shared (via `Arc`) by every strategy the backend creates. Acquiring the
/// context checks the calling thread and takes the guard mutex before any
/// native call is issued.
pub struct GlContext {
    gl: glow::Context,
    guard: Mutex<()>,
    thread: ThreadId,
}

impl GlContext {
    /// Wrap an already-loaded glow context.
    ///
    /// The calling thread becomes the owning thread: every later buffer
    /// operation must happen on it.
    pub fn new(gl: glow::Context) -> Arc<Self> {
        Arc::new(Self {
            gl,
            guard: Mutex::new(()),
            thread: thread::current().id(),
        })
    }

    /// Load GL function pointers and wrap the resulting context.
    ///
    /// # Safety
    ///
    /// `loader` must return valid function pointers for the GL context
    /// that is current on the calling thread.
    #[cfg(not(target_arch = "wasm32"))]
    pub unsafe fn from_loader_function<F>(loader: F) -> Arc<Self>
    where
        F: FnMut(&str) -> *const std::ffi::c_void,
    {
        Self::new(glow::Context::from_loader_function(loader))
    }

    /// Check the calling thread and lock the context for a native call
    pub(crate) fn acquire(&self) -> Result<GlContextLock<'_>> {
        if thread::current().id() != self.thread {
            return Err(Error::InvalidOperation(
                "OpenGL calls must run on the thread that created the context".to_string(),
            ));
        }
        let guard = self
            .guard
            .lock()
            .map_err(|_| Error::BackendError("GL context guard poisoned".to_string()))?;
        Ok(GlContextLock {
            _guard: guard,
            gl: &self.gl,
        })
    }
}

/// Held for the duration of one native operation
pub(crate) struct GlContextLock<'a> {
    _guard: MutexGuard<'a, ()>,
    pub(crate) gl: &'a glow::Context,
}
