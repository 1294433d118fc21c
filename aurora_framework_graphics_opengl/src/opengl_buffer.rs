/// OpenGlBufferStrategy - GL implementation of the BufferStrategy trait

use std::sync::Arc;

use aurora_framework::aurora::{Error, Result};
use aurora_framework::aurora_warn;
use aurora_framework::graphics::{BufferStrategy, ResourceState, SetDataOptions};
use glow::HasContext;

use crate::opengl_context::GlContext;
use crate::opengl_debug::check_error;

const SOURCE: &str = "aurora::opengl::Buffer";

type GlBufferHandle = <glow::Context as HasContext>::Buffer;

/// GL buffer strategy.
///
/// The native buffer object is created lazily on first use, not at
/// construction. A `Discard` write orphans the storage with a fresh
/// `glBufferData` allocation so the driver never stalls on in-flight
/// reads; `NoOverwrite` relies on the caller's no-overlap promise and
/// issues a plain `glBufferSubData` with no synchronization.
pub struct OpenGlBufferStrategy {
    /// Shared GL context (function table, guard mutex, owning thread)
    ctx: Arc<GlContext>,
    /// Bind target (GL_ARRAY_BUFFER or GL_ELEMENT_ARRAY_BUFFER)
    target: u32,
    /// Allocation usage hint (GL_STATIC_DRAW or GL_STREAM_DRAW)
    gl_usage: u32,
    /// Buffer size in bytes
    size: usize,
    state: ResourceState,
    buffer: Option<GlBufferHandle>,
}

impl OpenGlBufferStrategy {
    pub(crate) fn new(
        ctx: Arc<GlContext>,
        target: u32,
        gl_usage: u32,
        size: usize,
    ) -> Result<Self> {
        if size > i32::MAX as usize {
            return Err(Error::NotSupported(format!(
                "Buffer of {} bytes exceeds the GL size limit",
                size
            )));
        }
        Ok(Self {
            ctx,
            target,
            gl_usage,
            size,
            state: ResourceState::Uninitialized,
            buffer: None,
        })
    }

    fn handle(&self) -> Result<GlBufferHandle> {
        self.buffer.ok_or_else(|| {
            Error::InvalidOperation("Buffer has no native GL object".to_string())
        })
    }
}

impl BufferStrategy for OpenGlBufferStrategy {
    fn state(&self) -> ResourceState {
        self.state
    }

    fn materialize(&mut self) -> Result<()> {
        match self.state {
            ResourceState::Materialized => Ok(()),
            ResourceState::Disposed => Err(Error::InvalidOperation(
                "Cannot materialize a disposed buffer".to_string(),
            )),
            ResourceState::Uninitialized => {
                let ctx = self.ctx.acquire()?;
                let buffer = unsafe { ctx.gl.create_buffer() }.map_err(Error::BackendError)?;
                unsafe {
                    ctx.gl.bind_buffer(self.target, Some(buffer));
                    ctx.gl.buffer_data_size(self.target, self.size as i32, self.gl_usage);
                    ctx.gl.bind_buffer(self.target, None);
                }
                if let Err(err) = check_error(ctx.gl, "glBufferData allocation") {
                    unsafe { ctx.gl.delete_buffer(buffer) };
                    return Err(err);
                }
                self.buffer = Some(buffer);
                self.state = ResourceState::Materialized;
                Ok(())
            }
        }
    }

    fn invalidate(&mut self) {
        if self.state == ResourceState::Materialized {
            // The context was lost: the GL name is already dead and must
            // not be deleted through the new context
            self.buffer = None;
            self.state = ResourceState::Uninitialized;
        }
    }

    fn write(&mut self, offset: usize, data: &[u8], options: SetDataOptions) -> Result<()> {
        if self.state != ResourceState::Materialized {
            return Err(Error::InvalidOperation(
                "Write on a buffer that is not materialized".to_string(),
            ));
        }
        let buffer = self.handle()?;
        let ctx = self.ctx.acquire()?;
        unsafe {
            ctx.gl.bind_buffer(self.target, Some(buffer));
            if options == SetDataOptions::Discard {
                // Orphan the storage: fresh allocation, old contents
                // abandoned without waiting on pending GPU reads
                ctx.gl.buffer_data_size(self.target, self.size as i32, self.gl_usage);
            }
            ctx.gl.buffer_sub_data_u8_slice(self.target, offset as i32, data);
            ctx.gl.bind_buffer(self.target, None);
        }
        check_error(ctx.gl, "glBufferSubData write")
    }

    fn read(&self, offset: usize, out: &mut [u8]) -> Result<()> {
        if self.state != ResourceState::Materialized {
            return Err(Error::InvalidOperation(
                "Read on a buffer that is not materialized".to_string(),
            ));
        }
        let buffer = self.handle()?;
        let ctx = self.ctx.acquire()?;
        unsafe {
            // Read through the copy-read binding point so the vertex/index
            // bindings stay untouched
            ctx.gl.bind_buffer(glow::COPY_READ_BUFFER, Some(buffer));
            ctx.gl.get_buffer_sub_data(glow::COPY_READ_BUFFER, offset as i32, out);
            ctx.gl.bind_buffer(glow::COPY_READ_BUFFER, None);
        }
        check_error(ctx.gl, "glGetBufferSubData read")
    }

    fn dispose(&mut self) {
        if self.state == ResourceState::Disposed {
            return;
        }
        if let Some(buffer) = self.buffer.take() {
            match self.ctx.acquire() {
                Ok(ctx) => unsafe { ctx.gl.delete_buffer(buffer) },
                Err(_) => {
                    aurora_warn!(SOURCE, "GL buffer leaked: dispose called off the context thread");
                }
            }
        }
        self.state = ResourceState::Disposed;
    }
}

impl Drop for OpenGlBufferStrategy {
    fn drop(&mut self) {
        self.dispose();
    }
}
