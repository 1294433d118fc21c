/*!
# Aurora Framework - OpenGL Graphics Backend

OpenGL implementation of the Aurora buffer strategy contract.

This crate provides an OpenGL backend that implements the aurora_framework
traits using the glow bindings, covering desktop OpenGL and WebGL2 (glow
targets WebGL2 on wasm32) with a single strategy implementation.

Buffers are allocated lazily on first use. `Discard` writes orphan the
buffer storage, `NoOverwrite` writes go straight to `glBufferSubData` on
the caller's promise, and read-back goes through the `COPY_READ_BUFFER`
binding point.

All calls must happen on the thread that created the GL context.
*/

// OpenGL implementation modules
mod opengl_context;
mod opengl_backend;
mod opengl_buffer;
mod opengl_debug;

pub use opengl_context::GlContext;
pub use opengl_backend::{register, OpenGlGraphicsBackend};
pub use opengl_buffer::OpenGlBufferStrategy;
