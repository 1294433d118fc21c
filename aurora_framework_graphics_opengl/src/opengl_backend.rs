/// OpenGlGraphicsBackend - GL implementation of the GraphicsBackend trait

use std::sync::Arc;

use aurora_framework::aurora::Result;
use aurora_framework::graphics::{
    BackendRegistry, BufferKind, BufferStrategy, BufferStrategyDesc, GraphicsBackend,
};

use crate::opengl_buffer::OpenGlBufferStrategy;
use crate::opengl_context::GlContext;

/// OpenGL backend
pub struct OpenGlGraphicsBackend {
    ctx: Arc<GlContext>,
}

impl OpenGlGraphicsBackend {
    /// Create a backend over a shared GL context
    pub fn new(ctx: Arc<GlContext>) -> Self {
        Self { ctx }
    }
}

impl GraphicsBackend for OpenGlGraphicsBackend {
    fn name(&self) -> &'static str {
        "opengl"
    }

    fn create_buffer_strategy(
        &mut self,
        desc: &BufferStrategyDesc,
    ) -> Result<Box<dyn BufferStrategy>> {
        let strategy = OpenGlBufferStrategy::new(
            self.ctx.clone(),
            bind_target(desc.kind),
            usage_hint(desc.dynamic),
            desc.size_bytes,
        )?;
        Ok(Box::new(strategy))
    }
}

/// Register the OpenGL backend in a registry
///
/// # Example
///
/// ```no_run
/// use aurora_framework::graphics::{BackendRegistry, GraphicsProfile};
/// use aurora_framework_graphics_opengl::GlContext;
///
/// let ctx = unsafe { GlContext::from_loader_function(|s| load_gl_symbol(s)) };
/// let mut registry = BackendRegistry::new();
/// aurora_framework_graphics_opengl::register(&mut registry, ctx);
/// let device = registry.create_device("opengl", GraphicsProfile::HiDef)?;
/// # fn load_gl_symbol(_s: &str) -> *const std::ffi::c_void { std::ptr::null() }
/// # Ok::<(), aurora_framework::aurora::Error>(())
/// ```
pub fn register(registry: &mut BackendRegistry, ctx: Arc<GlContext>) {
    registry.register("opengl", move || {
        Ok(Box::new(OpenGlGraphicsBackend::new(ctx.clone())))
    });
}

fn bind_target(kind: BufferKind) -> u32 {
    match kind {
        BufferKind::Vertex => glow::ARRAY_BUFFER,
        BufferKind::Index => glow::ELEMENT_ARRAY_BUFFER,
    }
}

fn usage_hint(dynamic: bool) -> u32 {
    if dynamic {
        glow::STREAM_DRAW
    } else {
        glow::STATIC_DRAW
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_target_mapping() {
        assert_eq!(bind_target(BufferKind::Vertex), glow::ARRAY_BUFFER);
        assert_eq!(bind_target(BufferKind::Index), glow::ELEMENT_ARRAY_BUFFER);
    }

    #[test]
    fn test_usage_hint_mapping() {
        assert_eq!(usage_hint(false), glow::STATIC_DRAW);
        assert_eq!(usage_hint(true), glow::STREAM_DRAW);
    }
}
