/// Conditional GL error checking
///
/// Debug builds (and release builds with the `gl-error-checks` feature)
/// drain `glGetError` after each buffer operation and surface the code as
/// a NativeApi error. Release builds without the feature skip the check,
/// so native failures pass silently there.

use aurora_framework::aurora::{Error, Result};
use aurora_framework::aurora_error;
use glow::HasContext;

/// Check the GL error flag after `operation`
pub(crate) fn check_error(gl: &glow::Context, operation: &str) -> Result<()> {
    if !cfg!(any(debug_assertions, feature = "gl-error-checks")) {
        return Ok(());
    }

    let code = unsafe { gl.get_error() };
    if code == glow::NO_ERROR {
        return Ok(());
    }

    aurora_error!(
        "aurora::opengl",
        "{} failed: {} (0x{:04X})",
        operation,
        error_name(code),
        code
    );
    Err(match code {
        glow::OUT_OF_MEMORY => Error::OutOfMemory,
        _ => Error::NativeApi { code },
    })
}

fn error_name(code: u32) -> &'static str {
    match code {
        glow::INVALID_ENUM => "GL_INVALID_ENUM",
        glow::INVALID_VALUE => "GL_INVALID_VALUE",
        glow::INVALID_OPERATION => "GL_INVALID_OPERATION",
        glow::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION",
        glow::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY",
        _ => "unknown GL error",
    }
}

// ============================================================================
// Tests
// ============================================================================
