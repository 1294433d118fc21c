/*!
# Aurora Framework

Core types and traits for the Aurora game framework's graphics layer.

This crate provides the platform-agnostic buffer resource API using
trait-based dynamic polymorphism. Backend implementations (OpenGL,
software, ...) plug in a `BufferStrategy` per buffer, selected through a
`BackendRegistry` at device-creation time.

## Architecture

- **GraphicsDevice**: explicit device context; factory for all buffers
- **BufferStrategy**: backend contract for one GPU buffer resource
- **VertexBuffer / IndexBuffer**: typed public buffer objects
- **DynamicVertexBuffer / DynamicIndexBuffer**: streaming variants with
  content-loss tracking and discard-by-default writes
- **SoftwareGraphicsBackend / NullGraphicsBackend**: built-in backends

Backend crates provide concrete strategies that implement these traits.
*/

// Internal modules
mod error;
pub mod log;
pub mod graphics;

// Main aurora namespace module
pub mod aurora {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: aurora_* macros are NOT re-exported here - they are internal only
    }

    // Graphics sub-module with all buffer-layer types
    pub mod graphics {
        pub use crate::graphics::*;
    }
}

// Re-export math library at crate root
pub use glam;
