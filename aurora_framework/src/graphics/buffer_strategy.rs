/// BufferStrategy trait and strategy descriptor

use crate::error::Result;
use crate::graphics::{BufferUsage, ResourceState, SetDataOptions};

/// What a buffer will be bound as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferKind {
    /// Vertex data
    Vertex,
    /// Index data
    Index,
}

/// Descriptor handed to a backend when creating a buffer strategy
#[derive(Debug, Clone)]
pub struct BufferStrategyDesc {
    /// Bind point for the buffer
    pub kind: BufferKind,
    /// Total size in bytes
    pub size_bytes: usize,
    /// Usage restrictions
    pub usage: BufferUsage,
    /// Whether the buffer holds streaming data (discard-by-default writes)
    pub dynamic: bool,
}

/// Backend contract for one GPU buffer resource.
///
/// Implemented by backend-specific strategy types (e.g. `OpenGlBufferStrategy`,
/// `SoftwareBufferStrategy`). A strategy is byte-level: all typed access,
/// argument validation and stride scatter/gather happen in the shared layer
/// before a strategy call is issued, so every `write`/`read` here maps to
/// one contiguous native operation.
///
/// Strategies are not thread-safe; all calls happen on the rendering thread
/// that owns the device.
pub trait BufferStrategy {
    /// Current lifecycle state of the native resource
    fn state(&self) -> ResourceState;

    /// Create the native resource if it does not exist yet.
    ///
    /// Called lazily before the first operation and again after a device
    /// reset invalidated the resource. Calling it while Materialized is a
    /// no-op; calling it after dispose is an error.
    fn materialize(&mut self) -> Result<()>;

    /// Drop the native resource without releasing it.
    ///
    /// Delivered when the device context was lost: the native handle is
    /// already dead and must not be touched. Transitions Materialized →
    /// Uninitialized.
    fn invalidate(&mut self);

    /// Write `data` at `offset` bytes into the buffer.
    ///
    /// `Discard` abandons the entire previous contents before writing;
    /// `NoOverwrite` writes without synchronization on the caller's promise
    /// that the range is not in flight.
    fn write(&mut self, offset: usize, data: &[u8], options: SetDataOptions) -> Result<()>;

    /// Read `out.len()` bytes starting at `offset` into `out`
    fn read(&self, offset: usize, out: &mut [u8]) -> Result<()>;

    /// Release the native resource. Idempotent: a second call is a no-op.
    fn dispose(&mut self);
}
