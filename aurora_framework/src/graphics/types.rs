/// Common buffer-layer types shared by all backends

use bitflags::bitflags;

bitflags! {
    /// Usage restrictions declared when a buffer is created.
    ///
    /// The backend uses these to place the buffer in the most suitable
    /// memory type and to validate access at runtime. An empty set means
    /// unrestricted use; `WRITE_ONLY` buffers reject every read-back.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct BufferUsage: u32 {
        /// The buffer will only ever be written by the CPU, never read back.
        const WRITE_ONLY = 1 << 0;
    }
}

impl BufferUsage {
    /// Whether read-back through `get_data` is forbidden
    pub fn is_write_only(&self) -> bool {
        self.contains(BufferUsage::WRITE_ONLY)
    }
}

/// Write mode for `set_data` calls.
///
/// Governs whether a write may invalidate prior buffer contents (enabling
/// lock-free streaming) or must preserve data still read by the GPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetDataOptions {
    /// Preserve existing contents; the backend may synchronize with the GPU
    #[default]
    None,
    /// The backend may allocate fresh storage and abandon the old contents,
    /// avoiding a stall on in-flight GPU reads
    Discard,
    /// The caller guarantees the written range does not overlap any region
    /// still in use by pending GPU reads; the backend skips synchronization
    NoOverwrite,
}

/// Width of a single index element in an index buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexElementSize {
    /// 16-bit indices (u16)
    SixteenBits,
    /// 32-bit indices (u32)
    ThirtyTwoBits,
}

impl IndexElementSize {
    /// Size in bytes of one index element
    pub fn size_bytes(&self) -> usize {
        match self {
            IndexElementSize::SixteenBits => 2,
            IndexElementSize::ThirtyTwoBits => 4,
        }
    }
}

/// Feature profile of a graphics device.
///
/// `Reach` is the constrained profile for low-end hardware and forbids
/// 32-bit index buffers; `HiDef` has no such restriction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphicsProfile {
    /// Constrained profile (16-bit indices only)
    Reach,
    /// Full profile
    HiDef,
}

/// Lifecycle state of a backend buffer resource.
///
/// Transitions: Uninitialized → Materialized on first use (or eagerly at
/// creation, backend's choice); Materialized → Uninitialized on device
/// reset; any state → Disposed exactly once, double-dispose tolerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    /// No native resource exists yet (or it was invalidated by a reset)
    Uninitialized,
    /// The native resource is live
    Materialized,
    /// The native resource has been released
    Disposed,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
