/// DynamicVertexBuffer - streaming vertex buffer variant

use bytemuck::Pod;

use crate::error::Result;
use crate::graphics::{BufferUsage, ResourceState, SetDataOptions, VertexBuffer};

/// Streaming vertex buffer.
///
/// Adds content-loss tracking on top of [`VertexBuffer`] and defaults
/// writes to `Discard`, the appropriate mode for per-frame streaming data.
/// After a device reset `is_content_lost` reports true until the buffer is
/// rewritten.
pub struct DynamicVertexBuffer {
    inner: VertexBuffer,
}

impl DynamicVertexBuffer {
    pub(crate) fn new(inner: VertexBuffer) -> Self {
        Self { inner }
    }

    /// Whether a device reset discarded the buffer contents since the last
    /// successful write
    pub fn is_content_lost(&self) -> bool {
        self.inner.resource.is_content_lost()
    }

    /// Upload `data` with Discard semantics
    pub fn set_data<T: Pod>(&mut self, data: &[T]) -> Result<()> {
        self.inner.set_data(data, SetDataOptions::Discard)
    }

    /// Upload `data` with an explicit write mode
    pub fn set_data_with_options<T: Pod>(
        &mut self,
        data: &[T],
        options: SetDataOptions,
    ) -> Result<()> {
        self.inner.set_data(data, options)
    }

    /// Strided upload with an explicit write mode; see
    /// [`VertexBuffer::set_data_strided`]
    pub fn set_data_strided<T: Pod>(
        &mut self,
        offset_bytes: usize,
        data: &[T],
        start: usize,
        count: usize,
        vertex_stride: usize,
        options: SetDataOptions,
    ) -> Result<()> {
        self.inner
            .set_data_strided(offset_bytes, data, start, count, vertex_stride, options)
    }

    /// Read the start of the buffer back into `out`
    pub fn get_data<T: Pod>(&mut self, out: &mut [T]) -> Result<()> {
        self.inner.get_data(out)
    }

    // ===== ACCESSORS =====

    /// Number of vertices the buffer holds
    pub fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    /// Size in bytes of one vertex
    pub fn vertex_stride(&self) -> usize {
        self.inner.vertex_stride()
    }

    /// Usage restrictions declared at creation
    pub fn usage(&self) -> BufferUsage {
        self.inner.usage()
    }

    /// Lifecycle state of the backing native resource
    pub fn state(&self) -> ResourceState {
        self.inner.state()
    }

    /// Release the backing native resource. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.inner.dispose();
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "dynamic_vertex_buffer_tests.rs"]
mod tests;
