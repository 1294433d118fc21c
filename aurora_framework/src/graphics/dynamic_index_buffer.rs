/// DynamicIndexBuffer - streaming index buffer variant

use bytemuck::Pod;

use crate::error::Result;
use crate::graphics::{BufferUsage, IndexBuffer, IndexElementSize, ResourceState, SetDataOptions};

/// Streaming index buffer.
///
/// Adds content-loss tracking on top of [`IndexBuffer`] and defaults
/// writes to `Discard`.
pub struct DynamicIndexBuffer {
    inner: IndexBuffer,
}

impl DynamicIndexBuffer {
    pub(crate) fn new(inner: IndexBuffer) -> Self {
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

    /// Read the start of the buffer back into `out`
    pub fn get_data<T: Pod>(&mut self, out: &mut [T]) -> Result<()> {
        self.inner.get_data(out)
    }

    // ===== ACCESSORS =====

    /// Number of indices the buffer holds
    pub fn index_count(&self) -> usize {
        self.inner.index_count()
    }

    /// Width of one index element
    pub fn index_element_size(&self) -> IndexElementSize {
        self.inner.index_element_size()
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
#[path = "dynamic_index_buffer_tests.rs"]
mod tests;
