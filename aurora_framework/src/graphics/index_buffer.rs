/// IndexBuffer - typed index buffer object

use bytemuck::Pod;
use std::mem;

use crate::aurora_bail;
use crate::error::Result;
use crate::graphics::buffer_resource::validate_slice;
use crate::graphics::{
    BufferResource, BufferUsage, IndexElementSize, ResourceState, SetDataOptions,
};

const SOURCE: &str = "aurora::IndexBuffer";

/// Descriptor for creating an index buffer
#[derive(Debug, Clone)]
pub struct IndexBufferDesc {
    /// Width of one index element
    pub element_size: IndexElementSize,
    /// Number of indices the buffer holds
    pub index_count: usize,
    /// Usage restrictions
    pub usage: BufferUsage,
}

/// GPU index buffer.
///
/// Constructed through [`GraphicsDevice::create_index_buffer`]. The element
/// type passed to `set_data`/`get_data` must match the index width the
/// buffer was created with (`u16` for SixteenBits, `u32` for ThirtyTwoBits).
///
/// [`GraphicsDevice::create_index_buffer`]: crate::graphics::GraphicsDevice::create_index_buffer
pub struct IndexBuffer {
    pub(crate) resource: BufferResource,
    element_size: IndexElementSize,
}

impl IndexBuffer {
    pub(crate) fn new(resource: BufferResource, element_size: IndexElementSize) -> Self {
        Self {
            resource,
            element_size,
        }
    }

    // ===== ACCESSORS =====

    /// Number of indices the buffer holds
    pub fn index_count(&self) -> usize {
        self.resource.element_count()
    }

    /// Width of one index element
    pub fn index_element_size(&self) -> IndexElementSize {
        self.element_size
    }

    /// Usage restrictions declared at creation
    pub fn usage(&self) -> BufferUsage {
        self.resource.usage()
    }

    /// Total size in bytes
    pub fn size_bytes(&self) -> usize {
        self.resource.size_bytes()
    }

    /// Lifecycle state of the backing native resource
    pub fn state(&self) -> ResourceState {
        self.resource.state()
    }

    // ===== DATA TRANSFER =====

    /// Upload `data` to the start of the buffer
    pub fn set_data<T: Pod>(&mut self, data: &[T], options: SetDataOptions) -> Result<()> {
        let count = data.len();
        self.set_data_range(0, data, 0, count, options)
    }

    /// Upload `count` elements of `data` starting at `start` into the
    /// buffer at `offset_bytes`
    pub fn set_data_range<T: Pod>(
        &mut self,
        offset_bytes: usize,
        data: &[T],
        start: usize,
        count: usize,
        options: SetDataOptions,
    ) -> Result<()> {
        validate_slice(SOURCE, "data", data.len(), start, count)?;
        let element_size = self.check_element_type::<T>()?;
        let bytes = bytemuck::cast_slice::<T, u8>(&data[start..start + count]);
        self.resource
            .set_bytes(offset_bytes, bytes, element_size, element_size, options)
    }

    /// Read the start of the buffer back into `out`
    pub fn get_data<T: Pod>(&mut self, out: &mut [T]) -> Result<()> {
        let count = out.len();
        self.get_data_range(0, out, 0, count)
    }

    /// Read `count` elements from the buffer at `offset_bytes` into
    /// `out[start..]`
    pub fn get_data_range<T: Pod>(
        &mut self,
        offset_bytes: usize,
        out: &mut [T],
        start: usize,
        count: usize,
    ) -> Result<()> {
        validate_slice(SOURCE, "out", out.len(), start, count)?;
        let element_size = self.check_element_type::<T>()?;
        let bytes = bytemuck::cast_slice_mut::<T, u8>(&mut out[start..start + count]);
        self.resource
            .get_bytes(offset_bytes, bytes, element_size, element_size)
    }

    /// Release the backing native resource. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.resource.dispose();
    }

    fn check_element_type<T>(&self) -> Result<usize> {
        let size = mem::size_of::<T>();
        if size != self.element_size.size_bytes() {
            aurora_bail!(
                SOURCE,
                "Element type size {} does not match the {:?} index width ({} bytes)",
                size,
                self.element_size,
                self.element_size.size_bytes()
            );
        }
        Ok(size)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "index_buffer_tests.rs"]
mod tests;
