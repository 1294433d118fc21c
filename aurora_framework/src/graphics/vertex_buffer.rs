/// VertexBuffer - typed vertex buffer object

use bytemuck::Pod;
use std::mem;

use crate::aurora_bail;
use crate::error::Result;
use crate::graphics::buffer_resource::validate_slice;
use crate::graphics::{BufferResource, BufferUsage, ResourceState, SetDataOptions};

const SOURCE: &str = "aurora::VertexBuffer";

/// Descriptor for creating a vertex buffer
#[derive(Debug, Clone)]
pub struct VertexBufferDesc {
    /// Size in bytes of one vertex
    pub vertex_stride: usize,
    /// Number of vertices the buffer holds
    pub vertex_count: usize,
    /// Usage restrictions
    pub usage: BufferUsage,
}

/// GPU vertex buffer.
///
/// Constructed through [`GraphicsDevice::create_vertex_buffer`]. Element
/// data is any [`Pod`] type; a write whose element size differs from the
/// buffer's target stride is scattered element by element.
///
/// [`GraphicsDevice::create_vertex_buffer`]: crate::graphics::GraphicsDevice::create_vertex_buffer
pub struct VertexBuffer {
    pub(crate) resource: BufferResource,
}

impl VertexBuffer {
    pub(crate) fn new(resource: BufferResource) -> Self {
        Self { resource }
    }

    // ===== ACCESSORS =====

    /// Number of vertices the buffer holds
    pub fn vertex_count(&self) -> usize {
        self.resource.element_count()
    }

    /// Size in bytes of one vertex
    pub fn vertex_stride(&self) -> usize {
        self.resource.element_size()
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

    /// Upload `data` to the start of the buffer.
    ///
    /// Elements are written contiguously with a stride of
    /// `size_of::<T>()` bytes.
    pub fn set_data<T: Pod>(&mut self, data: &[T], options: SetDataOptions) -> Result<()> {
        let count = data.len();
        self.set_data_strided(0, data, 0, count, mem::size_of::<T>(), options)
    }

    /// Upload `count` elements of `data` starting at `start`, writing into
    /// the buffer at `offset_bytes` and stepping `vertex_stride` bytes per
    /// element.
    ///
    /// When `vertex_stride` differs from `size_of::<T>()`, elements are
    /// scattered with one native write each (the partial-attribute update
    /// path); otherwise the upload is a single contiguous write.
    pub fn set_data_strided<T: Pod>(
        &mut self,
        offset_bytes: usize,
        data: &[T],
        start: usize,
        count: usize,
        vertex_stride: usize,
        options: SetDataOptions,
    ) -> Result<()> {
        validate_slice(SOURCE, "data", data.len(), start, count)?;
        let element_size = Self::element_size::<T>()?;
        if vertex_stride < element_size {
            aurora_bail!(
                SOURCE,
                "Vertex stride {} is smaller than the element size {}",
                vertex_stride,
                element_size
            );
        }
        let bytes = bytemuck::cast_slice::<T, u8>(&data[start..start + count]);
        self.resource
            .set_bytes(offset_bytes, bytes, element_size, vertex_stride, options)
    }

    /// Read the start of the buffer back into `out`
    pub fn get_data<T: Pod>(&mut self, out: &mut [T]) -> Result<()> {
        let count = out.len();
        self.get_data_strided(0, out, 0, count, mem::size_of::<T>())
    }

    /// Read `count` elements into `out[start..]`, gathering from the buffer
    /// at `offset_bytes` with `vertex_stride` bytes between elements
    pub fn get_data_strided<T: Pod>(
        &mut self,
        offset_bytes: usize,
        out: &mut [T],
        start: usize,
        count: usize,
        vertex_stride: usize,
    ) -> Result<()> {
        validate_slice(SOURCE, "out", out.len(), start, count)?;
        let element_size = Self::element_size::<T>()?;
        if vertex_stride < element_size {
            aurora_bail!(
                SOURCE,
                "Vertex stride {} is smaller than the element size {}",
                vertex_stride,
                element_size
            );
        }
        let bytes = bytemuck::cast_slice_mut::<T, u8>(&mut out[start..start + count]);
        self.resource
            .get_bytes(offset_bytes, bytes, element_size, vertex_stride)
    }

    /// Release the backing native resource. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.resource.dispose();
    }

    fn element_size<T>() -> Result<usize> {
        let size = mem::size_of::<T>();
        if size == 0 {
            aurora_bail!(SOURCE, "Zero-sized element types cannot be uploaded");
        }
        Ok(size)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "vertex_buffer_tests.rs"]
mod tests;
