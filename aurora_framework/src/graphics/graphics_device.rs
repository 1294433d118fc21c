/// GraphicsDevice - explicit device context and buffer factory

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::graphics::{
    BufferKind, BufferResource, BufferStrategyDesc, DynamicIndexBuffer, DynamicVertexBuffer,
    GraphicsBackend, GraphicsProfile, IndexBuffer, IndexBufferDesc, IndexElementSize,
    VertexBuffer, VertexBufferDesc,
};
use crate::{aurora_bail, aurora_debug, aurora_error, aurora_warn};

const SOURCE: &str = "aurora::GraphicsDevice";

/// Explicit graphics device context.
///
/// Owns the backend behind a mutex (the shared-context lock: resource
/// creation from multiple call sites serializes on it before touching the
/// native context) and is the only way to construct buffer objects.
/// There is no process-wide "current device"; callers pass the `Arc`
/// around explicitly.
///
/// `notify_reset` is the device-loss message: it bumps a monotonically
/// increasing epoch, and every buffer compares its own materialization
/// epoch against it before each operation, recreating the native resource
/// when the context was lost underneath it.
pub struct GraphicsDevice {
    backend: Mutex<Box<dyn GraphicsBackend>>,
    profile: GraphicsProfile,
    reset_epoch: AtomicU64,
}

impl GraphicsDevice {
    /// Wrap a backend into a device context
    pub fn new(backend: Box<dyn GraphicsBackend>, profile: GraphicsProfile) -> Arc<Self> {
        Arc::new(Self {
            backend: Mutex::new(backend),
            profile,
            reset_epoch: AtomicU64::new(0),
        })
    }

    /// Feature profile this device was created with
    pub fn profile(&self) -> GraphicsProfile {
        self.profile
    }

    /// Name of the active backend
    pub fn backend_name(&self) -> Result<&'static str> {
        let backend = self
            .backend
            .lock()
            .map_err(|_| Error::BackendError("Graphics context lock poisoned".to_string()))?;
        Ok(backend.name())
    }

    /// Current device reset epoch
    pub fn reset_epoch(&self) -> u64 {
        self.reset_epoch.load(Ordering::Acquire)
    }

    /// Signal that the native context was lost and every GPU resource must
    /// be recreated before its next use
    pub fn notify_reset(&self) {
        let epoch = self.reset_epoch.fetch_add(1, Ordering::AcqRel) + 1;
        aurora_warn!(SOURCE, "Device reset: all GPU resources invalidated (epoch {})", epoch);
    }

    fn create_strategy(&self, desc: &BufferStrategyDesc) -> Result<Box<dyn crate::graphics::BufferStrategy>> {
        let mut backend = self
            .backend
            .lock()
            .map_err(|_| Error::BackendError("Graphics context lock poisoned".to_string()))?;
        backend.create_buffer_strategy(desc)
    }

    // ===== BUFFER FACTORIES =====

    /// Create a static vertex buffer
    pub fn create_vertex_buffer(self: &Arc<Self>, desc: VertexBufferDesc) -> Result<VertexBuffer> {
        let resource = self.build_vertex_resource(&desc, false)?;
        Ok(VertexBuffer::new(resource))
    }

    /// Create a streaming vertex buffer with content-loss tracking and
    /// discard-by-default writes
    pub fn create_dynamic_vertex_buffer(
        self: &Arc<Self>,
        desc: VertexBufferDesc,
    ) -> Result<DynamicVertexBuffer> {
        let resource = self.build_vertex_resource(&desc, true)?;
        Ok(DynamicVertexBuffer::new(VertexBuffer::new(resource)))
    }

    /// Create a static index buffer
    ///
    /// # Errors
    ///
    /// Returns `NotSupported` for 32-bit indices on the Reach profile.
    pub fn create_index_buffer(self: &Arc<Self>, desc: IndexBufferDesc) -> Result<IndexBuffer> {
        let element_size = desc.element_size;
        let resource = self.build_index_resource(&desc, false)?;
        Ok(IndexBuffer::new(resource, element_size))
    }

    /// Create a streaming index buffer with content-loss tracking and
    /// discard-by-default writes
    pub fn create_dynamic_index_buffer(
        self: &Arc<Self>,
        desc: IndexBufferDesc,
    ) -> Result<DynamicIndexBuffer> {
        let element_size = desc.element_size;
        let resource = self.build_index_resource(&desc, true)?;
        Ok(DynamicIndexBuffer::new(IndexBuffer::new(resource, element_size)))
    }

    fn build_vertex_resource(
        self: &Arc<Self>,
        desc: &VertexBufferDesc,
        dynamic: bool,
    ) -> Result<BufferResource> {
        if desc.vertex_stride == 0 {
            aurora_bail!(SOURCE, "Vertex stride must be greater than zero");
        }
        if desc.vertex_count == 0 {
            aurora_bail!(SOURCE, "Vertex count must be greater than zero");
        }
        let size_bytes = desc
            .vertex_stride
            .checked_mul(desc.vertex_count)
            .ok_or_else(|| Error::InvalidOperation("Buffer size overflows".to_string()))?;

        let strategy = self.create_strategy(&BufferStrategyDesc {
            kind: BufferKind::Vertex,
            size_bytes,
            usage: desc.usage,
            dynamic,
        })?;

        aurora_debug!(
            SOURCE,
            "Created {}vertex buffer: {} vertices, stride {} ({} bytes)",
            if dynamic { "dynamic " } else { "" },
            desc.vertex_count,
            desc.vertex_stride,
            size_bytes
        );

        Ok(BufferResource::new(
            Arc::clone(self),
            strategy,
            desc.vertex_count,
            desc.vertex_stride,
            desc.usage,
            dynamic,
        ))
    }

    fn build_index_resource(
        self: &Arc<Self>,
        desc: &IndexBufferDesc,
        dynamic: bool,
    ) -> Result<BufferResource> {
        if desc.index_count == 0 {
            aurora_bail!(SOURCE, "Index count must be greater than zero");
        }
        if self.profile == GraphicsProfile::Reach
            && desc.element_size == IndexElementSize::ThirtyTwoBits
        {
            aurora_error!(SOURCE, "32-bit index buffers require the HiDef profile");
            return Err(Error::NotSupported(
                "32-bit index buffers require the HiDef profile".to_string(),
            ));
        }
        let element_size = desc.element_size.size_bytes();
        let size_bytes = element_size
            .checked_mul(desc.index_count)
            .ok_or_else(|| Error::InvalidOperation("Buffer size overflows".to_string()))?;

        let strategy = self.create_strategy(&BufferStrategyDesc {
            kind: BufferKind::Index,
            size_bytes,
            usage: desc.usage,
            dynamic,
        })?;

        aurora_debug!(
            SOURCE,
            "Created {}index buffer: {} indices, {:?} ({} bytes)",
            if dynamic { "dynamic " } else { "" },
            desc.index_count,
            desc.element_size,
            size_bytes
        );

        Ok(BufferResource::new(
            Arc::clone(self),
            strategy,
            desc.index_count,
            element_size,
            desc.usage,
            dynamic,
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "graphics_device_tests.rs"]
mod tests;
