use super::*;
use crate::graphics::{BufferUsage, SoftwareGraphicsBackend};

// ============================================================================
// Helpers
// ============================================================================

fn device(profile: GraphicsProfile) -> std::sync::Arc<GraphicsDevice> {
    GraphicsDevice::new(Box::new(SoftwareGraphicsBackend::new()), profile)
}

// ============================================================================
// Device tests
// ============================================================================

#[test]
fn test_backend_name() {
    let device = device(GraphicsProfile::HiDef);
    assert_eq!(device.backend_name().unwrap(), "software");
}

#[test]
fn test_profile() {
    assert_eq!(device(GraphicsProfile::Reach).profile(), GraphicsProfile::Reach);
    assert_eq!(device(GraphicsProfile::HiDef).profile(), GraphicsProfile::HiDef);
}

#[test]
fn test_notify_reset_bumps_epoch() {
    let device = device(GraphicsProfile::HiDef);
    assert_eq!(device.reset_epoch(), 0);
    device.notify_reset();
    assert_eq!(device.reset_epoch(), 1);
    device.notify_reset();
    assert_eq!(device.reset_epoch(), 2);
}

// ============================================================================
// Vertex buffer factory tests
// ============================================================================

#[test]
fn test_create_vertex_buffer() {
    let device = device(GraphicsProfile::HiDef);
    let buf = device
        .create_vertex_buffer(VertexBufferDesc {
            vertex_stride: 16,
            vertex_count: 32,
            usage: BufferUsage::empty(),
        })
        .unwrap();
    assert_eq!(buf.size_bytes(), 512);
}

#[test]
fn test_zero_stride_fails() {
    let device = device(GraphicsProfile::HiDef);
    let result = device.create_vertex_buffer(VertexBufferDesc {
        vertex_stride: 0,
        vertex_count: 32,
        usage: BufferUsage::empty(),
    });
    assert!(result.is_err());
}

#[test]
fn test_zero_count_fails() {
    let device = device(GraphicsProfile::HiDef);
    let result = device.create_vertex_buffer(VertexBufferDesc {
        vertex_stride: 16,
        vertex_count: 0,
        usage: BufferUsage::empty(),
    });
    assert!(result.is_err());
}

// ============================================================================
// Index buffer factory tests
// ============================================================================

#[test]
fn test_create_index_buffer() {
    let device = device(GraphicsProfile::HiDef);
    let buf = device
        .create_index_buffer(IndexBufferDesc {
            element_size: IndexElementSize::SixteenBits,
            index_count: 6,
            usage: BufferUsage::empty(),
        })
        .unwrap();
    assert_eq!(buf.index_count(), 6);
}

#[test]
fn test_thirty_two_bit_indices_on_reach_not_supported() {
    let device = device(GraphicsProfile::Reach);
    let result = device.create_index_buffer(IndexBufferDesc {
        element_size: IndexElementSize::ThirtyTwoBits,
        index_count: 6,
        usage: BufferUsage::empty(),
    });
    assert!(matches!(result, Err(crate::error::Error::NotSupported(_))));
}

#[test]
fn test_sixteen_bit_indices_on_reach_allowed() {
    let device = device(GraphicsProfile::Reach);
    let result = device.create_index_buffer(IndexBufferDesc {
        element_size: IndexElementSize::SixteenBits,
        index_count: 6,
        usage: BufferUsage::empty(),
    });
    assert!(result.is_ok());
}

#[test]
fn test_thirty_two_bit_indices_on_hidef_allowed() {
    let device = device(GraphicsProfile::HiDef);
    let result = device.create_index_buffer(IndexBufferDesc {
        element_size: IndexElementSize::ThirtyTwoBits,
        index_count: 6,
        usage: BufferUsage::empty(),
    });
    assert!(result.is_ok());
}

// ============================================================================
// Reset propagation tests
// ============================================================================

#[test]
fn test_reset_rematerializes_buffer_on_next_use() {
    let device = device(GraphicsProfile::HiDef);
    let mut buf = device
        .create_vertex_buffer(VertexBufferDesc {
            vertex_stride: 4,
            vertex_count: 4,
            usage: BufferUsage::empty(),
        })
        .unwrap();

    buf.set_data(&[1u32, 2, 3, 4], crate::graphics::SetDataOptions::None)
        .unwrap();
    assert_eq!(buf.state(), crate::graphics::ResourceState::Materialized);

    device.notify_reset();
    assert_eq!(buf.state(), crate::graphics::ResourceState::Uninitialized);

    // Next write recreates the native resource
    buf.set_data(&[5u32, 6, 7, 8], crate::graphics::SetDataOptions::None)
        .unwrap();
    assert_eq!(buf.state(), crate::graphics::ResourceState::Materialized);

    let mut out = [0u32; 4];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [5, 6, 7, 8]);
}

#[test]
fn test_reset_affects_all_buffers_of_the_device() {
    let device = device(GraphicsProfile::HiDef);
    let mut vb = device
        .create_vertex_buffer(VertexBufferDesc {
            vertex_stride: 4,
            vertex_count: 4,
            usage: BufferUsage::empty(),
        })
        .unwrap();
    let mut ib = device
        .create_index_buffer(IndexBufferDesc {
            element_size: IndexElementSize::SixteenBits,
            index_count: 6,
            usage: BufferUsage::empty(),
        })
        .unwrap();

    vb.set_data(&[0u32; 4], crate::graphics::SetDataOptions::None).unwrap();
    ib.set_data(&[0u16; 6], crate::graphics::SetDataOptions::None).unwrap();

    device.notify_reset();
    assert_eq!(vb.state(), crate::graphics::ResourceState::Uninitialized);
    assert_eq!(ib.state(), crate::graphics::ResourceState::Uninitialized);
}
