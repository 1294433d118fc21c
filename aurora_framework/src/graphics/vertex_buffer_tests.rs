use super::*;
use crate::error::Error;
use crate::graphics::{
    GraphicsDevice, GraphicsProfile, SoftwareGraphicsBackend, VertexPositionColor,
};
use glam::{Vec3, Vec4};
use std::sync::Arc;

// ============================================================================
// Helpers
// ============================================================================

fn software_device() -> Arc<GraphicsDevice> {
    GraphicsDevice::new(
        Box::new(SoftwareGraphicsBackend::new()),
        GraphicsProfile::HiDef,
    )
}

fn create_buffer(stride: usize, count: usize, usage: BufferUsage) -> VertexBuffer {
    software_device()
        .create_vertex_buffer(VertexBufferDesc {
            vertex_stride: stride,
            vertex_count: count,
            usage,
        })
        .unwrap()
}

// ============================================================================
// Accessor tests
// ============================================================================

#[test]
fn test_accessors() {
    let buf = create_buffer(12, 100, BufferUsage::empty());
    assert_eq!(buf.vertex_count(), 100);
    assert_eq!(buf.vertex_stride(), 12);
    assert_eq!(buf.size_bytes(), 1200);
    assert_eq!(buf.usage(), BufferUsage::empty());
}

// ============================================================================
// Round-trip tests
// ============================================================================

#[test]
fn test_set_get_round_trip_floats() {
    let mut buf = create_buffer(4, 8, BufferUsage::empty());
    let data: Vec<f32> = vec![0.5, -1.0, 2.25, 3.5, 4.0, -0.125, 6.0, 7.75];
    buf.set_data(&data, SetDataOptions::None).unwrap();

    let mut out = vec![0.0f32; 8];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, data);
}

#[test]
fn test_set_get_round_trip_structured_vertices() {
    let mut buf = create_buffer(VertexPositionColor::STRIDE, 3, BufferUsage::empty());
    let triangle = [
        VertexPositionColor::new(Vec3::new(0.0, 0.5, 0.0), Vec4::new(1.0, 0.0, 0.0, 1.0)),
        VertexPositionColor::new(Vec3::new(0.5, -0.5, 0.0), Vec4::new(0.0, 1.0, 0.0, 1.0)),
        VertexPositionColor::new(Vec3::new(-0.5, -0.5, 0.0), Vec4::new(0.0, 0.0, 1.0, 1.0)),
    ];
    buf.set_data(&triangle, SetDataOptions::None).unwrap();

    let mut out = [VertexPositionColor::new(Vec3::ZERO, Vec4::ZERO); 3];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, triangle);
}

#[test]
fn test_partial_window_upload() {
    let mut buf = create_buffer(4, 4, BufferUsage::empty());
    buf.set_data(&[0u32, 0, 0, 0], SetDataOptions::None).unwrap();

    // Write elements 1..3 of the source into the buffer at byte offset 4
    let source = [10u32, 20, 30, 40];
    buf.set_data_strided(4, &source, 1, 2, 4, SetDataOptions::None)
        .unwrap();

    let mut out = [0u32; 4];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [0, 20, 30, 0]);
}

// ============================================================================
// Strided scatter/gather tests
// ============================================================================

#[test]
fn test_strided_write_interleaves() {
    // Buffer of 3 vertices, 8 bytes each (two f32 attributes). Write the
    // first attribute of each vertex through the strided path.
    let mut buf = create_buffer(8, 3, BufferUsage::empty());
    buf.set_data(&[0.0f32; 6], SetDataOptions::None).unwrap();

    let positions = [1.0f32, 2.0, 3.0];
    buf.set_data_strided(0, &positions, 0, 3, 8, SetDataOptions::None)
        .unwrap();

    let mut out = [0.0f32; 6];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [1.0, 0.0, 2.0, 0.0, 3.0, 0.0]);
}

#[test]
fn test_strided_read_gathers() {
    let mut buf = create_buffer(8, 3, BufferUsage::empty());
    buf.set_data(&[1.0f32, 10.0, 2.0, 20.0, 3.0, 30.0], SetDataOptions::None)
        .unwrap();

    // Gather the second attribute of each vertex (byte offset 4, stride 8)
    let mut seconds = [0.0f32; 3];
    buf.get_data_strided(4, &mut seconds, 0, 3, 8).unwrap();
    assert_eq!(seconds, [10.0, 20.0, 30.0]);
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_empty_data_is_argument_null() {
    let mut buf = create_buffer(4, 4, BufferUsage::empty());
    let data: [u32; 0] = [];
    let result = buf.set_data(&data, SetDataOptions::None);
    assert!(matches!(result, Err(Error::ArgumentNull(_))));
}

#[test]
fn test_window_exceeding_slice_fails() {
    let mut buf = create_buffer(4, 8, BufferUsage::empty());
    let data = [1u32, 2, 3, 4];
    let result = buf.set_data_strided(0, &data, 2, 3, 4, SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_upload_larger_than_buffer_fails() {
    let mut buf = create_buffer(4, 2, BufferUsage::empty());
    let result = buf.set_data(&[1u32, 2, 3], SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_stride_smaller_than_element_fails() {
    let mut buf = create_buffer(8, 4, BufferUsage::empty());
    let data = [0u64; 2];
    let result = buf.set_data_strided(0, &data, 0, 2, 4, SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_get_data_on_write_only_buffer_fails() {
    let mut buf = create_buffer(4, 4, BufferUsage::WRITE_ONLY);
    buf.set_data(&[1u32, 2, 3, 4], SetDataOptions::None).unwrap();

    let mut out = [0u32; 4];
    let result = buf.get_data(&mut out);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

// ============================================================================
// Lifecycle tests
// ============================================================================

#[test]
fn test_software_buffer_is_materialized_at_creation() {
    let buf = create_buffer(4, 4, BufferUsage::empty());
    assert_eq!(buf.state(), ResourceState::Materialized);
}

#[test]
fn test_dispose_then_set_data_fails() {
    let mut buf = create_buffer(4, 4, BufferUsage::empty());
    buf.dispose();
    assert_eq!(buf.state(), ResourceState::Disposed);

    let result = buf.set_data(&[1u32], SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_discard_write_succeeds() {
    let mut buf = create_buffer(4, 4, BufferUsage::empty());
    buf.set_data(&[1u32, 2, 3, 4], SetDataOptions::None).unwrap();
    buf.set_data(&[9u32, 9, 9, 9], SetDataOptions::Discard).unwrap();

    let mut out = [0u32; 4];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [9, 9, 9, 9]);
}
