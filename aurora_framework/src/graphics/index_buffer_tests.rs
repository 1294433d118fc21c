use super::*;
use crate::error::Error;
use crate::graphics::{GraphicsDevice, GraphicsProfile, SoftwareGraphicsBackend};
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

fn create_buffer(
    element_size: IndexElementSize,
    count: usize,
    usage: BufferUsage,
) -> IndexBuffer {
    software_device()
        .create_index_buffer(IndexBufferDesc {
            element_size,
            index_count: count,
            usage,
        })
        .unwrap()
}

// ============================================================================
// Accessor tests
// ============================================================================

#[test]
fn test_accessors() {
    let buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    assert_eq!(buf.index_count(), 6);
    assert_eq!(buf.index_element_size(), IndexElementSize::SixteenBits);
    assert_eq!(buf.size_bytes(), 12);
}

// ============================================================================
// Round-trip tests
// ============================================================================

#[test]
fn test_quad_indices_round_trip() {
    // Two triangles of a quad
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    let indices: [u16; 6] = [0, 1, 2, 2, 1, 3];
    buf.set_data(&indices, SetDataOptions::None).unwrap();

    let mut out = [0u16; 6];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [0, 1, 2, 2, 1, 3]);
}

#[test]
fn test_thirty_two_bit_round_trip() {
    let mut buf = create_buffer(IndexElementSize::ThirtyTwoBits, 3, BufferUsage::empty());
    let indices: [u32; 3] = [70_000, 70_001, 70_002];
    buf.set_data(&indices, SetDataOptions::None).unwrap();

    let mut out = [0u32; 3];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, indices);
}

#[test]
fn test_range_write_at_offset() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 4, BufferUsage::empty());
    buf.set_data(&[0u16, 0, 0, 0], SetDataOptions::None).unwrap();

    let source = [7u16, 8, 9];
    buf.set_data_range(4, &source, 1, 2, SetDataOptions::None).unwrap();

    let mut out = [0u16; 4];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [0, 0, 8, 9]);
}

#[test]
fn test_range_read_at_offset() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 4, BufferUsage::empty());
    buf.set_data(&[1u16, 2, 3, 4], SetDataOptions::None).unwrap();

    let mut out = [0u16; 2];
    buf.get_data_range(4, &mut out, 0, 2).unwrap();
    assert_eq!(out, [3, 4]);
}

// ============================================================================
// Validation tests
// ============================================================================

#[test]
fn test_element_type_width_mismatch_fails() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    let result = buf.set_data(&[0u32, 1, 2], SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_empty_data_is_argument_null() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    let data: [u16; 0] = [];
    let result = buf.set_data(&data, SetDataOptions::None);
    assert!(matches!(result, Err(Error::ArgumentNull(_))));
}

#[test]
fn test_window_exceeding_slice_fails() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    let data = [0u16, 1, 2];
    let result = buf.set_data_range(0, &data, 1, 3, SetDataOptions::None);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

#[test]
fn test_get_data_on_write_only_buffer_fails() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::WRITE_ONLY);
    buf.set_data(&[0u16, 1, 2, 2, 1, 3], SetDataOptions::None).unwrap();

    let mut out = [0u16; 6];
    let result = buf.get_data(&mut out);
    assert!(matches!(result, Err(Error::InvalidOperation(_))));
}

// ============================================================================
// Lifecycle tests
// ============================================================================

#[test]
fn test_dispose_is_idempotent() {
    let mut buf = create_buffer(IndexElementSize::SixteenBits, 6, BufferUsage::empty());
    buf.dispose();
    buf.dispose();
    assert_eq!(buf.state(), ResourceState::Disposed);
}
