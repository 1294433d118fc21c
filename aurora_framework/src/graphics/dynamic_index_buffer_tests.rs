use super::*;
use crate::graphics::{
    GraphicsDevice, GraphicsProfile, IndexBufferDesc, SoftwareGraphicsBackend,
};
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

fn create_dynamic(device: &Arc<GraphicsDevice>, count: usize) -> DynamicIndexBuffer {
    device
        .create_dynamic_index_buffer(IndexBufferDesc {
            element_size: IndexElementSize::SixteenBits,
            index_count: count,
            usage: BufferUsage::empty(),
        })
        .unwrap()
}

// ============================================================================
// Tests
// ============================================================================

#[test]
fn test_set_data_round_trip() {
    let device = software_device();
    let mut buf = create_dynamic(&device, 6);

    buf.set_data(&[0u16, 1, 2, 2, 1, 3]).unwrap();

    let mut out = [0u16; 6];
    buf.get_data(&mut out).unwrap();
    assert_eq!(out, [0, 1, 2, 2, 1, 3]);
}

#[test]
fn test_reset_loses_content_until_rewritten() {
    let device = software_device();
    let mut buf = create_dynamic(&device, 6);
    buf.set_data(&[0u16, 1, 2, 2, 1, 3]).unwrap();
    assert!(!buf.is_content_lost());

    device.notify_reset();
    assert!(buf.is_content_lost());

    buf.set_data(&[3u16, 1, 2, 2, 1, 0]).unwrap();
    assert!(!buf.is_content_lost());
}

#[test]
fn test_element_width_still_enforced() {
    let device = software_device();
    let mut buf = create_dynamic(&device, 6);
    let result = buf.set_data(&[0u32, 1, 2]);
    assert!(result.is_err());
}

#[test]
fn test_accessors_forward_to_inner() {
    let device = software_device();
    let buf = create_dynamic(&device, 6);
    assert_eq!(buf.index_count(), 6);
    assert_eq!(buf.index_element_size(), IndexElementSize::SixteenBits);
    assert_eq!(buf.state(), ResourceState::Materialized);
}
