/// Canonical vertex formats

use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec3, Vec4};

/// Position + color vertex (28 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexPositionColor {
    pub position: Vec3,
    pub color: Vec4,
}

impl VertexPositionColor {
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    pub fn new(position: Vec3, color: Vec4) -> Self {
        Self { position, color }
    }
}

/// Position + texture coordinate vertex (20 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct VertexPositionTexture {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

impl VertexPositionTexture {
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    pub fn new(position: Vec3, tex_coord: Vec2) -> Self {
        Self { position, tex_coord }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
