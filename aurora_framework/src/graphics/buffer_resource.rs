/// Shared byte-level core behind every typed buffer object.
///
/// Owns the backend strategy and drives its lifecycle state machine:
/// lazy materialization ("generate if required"), device-reset
/// invalidation via epoch comparison, content-loss tracking for dynamic
/// buffers, and the stride scatter/gather paths. Typed buffers translate
/// their generic element slices to bytes and delegate here.

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::graphics::{
    BufferStrategy, BufferUsage, GraphicsDevice, ResourceState, SetDataOptions,
};
use crate::{aurora_bail, aurora_error};

const SOURCE: &str = "aurora::Buffer";

pub(crate) struct BufferResource {
    device: Arc<GraphicsDevice>,
    strategy: Box<dyn BufferStrategy>,
    element_count: usize,
    /// Bytes per element; fixed at construction, never mutated
    element_size: usize,
    usage: BufferUsage,
    dynamic: bool,
    /// Device reset epoch at which the native resource was last materialized
    materialized_epoch: u64,
    content_lost: bool,
}

impl BufferResource {
    pub(crate) fn new(
        device: Arc<GraphicsDevice>,
        strategy: Box<dyn BufferStrategy>,
        element_count: usize,
        element_size: usize,
        usage: BufferUsage,
        dynamic: bool,
    ) -> Self {
        let materialized_epoch = device.reset_epoch();
        Self {
            device,
            strategy,
            element_count,
            element_size,
            usage,
            dynamic,
            materialized_epoch,
            content_lost: false,
        }
    }

    // ===== ACCESSORS =====

    pub(crate) fn element_count(&self) -> usize {
        self.element_count
    }

    pub(crate) fn element_size(&self) -> usize {
        self.element_size
    }

    pub(crate) fn usage(&self) -> BufferUsage {
        self.usage
    }

    pub(crate) fn size_bytes(&self) -> usize {
        self.element_count * self.element_size
    }

    /// Lifecycle state, accounting for device resets: a materialized
    /// resource whose epoch is stale has a dead native handle and reports
    /// Uninitialized until it is rematerialized.
    pub(crate) fn state(&self) -> ResourceState {
        let state = self.strategy.state();
        if state == ResourceState::Materialized
            && self.materialized_epoch != self.device.reset_epoch()
        {
            ResourceState::Uninitialized
        } else {
            state
        }
    }

    /// Whether a device reset discarded the buffer contents since the last
    /// successful write. Only meaningful for dynamic buffers.
    pub(crate) fn is_content_lost(&self) -> bool {
        self.content_lost || self.materialized_epoch != self.device.reset_epoch()
    }

    // ===== LIFECYCLE =====

    /// Bring the native resource up to date before an operation.
    ///
    /// A stale materialization epoch means the device was reset since the
    /// resource was created: the old native handle is dead, so the strategy
    /// is invalidated and lazily rematerialized.
    fn prepare(&mut self) -> Result<()> {
        if self.strategy.state() == ResourceState::Disposed {
            aurora_bail!(SOURCE, "Buffer has been disposed");
        }

        let epoch = self.device.reset_epoch();
        if self.strategy.state() == ResourceState::Materialized && self.materialized_epoch != epoch
        {
            self.strategy.invalidate();
            if self.dynamic {
                self.content_lost = true;
            }
        }

        if self.strategy.state() == ResourceState::Uninitialized {
            self.strategy.materialize()?;
            self.materialized_epoch = epoch;
        }

        Ok(())
    }

    pub(crate) fn dispose(&mut self) {
        self.strategy.dispose();
    }

    // ===== DATA TRANSFER =====

    /// Write `bytes` (a packed run of `element_size`-byte elements) into the
    /// buffer at `offset_bytes`, stepping `target_stride` bytes per element.
    ///
    /// When the element size equals the target stride the transfer is one
    /// contiguous native write; otherwise elements are scattered one native
    /// write each. A Discard write discards on the first element only, the
    /// rest proceed as NoOverwrite.
    pub(crate) fn set_bytes(
        &mut self,
        offset_bytes: usize,
        bytes: &[u8],
        element_size: usize,
        target_stride: usize,
        options: SetDataOptions,
    ) -> Result<()> {
        let element_count = bytes.len() / element_size;
        self.check_range(offset_bytes, element_count, element_size, target_stride)?;
        self.prepare()?;

        if target_stride == element_size {
            self.strategy.write(offset_bytes, bytes, options)?;
        } else {
            for (i, chunk) in bytes.chunks_exact(element_size).enumerate() {
                let chunk_options = if i > 0 && options == SetDataOptions::Discard {
                    SetDataOptions::NoOverwrite
                } else {
                    options
                };
                self.strategy
                    .write(offset_bytes + i * target_stride, chunk, chunk_options)?;
            }
        }

        if self.dynamic {
            self.content_lost = false;
        }
        Ok(())
    }

    /// Read `out.len()` bytes worth of packed elements from the buffer at
    /// `offset_bytes`, stepping `target_stride` bytes per element.
    pub(crate) fn get_bytes(
        &mut self,
        offset_bytes: usize,
        out: &mut [u8],
        element_size: usize,
        target_stride: usize,
    ) -> Result<()> {
        if self.usage.is_write_only() {
            aurora_bail!(SOURCE, "Cannot read back a buffer created with BufferUsage::WRITE_ONLY");
        }

        let element_count = out.len() / element_size;
        self.check_range(offset_bytes, element_count, element_size, target_stride)?;
        self.prepare()?;

        if target_stride == element_size {
            self.strategy.read(offset_bytes, out)?;
        } else {
            for (i, chunk) in out.chunks_exact_mut(element_size).enumerate() {
                self.strategy.read(offset_bytes + i * target_stride, chunk)?;
            }
        }
        Ok(())
    }

    /// Validate that the addressed byte span lies inside the buffer
    fn check_range(
        &self,
        offset_bytes: usize,
        element_count: usize,
        element_size: usize,
        target_stride: usize,
    ) -> Result<()> {
        if element_count == 0 {
            return Ok(());
        }
        // Last element occupies element_size bytes, not a full stride
        let span = (element_count - 1) * target_stride + element_size;
        if offset_bytes + span > self.size_bytes() {
            aurora_bail!(
                SOURCE,
                "Range of {} bytes at offset {} exceeds buffer size {}",
                span,
                offset_bytes,
                self.size_bytes()
            );
        }
        Ok(())
    }
}

impl Drop for BufferResource {
    fn drop(&mut self) {
        self.strategy.dispose();
    }
}

// ===== ARGUMENT VALIDATION =====

/// Validate a data slice against a start/count window.
///
/// Shared by every typed set_data/get_data entry point so the contract is
/// identical regardless of backend.
pub(crate) fn validate_slice(
    source: &'static str,
    name: &'static str,
    len: usize,
    start: usize,
    count: usize,
) -> Result<()> {
    if len == 0 {
        aurora_error!(source, "Argument '{}' must not be empty", name);
        return Err(Error::ArgumentNull(name));
    }
    if count == 0 {
        return Err(crate::aurora_err!(source, "Element count must be greater than zero"));
    }
    if start + count > len {
        return Err(crate::aurora_err!(
            source,
            "Slice of length {} is too short for start {} + count {}",
            len,
            start,
            count
        ));
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "buffer_resource_tests.rs"]
mod tests;
