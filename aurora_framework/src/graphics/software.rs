/// Software backend - CPU-side reference implementation
///
/// Fully functional backend backing every buffer with a plain byte store.
/// Used by the test suite and anywhere a headless device is needed. Unlike
/// the OpenGL backend it allocates eagerly at creation time, modeling the
/// pre-allocating behavior of immediate-mode native APIs.

use crate::aurora_bail;
use crate::error::Result;
use crate::graphics::{
    BufferStrategy, BufferStrategyDesc, GraphicsBackend, ResourceState, SetDataOptions,
};

const SOURCE: &str = "aurora::software";

/// CPU-side backend
pub struct SoftwareGraphicsBackend;

impl SoftwareGraphicsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SoftwareGraphicsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsBackend for SoftwareGraphicsBackend {
    fn name(&self) -> &'static str {
        "software"
    }

    fn create_buffer_strategy(
        &mut self,
        desc: &BufferStrategyDesc,
    ) -> Result<Box<dyn BufferStrategy>> {
        let mut strategy = SoftwareBufferStrategy::new(desc.size_bytes);
        // Eager allocation at creation
        strategy.materialize()?;
        Ok(Box::new(strategy))
    }
}

/// Byte-store buffer strategy
pub struct SoftwareBufferStrategy {
    size: usize,
    state: ResourceState,
    storage: Vec<u8>,
}

impl SoftwareBufferStrategy {
    fn new(size: usize) -> Self {
        Self {
            size,
            state: ResourceState::Uninitialized,
            storage: Vec::new(),
        }
    }
}

impl BufferStrategy for SoftwareBufferStrategy {
    fn state(&self) -> ResourceState {
        self.state
    }

    fn materialize(&mut self) -> Result<()> {
        match self.state {
            ResourceState::Materialized => Ok(()),
            ResourceState::Disposed => {
                aurora_bail!(SOURCE, "Cannot materialize a disposed buffer")
            }
            ResourceState::Uninitialized => {
                self.storage = vec![0; self.size];
                self.state = ResourceState::Materialized;
                Ok(())
            }
        }
    }

    fn invalidate(&mut self) {
        if self.state == ResourceState::Materialized {
            self.storage = Vec::new();
            self.state = ResourceState::Uninitialized;
        }
    }

    fn write(&mut self, offset: usize, data: &[u8], options: SetDataOptions) -> Result<()> {
        if self.state != ResourceState::Materialized {
            aurora_bail!(SOURCE, "Write on a buffer that is not materialized");
        }
        if offset + data.len() > self.size {
            aurora_bail!(
                SOURCE,
                "Write of {} bytes at offset {} exceeds buffer size {}",
                data.len(),
                offset,
                self.size
            );
        }
        if options == SetDataOptions::Discard {
            // Fresh storage, old contents abandoned
            self.storage = vec![0; self.size];
        }
        self.storage[offset..offset + data.len()].copy_from_slice(data);
        Ok(())
    }

    fn read(&self, offset: usize, out: &mut [u8]) -> Result<()> {
        if self.state != ResourceState::Materialized {
            aurora_bail!(SOURCE, "Read on a buffer that is not materialized");
        }
        if offset + out.len() > self.size {
            aurora_bail!(
                SOURCE,
                "Read of {} bytes at offset {} exceeds buffer size {}",
                out.len(),
                offset,
                self.size
            );
        }
        out.copy_from_slice(&self.storage[offset..offset + out.len()]);
        Ok(())
    }

    fn dispose(&mut self) {
        self.storage = Vec::new();
        self.state = ResourceState::Disposed;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "software_tests.rs"]
mod tests;
