/// Null backend - no-op test double
///
/// Drives the resource state machine but has no storage: data transfers
/// fail immediately with NotSupported. Useful for exercising lifecycle and
/// validation paths without any backing memory.

use crate::error::{Error, Result};
use crate::graphics::{
    BufferStrategy, BufferStrategyDesc, GraphicsBackend, ResourceState, SetDataOptions,
};

/// No-op backend
pub struct NullGraphicsBackend;

impl NullGraphicsBackend {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NullGraphicsBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphicsBackend for NullGraphicsBackend {
    fn name(&self) -> &'static str {
        "null"
    }

    fn create_buffer_strategy(
        &mut self,
        _desc: &BufferStrategyDesc,
    ) -> Result<Box<dyn BufferStrategy>> {
        Ok(Box::new(NullBufferStrategy {
            state: ResourceState::Uninitialized,
        }))
    }
}

/// Strategy with no storage behind it
pub struct NullBufferStrategy {
    state: ResourceState,
}

impl BufferStrategy for NullBufferStrategy {
    fn state(&self) -> ResourceState {
        self.state
    }

    fn materialize(&mut self) -> Result<()> {
        if self.state == ResourceState::Disposed {
            return Err(Error::InvalidOperation(
                "Cannot materialize a disposed buffer".to_string(),
            ));
        }
        self.state = ResourceState::Materialized;
        Ok(())
    }

    fn invalidate(&mut self) {
        if self.state == ResourceState::Materialized {
            self.state = ResourceState::Uninitialized;
        }
    }

    fn write(&mut self, _offset: usize, _data: &[u8], _options: SetDataOptions) -> Result<()> {
        Err(Error::NotSupported(
            "Data transfer is not implemented in the null backend".to_string(),
        ))
    }

    fn read(&self, _offset: usize, _out: &mut [u8]) -> Result<()> {
        Err(Error::NotSupported(
            "Data transfer is not implemented in the null backend".to_string(),
        ))
    }

    fn dispose(&mut self) {
        self.state = ResourceState::Disposed;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "null_backend_tests.rs"]
mod tests;
