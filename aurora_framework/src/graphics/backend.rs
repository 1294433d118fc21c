/// GraphicsBackend trait and backend registry

use rustc_hash::FxHashMap;
use std::sync::Arc;

use crate::aurora_info;
use crate::error::{Error, Result};
use crate::graphics::{BufferStrategy, BufferStrategyDesc, GraphicsDevice, GraphicsProfile};

/// Factory interface implemented by every graphics backend.
///
/// A backend owns the native context (GL context, byte store, ...) and
/// mints one [`BufferStrategy`] per buffer resource. The strategy captures
/// whatever shared context it needs; the backend object itself is only
/// touched at resource-creation time, under the device's context lock.
pub trait GraphicsBackend {
    /// Backend name (e.g. "opengl", "software")
    fn name(&self) -> &'static str;

    /// Create a buffer strategy for the given descriptor
    fn create_buffer_strategy(&mut self, desc: &BufferStrategyDesc) -> Result<Box<dyn BufferStrategy>>;
}

/// Backend factory function type
type BackendFactory = Box<dyn Fn() -> Result<Box<dyn GraphicsBackend>>>;

/// Registry mapping backend names to factories.
///
/// An explicit object owned by the caller, not process-global state:
/// construct one, register the backends the application links in, then
/// create devices through it.
///
/// # Example
///
/// ```
/// use aurora_framework::graphics::{BackendRegistry, GraphicsProfile, SoftwareGraphicsBackend};
///
/// let mut registry = BackendRegistry::new();
/// registry.register("software", || Ok(Box::new(SoftwareGraphicsBackend::new())));
/// let device = registry.create_device("software", GraphicsProfile::HiDef)?;
/// # Ok::<(), aurora_framework::aurora::Error>(())
/// ```
pub struct BackendRegistry {
    factories: FxHashMap<&'static str, BackendFactory>,
}

impl BackendRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            factories: FxHashMap::default(),
        }
    }

    /// Register a backend factory under `name`.
    ///
    /// Registering the same name twice replaces the previous factory.
    pub fn register<F>(&mut self, name: &'static str, factory: F)
    where
        F: Fn() -> Result<Box<dyn GraphicsBackend>> + 'static,
    {
        self.factories.insert(name, Box::new(factory));
    }

    /// Whether a backend is registered under `name`
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Names of all registered backends
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.factories.keys().copied()
    }

    /// Create a graphics device using the backend registered under `name`
    ///
    /// # Errors
    ///
    /// Returns `InitializationFailed` if no backend is registered under
    /// `name` or the backend factory fails.
    pub fn create_device(&self, name: &str, profile: GraphicsProfile) -> Result<Arc<GraphicsDevice>> {
        let factory = self.factories.get(name).ok_or_else(|| {
            Error::InitializationFailed(format!("Backend '{}' not found in registry", name))
        })?;
        let backend = factory()?;
        aurora_info!(
            "aurora::BackendRegistry",
            "Created graphics device with backend '{}' ({:?} profile)",
            name,
            profile
        );
        Ok(GraphicsDevice::new(backend, profile))
    }
}

impl Default for BackendRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "backend_tests.rs"]
mod tests;
