use crate::dependencies::LazyCoordinates;
use crate::error::Error;
use crate::linker::DeferredLinker;

/// Handle to the host build tool's project.
///
/// The host is an opaque collaborator: plugin machinery, dependency
/// containers, the extension registry and the evaluation lifecycle are its
/// business; this crate only drives them and surfaces their failures
/// unmodified. The handle is passed explicitly through every call rather
/// than read from ambient state.
pub trait HostProject {
    /// Apply a toolchain plugin by id.
    ///
    /// The host detects double application and rejects it; opaque plugin
    /// failures propagate as [`crate::ToolchainError`].
    fn apply_plugin(&mut self, id: &str) -> Result<(), Error>;

    /// Register a named extension on the project. Extension names are
    /// unique per project; a repeat registration fails.
    fn create_extension(&mut self, name: &str) -> Result<(), Error>;

    /// Eagerly add a dependency coordinate to a resolution container,
    /// creating the container if the host does not know it yet.
    fn add_dependency(&mut self, container: &str, coordinate: &str);

    /// Additively wire a lazy view into a resolution container.
    ///
    /// The host reads the view when it resolves the container, not now, so
    /// coordinates declared after this call are still honored. Never a
    /// snapshot copy.
    fn add_all_later(&mut self, container: &str, coordinates: LazyCoordinates);

    /// Schedule a linker to run when project evaluation completes.
    ///
    /// Hooks registered for the same phase run in registration order.
    fn after_evaluate(&mut self, linker: DeferredLinker);

    /// Store a property on toolchain state that only exists after
    /// evaluation.
    fn set_property(&mut self, key: &str, value: &str) -> Result<(), Error>;
}
