use std::cell::RefCell;
use std::rc::Rc;

use crate::dependencies::DependencyBuckets;
use crate::error::ConfigError;
use crate::targets::TargetRegistry;

/// Shared handle to a [`ConfigModel`].
///
/// The host lifecycle is single-threaded and phase-ordered, so shared
/// mutation goes through `Rc<RefCell<_>>`: the orchestrator hands one
/// handle to the project author and another to the deferred linker, which
/// only reads from it.
pub type ModelHandle = Rc<RefCell<ConfigModel>>;

/// A value with a convention default.
///
/// An explicit `set` always wins; a convention fills in only while the
/// value is unset. Applying a convention after an explicit set is a no-op
/// for the final value, whichever order the two calls arrive in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Convention<T> {
    explicit: Option<T>,
    convention: Option<T>,
}

impl<T: Copy> Convention<T> {
    pub fn set(&mut self, value: T) {
        self.explicit = Some(value);
    }

    pub fn convention(&mut self, value: T) {
        self.convention = Some(value);
    }

    pub fn get(&self) -> Option<T> {
        self.explicit.or(self.convention)
    }

    pub fn is_set(&self) -> bool {
        self.explicit.is_some()
    }
}

/// Declarative build configuration for a conventional Android library.
///
/// Mutable until the host's evaluation phase completes; after that the
/// deferred linker has read it and further mutation no longer reaches the
/// toolchain.
#[derive(Debug)]
pub struct ConfigModel {
    jdk_version: Convention<u32>,
    compile_sdk: Convention<u32>,
    targets: TargetRegistry,
    dependencies: DependencyBuckets,
}

impl ConfigModel {
    /// Create a model with one target per supplied name
    ///
    /// Fails if a target name repeats.
    pub fn new<I, S>(target_names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            jdk_version: Convention::default(),
            compile_sdk: Convention::default(),
            targets: TargetRegistry::new(target_names)?,
            dependencies: DependencyBuckets::new(),
        })
    }

    /// Wrap the model in the shared handle threaded through the host
    /// lifecycle
    pub fn into_handle(self) -> ModelHandle {
        Rc::new(RefCell::new(self))
    }

    pub fn set_jdk_version(&mut self, version: u32) {
        self.jdk_version.set(version);
    }

    pub fn jdk_version(&self) -> Option<u32> {
        self.jdk_version.get()
    }

    pub fn set_compile_sdk(&mut self, version: u32) {
        self.compile_sdk.set(version);
    }

    pub fn compile_sdk(&self) -> Option<u32> {
        self.compile_sdk.get()
    }

    /// Convention default for the JDK version; honored only while no
    /// explicit value exists
    pub fn convention_jdk_version(&mut self, version: u32) {
        self.jdk_version.convention(version);
    }

    /// Convention default for the compile SDK; honored only while no
    /// explicit value exists
    pub fn convention_compile_sdk(&mut self, version: u32) {
        self.compile_sdk.convention(version);
    }

    pub fn targets(&self) -> &TargetRegistry {
        &self.targets
    }

    pub fn dependencies(&self) -> &DependencyBuckets {
        &self.dependencies
    }

    pub fn dependencies_mut(&mut self) -> &mut DependencyBuckets {
        &mut self.dependencies
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convention_fills_unset_value() {
        let mut model = ConfigModel::new(["debug", "release"]).unwrap();
        assert_eq!(model.jdk_version(), None);

        model.convention_jdk_version(17);

        assert_eq!(model.jdk_version(), Some(17));
        assert!(!model.jdk_version.is_set());
    }

    #[test]
    fn test_explicit_value_wins_over_convention() {
        let mut model = ConfigModel::new(["debug", "release"]).unwrap();

        // Explicit before convention
        model.set_jdk_version(21);
        model.convention_jdk_version(17);
        assert_eq!(model.jdk_version(), Some(21));

        // Explicit after convention
        model.convention_compile_sdk(34);
        model.set_compile_sdk(35);
        assert_eq!(model.compile_sdk(), Some(35));
    }

    #[test]
    fn test_repeated_convention_is_idempotent_once_set() {
        let mut model = ConfigModel::new(["debug"]).unwrap();
        model.set_jdk_version(21);

        model.convention_jdk_version(17);
        model.convention_jdk_version(11);

        assert_eq!(model.jdk_version(), Some(21));
    }

    #[test]
    fn test_duplicate_target_fails_model_construction() {
        let result = ConfigModel::new(["debug", "debug"]);
        assert!(result.is_err());
    }
}
