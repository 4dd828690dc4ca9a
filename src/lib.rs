//! Convention layer for conventional Android library builds.
//!
//! A project declares build configuration (build variants, SDK versions,
//! dependency buckets) through a [`model::ConfigModel`]; [`plugin::apply`]
//! pushes that configuration into the host build tool: toolchain plugins
//! applied in a fixed order, dependency coordinates injected eagerly, and
//! a [`linker::DeferredLinker`] scheduled to run after project evaluation
//! for the toolchain state that only exists by then.
//!
//! The host itself (plugin machinery, dependency containers, extension
//! registry, evaluation lifecycle) is an opaque collaborator behind the
//! [`host::HostProject`] trait.

pub mod defaults;
pub mod dependencies;
pub mod error;
pub mod host;
pub mod linker;
pub mod manifest;
pub mod model;
pub mod plugin;
pub mod targets;

pub use dependencies::{DependencyBuckets, LazyCoordinates};
pub use error::{ConfigError, Error, ToolchainError};
pub use host::HostProject;
pub use linker::{DeferredLinker, LinkerState};
pub use manifest::{load_manifest, Manifest};
pub use model::{ConfigModel, ModelHandle};
pub use plugin::{apply, PLUGIN_ORDER};
pub use targets::{Target, TargetRegistry};
