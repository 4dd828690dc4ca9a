use tracing::debug;

use crate::defaults::{
    DEFAULT_COMPILE_SDK, DEFAULT_JDK_VERSION, DEFAULT_TARGETS, HILT_COMPILER, HILT_RUNTIME,
    IMPLEMENTATION_BUCKET, KSP_BUCKET,
};
use crate::error::Error;
use crate::host::HostProject;
use crate::linker::DeferredLinker;
use crate::model::{ConfigModel, ModelHandle};

/// Toolchain plugins in the order they must be applied.
///
/// The ordering requirements are internal to the plugins: Android and
/// Kotlin first, KSP before the Hilt plugin that feeds it, JaCoCo last.
/// Deviating fails inside the toolchain with diagnostics that do not point
/// back here, so the order lives in one tested constant.
pub const PLUGIN_ORDER: [&str; 5] = [
    "com.android.library",
    "org.jetbrains.kotlin.android",
    "com.google.devtools.ksp",
    "dagger.hilt.android.plugin",
    "org.gradle.jacoco",
];

/// Extension name for the target container
pub const TARGETS_EXTENSION: &str = "targets";

/// Extension name for the configuration model itself
pub const MODEL_EXTENSION: &str = "androidLibrary";

/// Apply the convention layer to a project.
///
/// Builds the configuration model with the conventional "debug" and
/// "release" targets, applies convention defaults, schedules the deferred
/// linker, applies the toolchain plugins in [`PLUGIN_ORDER`], injects the
/// Hilt coordinates, and wires every dependency bucket into the host
/// lazily.
///
/// Returns the shared model handle. Values set through it before the host
/// finishes evaluating the project still reach the toolchain: scalars via
/// the deferred linker, dependency coordinates via the lazy wiring.
///
/// Calling this a second time on the same project fails at extension
/// registration, before any plugin would be re-applied.
pub fn apply(project: &mut dyn HostProject) -> Result<ModelHandle, Error> {
    // 1. Model and extensions. Extension names are unique per project, so
    //    registration doubles as the once-per-project guard.
    project.create_extension(TARGETS_EXTENSION)?;
    project.create_extension(MODEL_EXTENSION)?;
    let model = ConfigModel::new(DEFAULT_TARGETS)?.into_handle();

    // 2. Conventions, honored only where the author has not set a value.
    {
        let mut model = model.borrow_mut();
        model.convention_jdk_version(DEFAULT_JDK_VERSION);
        model.convention_compile_sdk(DEFAULT_COMPILE_SDK);
    }

    // 3. Register the linker before any plugin is applied: hooks for the
    //    same phase run in registration order, and ours must run ahead of
    //    the hooks the Android plugin schedules for itself.
    project.after_evaluate(DeferredLinker::new(model.clone()));

    // 4. Toolchain plugins, fixed order. Failures propagate unmodified.
    for id in PLUGIN_ORDER {
        debug!(plugin = id, "applying toolchain plugin");
        project.apply_plugin(id)?;
    }

    // 5. Hilt runtime and compiler, eager.
    project.add_dependency(KSP_BUCKET, HILT_COMPILER);
    project.add_dependency(IMPLEMENTATION_BUCKET, HILT_RUNTIME);

    // 6. Wire every bucket lazily, the conventional two included even if
    //    still empty. Declarations made after this point are picked up
    //    when the host resolves the containers.
    {
        let mut model = model.borrow_mut();
        let buckets = model.dependencies_mut();
        buckets.resolve_later(KSP_BUCKET);
        buckets.resolve_later(IMPLEMENTATION_BUCKET);
        for name in buckets.names() {
            debug!(bucket = %name, "wiring dependency bucket");
            project.add_all_later(&name, buckets.resolve_later(&name));
        }
    }

    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plugin_order_is_the_known_sequence() {
        assert_eq!(
            PLUGIN_ORDER,
            [
                "com.android.library",
                "org.jetbrains.kotlin.android",
                "com.google.devtools.ksp",
                "dagger.hilt.android.plugin",
                "org.gradle.jacoco",
            ]
        );
    }

    #[test]
    fn test_ksp_precedes_hilt() {
        let ksp = PLUGIN_ORDER
            .iter()
            .position(|p| *p == "com.google.devtools.ksp")
            .unwrap();
        let hilt = PLUGIN_ORDER
            .iter()
            .position(|p| *p == "dagger.hilt.android.plugin")
            .unwrap();
        assert!(ksp < hilt);
    }
}
