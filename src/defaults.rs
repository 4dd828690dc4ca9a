/// Convention defaults for conventional Android libraries
///
/// These defaults track the versions the convention layer is validated
/// against. Projects are not locked to them - an explicit value set on
/// the configuration model always wins over a convention.

/// Default JDK version (LTS)
pub const DEFAULT_JDK_VERSION: u32 = 17;

/// Default Android compile SDK version
pub const DEFAULT_COMPILE_SDK: u32 = 34;

/// Hilt version shared by the runtime and its compiler
///
/// IMPORTANT: the runtime and compiler coordinates below must carry the
/// same version, or KSP generates bindings the runtime cannot load.
pub const HILT_VERSION: &str = "2.50";

/// Dependency-injection runtime coordinate
pub const HILT_RUNTIME: &str = "com.google.dagger:hilt-android:2.50";

/// Dependency-injection compiler coordinate, consumed by KSP
pub const HILT_COMPILER: &str = "com.google.dagger:hilt-android-compiler:2.50";

/// Annotation-processing dependency bucket
pub const KSP_BUCKET: &str = "ksp";

/// Compile-and-runtime dependency bucket
pub const IMPLEMENTATION_BUCKET: &str = "implementation";

/// Build variants every conventional library gets
pub const DEFAULT_TARGETS: [&str; 2] = ["debug", "release"];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        // SDK versions should be reasonable
        assert!(DEFAULT_JDK_VERSION >= 11);
        assert!(DEFAULT_COMPILE_SDK >= 33); // Android 13+

        // Coordinates should have group:artifact:version format
        for coordinate in [HILT_RUNTIME, HILT_COMPILER] {
            let parts: Vec<&str> = coordinate.split(':').collect();
            assert_eq!(parts.len(), 3, "bad coordinate: {}", coordinate);
            assert!(parts.iter().all(|p| !p.is_empty()));
        }

        // Runtime and compiler must agree on the Hilt version
        assert!(HILT_RUNTIME.ends_with(HILT_VERSION));
        assert!(HILT_COMPILER.ends_with(HILT_VERSION));
    }

    #[test]
    fn test_default_targets_are_unique() {
        let (a, b) = (DEFAULT_TARGETS[0], DEFAULT_TARGETS[1]);
        assert_ne!(a, b);
    }
}
