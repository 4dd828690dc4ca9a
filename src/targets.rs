use crate::error::ConfigError;

/// A named build variant (e.g. "debug", "release")
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    name: String,
}

impl Target {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Ordered set of build variants, unique by name.
///
/// Membership is fixed at construction; the conventional layout is exactly
/// two targets, but the registry is generic over any name sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetRegistry {
    targets: Vec<Target>,
}

impl TargetRegistry {
    /// Build a registry from an ordered sequence of names
    ///
    /// Fails if a name repeats; target names address toolchain state and
    /// must be unambiguous.
    pub fn new<I, S>(names: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut targets: Vec<Target> = Vec::new();
        for name in names {
            let name = name.into();
            if targets.iter().any(|t| t.name == name) {
                return Err(ConfigError::DuplicateTarget(name));
            }
            targets.push(Target { name });
        }
        Ok(Self { targets })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t.name == name)
    }

    /// Target names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.targets.iter().map(|t| t.name.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Target> {
        self.targets.iter()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
