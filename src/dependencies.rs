use std::cell::RefCell;
use std::rc::Rc;

/// Shared storage for one bucket's coordinates. Views and the owning
/// bucket set alias the same vector, so late additions are visible to
/// every outstanding view.
type Coordinates = Rc<RefCell<Vec<String>>>;

/// Named, lazily consumed collections of dependency coordinates.
///
/// A bucket maps a resolution-scope name ("ksp", "implementation") to the
/// coordinates destined for it. Buckets are created on first use and never
/// fail. Consumers that must honor late declarations take a
/// [`LazyCoordinates`] view instead of snapshotting the bucket.
#[derive(Debug, Default)]
pub struct DependencyBuckets {
    // Insertion-ordered; wiring iterates buckets deterministically.
    buckets: Vec<(String, Coordinates)>,
}

impl DependencyBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a coordinate to the named bucket, creating it if absent
    pub fn add(&mut self, bucket: &str, coordinate: impl Into<String>) {
        self.entry(bucket).borrow_mut().push(coordinate.into());
    }

    /// Lazy view over the named bucket, creating it if absent.
    ///
    /// The view reflects the bucket's contents at read time, not at the
    /// time this method was called. Coordinates declared after wiring
    /// (even from the deferred-linking phase) are still picked up when
    /// the consumer resolves.
    pub fn resolve_later(&mut self, bucket: &str) -> LazyCoordinates {
        LazyCoordinates {
            coordinates: self.entry(bucket),
        }
    }

    /// Bucket names in declaration order
    pub fn names(&self) -> Vec<String> {
        self.buckets.iter().map(|(name, _)| name.clone()).collect()
    }

    /// Snapshot of a bucket's current contents; empty if the bucket does
    /// not exist
    pub fn get(&self, bucket: &str) -> Vec<String> {
        self.buckets
            .iter()
            .find(|(name, _)| name == bucket)
            .map(|(_, coordinates)| coordinates.borrow().clone())
            .unwrap_or_default()
    }

    fn entry(&mut self, bucket: &str) -> Coordinates {
        if let Some((_, coordinates)) = self.buckets.iter().find(|(name, _)| name == bucket) {
            return Rc::clone(coordinates);
        }
        let coordinates: Coordinates = Rc::new(RefCell::new(Vec::new()));
        self.buckets
            .push((bucket.to_string(), Rc::clone(&coordinates)));
        coordinates
    }
}

/// View over one dependency bucket, resolved when read, not when created
#[derive(Debug, Clone)]
pub struct LazyCoordinates {
    coordinates: Coordinates,
}

impl LazyCoordinates {
    /// Current contents, including coordinates added after this view was
    /// taken
    pub fn resolve(&self) -> Vec<String> {
        self.coordinates.borrow().clone()
    }
}
