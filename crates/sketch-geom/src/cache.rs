// Imports
use crate::shapes::Shapeable;
use p2d::bounding_volume::Aabb;
use std::collections::HashMap;
use std::hash::Hash;

/// Memoized shape bounds, owned by the host.
///
/// Entries are keyed by the shape's identity and its version. The host bumps the version whenever
/// it mutates a shape, so stale entries are never returned. Outdated versions stay in the cache
/// until [BoundsCache::invalidate] or [BoundsCache::clear] is called.
#[derive(Debug, Clone)]
pub struct BoundsCache<K> {
    entries: HashMap<K, (u64, Aabb)>,
}

impl<K> Default for BoundsCache<K> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }
}

impl<K> BoundsCache<K>
where
    K: Hash + Eq,
{
    /// A new empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached bounds of the shape, computed when missing or outdated.
    pub fn bounds<S: Shapeable + ?Sized>(&mut self, key: K, version: u64, shape: &S) -> Aabb {
        match self.entries.get(&key) {
            Some((cached_version, bounds)) if *cached_version == version => *bounds,
            _ => {
                let bounds = shape.bounds();
                self.entries.insert(key, (version, bounds));
                bounds
            }
        }
    }

    /// The cached bounds, only when cached for exactly this version.
    pub fn get(&self, key: &K, version: u64) -> Option<Aabb> {
        self.entries
            .get(key)
            .filter(|(cached_version, _)| *cached_version == version)
            .map(|(_, bounds)| *bounds)
    }

    /// Removes the entry of the shape.
    pub fn invalidate(&mut self, key: &K) {
        self.entries.remove(key);
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
