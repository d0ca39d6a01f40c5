//! Animation Cache
//!
//! Memoizes frame lists by key (typically `character/skin/animation`) so
//! several controllers can share one set of loaded frames. Each caller gets
//! its own `FrameSequence` with its own clock; only the handles are shared.
//!
//! The cache is an ordinary value owned by whoever loads frames, so its
//! lifetime and invalidation are explicit.

use std::collections::HashMap;

use super::sequence::FrameSequence;

/// Keyed store of frame lists.
#[derive(Debug, Clone)]
pub struct AnimationCache<F> {
    entries: HashMap<String, Vec<F>>,
    hits: u64,
    misses: u64,
}

impl<F> AnimationCache<F> {
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Return the cached frames for `key`, running `load` on a miss.
    ///
    /// Loader errors are returned as-is and nothing is cached, so the next
    /// call retries.
    pub fn get_or_load<E>(
        &mut self,
        key: &str,
        load: impl FnOnce(&str) -> Result<Vec<F>, E>,
    ) -> Result<&[F], E> {
        if self.entries.contains_key(key) {
            self.hits += 1;
        } else {
            self.misses += 1;
            let frames = load(key)?;
            self.entries.insert(key.to_string(), frames);
        }
        Ok(self.entries.get(key).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Store frames directly, replacing any previous entry
    pub fn insert(&mut self, key: impl Into<String>, frames: Vec<F>) {
        self.entries.insert(key.into(), frames);
    }

    pub fn get(&self, key: &str) -> Option<&[F]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Forget one entry. Returns true if it was cached.
    pub fn invalidate(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Forget everything (counters are kept)
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<F: Clone> AnimationCache<F> {
    /// Fresh sequence over the cached frames for `key`, if cached
    pub fn sequence(&self, key: &str, frame_rate: u32, looping: bool) -> Option<FrameSequence<F>> {
        self.entries
            .get(key)
            .map(|frames| FrameSequence::new(frames.clone(), frame_rate, looping))
    }
}

impl<F> Default for AnimationCache<F> {
    fn default() -> Self {
        Self::new()
    }
}
