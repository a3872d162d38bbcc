//! Per-call-site rate limiting.
//!
//! Each physical log statement gets an independent fixed window: a site emits
//! at most once per window, and the window restarts only on an actual
//! emission, never on a suppressed call. Sites are identified by a stable
//! [`SiteId`], derived from the source location or supplied explicitly.

use core::hash::{Hash, Hasher};

use heapless::FnvIndexMap;
use rustc_hash::FxHasher;

use crate::time::Timestamp;

/// A stable identifier distinguishing one logical log statement from another.
///
/// Ids derived from source locations are hashes; collisions between distinct
/// sites are possible and accepted, in which case the sites share a throttle
/// window.
///
/// # Examples
///
/// ```rust
/// use firmlog::SiteId;
///
/// // Derivation is deterministic per location...
/// assert_eq!(
///     SiteId::from_location("src/motor.rs", 41),
///     SiteId::from_location("src/motor.rs", 41),
/// );
/// // ...and explicit ids are always available instead.
/// assert_ne!(SiteId::from_raw(7), SiteId::from_raw(8));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct SiteId(u64);

impl SiteId {
    /// Creates an id from an explicit raw value chosen by the caller.
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Derives an id from a source-file path and line number.
    ///
    /// [`site_id!`][crate::site_id!] expands to this with the expansion
    /// site's location.
    #[must_use]
    pub fn from_location(file: &str, line: u32) -> Self {
        let mut hasher = FxHasher::default();
        file.hash(&mut hasher);
        line.hash(&mut hasher);
        Self(hasher.finish())
    }
}

/// Last-emission times per site, capacity fixed at compile time.
#[derive(Debug)]
pub(crate) struct ThrottleMap<const CAPACITY: usize> {
    last_emission: FnvIndexMap<SiteId, u64, CAPACITY>,
}

impl<const CAPACITY: usize> ThrottleMap<CAPACITY> {
    pub fn new() -> Self {
        Self {
            last_emission: FnvIndexMap::new(),
        }
    }

    /// Returns whether `site` may emit at `now`.
    ///
    /// A site that has never emitted is always ready; otherwise the window
    /// must have fully elapsed since the last emission.
    pub fn ready(&self, site: SiteId, now: Timestamp, min_interval_ms: u32) -> bool {
        match self.last_emission.get(&site) {
            None => true,
            // Counter wraparound is the clock's contract; wrapping arithmetic
            // keeps the comparison total.
            Some(&last) => {
                now.as_micros().wrapping_sub(last) > u64::from(min_interval_ms) * 1_000
            }
        }
    }

    /// Records an emission for `site` at `now`.
    ///
    /// Once the table is full, new sites are not recorded and stay
    /// unthrottled.
    pub fn record(&mut self, site: SiteId, now: Timestamp) {
        let _ = self.last_emission.insert(site, now.as_micros());
    }
}
