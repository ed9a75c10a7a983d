//! Revisioned TTL cache for fetched listing documents.
//!
//! Listing pages fetch the same document repeatedly during a session; this
//! cache lets them skip the round-trip. Each entry is keyed by the listing
//! id plus an externally supplied revision hint. Bumping the hint (for
//! example to the content-deploy timestamp) strands every entry stored
//! under the old hint without tracking individual ids; the TTL is the
//! self-healing backstop when nobody remembers to bump it.
//!
//! The cache is an explicit owned value, passed to whoever needs it; it is
//! single-threaded by design and holds no locks. Wrap it in a mutex if it
//! ever has to cross threads.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::config::DEFAULT_LISTING_CACHE_TTL;

// =============================================================================
// Time Source
// =============================================================================

/// Time source for entry ages, injectable so expiry is testable.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time source used outside tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

// =============================================================================
// Cache
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    subject: String,
    revision: String,
}

impl CacheKey {
    fn new(subject_id: &str, revision: Option<&str>) -> Self {
        Self {
            subject: subject_id.to_string(),
            revision: revision.unwrap_or_default().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
struct CacheEntry<T> {
    payload: T,
    stored_at: Instant,
}

/// In-memory cache of fetched listing documents, keyed by
/// `(subject id, revision hint)`.
///
/// Entries have no size bound and live until they expire on read or are
/// explicitly invalidated. `get` hands out clones, so a caller can freely
/// mutate what it receives without corrupting a later read; payload types
/// should own their data for that to hold.
#[derive(Debug)]
pub struct ListingCache<T, C = SystemClock> {
    entries: HashMap<CacheKey, CacheEntry<T>>,
    default_ttl: Duration,
    clock: C,
}

impl<T: Clone> ListingCache<T> {
    /// Cache with the default TTL and wall-clock time.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_LISTING_CACHE_TTL)
    }

    /// Cache with a custom default TTL. `Duration::ZERO` disables expiry.
    pub fn with_ttl(default_ttl: Duration) -> Self {
        Self::with_clock(default_ttl, SystemClock)
    }
}

impl<T: Clone> Default for ListingCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, C: Clock> ListingCache<T, C> {
    /// Cache with an explicit time source.
    pub fn with_clock(default_ttl: Duration, clock: C) -> Self {
        Self {
            entries: HashMap::new(),
            default_ttl,
            clock,
        }
    }

    /// Look up a cached payload.
    ///
    /// The effective TTL is `ttl_override` when given, the cache default
    /// otherwise; an entry older than that is evicted and reported as a
    /// miss. An empty `subject_id` is always a miss.
    pub fn get(
        &mut self,
        subject_id: &str,
        revision: Option<&str>,
        ttl_override: Option<Duration>,
    ) -> Option<T> {
        if subject_id.is_empty() {
            return None;
        }
        let key = CacheKey::new(subject_id, revision);
        let ttl = ttl_override.unwrap_or(self.default_ttl);

        if let Some(entry) = self.entries.get(&key) {
            let fresh =
                ttl.is_zero() || self.clock.now().duration_since(entry.stored_at) <= ttl;
            if fresh {
                trace!(subject = %key.subject, revision = %key.revision, "listing cache hit");
                return Some(entry.payload.clone());
            }
        } else {
            trace!(subject = %key.subject, revision = %key.revision, "listing cache miss");
            return None;
        }

        debug!(subject = %key.subject, revision = %key.revision, "evicting expired listing");
        self.entries.remove(&key);
        None
    }

    /// Store a payload, overwriting any entry under the same key and
    /// resetting its timestamp. An empty `subject_id` is a no-op.
    pub fn set(&mut self, subject_id: &str, payload: T, revision: Option<&str>) {
        if subject_id.is_empty() {
            return;
        }
        let key = CacheKey::new(subject_id, revision);
        trace!(subject = %key.subject, revision = %key.revision, "storing listing");
        self.entries.insert(
            key,
            CacheEntry {
                payload,
                stored_at: self.clock.now(),
            },
        );
    }

    /// Remove the entry stored under exactly this subject and revision
    /// (`None` addresses the empty-revision entry).
    pub fn invalidate(&mut self, subject_id: &str, revision: Option<&str>) {
        if subject_id.is_empty() {
            return;
        }
        let key = CacheKey::new(subject_id, revision);
        if self.entries.remove(&key).is_some() {
            debug!(subject = %key.subject, revision = %key.revision, "invalidated listing");
        }
    }

    /// Remove every revision of a subject.
    pub fn invalidate_subject(&mut self, subject_id: &str) {
        if subject_id.is_empty() {
            return;
        }
        let before = self.entries.len();
        self.entries.retain(|key, _| key.subject != subject_id);
        let removed = before - self.entries.len();
        if removed > 0 {
            debug!(subject = %subject_id, removed, "invalidated all revisions");
        }
    }

    /// Number of stored entries, including any not yet expired on read.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
