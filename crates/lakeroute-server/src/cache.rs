use chrono::{DateTime, Utc};
use dashmap::DashMap;
use lakeroute_core::{RouteMetrics, RouteRequest, RouteResponse};
use std::hash::Hash;
use std::time::{Duration, Instant};

pub trait CacheEntry {
    fn fetched_at(&self) -> Instant;
}

pub fn prune_cache<K, V>(cache: &DashMap<K, V>, max_entries: usize, max_age: Duration)
where
    K: Clone + Eq + Hash,
    V: CacheEntry,
{
    let now = Instant::now();
    let mut entries: Vec<(K, Instant)> = cache
        .iter()
        .map(|entry| (entry.key().clone(), entry.value().fetched_at()))
        .collect();

    for (key, fetched_at) in &entries {
        if now.duration_since(*fetched_at) > max_age {
            cache.remove(key);
        }
    }

    if cache.len() <= max_entries {
        return;
    }

    entries.sort_by_key(|(_, fetched_at)| *fetched_at);
    for (key, _) in entries {
        if cache.len() <= max_entries {
            break;
        }
        cache.remove(&key);
    }
}

/// Endpoints rounded to 4 decimals plus the vessel parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteCacheKey(String);

impl RouteCacheKey {
    pub fn from_request(request: &RouteRequest) -> Self {
        let vessel = &request.vessel;
        Self(format!(
            "{:.4}|{:.4}|{:.4}|{:.4}|{}|{}|{}",
            request.start_lon,
            request.start_lat,
            request.dest_lon,
            request.dest_lat,
            vessel.draft_m,
            vessel.ice_class,
            vessel.speed_knots
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone)]
pub struct CachedRoute {
    pub response: RouteResponse,
    pub metrics: RouteMetrics,
    pub computed_at: DateTime<Utc>,
    fetched_at: Instant,
}

impl CachedRoute {
    pub fn new(response: RouteResponse, metrics: RouteMetrics) -> Self {
        Self {
            response,
            metrics,
            computed_at: Utc::now(),
            fetched_at: Instant::now(),
        }
    }
}

impl CacheEntry for CachedRoute {
    fn fetched_at(&self) -> Instant {
        self.fetched_at
    }
}

/// Bounded cache of computed route responses.
pub struct RouteCache {
    entries: DashMap<RouteCacheKey, CachedRoute>,
    max_entries: usize,
    ttl: Duration,
}

impl RouteCache {
    pub fn new(max_entries: usize, ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            max_entries,
            ttl,
        }
    }

    pub fn get(&self, key: &RouteCacheKey) -> Option<CachedRoute> {
        let entry = self.entries.get(key)?;
        if entry.fetched_at.elapsed() > self.ttl {
            drop(entry);
            self.entries.remove(key);
            return None;
        }
        Some(entry.value().clone())
    }

    pub fn insert(&self, key: RouteCacheKey, route: CachedRoute) {
        if self.max_entries == 0 {
            return;
        }
        self.entries.insert(key, route);
        prune_cache(&self.entries, self.max_entries, self.ttl);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
