use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct CacheStatsResponse {
    pub size: usize,
    pub max: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub evictions: u64,
}
