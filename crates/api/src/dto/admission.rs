use serde::Serialize;

#[derive(Serialize, Debug)]
pub struct AdmissionStatsResponse {
    pub size: usize,
    pub max: usize,
    pub allowed: u64,
    pub denied: u64,
    pub evictions: u64,
}
