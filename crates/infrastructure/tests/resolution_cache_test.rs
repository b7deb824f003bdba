use std::net::IpAddr;
use std::sync::Arc;
use std::time::Duration;

use pagegate_application::ports::ResolutionCachePort;
use pagegate_infrastructure::ResolutionCache;

fn addrs(list: &[&str]) -> Vec<IpAddr> {
    list.iter().map(|a| a.parse().unwrap()).collect()
}

#[test]
fn test_miss_then_hit() {
    let cache = ResolutionCache::new(16, Duration::from_secs(300));

    assert!(cache.get("example.com").is_none());

    cache.insert("example.com", addrs(&["93.184.216.34"]));
    let hit = cache.get("example.com").expect("should hit");
    assert_eq!(*hit, addrs(&["93.184.216.34"]));

    let stats = cache.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.insertions, 1);
}

#[test]
fn test_keys_are_case_insensitive() {
    let cache = ResolutionCache::new(16, Duration::from_secs(300));

    cache.insert("Example.COM", addrs(&["93.184.216.34"]));
    assert!(cache.get("example.com").is_some());
    assert!(cache.get("EXAMPLE.com").is_some());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_reinsert_supersedes() {
    let cache = ResolutionCache::new(16, Duration::from_secs(300));

    cache.insert("example.com", addrs(&["93.184.216.34"]));
    cache.insert("example.com", addrs(&["1.1.1.1", "8.8.8.8"]));

    let hit = cache.get("example.com").unwrap();
    assert_eq!(*hit, addrs(&["1.1.1.1", "8.8.8.8"]));
    assert_eq!(cache.len(), 1);
    // Same-key replacement is not an eviction.
    assert_eq!(cache.stats().evictions, 0);
}

#[test]
fn test_ttl_expiry_is_a_miss() {
    let cache = ResolutionCache::new(16, Duration::from_millis(30));

    cache.insert("example.com", addrs(&["93.184.216.34"]));
    assert!(cache.get("example.com").is_some());

    std::thread::sleep(Duration::from_millis(50));

    assert!(cache.get("example.com").is_none());
    // Lazy removal: the expired entry is gone, not just hidden.
    assert_eq!(cache.len(), 0);
}

#[test]
fn test_lru_eviction_at_capacity() {
    let cache = ResolutionCache::new(2, Duration::from_secs(300));

    cache.insert("a.example", addrs(&["1.1.1.1"]));
    cache.insert("b.example", addrs(&["2.2.2.2"]));

    // Touch a.example so b.example becomes the LRU victim.
    assert!(cache.get("a.example").is_some());

    cache.insert("c.example", addrs(&["3.3.3.3"]));

    assert!(cache.get("a.example").is_some());
    assert!(cache.get("b.example").is_none());
    assert!(cache.get("c.example").is_some());
    assert_eq!(cache.stats().evictions, 1);
}

#[test]
fn test_clear_empties_cache() {
    let cache = ResolutionCache::new(16, Duration::from_secs(300));

    cache.insert("a.example", addrs(&["1.1.1.1"]));
    cache.insert("b.example", addrs(&["2.2.2.2"]));
    cache.clear();

    assert_eq!(cache.len(), 0);
    assert!(cache.get("a.example").is_none());
}

#[test]
fn test_concurrent_access_no_torn_reads() {
    let cache = Arc::new(ResolutionCache::new(64, Duration::from_secs(300)));
    let expected = addrs(&["93.184.216.34", "1.1.1.1"]);

    let mut handles = Vec::new();
    for i in 0..8 {
        let cache = Arc::clone(&cache);
        let expected = expected.clone();
        handles.push(std::thread::spawn(move || {
            for round in 0..200 {
                let host = format!("host-{}.example", (i + round) % 16);
                cache.insert(&host, expected.clone());
                if let Some(hit) = cache.get(&host) {
                    // An entry is always a complete address list.
                    assert_eq!(*hit, expected);
                }
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
