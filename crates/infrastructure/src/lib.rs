//! PageGate Infrastructure Layer
//!
//! Adapters behind the application ports: the hickory DNS resolver, the
//! bounded resolution cache, the sliding-window admission store, and the
//! guarded HTTP page fetcher.
pub mod admission;
pub mod cache;
pub mod dns;
pub mod fetch;

pub use admission::SlidingWindowStore;
pub use cache::ResolutionCache;
pub use dns::HickoryHostResolver;
pub use fetch::HttpPageFetcher;
