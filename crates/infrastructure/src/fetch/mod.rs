mod http_fetcher;

pub use http_fetcher::HttpPageFetcher;
