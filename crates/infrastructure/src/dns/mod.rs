mod hickory;

pub use hickory::HickoryHostResolver;
