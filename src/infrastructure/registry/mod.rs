pub mod inmemory;

pub use inmemory::InMemoryRegistry;
