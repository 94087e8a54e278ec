/// Stream store adapters
mod memory;

pub use memory::InMemoryStreamStore;
