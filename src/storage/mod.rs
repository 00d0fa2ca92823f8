//! Record storage and seed data

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryOrderStore;
