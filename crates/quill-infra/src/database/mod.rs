//! Post storage: SeaORM-backed and in-memory repositories.

mod memory;

#[cfg(feature = "database")]
mod connections;
#[cfg(feature = "database")]
pub mod entity;
#[cfg(feature = "database")]
mod sea_base;
#[cfg(feature = "database")]
mod sea_repo;

pub use memory::InMemoryPostRepository;

#[cfg(feature = "database")]
pub use connections::{DatabaseConfig, connect};
#[cfg(feature = "database")]
pub use sea_base::SeaOrmBaseRepository;
#[cfg(feature = "database")]
pub use sea_repo::SeaOrmPostRepository;
