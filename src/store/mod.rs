//! Store layer: the in-memory mock API.
//!
//! Emulates a remote CRUD backend over two in-memory collections, including
//! simulated latency and randomized failure injection applied uniformly by a
//! single policy object.
//!
//! # Modules
//!
//! - `backend`: [`Store`] trait the app layer dispatches against
//! - `memory`: in-memory implementation owning the collections
//! - `fault`: latency/failure injection policy
//! - `seed`: synthetic seed data generation

pub mod backend;
pub mod fault;
pub mod memory;
pub mod seed;

pub use backend::Store;
pub use fault::{FaultPolicy, DEFAULT_FAILURE_RATE};
pub use memory::MemoryStore;
