//! Route handlers.

pub mod employees;
pub mod graph;
pub mod meta;
pub mod relationships;
pub mod seed;
