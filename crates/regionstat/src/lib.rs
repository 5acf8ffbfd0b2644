//! Top-level facade crate for regionstat.
//!
//! Re-exports the core engine and the HTTP gateway so users can depend on a single crate.

pub mod core {
    pub use regionstat_core::*;
}

pub mod gateway {
    pub use regionstat_gateway::*;
}
