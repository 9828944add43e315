//! Token Duration Invariants:
//!
//! 1. Codes are contiguous from 0 in declaration order
//! 2. Code <-> canonical name is a bijection
//! 3. The set of duration types is fixed at compile time
//! 4. Lookups report misses as `None`, never as errors
//! 5. PERPETUAL lifetimes never expire

pub mod entity;
pub mod invariants;
pub mod lifetime;

pub use entity::TokenDurationType;
pub use invariants::validate_token_lifetime;
pub use lifetime::TokenLifetime;
