// src/lib.rs
// token-duration - Token time-to-live granularity
//
// Architecture:
// - Domain-centric: the duration type and lifetime rules live in the domain
// - Explicit: lookups report misses as None, never as errors or panics
// - Canonical names: the exact-case name is the only wire/storage form
// - Services: policy decisions for absent or unknown input sit above the domain

pub mod domain;
pub mod error;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    validate_token_lifetime, DomainError, DomainResult, TokenDurationType, TokenLifetime,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services
// ============================================================================

pub use services::{LifetimePolicy, LifetimePolicyConfig};
