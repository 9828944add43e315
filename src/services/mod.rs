pub mod lifetime_policy;


pub use lifetime_policy::{LifetimePolicy, LifetimePolicyConfig};
