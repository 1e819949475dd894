//! Domain models for naming-guardian
//!
//! Architecture: Domain Layer - Pure business logic without infrastructure dependencies

pub mod name;
pub mod violations;
