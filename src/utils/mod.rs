pub mod error;
pub mod logger;
pub mod non_finite;
pub mod validation;
