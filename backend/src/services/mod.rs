//! Business logic services for the Herb Trace Platform

pub mod application;
pub mod certification;
pub mod traceability;
pub mod transaction;

pub use application::ApplicationService;
pub use certification::CertificationService;
pub use traceability::TraceabilityService;
pub use transaction::TransactionService;
