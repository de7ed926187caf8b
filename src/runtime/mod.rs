pub mod checker;

pub use checker::CompatibilityChecker;
