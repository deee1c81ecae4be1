//! Rule-state recording and reporting

pub mod state;

pub use state::RuleStateRegistry;
