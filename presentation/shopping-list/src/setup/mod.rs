pub mod demo;
pub mod dependency_injection;
