pub mod hydration;
pub mod job;
pub mod social;
