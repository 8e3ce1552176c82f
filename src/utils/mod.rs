// Shared helpers

pub mod validation;
pub mod task;
pub mod storage;
