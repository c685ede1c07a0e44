pub mod classify;
pub mod data;
