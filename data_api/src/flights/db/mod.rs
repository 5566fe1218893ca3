#[cfg(test)]
pub mod memory;
pub mod queries;
pub mod store;
