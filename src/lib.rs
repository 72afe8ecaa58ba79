//! Explorer library exports for testing

pub mod core;
pub mod demos;
pub mod term;

#[cfg(test)]
pub mod test_support;
