pub mod check;
pub mod error;
pub mod instance;
pub mod parsers;
pub mod performance;
pub mod solution;
pub mod stats;
pub mod timeline;

#[cfg(test)]
pub(crate) mod test_utils;
