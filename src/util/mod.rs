#![warn(missing_docs)]

#[cfg(test)]
pub mod alloc;
pub mod error;
#[cfg(test)]
pub mod panic;
pub mod result;
