//! Error types and error handling for the scanner.
//!
//! This module defines the error types surfaced while scanning. It includes:
//!
//! - Error structures with source position information
//! - The unrecognised-character error variant
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
