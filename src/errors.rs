// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! # **Error Types** - *Kernel Operation Error Handling*
//!
//! Error types for kernel operations with structured error reporting.
//! Provides context for debugging and error recovery in computational pipelines.
//!
//! ## Error Categories
//! - **Argument Errors**: Invalid distribution parameters (negative or non-finite rate)
//! - **Sampling Errors**: Failures surfaced by the pseudorandom sampling backend
//!
//! All errors include contextual message space for debugging.

use core::fmt;
use std::error::Error;

/// Error type for all kernel operations.
///
/// Each variant includes a contextual message string providing specific details
/// about the error condition, enabling precise debugging and error reporting.
#[derive(Debug, Clone)]
pub enum KernelError {
    /// Invalid arguments provided to a kernel function.
    InvalidArguments(String),

    /// Failure raised by the pseudorandom sampling backend.
    Sampling(String),
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelError::InvalidArguments(msg) => write!(f, "Invalid arguments: {}", msg),
            KernelError::Sampling(msg) => write!(f, "Sampling error: {}", msg),
        }
    }
}

impl Error for KernelError {}
