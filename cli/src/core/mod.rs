//! # Shibtools Core Infrastructure
//!
//! File: cli/src/core/mod.rs
//!
//! ## Overview
//!
//! This module aggregates the core infrastructure components that provide
//! foundational functionality for the shibtools CLI. These components
//! handle configuration, error management, and templating.
//!
//! ## Architecture
//!
//! The core infrastructure consists of three key components:
//! - `config`: Configuration loading, merging, and validation
//! - `error`: Error types and error handling utilities
//! - `templating`: Template rendering for the C++ boilerplate generators
//!
//! ## Usage
//!
//! Core infrastructure is imported by command handlers:
//!
//! ```rust
//! use crate::core::config; // For loading configuration
//! use crate::core::error::{Result, ShibtoolsError}; // For error handling
//! use crate::core::templating; // For boilerplate template rendering
//! ```
//!
pub mod config;
pub mod error;
pub mod templating;
