//! # Shibtools Template System
//!
//! File: cli/src/core/templating.rs
//!
//! ## Overview
//!
//! This module wraps the Tera templating engine for the boilerplate
//! generators (`shibtools gen component` / `gen manager`). Each generator
//! carries its templates embedded in the binary (via `include_str!`) and
//! renders them through `render_str` with a small string-to-string context.
//!
//! ## Architecture
//!
//! Rendering is one-shot: there is no template registry or inheritance, each
//! call compiles and renders a single template string. Autoescaping is
//! disabled because the output is C++ source text, not HTML.
//!
//! ## Examples
//!
//! ```rust
//! let mut context = HashMap::new();
//! context.insert("name".to_string(), "Camera".to_string());
//! let rendered = templating::render_str(COMPONENT_HEADER, &context)?;
//! ```
//!
use crate::core::error::{Result, ShibtoolsError};
use anyhow::anyhow;
use std::collections::HashMap;
use tera::Tera;

/// Renders a single template string against a string-valued context.
///
/// # Arguments
///
/// * `template` - The Tera template text.
/// * `context_map` - Variables made available to the template.
///
/// # Errors
///
/// Returns an `Err` if the context cannot be serialized or the template
/// fails to parse or render (e.g. syntax errors, missing variables).
pub fn render_str(template: &str, context_map: &HashMap<String, String>) -> Result<String> {
    let tera_context = tera::Context::from_serialize(context_map).map_err(|e| {
        anyhow!(ShibtoolsError::Template { source: e })
            .context("Failed to create Tera context from map")
    })?;

    Tera::one_off(template, &tera_context, false)
        .map_err(|e| anyhow!(ShibtoolsError::Template { source: e }).context("Tera rendering failed"))
}
