//! Core domain types for pipegen.
//!
//! This crate contains:
//! - The project blueprint model
//! - Pipeline definition types (includes, stages, variables)
//! - Template path layout
//! - Pipeline derivation from a blueprint

pub mod blueprint;
pub mod derivation;
pub mod layout;
pub mod pipeline;

pub use blueprint::Blueprint;
pub use derivation::{derive, derive_pipeline};
pub use layout::TemplateLayout;
pub use pipeline::{Include, PipelineDefinition, Stage, Variables};
