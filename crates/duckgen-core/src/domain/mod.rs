//! Core domain layer for duckgen.
//!
//! Pure text logic with no I/O: case rendering, anchor splicing, marker
//! search and the per-kit configuration records. Reading and writing files
//! is done by the application layer through ports.

pub mod anchor;
pub mod case;
pub mod entities;
pub mod error;
pub mod marker;
pub mod variant;

mod validation;

pub use anchor::{AnchorPosition, Insertion, insert_after};
pub use case::{CaseStyle, named_function, render, render_placeholders};
pub use entities::{GeneratedFile, ResolvedTemplate, Template, TemplateSource};
pub use error::{DomainError, ErrorCategory};
pub use marker::find_marker;
pub use validation::DomainValidator;
pub use variant::{Kit, Variant};
