//! Text-splicing engine behind `duckgen`.
//!
//! [`domain`] is pure: case rendering, anchor insertion, marker search and
//! the two kit variants. [`application`] drives it through two ports,
//! [`Filesystem`](application::ports::Filesystem) and
//! [`TemplateStore`](application::ports::TemplateStore), which
//! `duckgen-adapters` implements.
//!
//! ```rust,ignore
//! use duckgen_core::prelude::*;
//!
//! let mut service = DuckService::new(Kit::StarterKit, store, filesystem);
//! service.init()?;
//! let report = service.generate("cart", &["add".into(), "remove".into()])?;
//! for notice in &report.notices {
//!     eprintln!("{notice}");
//! }
//! ```

pub mod application;
pub mod domain;
pub mod error;

pub mod prelude {
    pub use crate::application::{
        DuckService, DuckSettings, Notice, Report, TemplateService,
        ports::{Filesystem, TemplateStore},
    };
    pub use crate::domain::{CaseStyle, GeneratedFile, Kit, Template, TemplateSource, Variant};
    pub use crate::error::{DuckError, DuckResult, ErrorCategory};
}
