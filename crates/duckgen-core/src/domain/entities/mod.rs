pub mod generated_file;
pub mod template;

pub use generated_file::GeneratedFile;
pub use template::{ResolvedTemplate, Template, TemplateSource};
