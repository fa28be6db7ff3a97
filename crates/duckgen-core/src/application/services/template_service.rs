//! Template Service - logical template name to content and filename.

use tracing::debug;

use crate::{
    application::ports::TemplateStore,
    domain::{Kit, ResolvedTemplate, Template},
    error::DuckResult,
};

/// Service for template lookups.
pub struct TemplateService {
    store: Box<dyn TemplateStore>,
}

impl TemplateService {
    /// Create a new template service.
    pub fn new(store: Box<dyn TemplateStore>) -> Self {
        Self { store }
    }

    /// Resolve `name` for `target`.
    ///
    /// The returned filename has its placeholders rendered for `target`, so
    /// `__naMe__.js` resolved for `todo-list` yields `todoList.js`.
    pub fn resolve(&self, kit: Kit, name: &str, target: &str) -> DuckResult<ResolvedTemplate> {
        let template = self.store.get(kit, name)?;
        let filename = template.filename_for(target);

        debug!(%kit, template = %template, %filename, "Template resolved");

        Ok(ResolvedTemplate {
            content: template.body().to_string(),
            filename,
        })
    }

    /// List the templates of a kit.
    pub fn list(&self, kit: Kit) -> DuckResult<Vec<Template>> {
        self.store.list(kit)
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::application::ports::output::MockTemplateStore;
    use crate::domain::DomainError;
    use crate::error::DuckError;

    #[test]
    fn resolve_renders_filename() {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .with(eq(Kit::Duck), eq("_*"))
            .returning(|_, _| Ok(Template::new("__naMe__.js", "// Actions\n")));

        let service = TemplateService::new(Box::new(store));
        let resolved = service.resolve(Kit::Duck, "_*", "todo-list").unwrap();

        assert_eq!(resolved.filename, "todoList.js");
        assert_eq!(resolved.content, "// Actions\n");
    }

    #[test]
    fn missing_template_propagates() {
        let mut store = MockTemplateStore::new();
        store
            .expect_get()
            .returning(|_, name| Err(DomainError::TemplateNotFound(name.to_string()).into()));

        let service = TemplateService::new(Box::new(store));
        let err = service
            .resolve(Kit::StarterKit, "reducers.js", "todo")
            .unwrap_err();

        assert!(matches!(
            err,
            DuckError::Domain(DomainError::TemplateNotFound(name)) if name == "reducers.js"
        ));
    }
}
