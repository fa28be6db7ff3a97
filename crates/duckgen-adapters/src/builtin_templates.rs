//! Templates bundled into the binary.
//!
//! Every kit ships its bootstrap files plus the duck module template
//! (`__naMe__.js`). The bodies are compiled in with `include_str!`, so the
//! generator works without any template directory on disk.
//!
//! # Overrides
//!
//! A user template directory can replace any bundled file. Its location is
//! taken from, in order:
//!
//! 1. the path configured by the caller (`templates.local_path`)
//! 2. **`$DUCKGEN_TEMPLATES_DIR`**
//!
//! See [`crate::template_loader`] for the expected layout.

use std::path::{Path, PathBuf};

use tracing::debug;

use duckgen_core::domain::{Kit, Template};

/// Environment variable naming a template override directory.
pub const TEMPLATES_DIR_ENV: &str = "DUCKGEN_TEMPLATES_DIR";

/// The bundled templates of `kit`.
pub fn templates_for(kit: Kit) -> Vec<Template> {
    match kit {
        Kit::Duck => vec![
            Template::new(
                "configureStore.js",
                include_str!("../templates/duck/configureStore.js"),
            ),
            Template::new("__naMe__.js", include_str!("../templates/duck/__naMe__.js")),
        ],
        Kit::StarterKit => vec![
            Template::new(
                "configureStore.js",
                include_str!("../templates/starter-kit/configureStore.js"),
            ),
            Template::new(
                "reducers.js",
                include_str!("../templates/starter-kit/reducers.js"),
            ),
            Template::new(
                "__naMe__.js",
                include_str!("../templates/starter-kit/__naMe__.js"),
            ),
        ],
    }
}

/// Resolve the override directory, if any.
pub fn override_dir(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        debug!(path = %path.display(), "template overrides from configuration");
        return Some(path.to_path_buf());
    }

    let env_dir = std::env::var_os(TEMPLATES_DIR_ENV).map(PathBuf::from)?;
    debug!(path = %env_dir.display(), "template overrides from ${}", TEMPLATES_DIR_ENV);
    Some(env_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use duckgen_core::domain::variant::DUCK_TEMPLATE;

    #[test]
    fn every_kit_bundles_its_bootstrap_files() {
        for kit in Kit::ALL {
            let templates = templates_for(kit);
            for name in kit.variant().bootstrap {
                assert!(
                    templates.iter().any(|t| t.matches(name)),
                    "{kit} is missing {name}"
                );
            }
            assert!(templates.iter().any(|t| t.matches(DUCK_TEMPLATE)));
        }
    }

    #[test]
    fn bundled_templates_carry_their_anchors() {
        for kit in Kit::ALL {
            let variant = kit.variant();
            let templates = templates_for(kit);

            let module = templates.iter().find(|t| t.matches(DUCK_TEMPLATE)).unwrap();
            for step in variant.action_steps("todo", "set") {
                assert!(module.body().contains(step.anchor), "{kit}: {}", step.anchor);
            }

            let wiring = templates
                .iter()
                .find(|t| t.matches(variant.wiring_file))
                .unwrap();
            for step in variant.wiring_steps("modules") {
                assert!(wiring.body().contains(step.anchor), "{kit}: {}", step.anchor);
            }
        }
    }

    #[test]
    fn configured_dir_wins() {
        let dir = override_dir(Some(Path::new("my-templates")));
        assert_eq!(dir, Some(PathBuf::from("my-templates")));
    }
}
