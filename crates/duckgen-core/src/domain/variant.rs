//! Generator variants ("kits").
//!
//! Both kits share one orchestration flow. What differs is captured here as
//! data: which files `init` bootstraps, which file receives the wiring, the
//! anchors used inside a duck, and the shape of the fragments.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::{
    anchor::Insertion,
    case::{CaseStyle, named_function},
    error::DomainError,
};

/// Logical name of the registry template shared by both kits.
pub const CONFIGURE_STORE: &str = "configureStore.js";
/// Logical name of the starter kit's reducer map.
pub const REDUCERS: &str = "reducers.js";
/// Logical name pattern selecting the duck template.
pub const DUCK_TEMPLATE: &str = "_*";

/// Marker proving a duck is listed in the wiring file.
pub const WIRING_MARKER: &str = "  __naMe__,";
/// Default directory, relative to the root, holding duck files.
pub const MODULES_DIR: &str = "modules";

/// Import line wiring a duck stored under `modules_dir`.
pub fn import_line(modules_dir: &str) -> String {
    format!("import __naMe__ from './{modules_dir}/__naMe__'")
}

/// Which flavour of duck to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum Kit {
    /// Classic modular ducks: action constants, a `switch` reducer and
    /// action creator functions, wired through `combineReducers({ ... })`.
    #[default]
    Duck,
    /// redux-starter-kit ducks: `createAction` plus a `createReducer` map,
    /// wired through a separate `reducers.js` object.
    StarterKit,
}

impl Kit {
    pub const ALL: [Kit; 2] = [Kit::Duck, Kit::StarterKit];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Kit::Duck => "duck",
            Kit::StarterKit => "starter-kit",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Kit::Duck => "Modular ducks with a switch reducer and combineReducers wiring",
            Kit::StarterKit => "redux-starter-kit ducks with createAction and a reducers.js map",
        }
    }

    /// The variant record driving the orchestrator.
    pub fn variant(&self) -> Variant {
        match self {
            Kit::Duck => Variant {
                kit: *self,
                bootstrap: &[CONFIGURE_STORE],
                wiring_file: CONFIGURE_STORE,
                action_steps: classic_action_steps,
                wiring_steps: classic_wiring_steps,
            },
            Kit::StarterKit => Variant {
                kit: *self,
                bootstrap: &[CONFIGURE_STORE, REDUCERS],
                wiring_file: REDUCERS,
                action_steps: starter_kit_action_steps,
                wiring_steps: starter_kit_wiring_steps,
            },
        }
    }
}

impl fmt::Display for Kit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "duck" | "ducks" | "classic" => Ok(Kit::Duck),
            "starter-kit" | "starter_kit" | "starterkit" | "rsk" | "duck-starter-kit" => {
                Ok(Kit::StarterKit)
            }
            _ => Err(DomainError::UnknownKit(s.to_string())),
        }
    }
}

impl TryFrom<String> for Kit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Configuration record for one kit.
#[derive(Debug, Clone, Copy)]
pub struct Variant {
    pub kit: Kit,
    /// Templates written by `init`, in order.
    pub bootstrap: &'static [&'static str],
    /// Template whose output receives the duck import and registration.
    pub wiring_file: &'static str,
    action_steps: fn(duck: &str, action: &str) -> Vec<Insertion>,
    wiring_steps: fn(modules_dir: &str) -> Vec<Insertion>,
}

impl Variant {
    /// Insertions adding `action` to `duck`, in application order.
    ///
    /// Fragment placeholders are rendered against the action name.
    pub fn action_steps(&self, duck: &str, action: &str) -> Vec<Insertion> {
        (self.action_steps)(duck, action)
    }

    /// The line that proves `action` is already part of `duck`.
    ///
    /// This is the first line of the first action fragment, still carrying
    /// its placeholders.
    pub fn action_marker(&self, duck: &str, action: &str) -> Option<String> {
        self.action_steps(duck, action)
            .into_iter()
            .next()
            .and_then(|step| step.fragment.into_iter().next())
    }

    /// Insertions registering a duck in the wiring file.
    ///
    /// Fragment placeholders are rendered against the duck name.
    pub fn wiring_steps(&self, modules_dir: &str) -> Vec<Insertion> {
        (self.wiring_steps)(modules_dir)
    }

    pub fn wiring_marker(&self) -> &'static str {
        WIRING_MARKER
    }
}

// ── classic ducks ─────────────────────────────────────────────────────────────

fn classic_action_steps(duck: &str, action: &str) -> Vec<Insertion> {
    let duck_kebab = CaseStyle::Kebab.render(duck);
    let creator = named_function(action, duck);

    vec![
        Insertion::after(
            "// Actions",
            vec![format!("const __NA_ME__ = '{duck_kebab}/__NA-ME__';")],
        ),
        Insertion::after(
            "switch (action.type) {",
            vec![
                "    case __NA_ME__:".into(),
                "      // Perform action".into(),
                "      return state;".into(),
            ],
        ),
        Insertion::after(
            "// Action Creators",
            vec![
                format!("export function {creator}() {{"),
                "  return { type: __NA_ME__ };".into(),
                "}".into(),
                String::new(),
            ],
        ),
    ]
}

fn classic_wiring_steps(modules_dir: &str) -> Vec<Insertion> {
    vec![
        Insertion::after_last("import ", vec![import_line(modules_dir)]),
        Insertion::after("combineReducers({", vec![WIRING_MARKER.into()]),
    ]
}

// ── redux-starter-kit ducks ───────────────────────────────────────────────────

fn starter_kit_action_steps(duck: &str, _action: &str) -> Vec<Insertion> {
    let duck_kebab = CaseStyle::Kebab.render(duck);

    vec![
        Insertion::after(
            "// Action Creators",
            vec![format!(
                "export const __naMe__ = createAction('{duck_kebab}/__NA-ME__');"
            )],
        ),
        Insertion::after(
            "createReducer(initialState, {",
            vec![
                "  [__naMe__]: (state, action) => {".into(),
                "    // Perform action".into(),
                "  },".into(),
            ],
        ),
    ]
}

fn starter_kit_wiring_steps(modules_dir: &str) -> Vec<Insertion> {
    vec![
        Insertion::after("// Reducers", vec![import_line(modules_dir)]),
        Insertion::after("const reducers = {", vec![WIRING_MARKER.into()]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::anchor::AnchorPosition;

    #[test]
    fn kit_parses_aliases() {
        assert_eq!("duck".parse::<Kit>().unwrap(), Kit::Duck);
        assert_eq!("Starter-Kit".parse::<Kit>().unwrap(), Kit::StarterKit);
        assert_eq!("duck-starter-kit".parse::<Kit>().unwrap(), Kit::StarterKit);
        assert_eq!("rsk".parse::<Kit>().unwrap(), Kit::StarterKit);
        assert_eq!(
            "saga".parse::<Kit>(),
            Err(DomainError::UnknownKit("saga".into()))
        );
    }

    #[test]
    fn kit_display_round_trips() {
        for kit in Kit::ALL {
            assert_eq!(kit.to_string().parse::<Kit>().unwrap(), kit);
        }
    }

    #[test]
    fn starter_kit_bootstraps_two_files_and_wires_reducers() {
        let variant = Kit::StarterKit.variant();
        assert_eq!(variant.bootstrap, &[CONFIGURE_STORE, REDUCERS]);
        assert_eq!(variant.wiring_file, REDUCERS);
    }

    #[test]
    fn classic_action_steps_embed_duck_name() {
        let steps = Kit::Duck.variant().action_steps("todo-list", "add");
        assert_eq!(steps.len(), 3);
        assert_eq!(steps[0].fragment[0], "const __NA_ME__ = 'todo-list/__NA-ME__';");
        assert_eq!(steps[2].fragment[0], "export function addTodoList() {");
    }

    #[test]
    fn classic_import_goes_after_last_import() {
        let steps = Kit::Duck.variant().wiring_steps(MODULES_DIR);
        assert_eq!(steps[0].anchor, "import ");
        assert_eq!(steps[0].position, AnchorPosition::Last);
        assert_eq!(steps[0].fragment[0], "import __naMe__ from './modules/__naMe__'");
    }

    #[test]
    fn action_marker_is_first_fragment_line() {
        let variant = Kit::StarterKit.variant();
        assert_eq!(
            variant.action_marker("todo", "set").as_deref(),
            Some("export const __naMe__ = createAction('todo/__NA-ME__');")
        );
    }
}
