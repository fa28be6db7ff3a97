//! Case rendering and placeholder expansion.
//!
//! Templates and fragments carry placeholder tokens of the form `__<tag>__`
//! where the tag spells the words "na" and "me" in the wanted style:
//!
//! | Token       | Style                  | `todo-list` renders as |
//! |-------------|------------------------|------------------------|
//! | `__naMe__`  | camelCase              | `todoList`             |
//! | `__NaMe__`  | PascalCase             | `TodoList`             |
//! | `__na-me__` | kebab-case             | `todo-list`            |
//! | `__NA-ME__` | SCREAMING-KEBAB-CASE   | `TODO-LIST`            |
//! | `__na_me__` | snake_case             | `todo_list`            |
//! | `__NA_ME__` | SCREAMING_SNAKE_CASE   | `TODO_LIST`            |
//!
//! Anything else between double underscores is left alone, so JavaScript
//! identifiers such as `__dirname` survive rendering.

use std::fmt;
use std::str::FromStr;

use heck::{
    ToKebabCase, ToLowerCamelCase, ToShoutyKebabCase, ToShoutySnakeCase, ToSnakeCase,
    ToUpperCamelCase,
};

use crate::domain::error::DomainError;

/// Lexical style a name can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseStyle {
    /// kebab-case (e.g., my-duck)
    Kebab,
    /// SCREAMING-KEBAB-CASE (e.g., MY-DUCK)
    UpperKebab,
    /// camelCase (e.g., myDuck)
    Camel,
    /// PascalCase (e.g., MyDuck)
    Pascal,
    /// snake_case (e.g., my_duck)
    Snake,
    /// SCREAMING_SNAKE_CASE (e.g., MY_DUCK)
    UpperSnake,
}

impl CaseStyle {
    /// Every style, in the order placeholders are expanded.
    pub const ALL: [CaseStyle; 6] = [
        CaseStyle::Kebab,
        CaseStyle::UpperKebab,
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::UpperSnake,
    ];

    /// Render `name` in this style.
    pub fn render(&self, name: &str) -> String {
        match self {
            CaseStyle::Kebab => name.to_kebab_case(),
            CaseStyle::UpperKebab => name.to_shouty_kebab_case(),
            CaseStyle::Camel => name.to_lower_camel_case(),
            CaseStyle::Pascal => name.to_upper_camel_case(),
            CaseStyle::Snake => name.to_snake_case(),
            CaseStyle::UpperSnake => name.to_shouty_snake_case(),
        }
    }

    /// The tag spelled inside a placeholder token for this style.
    pub const fn tag(&self) -> &'static str {
        match self {
            CaseStyle::Kebab => "na-me",
            CaseStyle::UpperKebab => "NA-ME",
            CaseStyle::Camel => "naMe",
            CaseStyle::Pascal => "NaMe",
            CaseStyle::Snake => "na_me",
            CaseStyle::UpperSnake => "NA_ME",
        }
    }

    /// Full placeholder token, e.g. `__naMe__`.
    pub fn token(&self) -> String {
        format!("__{}__", self.tag())
    }

    /// Parse a style tag (`na-me`, `NA_ME`, ...).
    pub fn from_tag(tag: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|style| style.tag() == tag)
            .ok_or_else(|| DomainError::UnknownCaseStyle(tag.to_string()))
    }
}

impl FromStr for CaseStyle {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_tag(s)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Render a name in the style selected by a raw tag.
///
/// Fails with [`DomainError::UnknownCaseStyle`] when the tag is not one of the
/// supported spellings.
pub fn render(name: &str, tag: &str) -> Result<String, DomainError> {
    Ok(CaseStyle::from_tag(tag)?.render(name))
}

/// Single camelCase identifier naming an action creator for a duck.
///
/// `named_function("set", "todo") == "setTodo"`
pub fn named_function(action: &str, module: &str) -> String {
    format!("{action}_{module}").to_lower_camel_case()
}

/// Expand every placeholder token in `text` against `name`.
pub fn render_placeholders(text: &str, name: &str) -> String {
    if !text.contains("__") {
        return text.to_string();
    }

    CaseStyle::ALL
        .iter()
        .fold(text.to_string(), |acc, style| {
            let token = style.token();
            if acc.contains(&token) {
                acc.replace(&token, &style.render(name))
            } else {
                acc
            }
        })
}
