//! Duplicate detection by marker line.

use crate::domain::{case::render_placeholders, error::DomainError};

/// Find the 1-based line number of the rendered `marker` in `content`.
///
/// A line matches when it equals the rendered marker, ignoring trailing
/// whitespace (so CRLF files behave the same as LF files).
pub fn find_marker(content: &str, marker: &str, name: &str) -> Result<usize, DomainError> {
    let rendered = render_placeholders(marker, name);
    let needle = rendered.trim_end();

    content
        .lines()
        .position(|line| line.trim_end() == needle)
        .map(|index| index + 1)
        .ok_or(DomainError::MarkerNotFound { marker: rendered })
}

#[cfg(test)]
mod tests {
    use super::*;

    const REDUCERS: &str = "// Reducers\nimport todo from './modules/todo'\n\nconst reducers = {\n  todo,\n};\n";

    #[test]
    fn reports_line_number() {
        assert_eq!(find_marker(REDUCERS, "  __naMe__,", "todo"), Ok(5));
    }

    #[test]
    fn renders_marker_for_name() {
        let content = "const reducers = {\n  todoList,\n};";
        assert_eq!(find_marker(content, "  __naMe__,", "todo-list"), Ok(2));
    }

    #[test]
    fn prefix_of_another_entry_is_not_a_match() {
        let content = "const reducers = {\n  todoList,\n};";
        assert_eq!(
            find_marker(content, "  __naMe__,", "todo"),
            Err(DomainError::MarkerNotFound {
                marker: "  todo,".into()
            })
        );
    }

    #[test]
    fn tolerates_crlf() {
        let content = "const reducers = {\r\n  todo,\r\n};\r\n";
        assert_eq!(find_marker(content, "  __naMe__,", "todo"), Ok(2));
    }
}
