//! Category diff formatting

use crate::services::CategoryDiff;

/// Format a diff as `+`/`-` lines
pub fn format_category_diff(diff: &CategoryDiff) -> String {
    if diff.is_empty() {
        return "Category lists are equivalent.".to_string();
    }

    let mut output = String::new();
    for record in &diff.removed {
        output.push_str(&format!("- {}\n", record));
    }
    for record in &diff.added {
        output.push_str(&format!("+ {}\n", record));
    }
    output.push_str(&format!(
        "\n{} added, {} removed\n",
        diff.added.len(),
        diff.removed.len()
    ));
    output
}
