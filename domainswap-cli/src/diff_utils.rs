use colored::Colorize;
use similar::{ChangeTag, TextDiff};
use std::path::Path;

/// Renders a unified diff of a file's pending change, three lines of context per hunk
pub fn unified_diff(file_path: &Path, old_content: &str, new_content: &str) -> Vec<String> {
    let diff = TextDiff::from_lines(old_content, new_content);
    let mut out = vec![
        format!("--- {}", file_path.display()).red().to_string(),
        format!("+++ {}", file_path.display()).green().to_string(),
    ];

    for group in diff.grouped_ops(3) {
        let old_start = group[0].old_range().start;
        let new_start = group[0].new_range().start;
        let (old_count, new_count) = group.iter().fold((0, 0), |(o, n), op| {
            (o + op.old_range().len(), n + op.new_range().len())
        });

        out.push(
            format!(
                "@@ -{},{} +{},{} @@",
                old_start + 1,
                old_count,
                new_start + 1,
                new_count
            )
            .cyan()
            .to_string(),
        );

        for op in &group {
            for change in diff.iter_changes(op) {
                let line = change.value().trim_end_matches(['\r', '\n']);
                out.push(match change.tag() {
                    ChangeTag::Delete => format!("-{}", line).red().to_string(),
                    ChangeTag::Insert => format!("+{}", line).green().to_string(),
                    ChangeTag::Equal => format!(" {}", line),
                });
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unified_diff_single_line() {
        colored::control::set_override(false);
        let old = "one\nhost = kronus.co\nthree\n";
        let new = "one\nhost = mydomain.com\nthree\n";

        let lines = unified_diff(Path::new("a.toml"), old, new);
        assert_eq!(
            lines,
            vec![
                "--- a.toml",
                "+++ a.toml",
                "@@ -1,3 +1,3 @@",
                " one",
                "-host = kronus.co",
                "+host = mydomain.com",
                " three",
            ]
        );
    }

    #[test]
    fn test_unified_diff_no_changes() {
        colored::control::set_override(false);
        let lines = unified_diff(Path::new("a.md"), "same\n", "same\n");
        assert_eq!(lines, vec!["--- a.md", "+++ a.md"]);
    }
}
