//! Dependency tree visualization.
//!
//! Renders the package descriptor graph in a hierarchical, ASCII tree
//! format for the `cenv tree` command.
//!
//! ## Example Output
//!
//! ```text
//! cenv
//! ├── cunittest (github.com/jurgen-kluft/cunittest)
//! ├── centry (github.com/jurgen-kluft/centry)
//! ├── cbase (github.com/jurgen-kluft/cbase)
//! ├── lib cenv -> cbase
//! └── test cenv_test -> cunittest, centry, cbase, cenv
//! ```

use crate::descriptor::{Package, Project};
use colored::*;

pub fn print_tree(pkg: &Package) {
    print!("{}", render(pkg));
}

/// Render the tree as a string. Colors follow the global `colored` override,
/// so piped output stays clean.
pub fn render(pkg: &Package) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(pkg.name.bold().cyan().to_string());

    let mut entries: Vec<String> = Vec::new();
    for sub in &pkg.packages {
        entries.push(format!(
            "{} ({})",
            sub.name.bold(),
            sub.main_lib.path.dimmed()
        ));
    }
    entries.push(project_entry("lib", &pkg.main_lib));
    if let Some(test) = &pkg.unittest {
        entries.push(project_entry("test", test));
    }

    let count = entries.len();
    for (i, entry) in entries.into_iter().enumerate() {
        let prefix = if i == count - 1 { "└──" } else { "├──" };
        lines.push(format!("{prefix} {entry}"));
    }

    lines.join("\n") + "\n"
}

fn project_entry(label: &str, project: &Project) -> String {
    let deps: Vec<&str> = project.dependencies.iter().map(|d| d.name.as_str()).collect();
    if deps.is_empty() {
        format!("{} {}", label.dimmed(), project.name.bold())
    } else {
        format!(
            "{} {} {} {}",
            label.dimmed(),
            project.name.bold(),
            "->".dimmed(),
            deps.join(", ").green()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::env;

    fn plain_render(pkg: &Package) -> String {
        colored::control::set_override(false);
        let out = render(pkg);
        colored::control::unset_override();
        out
    }

    #[test]
    fn test_tree_lists_packages_and_projects() {
        let pkg = env::get_package();
        let out = plain_render(&pkg);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "cenv");
        assert_eq!(lines.len(), 6);
        assert!(lines[1].contains("cunittest"));
        assert!(lines[4].contains("lib cenv -> cbase"));
        assert!(lines[5].starts_with("└──"));
        assert!(lines[5].contains("test cenv_test -> cunittest, centry, cbase, cenv"));
    }

    #[test]
    fn test_intermediate_entries_use_branch_prefix() {
        let pkg = env::get_package();
        let out = plain_render(&pkg);
        let branches = out.lines().filter(|l| l.starts_with("├──")).count();
        assert_eq!(branches, 4);
    }
}
