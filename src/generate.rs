//! Build-system file generation.
//!
//! Consumes a root [`Package`] descriptor and emits build files into an
//! output directory. Two formats are supported:
//!
//! - **CMake** - a single `CMakeLists.txt` declaring every reachable target,
//!   in dependency order, with link and include edges taken straight from
//!   the descriptor graph.
//! - **JSON** - the package manifest, for inspection and downstream tooling.
//!
//! The descriptor graph is validated before anything is written.

use crate::descriptor::{self, Package, Project, ProjectKind};
use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Output format of [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerateFormat {
    Cmake,
    Json,
}

/// Generate build files for `pkg` into `out_dir`.
pub fn generate(pkg: &Package, format: GenerateFormat, out_dir: &Path) -> Result<()> {
    descriptor::validate(pkg).context("Refusing to generate from a malformed graph")?;

    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

    let out_file: PathBuf = match format {
        GenerateFormat::Cmake => {
            let path = out_dir.join("CMakeLists.txt");
            fs::write(&path, render_cmake(pkg))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
        GenerateFormat::Json => {
            let path = out_dir.join(format!("{}.json", pkg.name));
            fs::write(&path, render_manifest(pkg)?)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            path
        }
    };

    println!(
        "{} Generated {} for {}",
        "✓".green(),
        out_file.display(),
        pkg.name.bold().cyan()
    );
    Ok(())
}

/// Render the full CMake listing for every project reachable from `pkg`.
pub fn render_cmake(pkg: &Package) -> String {
    let mut out = String::new();
    out.push_str("cmake_minimum_required(VERSION 3.20)\n");
    out.push_str(&format!("project({} LANGUAGES CXX)\n\n", pkg.name));
    out.push_str("set(CMAKE_CXX_STANDARD 17)\n");
    out.push_str("set(CMAKE_CXX_STANDARD_REQUIRED ON)\n");

    for project in descriptor::projects_in_dependency_order(pkg) {
        out.push('\n');
        render_target(&project, &mut out);
    }
    out
}

fn render_target(project: &Project, out: &mut String) {
    let dir = project_dir(project);
    let sources_var = format!("{}_SOURCES", project.name.to_uppercase());

    out.push_str(&format!("# {} ({})\n", project.name, project.path));
    out.push_str(&format!(
        "file(GLOB_RECURSE {sources_var} ${{CMAKE_SOURCE_DIR}}/{dir}/{}/*.cpp)\n",
        project.src_dir
    ));
    match project.kind {
        ProjectKind::Library => {
            out.push_str(&format!(
                "add_library({} STATIC ${{{sources_var}}})\n",
                project.name
            ));
            out.push_str(&format!(
                "target_include_directories({} PUBLIC ${{CMAKE_SOURCE_DIR}}/{dir}/{})\n",
                project.name, project.include_dir
            ));
        }
        ProjectKind::Test => {
            out.push_str(&format!(
                "add_executable({} ${{{sources_var}}})\n",
                project.name
            ));
            out.push_str(&format!(
                "target_include_directories({} PRIVATE ${{CMAKE_SOURCE_DIR}}/{dir}/{})\n",
                project.name, project.include_dir
            ));
        }
    }
    if !project.dependencies.is_empty() {
        let deps: Vec<&str> = project.dependencies.iter().map(|d| d.name.as_str()).collect();
        out.push_str(&format!(
            "target_link_libraries({} {} {})\n",
            project.name,
            match project.kind {
                ProjectKind::Library => "PUBLIC",
                ProjectKind::Test => "PRIVATE",
            },
            deps.join(" ")
        ));
    }
}

/// Render the JSON manifest of `pkg`.
pub fn render_manifest(pkg: &Package) -> Result<String> {
    serde_json::to_string_pretty(&pkg.manifest()).context("Failed to serialize package manifest")
}

/// Checkout directory of a project, relative to the generation root. The
/// last segment of the identifying path is the repository name.
fn project_dir(project: &Project) -> &str {
    project
        .path
        .rsplit('/')
        .next()
        .unwrap_or(project.path.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::packages::env;

    #[test]
    fn test_cmake_declares_every_target() {
        let pkg = env::get_package();
        let cmake = render_cmake(&pkg);
        assert!(cmake.contains("project(cenv LANGUAGES CXX)"));
        for target in ["cunittest", "centry", "cbase", "cenv"] {
            assert!(
                cmake.contains(&format!("add_library({target} STATIC")),
                "missing library target {target}"
            );
        }
        assert!(cmake.contains("add_executable(cenv_test"));
    }

    #[test]
    fn test_cmake_orders_dependencies_first() {
        let pkg = env::get_package();
        let cmake = render_cmake(&pkg);
        let base_pos = cmake.find("add_library(cbase").unwrap();
        let lib_pos = cmake.find("add_library(cenv ").unwrap();
        let test_pos = cmake.find("add_executable(cenv_test").unwrap();
        assert!(base_pos < lib_pos);
        assert!(lib_pos < test_pos);
    }

    #[test]
    fn test_cmake_link_edges_follow_descriptor() {
        let pkg = env::get_package();
        let cmake = render_cmake(&pkg);
        assert!(cmake.contains("target_link_libraries(cenv PUBLIC cbase)"));
        assert!(
            cmake.contains("target_link_libraries(cenv_test PRIVATE cunittest centry cbase cenv)")
        );
    }

    #[test]
    fn test_cmake_sources_use_checkout_layout() {
        let pkg = env::get_package();
        let cmake = render_cmake(&pkg);
        assert!(cmake.contains("${CMAKE_SOURCE_DIR}/cbase/source/main/cpp/*.cpp"));
        assert!(cmake.contains("${CMAKE_SOURCE_DIR}/cenv/source/test/cpp/*.cpp"));
    }

    #[test]
    fn test_manifest_is_valid_json() {
        let pkg = env::get_package();
        let json = render_manifest(&pkg).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["name"], "cenv");
        assert_eq!(value["packages"].as_array().unwrap().len(), 3);
    }
}
