//! Package descriptor graph.
//!
//! This module defines the in-memory model handed to the generator: a tree of
//! [`Package`] nodes, each carrying one main library [`Project`] and an
//! optional unit-test [`Project`]. Projects reference each other through
//! shared [`Rc`] handles, so a support library appears exactly once in the
//! graph no matter how many targets link against it.
//!
//! The graph is assembled synchronously, handed off, and never mutated
//! afterward. Assembly itself cannot fail; [`validate`] exists so the
//! generator can refuse a malformed graph before touching the filesystem.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;

/// What kind of build target a project describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectKind {
    /// A static library target.
    Library,
    /// A unit-test executable target.
    Test,
}

/// A named build target with an explicit, ordered dependency list.
///
/// The `path` is the platform-style identifying path of the repository the
/// target comes from (e.g. `github.com/jurgen-kluft/cenv`). Source and
/// include directories follow the conventional layout of those repositories.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub name: String,
    pub path: String,
    pub kind: ProjectKind,
    pub src_dir: String,
    pub include_dir: String,
    pub dependencies: Vec<Rc<Project>>,
}

impl Project {
    /// Set up a default C++ library project using the conventional
    /// `source/main/{cpp,include}` layout.
    pub fn library(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: ProjectKind::Library,
            src_dir: "source/main/cpp".to_string(),
            include_dir: "source/main/include".to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Set up a default C++ unit-test project. Test sources live under
    /// `source/test/cpp` next to the library they exercise.
    pub fn test(name: &str, path: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            kind: ProjectKind::Test,
            src_dir: "source/test/cpp".to_string(),
            include_dir: "source/main/include".to_string(),
            dependencies: Vec::new(),
        }
    }

    /// Append a dependency edge. Order is preserved; generation output is
    /// deterministic because of it.
    pub fn add_dependency(&mut self, dep: Rc<Project>) {
        self.dependencies.push(dep);
    }
}

/// A named unit of build configuration: sub-packages, exactly one main
/// library and at most one unit-test project.
#[derive(Debug, Clone, PartialEq)]
pub struct Package {
    pub name: String,
    pub packages: Vec<Rc<Package>>,
    pub main_lib: Rc<Project>,
    pub unittest: Option<Rc<Project>>,
}

impl Package {
    pub fn new(name: &str, main_lib: Rc<Project>) -> Self {
        Self {
            name: name.to_string(),
            packages: Vec::new(),
            main_lib,
            unittest: None,
        }
    }

    /// Register a dependency package. Insertion order is preserved.
    pub fn add_package(&mut self, pkg: Rc<Package>) {
        self.packages.push(pkg);
    }

    pub fn add_unittest(&mut self, test: Rc<Project>) {
        self.unittest = Some(test);
    }

    /// The main library artifact of this package, shared by reference.
    pub fn main_lib(&self) -> Rc<Project> {
        Rc::clone(&self.main_lib)
    }

    /// Flatten this package into its serializable manifest form.
    pub fn manifest(&self) -> PackageManifest {
        PackageManifest {
            name: self.name.clone(),
            packages: self.packages.iter().map(|p| p.manifest()).collect(),
            main_lib: ProjectManifest::from_project(&self.main_lib),
            unittest: self.unittest.as_deref().map(ProjectManifest::from_project),
        }
    }
}

/// Serializable view of a [`Package`], with dependency edges collapsed to
/// target names. This is the JSON form emitted by `cenv dump` and
/// `cenv generate --format json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageManifest {
    pub name: String,
    pub packages: Vec<PackageManifest>,
    pub main_lib: ProjectManifest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unittest: Option<ProjectManifest>,
}

/// Serializable view of a [`Project`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub name: String,
    pub path: String,
    pub kind: ProjectKind,
    pub dependencies: Vec<String>,
}

impl ProjectManifest {
    fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            path: project.path.clone(),
            kind: project.kind,
            dependencies: project
                .dependencies
                .iter()
                .map(|d| d.name.clone())
                .collect(),
        }
    }
}

/// Every project reachable from `pkg`, dependencies before dependents,
/// each shared project listed once.
pub fn projects_in_dependency_order(pkg: &Package) -> Vec<Rc<Project>> {
    let mut ordered = Vec::new();
    let mut seen: HashSet<*const Project> = HashSet::new();
    collect_package(pkg, &mut ordered, &mut seen);
    ordered
}

fn collect_package(pkg: &Package, ordered: &mut Vec<Rc<Project>>, seen: &mut HashSet<*const Project>) {
    for sub in &pkg.packages {
        collect_package(sub, ordered, seen);
    }
    collect_project(&pkg.main_lib, ordered, seen);
    if let Some(test) = &pkg.unittest {
        collect_project(test, ordered, seen);
    }
}

fn collect_project(
    project: &Rc<Project>,
    ordered: &mut Vec<Rc<Project>>,
    seen: &mut HashSet<*const Project>,
) {
    if seen.contains(&Rc::as_ptr(project)) {
        return;
    }
    for dep in &project.dependencies {
        collect_project(dep, ordered, seen);
    }
    seen.insert(Rc::as_ptr(project));
    ordered.push(Rc::clone(project));
}

/// Verify that the dependency edges reachable from `pkg` form a DAG.
///
/// Shared `Rc` handles make a cycle impossible to build through the public
/// constructors, but the generator still refuses to walk a graph it cannot
/// order, so the invariant is checked rather than assumed.
pub fn validate(pkg: &Package) -> Result<()> {
    let mut finished: HashSet<*const Project> = HashSet::new();
    let mut in_progress: HashSet<*const Project> = HashSet::new();

    fn visit(
        project: &Rc<Project>,
        finished: &mut HashSet<*const Project>,
        in_progress: &mut HashSet<*const Project>,
    ) -> Result<()> {
        let ptr = Rc::as_ptr(project);
        if finished.contains(&ptr) {
            return Ok(());
        }
        if !in_progress.insert(ptr) {
            bail!("dependency cycle through project '{}'", project.name);
        }
        for dep in &project.dependencies {
            visit(dep, finished, in_progress)?;
        }
        in_progress.remove(&ptr);
        finished.insert(ptr);
        Ok(())
    }

    fn visit_package(
        pkg: &Package,
        finished: &mut HashSet<*const Project>,
        in_progress: &mut HashSet<*const Project>,
    ) -> Result<()> {
        for sub in &pkg.packages {
            visit_package(sub, finished, in_progress)?;
        }
        visit(&pkg.main_lib, finished, in_progress)?;
        if let Some(test) = &pkg.unittest {
            visit(test, finished, in_progress)?;
        }
        Ok(())
    }

    visit_package(pkg, &mut finished, &mut in_progress)
}
