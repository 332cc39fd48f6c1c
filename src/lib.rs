//! # cenv - Package Descriptor Builder
//!
//! cenv assembles the dependency graph of the `cenv`/`xenv` C++ environment
//! library family and generates build-system files from it.
//!
//! ## How it works
//!
//! Each package module exposes a `get_package()` builder that returns a
//! fully-formed descriptor: the package's main library project, its optional
//! unit-test project, and the support packages it depends on. The root
//! descriptor is then handed to the generator, which emits a `CMakeLists.txt`
//! or a JSON manifest covering every reachable target.
//!
//! ## Module Organization
//!
//! - [`descriptor`] - Package/project graph model and DAG validation
//! - [`packages`] - Descriptor builders for the root and support packages
//! - [`generate`] - Build-file emission (CMake, JSON manifest)
//! - [`tree`] - Dependency tree visualization
//! - [`config`] - Configuration parsing (`cenv.toml`)

/// Configuration file parsing (`cenv.toml`).
pub mod config;

/// Package/project descriptor graph.
pub mod descriptor;

/// Build-system file generation.
pub mod generate;

/// Package descriptor builders.
pub mod packages;

/// Dependency tree visualization.
pub mod tree;
