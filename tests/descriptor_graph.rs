//! End-to-end tests for descriptor assembly and generation.
//!
//! These exercise the public library surface the way the CLI does: build the
//! root package, check its structure, and generate build files into a
//! temporary directory.

use cenv::descriptor::{self, PackageManifest, ProjectKind};
use cenv::generate::{self, GenerateFormat};
use cenv::packages::{DEFAULT_SCOPE, Scheme, env};
use std::fs;
use std::rc::Rc;

#[test]
fn test_root_package_has_expected_shape() {
    let pkg = env::get_package();

    assert_eq!(pkg.name, "cenv");

    let subs: Vec<&str> = pkg.packages.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(subs, vec!["cunittest", "centry", "cbase"]);

    let lib_deps: Vec<&str> = pkg
        .main_lib
        .dependencies
        .iter()
        .map(|d| d.name.as_str())
        .collect();
    assert_eq!(lib_deps, vec!["cbase"]);

    let test = pkg.unittest.as_ref().expect("root carries a unittest");
    assert_eq!(test.kind, ProjectKind::Test);
    let test_deps: Vec<&str> = test.dependencies.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(test_deps, vec!["cunittest", "centry", "cbase", "cenv"]);
}

#[test]
fn test_construction_is_deterministic_and_acyclic() {
    let a = env::get_package();
    let b = env::get_package();

    // Distinct identities, field-for-field equal.
    assert!(!Rc::ptr_eq(&a, &b));
    assert_eq!(a, b);

    descriptor::validate(&a).expect("graph must be a DAG");
}

#[test]
fn test_support_libraries_are_shared_by_reference() {
    let pkg = env::get_package();
    let test = pkg.unittest.as_ref().unwrap();

    for (i, sub) in pkg.packages.iter().enumerate() {
        assert!(
            Rc::ptr_eq(&test.dependencies[i], &sub.main_lib),
            "test dependency {i} must share the {} library object",
            sub.name
        );
    }
}

#[test]
fn test_generate_cmake_writes_full_listing() {
    let pkg = env::get_package();
    let dir = tempfile::tempdir().expect("tempdir");

    generate::generate(&pkg, GenerateFormat::Cmake, dir.path()).expect("generate cmake");

    let content = fs::read_to_string(dir.path().join("CMakeLists.txt")).expect("read output");
    assert!(content.contains("project(cenv LANGUAGES CXX)"));
    assert!(content.contains("add_library(cbase STATIC"));
    assert!(content.contains("add_executable(cenv_test"));
    assert!(content.contains("target_link_libraries(cenv_test PRIVATE cunittest centry cbase cenv)"));
}

#[test]
fn test_generate_json_manifest_round_trips() {
    let pkg = env::get_package();
    let dir = tempfile::tempdir().expect("tempdir");

    generate::generate(&pkg, GenerateFormat::Json, dir.path()).expect("generate json");

    let content = fs::read_to_string(dir.path().join("cenv.json")).expect("read output");
    let manifest: PackageManifest = serde_json::from_str(&content).expect("parse manifest");

    assert_eq!(manifest, pkg.manifest());
    assert_eq!(manifest.name, "cenv");
    assert_eq!(manifest.packages.len(), 3);
    assert_eq!(
        manifest.unittest.unwrap().dependencies,
        vec!["cunittest", "centry", "cbase", "cenv"]
    );
}

#[test]
fn test_xenv_scheme_mirrors_cenv() {
    let cenv = env::get_package();
    let xenv = env::get_package_for(Scheme::Xenv, DEFAULT_SCOPE);

    assert_eq!(xenv.name, "xenv");
    assert_eq!(cenv.packages.len(), xenv.packages.len());

    // Same shape: renaming x -> c must reproduce the cenv manifest.
    let renamed = serde_json::to_string(&xenv.manifest())
        .unwrap()
        .replace("xenv", "cenv")
        .replace("xunittest", "cunittest")
        .replace("xentry", "centry")
        .replace("xbase", "cbase");
    let renamed: PackageManifest = serde_json::from_str(&renamed).unwrap();
    assert_eq!(renamed, cenv.manifest());
}
