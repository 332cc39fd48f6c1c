//! Root package builder for the `cenv`/`xenv` environment library.
//!
//! Assembles the dependency graph the generator consumes: the three support
//! packages as sub-packages, a library project linking against the base
//! library, and a unit-test project linking against every support library
//! plus the library under test.

use crate::descriptor::{Package, Project};
use crate::packages::{DEFAULT_SCOPE, Scheme, base, dependency_path, entry, unittest};
use std::rc::Rc;

/// Returns the package object of `cenv`.
pub fn get_package() -> Rc<Package> {
    get_package_for(Scheme::Cenv, DEFAULT_SCOPE)
}

/// Returns the root package for the given naming scheme and repository scope.
pub fn get_package_for(scheme: Scheme, scope: &str) -> Rc<Package> {
    // Dependency packages, each built once and shared by reference below.
    let unittestpkg = unittest::get_package_for(scheme, scope);
    let entrypkg = entry::get_package_for(scheme, scope);
    let basepkg = base::get_package_for(scheme, scope);

    let name = scheme.root_name();
    let path = dependency_path(scope, &name);

    // The environment library itself only needs the base library.
    let mut mainlib = Project::library(&name, &path);
    mainlib.add_dependency(basepkg.main_lib());
    let mainlib = Rc::new(mainlib);

    // The unit-test executable links the full support stack, then the
    // library under test last.
    let mut maintest = Project::test(&format!("{name}_test"), &path);
    maintest.add_dependency(unittestpkg.main_lib());
    maintest.add_dependency(entrypkg.main_lib());
    maintest.add_dependency(basepkg.main_lib());
    maintest.add_dependency(Rc::clone(&mainlib));

    let mut mainpkg = Package::new(&name, mainlib);
    mainpkg.add_package(unittestpkg);
    mainpkg.add_package(entrypkg);
    mainpkg.add_package(basepkg);
    mainpkg.add_unittest(Rc::new(maintest));
    Rc::new(mainpkg)
}
