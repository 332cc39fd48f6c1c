//! Entry-point framework support package (`centry`/`xentry`).

use crate::descriptor::{Package, Project};
use crate::packages::{DEFAULT_SCOPE, Scheme, dependency_path};
use std::rc::Rc;

/// Returns the package object of the entry-point support library.
pub fn get_package() -> Rc<Package> {
    get_package_for(Scheme::Cenv, DEFAULT_SCOPE)
}

pub fn get_package_for(scheme: Scheme, scope: &str) -> Rc<Package> {
    let name = scheme.name("entry");
    let lib = Project::library(&name, &dependency_path(scope, &name));
    Rc::new(Package::new(&name, Rc::new(lib)))
}
