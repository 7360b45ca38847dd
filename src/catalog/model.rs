//! Library → Package → Module hierarchy.
//!
//! Storage order is whatever the hash maps choose; every accessor that
//! exposes an order sorts by name so output never depends on insertion or
//! hashing.

use super::icon::IconField;
use std::collections::HashMap;

/// A single documented unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Module {
    pub name: String,
    pub description: String,
    /// Location of the module's content
    pub path: String,
    pub markdown: String,
    pub tester: String,
    pub example: String,
    pub icon: IconField,
}

impl Module {
    /// Create a module with only a name; other fields start empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Modules of one package, keyed by module name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Package {
    modules: HashMap<String, Module>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a module under its own name, replacing any previous entry.
    pub fn insert(&mut self, module: Module) {
        self.modules.insert(module.name.clone(), module);
    }

    /// Insert a module under an explicit key (the key it had in the source).
    pub fn insert_as(&mut self, key: impl Into<String>, module: Module) {
        self.modules.insert(key.into(), module);
    }

    pub fn get(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Modules in ascending name order; the key breaks ties between equal names.
    pub fn modules_sorted(&self) -> Vec<&Module> {
        let mut entries: Vec<(&String, &Module)> = self.modules.iter().collect();
        entries.sort_by(|a, b| a.1.name.cmp(&b.1.name).then_with(|| a.0.cmp(b.0)));
        entries.into_iter().map(|(_, module)| module).collect()
    }
}

impl FromIterator<Module> for Package {
    fn from_iter<I: IntoIterator<Item = Module>>(iter: I) -> Self {
        let mut package = Package::new();
        for module in iter {
            package.insert(module);
        }
        package
    }
}

/// The full catalog for one load: packages keyed by package name.
///
/// Immutable once built; a reload produces a new `Library` instead of
/// editing this one.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Library {
    packages: HashMap<String, Package>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, package: Package) {
        self.packages.insert(name.into(), package);
    }

    pub fn package(&self, name: &str) -> Option<&Package> {
        self.packages.get(name)
    }

    /// Packages in ascending name order.
    pub fn packages_sorted(&self) -> Vec<(&str, &Package)> {
        let mut packages: Vec<(&str, &Package)> = self
            .packages
            .iter()
            .map(|(name, package)| (name.as_str(), package))
            .collect();
        packages.sort_by(|a, b| a.0.cmp(b.0));
        packages
    }

    /// Find a module by name across all packages.
    ///
    /// Packages are searched in ascending name order, so a name that occurs
    /// in several packages always resolves to the same one.
    pub fn find_module(&self, name: &str) -> Option<(&str, &Module)> {
        self.packages_sorted()
            .into_iter()
            .find_map(|(package_name, package)| {
                package.get(name).map(|module| (package_name, module))
            })
    }

    pub fn package_count(&self) -> usize {
        self.packages.len()
    }

    pub fn module_count(&self) -> usize {
        self.packages.values().map(Package::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }
}

impl<N: Into<String>> FromIterator<(N, Package)> for Library {
    fn from_iter<I: IntoIterator<Item = (N, Package)>>(iter: I) -> Self {
        let mut library = Library::new();
        for (name, package) in iter {
            library.insert(name, package);
        }
        library
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Library {
        let zeta: Package = ["b", "a", "c"].into_iter().map(Module::new).collect();
        let alpha: Package = [Module::new("c")].into_iter().collect();
        [("zeta", zeta), ("alpha", alpha)].into_iter().collect()
    }

    #[test]
    fn test_packages_sorted_by_name() {
        let library = sample();
        let names: Vec<&str> = library.packages_sorted().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
    }

    #[test]
    fn test_modules_sorted_by_name() {
        let library = sample();
        let package = library.package("zeta").unwrap();
        let names: Vec<&str> = package
            .modules_sorted()
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_find_module_prefers_first_package_by_name() {
        let library = sample();
        let (package, module) = library.find_module("c").unwrap();
        assert_eq!(package, "alpha");
        assert_eq!(module.name, "c");
        assert!(library.find_module("missing").is_none());
    }

    #[test]
    fn test_counts() {
        let library = sample();
        assert_eq!(library.package_count(), 2);
        assert_eq!(library.module_count(), 4);
        assert!(!library.is_empty());
        assert!(Library::new().is_empty());
    }
}
