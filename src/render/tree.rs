//! Box-drawing tree dump of a library.
//!
//! Each node is rendered from an immutable `ancestors` path: one bool per
//! enclosing level, `true` when the ancestor at that level was the last of its
//! siblings. A level whose ancestor was last gets blank padding, every other
//! level gets a continuation bar, so the last branch never trails a `│`.
//! Children receive a copy of the path extended by their parent's own flag.
//!
//! A node at depth `d` expands its children only when `verbosity > d`:
//! the library (depth 0) lists packages, packages (depth 1) list modules and
//! modules (depth 2) list their detail fields.

use crate::catalog::{IconField, Library, Module, Package};

/// Shown in place of an empty field.
pub const PLACEHOLDER: &str = "❌";

const PIPE: &str = "│   ";
const BLANK: &str = "    ";
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";

const LIBRARY_DEPTH: u32 = 0;
const PACKAGE_DEPTH: u32 = 1;
const MODULE_DEPTH: u32 = 2;

/// Render `library` under a root labelled `name`.
///
/// Output depends only on the library's content and `verbosity`, never on
/// map iteration order.
pub fn render(library: &Library, name: &str, verbosity: u32) -> Vec<String> {
    let mut lines = vec![format!("📚 {name}")];
    if verbosity > LIBRARY_DEPTH {
        for (is_last, (package_name, package)) in mark_last(library.packages_sorted()) {
            lines.extend(package_lines(package_name, package, &[], is_last, verbosity));
        }
    }
    lines
}

/// [`render`] joined into one newline-terminated string.
pub fn render_to_string(library: &Library, name: &str, verbosity: u32) -> String {
    let mut out = String::new();
    for line in render(library, name, verbosity) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn package_lines(
    name: &str,
    package: &Package,
    ancestors: &[bool],
    is_last: bool,
    verbosity: u32,
) -> Vec<String> {
    let mut lines = vec![branch(ancestors, is_last, &format!("📎 {name}"))];
    if verbosity > PACKAGE_DEPTH {
        let path = descend(ancestors, is_last);
        for (module_is_last, module) in mark_last(package.modules_sorted()) {
            lines.extend(module_lines(module, &path, module_is_last, verbosity));
        }
    }
    lines
}

fn module_lines(module: &Module, ancestors: &[bool], is_last: bool, verbosity: u32) -> Vec<String> {
    let mut lines = vec![branch(ancestors, is_last, &format!("📦 {}", module.name))];
    if verbosity > MODULE_DEPTH {
        lines.extend(detail_lines(module, &descend(ancestors, is_last)));
    }
    lines
}

fn detail_lines(module: &Module, ancestors: &[bool]) -> Vec<String> {
    let mut lines = vec![
        branch(ancestors, false, &field("💬 description", &module.description)),
        branch(ancestors, false, &field("📄 markdown   ", &module.markdown)),
        branch(ancestors, false, &field("🚀 example    ", &module.example)),
        branch(ancestors, false, &field("🧪 tester     ", &module.tester)),
    ];
    lines.extend(icon_lines(&module.icon, ancestors));
    // path always closes the detail list
    lines.push(branch(ancestors, true, &field("🗂️  path       ", &module.path)));
    lines
}

fn icon_lines(icon: &IconField, ancestors: &[bool]) -> Vec<String> {
    match icon {
        IconField::Themed { light, dark } if !icon.is_blank() => {
            let sub = descend(ancestors, false);
            vec![
                branch(ancestors, false, "🖼️  icon"),
                branch(&sub, false, &field("⚪ light    ", light)),
                branch(&sub, true, &field("⚫ dark     ", dark)),
            ]
        }
        IconField::Single(path) => vec![branch(ancestors, false, &field("🖼️  icon       ", path))],
        _ => vec![branch(ancestors, false, &field("🖼️  icon       ", ""))],
    }
}

fn field(label: &str, value: &str) -> String {
    let value = if value.is_empty() { PLACEHOLDER } else { value };
    format!("{label} → {value}")
}

fn branch(ancestors: &[bool], is_last: bool, body: &str) -> String {
    let mut line = String::new();
    for &ancestor_is_last in ancestors {
        line.push_str(if ancestor_is_last { BLANK } else { PIPE });
    }
    line.push_str(if is_last { LAST_BRANCH } else { BRANCH });
    line.push_str(body);
    line
}

fn descend(ancestors: &[bool], is_last: bool) -> Vec<bool> {
    let mut path = ancestors.to_vec();
    path.push(is_last);
    path
}

fn mark_last<T>(items: Vec<T>) -> impl Iterator<Item = (bool, T)> {
    let count = items.len();
    items
        .into_iter()
        .enumerate()
        .map(move |(index, item)| (index + 1 == count, item))
}
