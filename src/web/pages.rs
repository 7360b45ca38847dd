//! HTML page rendering.
//!
//! Handlers hand a snapshot (or one module of it) to a [`PageRenderer`]; the
//! built-in [`HtmlPages`] produces self-contained markup. Every piece of
//! catalog text is escaped before it reaches the page.

use crate::catalog::{IconField, Module, Package};
use crate::state::Snapshot;
use std::fmt::Write;

/// Turns catalog data into response bodies.
pub trait PageRenderer: Send + Sync {
    /// Listing of every package and its modules.
    fn library_page(&self, title: &str, snapshot: &Snapshot) -> String;

    /// One package and its modules.
    fn package_page(&self, name: &str, package: &Package) -> String;

    /// One module's details.
    fn module_page(&self, package: &str, module: &Module) -> String;
}

/// Built-in renderer producing plain HTML5.
#[derive(Debug, Clone, Default)]
pub struct HtmlPages;

impl PageRenderer for HtmlPages {
    fn library_page(&self, title: &str, snapshot: &Snapshot) -> String {
        let mut body = String::new();
        for (name, package) in snapshot.library.packages_sorted() {
            let _ = write!(
                body,
                "<section class='package'><h2><a href='/package/?name={}'>{}</a></h2>",
                urlencoding::encode(name),
                escape(name)
            );
            body.push_str(&module_list(name, package));
            body.push_str("</section>");
        }
        let _ = write!(
            body,
            "<footer>generation {} loaded {}</footer>",
            snapshot.generation,
            snapshot.loaded_at.to_rfc3339()
        );
        document(title, &body)
    }

    fn package_page(&self, name: &str, package: &Package) -> String {
        let mut body = String::new();
        let _ = write!(body, "<h2>{}</h2>", escape(name));
        body.push_str(&module_list(name, package));
        body.push_str("<p><a href='/'>all packages</a></p>");
        document(name, &body)
    }

    fn module_page(&self, package: &str, module: &Module) -> String {
        let mut body = String::new();
        let _ = write!(
            body,
            "<div class='module'><h3>{}</h3><p>{}</p><dl>",
            escape(&module.name),
            escape(&module.description)
        );
        for (label, value) in [
            ("Package", package),
            ("Path", module.path.as_str()),
            ("Markdown", module.markdown.as_str()),
            ("Tester", module.tester.as_str()),
            ("Example", module.example.as_str()),
        ] {
            let _ = write!(body, "<dt>{label}</dt><dd>{}</dd>", or_dash(value));
        }
        body.push_str("</dl>");
        body.push_str(&icon_markup(&module.icon));
        body.push_str("</div>");
        document(&module.name, &body)
    }
}

fn module_list(package: &str, modules: &Package) -> String {
    let mut list = String::from("<ul>");
    for module in modules.modules_sorted() {
        let _ = write!(
            list,
            "<li><a href='/module/?name={}&amp;package={}'>{}</a> {}</li>",
            urlencoding::encode(&module.name),
            urlencoding::encode(package),
            escape(&module.name),
            escape(&module.description)
        );
    }
    list.push_str("</ul>");
    list
}

fn icon_markup(icon: &IconField) -> String {
    match icon {
        IconField::Single(path) if !path.is_empty() => {
            format!("<img src='{}' alt='Icon'>", escape(path))
        }
        IconField::Themed { light, dark } if !icon.is_blank() => {
            let mut picture = String::from("<picture>");
            if !dark.is_empty() {
                let _ = write!(
                    picture,
                    "<source srcset='{}' media='(prefers-color-scheme: dark)'>",
                    escape(dark)
                );
            }
            let fallback = if light.is_empty() { dark } else { light };
            let _ = write!(picture, "<img src='{}' alt='Icon'></picture>", escape(fallback));
            picture
        }
        _ => String::new(),
    }
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html><html><head><meta charset='utf-8'><title>{}</title>\
         <link rel='stylesheet' href='/static/style.css'></head><body>{}</body></html>",
        escape(title),
        body
    )
}

fn or_dash(value: &str) -> String {
    if value.is_empty() {
        "&mdash;".to_string()
    } else {
        escape(value)
    }
}

/// Escape text for element content and single-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}
