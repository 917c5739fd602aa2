use std::path::Path;

use tera::{Context, Tera};

use crate::completion::ERROR_PREFIX;
use crate::config::ConfigError;

/// Name of the template variable that receives the greeting text.
pub const PLACEHOLDER: &str = "greeting";

const TEMPLATE_NAME: &str = "greeting.html";

#[derive(Debug, Clone)]
pub enum Renderer {
    /// `<h1>{text}</h1>`, text inserted as-is.
    Heading,
    /// A static page with the text bound to [`PLACEHOLDER`].
    Template(Tera),
}

impl Renderer {
    /// Loads the template once. Tera autoescapes because the registered name
    /// ends in `.html`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Template`] when the file cannot be read or parsed.
    pub fn from_template_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let mut tera = Tera::default();
        tera.add_template_file(path, Some(TEMPLATE_NAME))
            .map_err(|source| ConfigError::Template {
                path: path.to_path_buf(),
                source,
            })?;
        Ok(Self::Template(tera))
    }

    pub fn from_template_str(content: &str) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, content)?;
        Ok(Self::Template(tera))
    }

    pub fn render(&self, text: &str) -> String {
        match self {
            Self::Heading => heading(text),
            Self::Template(tera) => {
                let mut context = Context::new();
                context.insert(PLACEHOLDER, text);
                tera.render(TEMPLATE_NAME, &context).unwrap_or_else(|err| {
                    tracing::error!(error = ?err, "failed to render greeting template");
                    heading(&format!("{ERROR_PREFIX} failed to render template: {err}"))
                })
            }
        }
    }
}

fn heading(text: &str) -> String {
    format!("<h1>{text}</h1>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heading_wraps_text_verbatim() {
        assert_eq!(
            Renderer::Heading.render("Hello, stranger!"),
            "<h1>Hello, stranger!</h1>"
        );
        assert_eq!(Renderer::Heading.render("<b>hi</b>"), "<h1><b>hi</b></h1>");
    }

    #[test]
    fn template_substitutes_placeholder() {
        let renderer =
            Renderer::from_template_str("<main><p>{{ greeting }}</p></main>").unwrap();
        assert_eq!(
            renderer.render("Hello, stranger!"),
            "<main><p>Hello, stranger!</p></main>"
        );
    }

    #[test]
    fn template_escapes_markup() {
        let renderer = Renderer::from_template_str("<p>{{ greeting }}</p>").unwrap();
        assert_eq!(renderer.render("<b>hi</b>"), "<p>&lt;b&gt;hi&lt;&#x2F;b&gt;</p>");
    }

    #[test]
    fn render_failure_falls_back_to_error_heading() {
        let renderer = Renderer::from_template_str("<p>{{ not_provided }}</p>").unwrap();
        let page = renderer.render("Hello");
        assert!(page.starts_with("<h1>ERROR: failed to render template"));
    }

    #[test]
    fn missing_template_file_is_a_config_error() {
        let err = Renderer::from_template_file("does/not/exist.html").unwrap_err();
        assert!(matches!(err, ConfigError::Template { .. }));
    }

    #[test]
    fn bundled_template_has_placeholder() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/templates/greeting.html");
        let page = Renderer::from_template_file(path)
            .unwrap()
            .render("Hello, stranger!");
        assert!(page.contains("Hello, stranger!"));
        assert!(page.starts_with("<!DOCTYPE html>"));
    }
}
