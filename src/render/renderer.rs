//! Style content serializer.

use minijinja::{context, Environment};

use super::error::RenderError;
use super::filters::register_filters;
use crate::style::{Piece, StyleContent, StyleObject, StyleValue};
use crate::theme::{Context, Theme};
use crate::util::to_kebab_case;

/// Renders [`StyleContent`] to CSS text against a theme.
///
/// Literal fragments and raw strings pass through verbatim. Template
/// expressions are evaluated with MiniJinja against `theme` (the theme's
/// values) and `props`, deferred functions are called with the render
/// [`Context`], and style objects are written as compact declarations with
/// kebab-case property names.
///
/// # Example
///
/// ```rust
/// use styled_breakpoint::{Renderer, StyleObject, Template, Theme};
///
/// let theme = Theme::new().add("accent", "teal");
/// let renderer = Renderer::new(theme);
///
/// let content = Template::new()
///     .text("color: ")
///     .expr("theme.accent")
///     .text("; ")
///     .content(StyleObject::new().set("fontSize", "12px"));
///
/// assert_eq!(renderer.render(&content.into()).unwrap(), "color: teal; font-size:12px;");
/// ```
pub struct Renderer {
    env: Environment<'static>,
    theme: Theme,
}

impl Renderer {
    /// Creates a renderer for `theme`.
    ///
    /// The theme's breakpoint table (or the default table) backs the
    /// `breakpoint()` template function.
    pub fn new(theme: Theme) -> Self {
        let mut env = Environment::new();
        register_filters(&mut env, theme.breakpoints_or_default());
        Self { env, theme }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Renders `content` with no props.
    pub fn render(&self, content: &StyleContent) -> Result<String, RenderError> {
        self.render_in(content, &Context::new(&self.theme))
    }

    /// Renders `content` with `props` available to functions and expressions.
    pub fn render_with_props(
        &self,
        content: &StyleContent,
        props: serde_json::Value,
    ) -> Result<String, RenderError> {
        self.render_in(content, &Context::new(&self.theme).with_props(props))
    }

    /// Renders `content` in an explicit context.
    ///
    /// The context's theme is used for expressions and functions; the
    /// renderer's own theme only backs the `breakpoint()` template function.
    pub fn render_in(
        &self,
        content: &StyleContent,
        ctx: &Context<'_>,
    ) -> Result<String, RenderError> {
        let mut out = String::new();
        self.write_content(&mut out, content, ctx)?;
        Ok(out)
    }

    fn write_content(
        &self,
        out: &mut String,
        content: &StyleContent,
        ctx: &Context<'_>,
    ) -> Result<(), RenderError> {
        match content {
            StyleContent::Raw(css) => out.push_str(css),
            StyleContent::Object(object) => write_object(out, object),
            StyleContent::Template(template) => {
                for piece in template.pieces() {
                    match piece {
                        Piece::Literal(text) => out.push_str(text),
                        Piece::Content(nested) => self.write_content(out, nested, ctx)?,
                        Piece::Expr(expr) => out.push_str(&self.eval(expr, ctx)?),
                        Piece::Function(f) => {
                            let produced = f(ctx);
                            self.write_content(out, &produced, ctx)?;
                        }
                    }
                }
            }
        }
        Ok(())
    }

    fn eval(&self, expr: &str, ctx: &Context<'_>) -> Result<String, RenderError> {
        let to_error = |source: minijinja::Error| RenderError::Expression {
            expr: expr.to_string(),
            source,
        };

        let compiled = self
            .env
            .compile_expression_owned(expr.to_string())
            .map_err(to_error)?;
        let value = compiled
            .eval(context! {
                theme => ctx.theme().values(),
                props => ctx.props(),
            })
            .map_err(to_error)?;

        if value.is_undefined() || value.is_none() {
            Ok(String::new())
        } else {
            Ok(value.to_string())
        }
    }
}

/// Renders `content` against `theme` with a one-off [`Renderer`].
pub fn render(content: &StyleContent, theme: &Theme) -> Result<String, RenderError> {
    Renderer::new(theme.clone()).render(content)
}

fn write_object(out: &mut String, object: &StyleObject) {
    for (key, value) in object.iter() {
        match value {
            StyleValue::Value(value) => {
                out.push_str(&to_kebab_case(key));
                out.push(':');
                out.push_str(value);
                out.push(';');
            }
            StyleValue::Block(nested) => {
                out.push_str(key);
                out.push('{');
                write_object(out, nested);
                out.push('}');
            }
            StyleValue::Media(nested) => {
                out.push_str("@media ");
                out.push_str(key);
                out.push('{');
                write_object(out, nested);
                out.push('}');
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Template;
    use serde_json::json;

    #[test]
    fn test_render_raw() {
        let renderer = Renderer::new(Theme::new());
        let out = renderer.render(&"color: red;".into()).unwrap();
        assert_eq!(out, "color: red;");
    }

    #[test]
    fn test_render_object() {
        let renderer = Renderer::new(Theme::new());
        let object = StyleObject::new()
            .set("fontSize", "12px")
            .block("&:hover", StyleObject::new().set("color", "red"))
            .media("print", StyleObject::new().set("display", "none"));

        let out = renderer.render(&object.into()).unwrap();
        assert_eq!(
            out,
            "font-size:12px;&:hover{color:red;}@media print{display:none;}"
        );
    }

    #[test]
    fn test_render_expression_reads_theme() {
        let renderer = Renderer::new(Theme::new().add("value", "green"));
        let content = Template::new()
            .text("color: ")
            .expr("theme.value | default('red')")
            .text(";");

        assert_eq!(renderer.render(&content.into()).unwrap(), "color: green;");
    }

    #[test]
    fn test_render_expression_missing_is_empty() {
        let renderer = Renderer::new(Theme::new());
        let content = Template::new().text("[").expr("theme.missing").text("]");
        assert_eq!(renderer.render(&content.into()).unwrap(), "[]");
    }

    #[test]
    fn test_render_expression_uses_filters() {
        let renderer = Renderer::new(Theme::new().add("gutter", 24));
        let content = Template::new()
            .text("padding: ")
            .expr("theme.gutter | em")
            .text("em;");
        assert_eq!(renderer.render(&content.into()).unwrap(), "padding: 1.5em;");
    }

    #[test]
    fn test_render_expression_reads_props() {
        let renderer = Renderer::new(Theme::new());
        let content = Template::new().text("color: ").expr("props.color").text(";");
        let out = renderer
            .render_with_props(&content.into(), json!({ "color": "orange" }))
            .unwrap();
        assert_eq!(out, "color: orange;");
    }

    #[test]
    fn test_render_invalid_expression() {
        let renderer = Renderer::new(Theme::new());
        let content = Template::new().expr("theme.(");
        let err = renderer.render(&content.into()).unwrap_err();
        assert!(matches!(err, RenderError::Expression { ref expr, .. } if expr == "theme.("));
    }

    #[test]
    fn test_render_function_gets_context() {
        let renderer = Renderer::new(Theme::new().add("value", "blue"));
        let content = Template::new().text("color: ").function(|ctx| {
            ctx.theme().get_str("value").unwrap_or("red").into()
        });
        assert_eq!(renderer.render(&content.into()).unwrap(), "color: blue");
    }

    #[test]
    fn test_render_in_explicit_context() {
        let renderer = Renderer::new(Theme::new().add("value", "blue"));
        let other = Theme::new().add("value", "purple");
        let content = Template::new().expr("theme.value");
        let out = renderer
            .render_in(&content.into(), &Context::new(&other))
            .unwrap();
        assert_eq!(out, "purple");
    }

    #[test]
    fn test_free_render() {
        let theme = Theme::new();
        assert_eq!(render(&"a{}".into(), &theme).unwrap(), "a{}");
    }
}
