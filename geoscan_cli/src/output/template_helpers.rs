use handlebars::{
    Context, Handlebars, Helper, HelperResult, Output, RenderContext, RenderError,
    RenderErrorReason,
};

/// Register custom Handlebars helpers
pub fn register_helpers(handlebars: &mut Handlebars) {
    handlebars.register_helper("basename", Box::new(basename_helper));
}

/// Get basename of a path
///
/// Helper output bypasses template escaping, so the name is escaped here.
fn basename_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let param = h.param(0).ok_or_else(|| {
        RenderError::from(RenderErrorReason::Other(
            "basename expects 1 parameter".into(),
        ))
    })?;

    let path_str = param.value().as_str().ok_or_else(|| {
        RenderError::from(RenderErrorReason::Other("basename expects a string".into()))
    })?;

    let path = std::path::Path::new(path_str);
    if let Some(basename) = path.file_name() {
        out.write(&handlebars::html_escape(&basename.to_string_lossy()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn render(template: &str, data: serde_json::Value) -> Result<String, RenderError> {
        let mut handlebars = Handlebars::new();
        register_helpers(&mut handlebars);
        handlebars.render_template(template, &data)
    }

    #[test]
    fn test_basename_helper() {
        let output = render("{{basename p}}", json!({ "p": "images/trip/beach.jpg" })).unwrap();
        assert_eq!(output, "beach.jpg");
    }

    #[test]
    fn test_basename_without_directory() {
        let output = render("{{basename p}}", json!({ "p": "a.png" })).unwrap();
        assert_eq!(output, "a.png");
    }

    #[test]
    fn test_basename_escapes_markup() {
        let output = render("{{basename p}}", json!({ "p": "images/<x>&'.gif" })).unwrap();
        assert!(!output.contains('<'));
        assert!(!output.contains('\''));
        assert!(output.starts_with("&lt;x&gt;&amp;"));
    }

    #[test]
    fn test_basename_rejects_non_string() {
        assert!(render("{{basename p}}", json!({ "p": 42 })).is_err());
    }
}
