//! Standalone host page rendering
//!
//! Produces a complete HTML document that already carries the split heading
//! and the companion stylesheet, and loads the wasm module to run the
//! animator once the document is ready.

use crate::config::PageConfig;
use crate::error::Result;
use crate::host::HEADING_SELECTOR;
use crate::split::{escape_html, split_markup};
use crate::stylesheet::{stylesheet, StyleOptions};

/// Render a host page for `title`
pub fn render_page(config: &PageConfig, title: &str, style: &StyleOptions) -> Result<String> {
    let css = stylesheet(style)?;
    let heading = split_markup(title);
    let module = script_string(&config.wasm_module);

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="{lang}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<style>
{css}
</style>
</head>
<body>
<{tag}>{heading}</{tag}>
<script type="module">
import init, {{ start }} from {module};
init().then(() => start());
</script>
</body>
</html>
"#,
        lang = escape_html(&config.lang),
        title = escape_html(title),
        css = css.trim_end(),
        tag = HEADING_SELECTOR,
        heading = heading,
        module = module,
    ))
}

/// Quote `value` as a JavaScript string literal safe to embed in a script element
fn script_string(value: &str) -> String {
    serde_json::Value::from(value).to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_contains_split_heading() {
        let page = render_page(&PageConfig::default(), "A B", &StyleOptions::default()).unwrap();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(
            "<h1><span style=\"--delay: 0s\">A</span> <span style=\"--delay: 0.1s\">B</span></h1>"
        ));
        assert!(page.contains("<title>A B</title>"));
    }

    #[test]
    fn test_page_embeds_stylesheet_and_module() {
        let page = render_page(&PageConfig::default(), "Hi", &StyleOptions::default()).unwrap();
        assert!(page.contains("@keyframes jump"));
        assert!(page.contains("<html lang=\"en\">"));
        assert!(page.contains("from \"./pkg/titlewave.js\""));
        assert!(page.contains("init().then(() => start());"));
    }

    #[test]
    fn test_page_escapes_title() {
        let page = render_page(&PageConfig::default(), "<x>", &StyleOptions::default()).unwrap();
        assert!(page.contains("<title>&lt;x&gt;</title>"));
        assert!(!page.contains("<x>"));
    }

    #[test]
    fn test_script_string_cannot_close_script() {
        assert_eq!(script_string("./a.js"), "\"./a.js\"");
        assert_eq!(script_string("x</script>"), "\"x<\\/script>\"");
    }

    #[test]
    fn test_page_uses_config() {
        let config = PageConfig { lang: "ja".to_string(), wasm_module: "/js/tw.js".to_string() };
        let page = render_page(&config, "Hi", &StyleOptions { minify: true }).unwrap();
        assert!(page.contains("<html lang=\"ja\">"));
        assert!(page.contains("from \"/js/tw.js\""));
    }
}
