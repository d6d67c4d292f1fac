use axum::http::header;
use axum::response::{IntoResponse, Response};

/// A paste body ready to be served, with its content type decided.
#[derive(Debug, PartialEq)]
pub enum Rendered {
    /// A full HTML page built from markdown content.
    Html(String),
    /// The stored content, verbatim.
    Plain(String),
}

impl IntoResponse for Rendered {
    fn into_response(self) -> Response {
        match self {
            Rendered::Html(body) => (
                [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
                body,
            )
                .into_response(),
            Rendered::Plain(body) => (
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                body,
            )
                .into_response(),
        }
    }
}

/// Decide how to serve a paste.
///
/// Markdown is rendered to an HTML page only when the stored format is
/// exactly `markdown`, the request accepts HTML, and the client did not ask
/// for a format override. Everything else, including unknown stored formats,
/// is served verbatim as plain text.
pub fn render(
    id: &str,
    content: &str,
    stored_format: &str,
    accepts_html: bool,
    format_override: bool,
) -> Rendered {
    if stored_format == "markdown" && accepts_html && !format_override {
        Rendered::Html(markdown_to_page(id, content))
    } else {
        Rendered::Plain(content.to_owned())
    }
}

/// Render markdown to a self-contained HTML page titled after the paste id.
///
/// Raw HTML in the source is passed through untouched; pastes are authored
/// by the authenticated admin only.
pub fn markdown_to_page(id: &str, source: &str) -> String {
    let options = markdown::Options {
        compile: markdown::CompileOptions {
            allow_dangerous_html: true,
            allow_dangerous_protocol: true,
            ..markdown::CompileOptions::default()
        },
        ..markdown::Options::default()
    };
    // safe to unwrap when not using MDX
    let body = markdown::to_html_with_options(source, &options).unwrap();
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Paste {id}</title>
  <style>
    body {{
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, Oxygen, Ubuntu, sans-serif;
      line-height: 1.6;
      max-width: 800px;
      margin: 40px auto;
      padding: 0 20px;
      color: #333;
    }}
    pre {{
      background: #f4f4f4;
      padding: 12px;
      border-radius: 4px;
      overflow-x: auto;
    }}
    code {{
      background: #f4f4f4;
      padding: 2px 4px;
      border-radius: 2px;
    }}
    blockquote {{
      border-left: 4px solid #ddd;
      margin-left: 0;
      padding-left: 16px;
      color: #666;
    }}
  </style>
</head>
<body>
  {body}
</body>
</html>"#
    )
}
