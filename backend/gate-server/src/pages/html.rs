//! Minimal HTML document helpers for the gate pages

use axum::response::Html;

/// Escape text for use in element content and quoted attribute values
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

pub fn document(title: &str, body: &str) -> Html<String> {
    Html(format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <title>{title}</title>\n</head>\n<body>\n{body}</body>\n</html>\n",
        title = escape(title),
    ))
}

pub fn heading(text: &str) -> String {
    format!("<h1>{}</h1>\n", escape(text))
}

pub fn image(src: &str, alt: &str) -> String {
    format!(
        "<img src=\"{}\" alt=\"{}\" width=\"480\">\n",
        escape(src),
        escape(alt)
    )
}

pub fn link(href: &str, text: &str) -> String {
    format!("<p><a href=\"{}\">{}</a></p>\n", escape(href), escape(text))
}

pub fn warning(text: &str) -> String {
    format!("<p class=\"warning\" role=\"alert\">{}</p>\n", escape(text))
}

pub fn error(text: &str) -> String {
    format!("<p class=\"error\" role=\"alert\">{}</p>\n", escape(text))
}
