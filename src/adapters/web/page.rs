//! HTML rendering of the single page.

use crate::domain::{PageView, Sentiment};

/// Escape text for HTML element content and double-quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn sentiment_class(sentiment: Sentiment) -> &'static str {
    match sentiment {
        Sentiment::Positive => "positive",
        Sentiment::Negative => "negative",
        Sentiment::Unknown => "unknown",
    }
}

/// Render the form, any error or saved-file notice, and the results table.
pub fn render(view: &PageView) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<title>Social Media Sentiment Analysis</title>\n");
    html.push_str(
        "<style>\n\
         body { font-family: sans-serif; margin: 2em; }\n\
         .error { color: #b00020; }\n\
         .saved { color: #1b5e20; }\n\
         .positive { color: #2e7d32; }\n\
         .negative { color: #c62828; }\n\
         .unknown { color: #757575; }\n\
         table { border-collapse: collapse; width: 100%; }\n\
         td, th { border: 1px solid #ccc; padding: 0.4em; vertical-align: top; }\n\
         </style>\n",
    );
    html.push_str("</head>\n<body>\n");
    html.push_str("<h1>Social Media Sentiment Analysis</h1>\n");

    // Form
    let limit_value = view.limit_input.as_deref().unwrap_or("10");
    html.push_str("<form method=\"post\" action=\"/\">\n");
    html.push_str(&format!(
        "<label>Number of posts (1-100): <input type=\"text\" name=\"limit\" value=\"{}\"></label>\n",
        escape_html(limit_value)
    ));
    html.push_str(&format!(
        "<label><input type=\"checkbox\" name=\"save\" value=\"yes\"{}> Save results to file</label>\n",
        if view.save_checked { " checked" } else { "" }
    ));
    html.push_str("<button type=\"submit\">Analyze</button>\n</form>\n");

    if let Some(error) = &view.error {
        html.push_str(&format!("<p class=\"error\">{}</p>\n", escape_html(error)));
    }

    if let Some(saved) = &view.saved_file {
        html.push_str(&format!(
            "<p class=\"saved\">Results saved to {}</p>\n",
            escape_html(&saved.display().to_string())
        ));
    }

    if !view.posts.is_empty() {
        html.push_str("<table>\n<tr><th>ID</th><th>Title</th><th>Body</th><th>Sentiment</th><th>Score</th></tr>\n");
        for (post, result) in view.rows() {
            html.push_str(&format!(
                "<tr><td>{}</td><td>{}</td><td>{}</td><td class=\"{}\">{} ({})</td><td>{:.4}</td></tr>\n",
                post.id,
                escape_html(&post.title),
                escape_html(&post.body),
                sentiment_class(result.sentiment),
                result.sentiment,
                escape_html(&result.label),
                result.score
            ));
        }
        html.push_str("</table>\n");
    }

    html.push_str("</body>\n</html>\n");
    html
}
