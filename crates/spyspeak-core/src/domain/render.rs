//! Rendering a batch of codenames into the supported output formats.

use serde::Serialize;

use crate::domain::value_objects::RenderFormat;

#[derive(Serialize)]
struct Batch<'a> {
    codenames: &'a [String],
}

/// Render codenames in the requested format.
///
/// - `Text`: newline-joined, no trailing newline.
/// - `Json`: `{"codenames": [...]}` with 2-space indentation.
/// - `Csv`: `Codename` header and one row per entry, RFC-4180 quoting,
///   CRLF row terminators.
/// - `Html`: minimal standalone document; values inserted verbatim with no
///   escaping (documented compatibility behavior; see `RenderFormat::Html`).
pub fn render(codenames: &[String], format: RenderFormat) -> String {
    match format {
        RenderFormat::Text => codenames.join("\n"),
        RenderFormat::Json => {
            let batch = Batch { codenames };
            // Vec<String> of valid UTF-8 cannot fail to serialize.
            serde_json::to_string_pretty(&batch).unwrap_or_default()
        }
        RenderFormat::Csv => {
            let mut out = String::from("Codename\r\n");
            for name in codenames {
                out.push_str(&csv_field(name));
                out.push_str("\r\n");
            }
            out
        }
        RenderFormat::Html => {
            let mut html = String::from(
                "<html>\n<head><title>Generated Codenames</title></head>\n<body>\n",
            );
            html.push_str("<h1>Generated Codenames</h1>\n<ul>\n");
            for name in codenames {
                html.push_str(&format!("  <li>{name}</li>\n"));
            }
            html.push_str("</ul>\n</body>\n</html>");
            html
        }
    }
}

/// Quote a CSV field when it contains the delimiter, a quote, or a line
/// break; embedded quotes are doubled.
fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
