//! syntect-backed HTML renderer.
//!
//! Tokens are emitted as classed `<span>`s and the theme is turned into a CSS
//! block in the document head, so the style only changes the stylesheet and
//! never the markup of the code itself.

use std::fmt::Write as _;

use syntect::html::{css_for_theme_with_class_style, ClassStyle, ClassedHTMLGenerator};
use syntect::util::LinesWithEndings;

use super::registry::{ChoiceRegistry, REGISTRY};
use crate::domain::{Choice, HighlightError, SnippetContent, SyntaxHighlighter};

/// HTML-escaping display wrapper, identical to syntect's internal
/// `escape::Escape` (not publicly exported in syntect 5).
struct Escape<'a>(&'a str);

impl std::fmt::Display for Escape<'_> {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0;
        let mut last = 0;
        for (i, ch) in s.bytes().enumerate() {
            let rep = match ch {
                b'>' => "&gt;",
                b'<' => "&lt;",
                b'&' => "&amp;",
                b'\'' => "&#39;",
                b'"' => "&quot;",
                _ => continue,
            };
            fmt.write_str(&s[last..i])?;
            fmt.write_str(rep)?;
            last = i + 1;
        }
        if last < s.len() {
            fmt.write_str(&s[last..])?;
        }
        Ok(())
    }
}

const CLASS_STYLE: ClassStyle = ClassStyle::Spaced;

/// Layout rules shared by every style.
const BASE_CSS: &str = "\
table.highlighttable { border-spacing: 0; }
td.linenos { padding-right: 10px; text-align: right; user-select: none; }
td.linenos pre { margin: 0; color: #888888; }
td.source pre { margin: 0; }
";

/// Full-document HTML renderer over the process-wide [`ChoiceRegistry`].
#[derive(Clone, Copy)]
pub struct SyntectHighlighter {
    registry: &'static ChoiceRegistry,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self {
            registry: &REGISTRY,
        }
    }

    fn render_code(&self, content: &SnippetContent) -> Result<String, HighlightError> {
        let syntax = self
            .registry
            .syntax(&content.language)
            .ok_or_else(|| HighlightError::UnknownLanguage(content.language.clone()))?;

        let mut code = content.code.clone();
        if !code.ends_with('\n') {
            code.push('\n');
        }

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            self.registry.syntax_set(),
            CLASS_STYLE,
        );
        for line in LinesWithEndings::from(&code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| HighlightError::Render(e.to_string()))?;
        }
        let highlighted = generator.finalize();

        let body = if content.linenos {
            let line_count = code.lines().count().max(1);
            let numbers: Vec<String> = (1..=line_count).map(|n| n.to_string()).collect();
            format!(
                "<table class=\"highlighttable\"><tr>\
                 <td class=\"linenos\"><div class=\"linenodiv\"><pre>{}</pre></div></td>\
                 <td class=\"source\"><div class=\"highlight\">\
                 <pre class=\"code\">{}</pre></div></td>\
                 </tr></table>",
                numbers.join("\n"),
                highlighted
            )
        } else {
            format!(
                "<div class=\"highlight\"><pre class=\"code\">{}</pre></div>",
                highlighted
            )
        };

        Ok(body)
    }

    fn stylesheet(&self, style: &str) -> Result<String, HighlightError> {
        let theme = self
            .registry
            .theme(style)
            .ok_or_else(|| HighlightError::UnknownStyle(style.to_string()))?;

        css_for_theme_with_class_style(theme, CLASS_STYLE)
            .map_err(|e| HighlightError::Render(e.to_string()))
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl SyntaxHighlighter for SyntectHighlighter {
    fn supports_language(&self, language: &str) -> bool {
        self.registry.syntax(language).is_some()
    }

    fn supports_style(&self, style: &str) -> bool {
        self.registry.theme(style).is_some()
    }

    fn language_choices(&self) -> Vec<Choice> {
        to_choices(self.registry.language_choices())
    }

    fn style_choices(&self) -> Vec<Choice> {
        to_choices(self.registry.style_choices())
    }

    fn render(&self, content: &SnippetContent) -> Result<String, HighlightError> {
        let css = self.stylesheet(&content.style)?;
        let body = self.render_code(content)?;
        let title = Escape(&content.title);

        let mut doc = String::with_capacity(css.len() + body.len() + 512);
        doc.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        let _ = writeln!(doc, "  <title>{}</title>", title);
        doc.push_str("  <meta http-equiv=\"content-type\" content=\"text/html; charset=utf-8\">\n");
        doc.push_str("  <style type=\"text/css\">\n");
        doc.push_str(&css);
        doc.push_str(BASE_CSS);
        doc.push_str("  </style>\n</head>\n<body>\n");
        if !content.title.is_empty() {
            let _ = writeln!(doc, "<h2>{}</h2>", title);
        }
        doc.push_str(&body);
        doc.push_str("\n</body>\n</html>\n");

        Ok(doc)
    }
}

fn to_choices<'a>(pairs: impl Iterator<Item = (&'a str, &'a str)>) -> Vec<Choice> {
    pairs
        .map(|(key, name)| Choice {
            key: key.to_string(),
            name: name.to_string(),
        })
        .collect()
}
