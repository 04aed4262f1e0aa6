//! HTML document generator implementation.

use screener::{DocumentExporter, QUESTIONS_HEADING, RenderedQuestion, ScreenerDocument};

/// Brand magenta used for recruiter instructions.
pub const BRAND_MAGENTA: &str = "#C0007A";

/// Options for HTML generation.
#[derive(Debug, Clone)]
pub struct HtmlOptions {
    /// Title override. Defaults to the document's own title.
    pub title: Option<String>,
    /// Whether to include the default CSS styling.
    pub include_styles: bool,
    /// Whether to generate a complete HTML document (with html/head/body tags).
    pub full_document: bool,
    /// CSS class prefix for all generated elements.
    pub class_prefix: String,
    /// Body font family.
    pub font: String,
    /// Color of instruction lines, as `#RRGGBB`.
    pub brand_color: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlOptions {
    /// Create new options with default values.
    pub fn new() -> Self {
        Self {
            title: None,
            include_styles: true,
            full_document: true,
            class_prefix: "screener".to_string(),
            font: "Calibri".to_string(),
            brand_color: BRAND_MAGENTA.to_string(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enable or disable default CSS styling.
    pub fn with_styles(mut self, include: bool) -> Self {
        self.include_styles = include;
        self
    }

    /// Generate a complete HTML document or just the body fragment.
    pub fn full_document(mut self, full: bool) -> Self {
        self.full_document = full;
        self
    }

    /// Set a custom CSS class prefix.
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = prefix.into();
        self
    }

    /// Set the body font family.
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the instruction color (`#RRGGBB`).
    pub fn with_brand_color(mut self, color: impl Into<String>) -> Self {
        self.brand_color = color.into();
        self
    }

    fn validate(&self) -> Result<(), HtmlError> {
        let hex = self.brand_color.strip_prefix('#').unwrap_or_default();
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(HtmlError::InvalidColor(self.brand_color.clone()));
        }
        if self.font.trim().is_empty() || self.font.contains(['"', ';', '{', '}']) {
            return Err(HtmlError::InvalidFont(self.font.clone()));
        }
        Ok(())
    }
}

/// Error type for HTML generation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HtmlError {
    #[error("Invalid brand color '{0}', expected #RRGGBB")]
    InvalidColor(String),

    #[error("Invalid font family '{0}'")]
    InvalidFont(String),
}

/// Generate HTML for a document with default options.
pub fn to_html(document: &ScreenerDocument) -> String {
    generate_html(document, &HtmlOptions::new())
}

/// Generate HTML with custom options.
pub fn to_html_with_options(
    document: &ScreenerDocument,
    options: &HtmlOptions,
) -> Result<String, HtmlError> {
    options.validate()?;
    Ok(generate_html(document, options))
}

/// Exporter producing a Word-openable `.doc` file.
#[derive(Debug, Clone, Default)]
pub struct HtmlExporter {
    options: HtmlOptions,
}

impl HtmlExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: HtmlOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl DocumentExporter for HtmlExporter {
    type Error = HtmlError;

    fn name(&self) -> &'static str {
        "word-html"
    }

    fn extension(&self) -> &'static str {
        "doc"
    }

    fn export(&self, document: &ScreenerDocument) -> Result<Vec<u8>, Self::Error> {
        to_html_with_options(document, &self.options).map(String::into_bytes)
    }
}

/// Generate HTML from a composed document.
fn generate_html(document: &ScreenerDocument, options: &HtmlOptions) -> String {
    let mut html = String::new();
    let prefix = &options.class_prefix;
    let header = &document.header;
    let title = options.title.as_deref().unwrap_or(&header.title);

    if options.full_document {
        html.push_str("<!DOCTYPE html>\n");
        html.push_str(
            "<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" \
             xmlns:w=\"urn:schemas-microsoft-com:office:word\" lang=\"en\">\n<head>\n",
        );
        html.push_str("  <meta charset=\"UTF-8\">\n");
        html.push_str(&format!("  <title>{}</title>\n", escape_html(title)));

        if options.include_styles {
            html.push_str(&generate_styles(prefix, &options.font, &options.brand_color));
        }

        html.push_str("</head>\n<body>\n");
    }

    html.push_str(&format!("<div class=\"{prefix}-document\">\n"));

    // Header
    html.push_str(&format!(
        "  <h2 class=\"{prefix}-heading\">{}</h2>\n",
        escape_html(title)
    ));
    html.push_str(&paragraph(prefix, "meta", &header.mode_line()));
    html.push_str(&paragraph(prefix, "meta", &header.dates_line()));
    html.push_str(&format!(
        "  <p class=\"{prefix}-meta\"><b>{}</b></p>\n",
        escape_html(&header.category_line())
    ));
    if let Some(notes) = header.notes_line() {
        html.push_str(&paragraph(prefix, "meta", &notes));
    }

    // Questions
    html.push_str(&format!(
        "  <h2 class=\"{prefix}-heading\">{QUESTIONS_HEADING}</h2>\n"
    ));
    for question in &document.questions {
        html.push_str(&generate_question(question, prefix));
    }

    html.push_str("</div>\n");

    if options.full_document {
        html.push_str("</body>\n</html>\n");
    }

    html
}

/// Generate HTML for a single question.
fn generate_question(question: &RenderedQuestion, prefix: &str) -> String {
    let mut html = String::new();

    let code = question
        .code
        .as_ref()
        .map(|code| format!("<b>[{}]</b> ", escape_html(code)))
        .unwrap_or_default();
    html.push_str(&format!(
        "  <p class=\"{prefix}-question\">{}. {code}{}</p>\n",
        question.number,
        escape_html(&question.text)
    ));

    for option in &question.options {
        html.push_str(&format!(
            "  <p class=\"{prefix}-option\">{} {}</p>\n",
            option.letter,
            escape_html(&option.text)
        ));
    }

    if let Some(instructions) = question.export_instructions() {
        html.push_str(&paragraph(prefix, "instructions", &instructions));
    }

    html
}

fn paragraph(prefix: &str, class: &str, text: &str) -> String {
    format!("  <p class=\"{prefix}-{class}\">{}</p>\n", escape_html(text))
}

/// Escape HTML special characters.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Generate default CSS styles. Sizes are in points so Word keeps them.
fn generate_styles(prefix: &str, font: &str, brand_color: &str) -> String {
    format!(
        r#"  <style>
    body {{
      font-family: "{font}", sans-serif;
      font-size: 11pt;
    }}
    .{prefix}-heading {{
      font-family: "{font}", sans-serif;
      font-size: 13pt;
      margin: 0 0 6pt 0;
    }}
    .{prefix}-meta, .{prefix}-question, .{prefix}-option, .{prefix}-instructions {{
      margin: 0 0 6pt 0;
    }}
    .{prefix}-option {{
      margin-left: 18pt;
    }}
    .{prefix}-instructions {{
      font-size: 10pt;
      font-style: italic;
      color: {brand_color};
    }}
  </style>
"#
    )
}
