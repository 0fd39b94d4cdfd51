//! Output formatters for search results and single answers

use crate::advisor::catalog::{CareerQuestion, Category};
use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::blocks::{parse_answer, AnswerBlock};
use askama::Template;
use colored::{Color, Colorize};
use serde::Serialize;
use std::path::Path;
use unicode_segmentation::UnicodeSegmentation;

const PREVIEW_GRAPHEMES: usize = 120;

/// Results of one search, as handed to a formatter.
#[derive(Debug, Clone, Serialize)]
pub struct SearchReport<'a> {
    pub query: &'a str,
    pub count: usize,
    pub results: &'a [CareerQuestion],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<&'a str>,
}

impl<'a> SearchReport<'a> {
    pub fn new(query: &'a str, results: &'a [CareerQuestion]) -> Self {
        Self {
            query,
            count: results.len(),
            results,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Option<&'a str>) -> Self {
        self.notice = notice;
        self
    }
}

/// Trait for rendering advisor output
pub trait OutputFormatter {
    fn format_results(&self, report: &SearchReport<'_>) -> Result<String>;
    fn format_question(&self, question: &CareerQuestion) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    include_metadata: bool,
}

pub struct HtmlFormatter {
    include_styles: bool,
}

/// HTML body of one answer. Every line is escaped.
#[derive(Template)]
#[template(
    source = r#"{% for line in lines %}{% if line.heading %}<h4 class="answer-heading">{{ line.text }}</h4>{% else %}<p class="{{ line.class }}">{{ line.text }}</p>{% endif %}{% endfor %}"#,
    ext = "html"
)]
struct AnswerFragment {
    lines: Vec<HtmlLine>,
}

struct HtmlLine {
    heading: bool,
    class: &'static str,
    text: String,
}

impl From<&AnswerBlock> for HtmlLine {
    fn from(block: &AnswerBlock) -> Self {
        let class = match block {
            AnswerBlock::Heading(_) => "answer-heading",
            AnswerBlock::Numbered(_) => "answer-step",
            AnswerBlock::Bullet(_) => "answer-bullet",
            AnswerBlock::Paragraph(_) => "answer-text",
        };
        Self {
            heading: matches!(block, AnswerBlock::Heading(_)),
            class,
            text: block.text().to_string(),
        }
    }
}

/// Render an answer as HTML. Generated answers keep their line structure;
/// catalog answers become one paragraph.
pub fn format_answer(answer: &str, is_ai_generated: bool) -> Result<String> {
    let lines = if is_ai_generated {
        parse_answer(answer).iter().map(HtmlLine::from).collect()
    } else {
        vec![HtmlLine {
            heading: false,
            class: "answer-text",
            text: answer.to_string(),
        }]
    };
    Ok(AnswerFragment { lines }.render()?)
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #2d2a4a;
            max-width: 860px;
            margin: 0 auto;
            padding: 20px;
            background: #f4f2fb;
        }
        .card {
            background: white;
            padding: 24px;
            margin: 16px 0;
            border-radius: 10px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.08);
        }
        .category {
            display: inline-block;
            padding: 2px 10px;
            border-radius: 12px;
            background: #ede9fe;
            color: #5b21b6;
            font-size: 0.85em;
        }
        .ai-badge {
            margin-left: 8px;
            color: #047857;
            font-size: 0.85em;
        }
        .notice {
            background: #fef3c7;
            padding: 12px;
            border-radius: 6px;
        }
        .answer-heading { color: #6d28d9; margin: 16px 0 8px; }
        .answer-step, .answer-bullet { padding-left: 16px; margin: 4px 0; }
        .answer-text { margin: 0 0 12px; }
    </style>
    {% endif %}
</head>
<body>
    <h1>{{ title }}</h1>
    {% if has_notice %}<p class="notice">{{ notice }}</p>{% endif %}
    {% for entry in entries %}
    <div class="card">
        <h2>{{ entry.question }}</h2>
        <span class="category">{{ entry.category }}</span>{% if entry.is_ai_generated %}<span class="ai-badge">✨ AI Generated</span>{% endif %}
        <div class="answer">{{ entry.answer_html|safe }}</div>
    </div>
    {% endfor %}
    <footer><p>Generated by SkillSync v{{ version }}</p></footer>
</body>
</html>"#,
    ext = "html"
)]
struct HtmlPage {
    include_styles: bool,
    title: String,
    has_notice: bool,
    notice: String,
    entries: Vec<HtmlEntry>,
    version: &'static str,
}

struct HtmlEntry {
    question: String,
    category: String,
    is_ai_generated: bool,
    answer_html: String,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str) -> String {
        if self.use_colors {
            format!("\n{} {}\n", "▓".blue().bold(), title.blue().bold())
        } else {
            format!("\n▓ {}\n", title)
        }
    }

    fn category_badge(&self, category: Category) -> String {
        let color = match category {
            Category::Tech => Color::Blue,
            Category::Business => Color::Green,
            Category::Healthcare => Color::Red,
            Category::Arts => Color::Magenta,
        };
        self.colorize(&format!("[{}]", category), color)
    }

    fn ai_tag(&self, question: &CareerQuestion) -> String {
        if question.is_ai_generated {
            format!(" {}", self.colorize("✨ AI Generated", Color::Green))
        } else {
            String::new()
        }
    }

    fn format_answer_body(&self, question: &CareerQuestion) -> String {
        if !question.is_ai_generated {
            return format!("{}\n", question.answer);
        }

        let mut output = String::new();
        for block in parse_answer(&question.answer) {
            match &block {
                AnswerBlock::Heading(text) => {
                    let heading = if self.use_colors {
                        text.magenta().bold().to_string()
                    } else {
                        text.clone()
                    };
                    output.push_str(&format!("\n{}\n", heading));
                }
                AnswerBlock::Numbered(text) | AnswerBlock::Bullet(text) => {
                    output.push_str(&format!("  {}\n", text));
                }
                AnswerBlock::Paragraph(text) => output.push_str(&format!("{}\n", text)),
            }
        }
        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_results(&self, report: &SearchReport<'_>) -> Result<String> {
        let mut output = String::new();

        let title = if report.query.trim().is_empty() {
            "Career Questions".to_string()
        } else {
            format!("Results for \"{}\"", report.query.trim())
        };
        output.push_str(&self.format_header(&title));

        if let Some(notice) = report.notice {
            output.push_str(&format!("{}\n", self.colorize(notice, Color::Yellow)));
        }
        output.push_str(&format!("{} result(s)\n\n", report.count));

        for question in report.results {
            output.push_str(&format!(
                "{} {} {}{}\n",
                self.colorize(&format!("#{}", question.id), Color::BrightBlack),
                question.question,
                self.category_badge(question.category),
                self.ai_tag(question)
            ));

            if self.detailed {
                output.push_str(&self.format_answer_body(question));
            } else {
                output.push_str(&format!("    {}\n", preview(&question.answer)));
            }
            output.push('\n');
        }

        Ok(output)
    }

    fn format_question(&self, question: &CareerQuestion) -> Result<String> {
        let mut output = self.format_header(&question.question);
        output.push_str(&format!(
            "{}{}\n\n",
            self.category_badge(question.category),
            self.ai_tag(question)
        ));
        output.push_str(&self.format_answer_body(question));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(value)?)
        } else {
            Ok(serde_json::to_string(value)?)
        }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_results(&self, report: &SearchReport<'_>) -> Result<String> {
        self.to_json(report)
    }

    fn format_question(&self, question: &CareerQuestion) -> Result<String> {
        self.to_json(question)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn question_section(&self, question: &CareerQuestion) -> String {
        let mut output = format!("## {}\n\n", question.question);
        output.push_str(&format!("*Category: {}*", question.category));
        if question.is_ai_generated {
            output.push_str(" | *AI Generated*");
        }
        output.push_str("\n\n");

        if !question.is_ai_generated {
            output.push_str(&format!("{}\n\n", question.answer));
            return output;
        }

        for block in parse_answer(&question.answer) {
            match &block {
                AnswerBlock::Heading(text) => output.push_str(&format!("### {}\n\n", text)),
                AnswerBlock::Numbered(text) => output.push_str(&format!("{}\n", text)),
                AnswerBlock::Bullet(text) => {
                    let item = text.trim_start_matches('•').trim_start();
                    output.push_str(&format!("- {}\n", item));
                }
                AnswerBlock::Paragraph(text) => output.push_str(&format!("\n{}\n\n", text)),
            }
        }
        output.push('\n');
        output
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_results(&self, report: &SearchReport<'_>) -> Result<String> {
        let mut output = String::from("# SkillSync Results\n\n");

        if self.include_metadata {
            output.push_str(&format!("**Query:** {}  \n", report.query.trim()));
            output.push_str(&format!("**Results:** {}  \n", report.count));
            output.push_str(&format!(
                "**Generated:** {}\n\n",
                chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC")
            ));
        }

        if let Some(notice) = report.notice {
            output.push_str(&format!("> {}\n\n", notice));
        }

        for question in report.results {
            output.push_str(&self.question_section(question));
        }
        Ok(output)
    }

    fn format_question(&self, question: &CareerQuestion) -> Result<String> {
        Ok(self.question_section(question))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn page(&self, title: String, notice: Option<&str>, questions: &[CareerQuestion]) -> Result<String> {
        let entries = questions
            .iter()
            .map(|question| {
                Ok(HtmlEntry {
                    question: question.question.clone(),
                    category: question.category.to_string(),
                    is_ai_generated: question.is_ai_generated,
                    answer_html: format_answer(&question.answer, question.is_ai_generated)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let page = HtmlPage {
            include_styles: self.include_styles,
            title,
            has_notice: notice.is_some(),
            notice: notice.unwrap_or_default().to_string(),
            entries,
            version: env!("CARGO_PKG_VERSION"),
        };
        Ok(page.render()?)
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_results(&self, report: &SearchReport<'_>) -> Result<String> {
        let title = if report.query.trim().is_empty() {
            "Career Questions".to_string()
        } else {
            format!("Results for \"{}\"", report.query.trim())
        };
        self.page(title, report.notice, report.results)
    }

    fn format_question(&self, question: &CareerQuestion) -> Result<String> {
        self.page(question.question.clone(), None, std::slice::from_ref(question))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

/// Dispatches to the formatter for a requested format.
pub struct AnswerRenderer {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

impl AnswerRenderer {
    pub fn new() -> Self {
        Self::with_options(true, false)
    }

    pub fn with_options(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    fn formatter(&self, format: OutputFormat) -> &dyn OutputFormatter {
        match format {
            OutputFormat::Console => &self.console_formatter,
            OutputFormat::Json => &self.json_formatter,
            OutputFormat::Markdown => &self.markdown_formatter,
            OutputFormat::Html => &self.html_formatter,
        }
    }

    pub fn render_results(&self, report: &SearchReport<'_>, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_results(report)
    }

    pub fn render_question(&self, question: &CareerQuestion, format: OutputFormat) -> Result<String> {
        self.formatter(format).format_question(question)
    }
}

impl Default for AnswerRenderer {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_output_to_file(content: &str, file_path: &Path) -> Result<()> {
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: OutputFormat, stem: &str) -> String {
    let extension = match format {
        OutputFormat::Console => "txt",
        OutputFormat::Json => "json",
        OutputFormat::Markdown => "md",
        OutputFormat::Html => "html",
    };
    let slug: String = stem
        .to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|part| !part.is_empty())
        .take(6)
        .collect::<Vec<_>>()
        .join("_");
    let slug = if slug.is_empty() { "skillsync".to_string() } else { slug };
    format!("{}_{}.{}", slug, chrono::Utc::now().format("%Y%m%d_%H%M%S"), extension)
}

fn preview(answer: &str) -> String {
    let first_line = answer.lines().find(|line| !line.trim().is_empty()).unwrap_or_default();
    let graphemes: Vec<&str> = first_line.graphemes(true).collect();
    if graphemes.len() > PREVIEW_GRAPHEMES {
        format!("{}…", graphemes[..PREVIEW_GRAPHEMES].concat())
    } else {
        first_line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::advisor::catalog::sample_catalog;

    fn generated(answer: &str) -> CareerQuestion {
        CareerQuestion::generated("What now?", answer.to_string(), Category::Tech)
    }

    #[test]
    fn test_html_answer_structure() {
        let html = format_answer("**Skills:**\n1. Python\n• Teamwork\nRegular text", true).unwrap();
        assert_eq!(
            html,
            "<h4 class=\"answer-heading\">Skills:</h4>\
             <p class=\"answer-step\">1. Python</p>\
             <p class=\"answer-bullet\">• Teamwork</p>\
             <p class=\"answer-text\">Regular text</p>"
        );
    }

    #[test]
    fn test_html_escapes_text() {
        let html = format_answer("<script>alert(1)</script> & \"q\"", true).unwrap();
        assert_eq!(
            html,
            "<p class=\"answer-text\">&#60;script&#62;alert(1)&#60;/script&#62; &#38; &#34;q&#34;</p>"
        );
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_catalog_answer_is_single_paragraph() {
        let html = format_answer("**Skills:**\n1. Python", false).unwrap();
        assert_eq!(html.matches("<p").count(), 1);
        assert!(!html.contains("<h4"));
    }

    #[test]
    fn test_console_without_colors() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter
            .format_question(&generated("**Next Steps:**\n1. Learn\n• Practice"))
            .unwrap();
        assert!(output.contains("[Tech] ✨ AI Generated"));
        assert!(output.contains("\nNext Steps:\n"));
        assert!(output.contains("  1. Learn\n"));
        assert!(!output.contains("\u{1b}["));
    }

    #[test]
    fn test_json_results() {
        let catalog = sample_catalog();
        let report = SearchReport::new("", &catalog);
        let json = JsonFormatter::new(false).format_results(&report).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 14);
        assert_eq!(value["results"][0]["isAiGenerated"], false);
        assert!(value.get("notice").is_none());
    }

    #[test]
    fn test_markdown_bullets() {
        let output = MarkdownFormatter::new(false)
            .format_question(&generated("**Tips:**\n• Network often"))
            .unwrap();
        assert!(output.contains("### Tips:"));
        assert!(output.contains("- Network often"));
    }

    #[test]
    fn test_html_page_escapes_question() {
        let mut question = generated("plain");
        question.question = "<b>bold?</b>".to_string();
        let html = HtmlFormatter::new(false).format_question(&question).unwrap();
        assert!(html.contains("&#60;b&#62;bold?&#60;/b&#62;"));
        assert!(!html.contains("<b>"));
        assert!(!html.contains("<style>"));
    }

    #[test]
    fn test_preview_truncates_long_lines() {
        let long = "word ".repeat(60);
        let short = preview(&long);
        assert!(short.ends_with('…'));
        assert_eq!(short.graphemes(true).count(), PREVIEW_GRAPHEMES + 1);
    }

    #[test]
    fn test_suggest_filename() {
        let name = suggest_filename(OutputFormat::Markdown, "How do I start in nursing?");
        assert!(name.starts_with("how_do_i_start_in_nursing_"));
        assert!(name.ends_with(".md"));
    }
}
