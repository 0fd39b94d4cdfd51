//! Line-based structure of generated answers

use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// One rendered line of an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum AnswerBlock {
    /// `**Title:**` line, bold markers stripped.
    Heading(String),
    /// Line starting with `<digits>.`
    Numbered(String),
    /// Line starting with `•`
    Bullet(String),
    Paragraph(String),
}

impl AnswerBlock {
    pub fn text(&self) -> &str {
        match self {
            AnswerBlock::Heading(text)
            | AnswerBlock::Numbered(text)
            | AnswerBlock::Bullet(text)
            | AnswerBlock::Paragraph(text) => text,
        }
    }
}

fn numbered_pattern() -> &'static Regex {
    static NUMBERED: OnceLock<Regex> = OnceLock::new();
    NUMBERED.get_or_init(|| Regex::new(r"^[0-9]+\.").expect("valid numbered-line pattern"))
}

/// Split an answer into blocks. Blank lines are dropped; markers are
/// matched against the untrimmed line.
pub fn parse_answer(text: &str) -> Vec<AnswerBlock> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(classify_line)
        .collect()
}

fn classify_line(line: &str) -> AnswerBlock {
    if line.starts_with("**") && line.ends_with(":**") {
        AnswerBlock::Heading(line.replace("**", ""))
    } else if numbered_pattern().is_match(line) {
        AnswerBlock::Numbered(line.to_string())
    } else if line.starts_with('•') {
        AnswerBlock::Bullet(line.to_string())
    } else {
        AnswerBlock::Paragraph(line.to_string())
    }
}
