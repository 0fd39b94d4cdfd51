//! Rendering of answers and search results

pub mod blocks;
pub mod formatter;

pub use blocks::{parse_answer, AnswerBlock};
pub use formatter::{format_answer, AnswerRenderer, OutputFormatter, SearchReport};
