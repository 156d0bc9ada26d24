//! Markdown deck parser.
//!
//! # Format
//! ```markdown
//! # Rust
//!
//! ## What is Rust? <!--a1B2;0;2025-01-01;true-->
//! A systems programming language.
//!
//! ### Explain borrowing <!--c3D4;2;2025-01-09;true-->
//! Borrowing allows references without ownership.
//! Multiple lines are supported.
//! ```
//!
//! Level-1 headers name the category of the cards below them. Level-2 to 4
//! headers start a card: the header text is the front, the lines up to the
//! next header are the back.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::error::{DeckError, Result};
use crate::metadata;
use crate::types::Card;

static FRONT_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"##\s+(.*)<!--").unwrap());

const CARD_HEADER_PREFIXES: [&str; 3] = ["## ", "### ", "#### "];

/// Whether a line starts a card.
pub fn is_card_header(line: &str) -> bool {
    CARD_HEADER_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// Header text before the metadata comment.
pub fn extract_front(line: &str) -> String {
    FRONT_PATTERN
        .captures(line)
        .map(|caps| caps[1].trim().to_string())
        .unwrap_or_default()
}

/// Parse normalized deck lines into cards, in file order.
///
/// Every card header must already carry metadata; see `Deck::load`.
pub fn parse<'a, I>(lines: I) -> Result<Vec<Card>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut parser = Parser::new();
    for (idx, line) in lines.into_iter().enumerate() {
        parser.process_line(line, idx + 1)?;
    }
    Ok(parser.finalize())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Outside,
    InCategory,
    InBody,
}

struct CardBuilder {
    card: Card,
    line_number: usize,
}

impl CardBuilder {
    fn from_header(line: &str, line_number: usize, category: &str) -> Result<Self> {
        let meta = metadata::decode(line)?.ok_or_else(|| DeckError::InvalidMetadata {
            line: line.to_string(),
        })?;

        Ok(Self {
            card: Card {
                enabled: meta.is_enabled(),
                id: meta.id,
                category: category.to_string(),
                front: extract_front(line),
                back: String::new(),
                box_index: meta.box_index,
                due: meta.due,
            },
            line_number,
        })
    }

    fn push_back_line(&mut self, line: &str) {
        self.card.back.push_str(line);
        self.card.back.push('\n');
    }

    fn is_complete(&self) -> bool {
        !self.card.front.trim().is_empty() && !self.card.back.trim().is_empty()
    }

    fn build(mut self) -> Card {
        self.card.back = self.card.back.trim().to_string();
        self.card
    }
}

struct Parser {
    state: State,
    category: String,
    current: Option<CardBuilder>,
    cards: Vec<Card>,
}

impl Parser {
    fn new() -> Self {
        Self {
            state: State::Outside,
            category: String::new(),
            current: None,
            cards: Vec::new(),
        }
    }

    fn process_line(&mut self, line: &str, line_num: usize) -> Result<()> {
        match Self::parse_line(line) {
            LineType::Category(name) => {
                self.emit_complete();
                self.category = name.trim().to_string();
                self.state = State::InCategory;
            }
            LineType::CardHeader => {
                self.emit_complete();
                self.current = Some(CardBuilder::from_header(line, line_num, &self.category)?);
                self.state = State::InBody;
            }
            LineType::Text => {
                if self.state == State::InBody {
                    if let Some(ref mut card) = self.current {
                        card.push_back_line(line);
                    }
                }
            }
        }
        Ok(())
    }

    fn parse_line(line: &str) -> LineType<'_> {
        if let Some(rest) = line.strip_prefix("# ") {
            LineType::Category(rest)
        } else if is_card_header(line) {
            LineType::CardHeader
        } else {
            LineType::Text
        }
    }

    fn emit_complete(&mut self) {
        let Some(card) = self.current.take() else {
            return;
        };
        if card.is_complete() {
            self.cards.push(card.build());
        } else {
            warn!(
                line = card.line_number,
                id = %card.card.id,
                "skipping card with empty front or back"
            );
        }
    }

    /// The last card is kept even when its front or back is empty.
    fn finalize(mut self) -> Vec<Card> {
        if self.state == State::InBody {
            if let Some(card) = self.current.take() {
                self.cards.push(card.build());
            }
        }
        self.cards
    }
}

enum LineType<'a> {
    Category(&'a str),
    CardHeader,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn lines(input: &str) -> Vec<&str> {
        input.lines().collect()
    }

    #[test]
    fn parse_single_card() {
        let input = "# Rust\n## What is Rust? <!--abcd;1;2030-01-01;true-->\nA systems language.";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(
            cards[0],
            Card {
                id: "abcd".to_string(),
                category: "Rust".to_string(),
                front: "What is Rust?".to_string(),
                back: "A systems language.".to_string(),
                box_index: 1,
                due: NaiveDate::from_ymd_opt(2030, 1, 1).unwrap(),
                enabled: true,
            }
        );
    }

    #[test]
    fn parse_multiline_back_is_trimmed() {
        let input = "## Explain <!--abcd;0;2030-01-01-->\n\nLine 1\nLine 2\n\nLine 4\n\n";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards[0].back, "Line 1\nLine 2\n\nLine 4");
    }

    #[test]
    fn parse_levels_and_categories() {
        let input = "# Math\n\
                     ## Q1 <!--aaaa;0;2030-01-01;true-->\nA1\n\
                     ### Q2 <!--bbbb;0;2030-01-01;false-->\nA2\n\
                     # Science\n\
                     #### Q3 <!--cccc;0;2030-01-01;true-->\nA3";
        let cards = parse(lines(input)).unwrap();
        let summary: Vec<(&str, &str, &str, bool)> = cards
            .iter()
            .map(|c| (c.id.as_str(), c.category.as_str(), c.front.as_str(), c.enabled))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("aaaa", "Math", "Q1", true),
                ("bbbb", "Math", "Q2", false),
                ("cccc", "Science", "Q3", true),
            ]
        );
    }

    #[test]
    fn skip_card_without_back() {
        let input = "## Empty <!--aaaa;0;2030-01-01;true-->\n\n## Full <!--bbbb;0;2030-01-01;true-->\nA";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "bbbb");
    }

    #[test]
    fn skip_card_without_front() {
        let input = "## <!--aaaa;0;2030-01-01;true-->\nA\n## Full <!--bbbb;0;2030-01-01;true-->\nB";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].front, "Full");
    }

    #[test]
    fn last_card_is_always_flushed() {
        let input = "## Full <!--aaaa;0;2030-01-01;true-->\nA\n## Trailing <!--bbbb;0;2030-01-01;true-->\n";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].back, "");
    }

    #[test]
    fn category_after_header_drops_empty_card() {
        let input = "## Q <!--aaaa;0;2030-01-01;true-->\n# Next\nnot a back";
        let cards = parse(lines(input)).unwrap();
        assert!(cards.is_empty());
    }

    #[test]
    fn deeper_headers_are_back_text() {
        let input = "## Q <!--aaaa;0;2030-01-01;true-->\n##### detail\n#tag";
        let cards = parse(lines(input)).unwrap();
        assert_eq!(cards[0].back, "##### detail\n#tag");
    }

    #[test]
    fn reject_header_without_metadata() {
        let result = parse(lines("## Q\nA"));
        assert!(matches!(result, Err(DeckError::InvalidMetadata { .. })));
    }

    #[test]
    fn parse_empty_content() {
        assert!(parse(lines("")).unwrap().is_empty());
        assert!(parse(lines("# Only\n# Categories")).unwrap().is_empty());
    }

    #[test]
    fn front_extraction() {
        assert_eq!(extract_front("### Deep <!--aaaa;0;2030-01-01-->"), "Deep");
        assert_eq!(extract_front("## Plain"), "");
    }
}
