//! Sample decks used across the integration tests.

/// Deck with two categories and no metadata yet.
pub const FRESH_DECK: &str = "\
# Mathematics

## What is 2 + 2?
4

### Name a prime number
7

# Science

#### What is H2O?
Water.
";

/// Two headers sharing one metadata block, as after a copy-paste.
pub const DUPLICATE_DECK: &str = "\
# Copies
## First <!--dupl;1;2030-01-01-->
Answer one
## Second <!--dupl;1;2030-01-01-->
Answer two";

/// Single card with review progress.
pub const PROGRESS_DECK: &str = "\
# Personal
## Secret question <!--prog;4;2020-01-01;false-->
Only I know.
";

/// Only category headers, no cards.
pub const EMPTY_DECK: &str = "# One\n\nSome text\n\n# Two\n";

/// Generate a deck with `num_cards` cards, optionally with metadata.
pub fn sample_deck(num_cards: usize, with_metadata: bool) -> String {
    let mut content = String::from("# Generated\n");
    for i in 0..num_cards {
        if with_metadata {
            content.push_str(&format!(
                "## Question {} <!--c{:03};0;2030-01-01;true-->\nAnswer {}.\n\n",
                i + 1,
                i,
                i + 1
            ));
        } else {
            content.push_str(&format!("## Question {}\nAnswer {}.\n\n", i + 1, i + 1));
        }
    }
    content
}
