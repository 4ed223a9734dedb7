//! # Rendering
//!
//! Every function here returns a `String`; the handlers decide where it goes.
//! Width math is Unicode-aware so names in any script line up.

use cardz::api::{CmdMessage, MessageLevel};
use cardz::model::Card;
use cardz::search::SearchOutcome;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const PIPE: &str = "│   ";
const SPACE: &str = "    ";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// The forest as an indented tree, one card per line.
pub fn render_forest(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "No cards yet.\n".to_string();
    }
    let mut output = String::new();
    for card in cards {
        output.push_str(&card_line(card, ""));
        render_children(&card.children, "", &mut output);
    }
    output
}

fn render_children(children: &[Card], prefix: &str, output: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let last = i + 1 == children.len();
        let branch = if last { LAST_BRANCH } else { BRANCH };
        output.push_str(&card_line(child, &format!("{}{}", prefix, branch)));

        let next = format!("{}{}", prefix, if last { SPACE } else { PIPE });
        render_children(&child.children, &next, output);
    }
}

fn card_line(card: &Card, prefix: &str) -> String {
    let id = format!("{}. ", card.id);
    let used = prefix.width() + id.width();
    let name = truncate_to_width(&card.name, LINE_WIDTH.saturating_sub(used));
    let mut line = format!("{}{}{}", prefix.dimmed(), id.yellow(), name);

    let remaining = LINE_WIDTH.saturating_sub(used + name.width() + 2);
    if !card.subtitle.is_empty() && remaining > 3 {
        let subtitle = truncate_to_width(&card.subtitle, remaining);
        line.push_str(&format!("  {}", subtitle.dimmed()));
    }
    line.push('\n');
    line
}

/// A single card: header, details, and its direct children.
pub fn render_card(card: &Card, path: Option<&str>) -> String {
    let mut output = format!("{} {}\n", card.id.to_string().yellow(), card.name.bold());
    if let Some(path) = path {
        output.push_str(&format!("{}\n", path.dimmed()));
    }
    output.push_str("--------------------------------\n");
    if !card.subtitle.is_empty() {
        output.push_str(&format!("{}\n", card.subtitle));
    }
    if !card.link.is_empty() {
        output.push_str(&format!("link: {}\n", card.link));
    }
    output.push_str(&format!("type: {}\n", card.kind));

    if card.has_children() {
        output.push('\n');
        for child in &card.children {
            output.push_str(&card_line(child, SPACE));
        }
    }
    output
}

pub fn render_search(outcome: &SearchOutcome) -> String {
    if outcome.results.is_empty() {
        return format!("No cards match \"{}\".\n", outcome.query);
    }
    let mut output = String::new();
    for hit in &outcome.results {
        let id = format!("{}. ", hit.id);
        let path = truncate_to_width(&hit.path, LINE_WIDTH.saturating_sub(id.width()));
        output.push_str(&format!("{}{}", id.yellow(), path));
        if !hit.subtitle.is_empty() {
            output.push_str(&format!("  {}", hit.subtitle.dimmed()));
        }
        output.push('\n');
    }
    output
}

pub fn render_text_list(lines: &[String], empty_message: &str) -> String {
    if lines.is_empty() {
        return format!("{}\n", empty_message);
    }
    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
