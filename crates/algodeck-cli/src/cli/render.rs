//! # Rendering
//!
//! Every renderer returns a `String`; the handlers print it. Layout math
//! (widths, truncation, padding) is done on plain text first and colors are
//! applied last, since escape codes have no display width.
//!
//! Colors go through `colored`, which already honors `NO_COLOR` and
//! non-terminal stdout.

use algodeck::commands::{CmdMessage, CmdResult, MessageLevel, PageSummary};
use algodeck::config::DeckConfig;
use algodeck::error::{DeckError, Result};
use algodeck::model::Card;
use algodeck::pagination::PageLink;
use colored::{ColoredString, Colorize};
use std::fmt::Write;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;
const LEFT_PAD: &str = "  ";
const CLASS_WIDTH: usize = 16;
const DIFFICULTY_WIDTH: usize = 6;

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let line = match message.level {
            MessageLevel::Info => message.content.dimmed(),
            MessageLevel::Success => message.content.green(),
            MessageLevel::Warning => message.content.yellow(),
            MessageLevel::Error => message.content.red(),
        };
        let _ = writeln!(out, "{}", line);
    }
    out
}

pub fn render_messages_of(result: &CmdResult) -> String {
    render_messages(&result.messages)
}

pub fn render_list(result: &CmdResult) -> String {
    let mut out = String::new();
    for card in &result.listed_cards {
        let _ = writeln!(out, "{}", card_line(card));
    }

    if let Some(page) = result.page.as_ref().filter(|_| !result.listed_cards.is_empty()) {
        out.push('\n');
        let _ = writeln!(out, "{}", showing_line(page).dimmed());
        if page.total_pages > 1 {
            let _ = writeln!(out, "{}", page_bar(page));
        }
    }

    out.push_str(&render_messages(&result.messages));
    out
}

/// "Showing 13-24 of 37 cards"
pub fn showing_line(page: &PageSummary) -> String {
    format!(
        "Showing {}-{} of {} card{}",
        page.start_item,
        page.end_item,
        page.total_items,
        if page.total_items == 1 { "" } else { "s" }
    )
}

fn page_bar(page: &PageSummary) -> String {
    let mut parts: Vec<ColoredString> = Vec::with_capacity(page.links.len() + 2);
    parts.push(if page.has_previous {
        "‹".normal()
    } else {
        "‹".dimmed()
    });
    for link in &page.links {
        parts.push(match link {
            PageLink::Page(n) if *n == page.current_page => format!("[{}]", n).bold(),
            PageLink::Page(n) => n.to_string().normal(),
            PageLink::Ellipsis => "…".dimmed(),
        });
    }
    parts.push(if page.has_next {
        "›".normal()
    } else {
        "›".dimmed()
    });

    let joined: Vec<String> = parts.iter().map(|p| p.to_string()).collect();
    format!("{}{}", LEFT_PAD, joined.join(" "))
}

fn card_line(card: &Card) -> String {
    let fixed = LEFT_PAD.width() + 2 + CLASS_WIDTH + DIFFICULTY_WIDTH;
    let available = LINE_WIDTH.saturating_sub(fixed);

    let title = truncate_to_width(&card.title, available);
    let id_part = format!(" ({})", card.id);
    let show_id = title == card.title && title.width() + id_part.width() <= available;
    let used = title.width() + if show_id { id_part.width() } else { 0 };
    let padding = available.saturating_sub(used);

    let class = format!("{:<width$}", card.classification.label(), width = CLASS_WIDTH);
    let difficulty = format!(
        "{:>width$}",
        card.difficulty.map_or("-", |d| d.as_str()),
        width = DIFFICULTY_WIDTH
    );

    format!(
        "{}{}{}{}  {}{}",
        LEFT_PAD,
        title.bold(),
        if show_id {
            id_part.dimmed()
        } else {
            "".normal()
        },
        " ".repeat(padding),
        class.cyan(),
        paint_hex(&difficulty, card.difficulty_color())
    )
}

pub fn render_card(card: &Card) -> String {
    let mut out = String::new();
    let difficulty = card.difficulty.map_or("unrated", |d| d.as_str());
    let _ = writeln!(
        out,
        "{}  {}",
        card.title.bold(),
        paint_hex(difficulty, card.difficulty_color())
    );
    let _ = writeln!(
        out,
        "{}",
        format!("{} · {}", card.classification.label(), card.id).dimmed()
    );
    if let Some(date) = &card.date_added {
        let _ = writeln!(out, "{}", format!("Added {}", date).dimmed());
    }
    if !card.tags.is_empty() {
        let tags: Vec<String> = card.tags.iter().map(|t| format!("#{}", t)).collect();
        let _ = writeln!(out, "{}", tags.join(" ").cyan());
    }
    if let Some(time) = &card.time_complexity {
        let _ = writeln!(out, "{} {}", "Time: ".bold(), time);
    }
    if let Some(space) = &card.space_complexity {
        let _ = writeln!(out, "{} {}", "Space:".bold(), space);
    }

    if !card.explanation.is_empty() {
        let _ = writeln!(out, "\n{}", card.explanation);
    }
    if !card.code.is_empty() {
        out.push('\n');
        for line in card.code.lines() {
            let _ = writeln!(out, "    {}", line);
        }
    }

    write_section(&mut out, "Use cases", &card.use_cases);
    write_section(&mut out, "Related problems", &card.related_problems);
    out
}

fn write_section(out: &mut String, heading: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}", heading.bold());
    for item in items {
        let _ = writeln!(out, "  - {}", item);
    }
}

pub fn render_tags(result: &CmdResult) -> String {
    let mut out = String::new();
    let name_width = result
        .tags
        .iter()
        .map(|t| t.name.width())
        .max()
        .unwrap_or(0);
    for tag in &result.tags {
        let padding = name_width - tag.name.width();
        let _ = writeln!(
            out,
            "{}{}{}  {}",
            LEFT_PAD,
            tag.name.cyan(),
            " ".repeat(padding),
            tag.count.to_string().dimmed()
        );
    }
    out.push_str(&render_messages(&result.messages));
    out
}

pub fn render_config(config: &DeckConfig) -> String {
    let mut out = String::new();
    for key in algodeck::config::CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            let _ = writeln!(out, "{} = {}", key, value);
        }
    }
    out
}

pub fn render_json(result: &CmdResult) -> Result<String> {
    let mut json = serde_json::to_string_pretty(result).map_err(DeckError::Serialization)?;
    json.push('\n');
    Ok(json)
}

/// Colors `text` with a `#rrggbb` color, or leaves it plain if `hex` does not parse.
fn paint_hex(text: &str, hex: &str) -> ColoredString {
    match parse_hex(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(digits.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}
