//! Brew card renderer.
//!
//! Renders each visible brew as a block of lines: bean type with search
//! highlights and a method badge, the stats grid, the bloom annotation, notes,
//! and the image reference. A card pulled left by a swipe shows the revealed
//! delete action and the current offset.

use crate::ui::helpers::{render_highlighted_text, truncate, wrap};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::BrewCard;

/// Left indent of card body lines.
const BODY_INDENT: &str = "    ";

/// Renders all cards, separated by border lines.
pub fn render_cards(cards: &[BrewCard], theme: &Theme, cols: usize) -> Vec<String> {
    let separator = Theme::paint(&theme.colors.border, &"─".repeat(cols));
    let mut lines = Vec::new();
    for (index, card) in cards.iter().enumerate() {
        if index > 0 {
            lines.push(separator.clone());
        }
        lines.extend(render_card(card, theme, cols));
    }
    lines
}

fn render_card(card: &BrewCard, theme: &Theme, cols: usize) -> Vec<String> {
    let body_width = cols.saturating_sub(BODY_INDENT.len());
    let mut lines = Vec::new();

    let mut title = format!(
        "  {}#{} {}{}{}",
        Theme::fg(&theme.colors.text_dim),
        card.id,
        Theme::bold(),
        Theme::fg(&theme.colors.text_normal),
        render_highlighted_text(&card.bean_type, &card.highlight_ranges, theme),
    );
    title.push_str(Theme::reset());
    title.push_str("  ");
    title.push_str(&Theme::paint(&theme.colors.method_badge_fg, &format!("[{}]", card.brew_type)));
    if card.offset < 0.0 {
        title.push_str("  ");
        title.push_str(&Theme::paint(
            &theme.colors.danger_fg,
            &format!("◀ {:.0}px 🗑 delete", -card.offset),
        ));
    }
    lines.push(title);

    let stats = card
        .stats
        .iter()
        .map(|(label, value)| format!("{label} {value}"))
        .collect::<Vec<_>>()
        .join(" · ");
    for line in wrap(&stats, body_width) {
        lines.push(format!("{BODY_INDENT}{}", Theme::paint(&theme.colors.text_normal, &line)));
    }

    if let Some(bloom) = &card.bloom {
        lines.push(format!(
            "{BODY_INDENT}{}",
            Theme::paint(&theme.colors.bloom_fg, &format!("Bloom {bloom}"))
        ));
    }

    if let Some(details) = &card.details {
        for line in wrap(details, body_width) {
            lines.push(format!("{BODY_INDENT}{}", Theme::paint(&theme.colors.text_dim, &line)));
        }
    }

    lines.push(format!(
        "{BODY_INDENT}{}",
        Theme::paint(&theme.colors.text_dim, &truncate(&format!("image: {}", card.image), body_width))
    ));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::helpers::strip_ansi;

    fn card() -> BrewCard {
        BrewCard {
            id: 5,
            bean_type: "Kenya AA".to_string(),
            brew_type: "Chemex".to_string(),
            image: "https://example.com/kenya.png".to_string(),
            stats: vec![
                ("Weight In".to_string(), "20g".to_string()),
                ("Brew Time".to_string(), "03:45".to_string()),
            ],
            bloom: None,
            details: Some("Bright and juicy".to_string()),
            offset: 0.0,
            transition: "transform 0.3s ease".to_string(),
            highlight_ranges: vec![],
        }
    }

    #[test]
    fn card_lists_fields_in_order() {
        let lines: Vec<String> = render_cards(&[card()], &Theme::default(), 80)
            .iter()
            .map(|line| strip_ansi(line))
            .collect();

        assert_eq!(lines[0], "  #5 Kenya AA  [Chemex]");
        assert_eq!(lines[1], "    Weight In 20g · Brew Time 03:45");
        assert_eq!(lines[2], "    Bright and juicy");
        assert_eq!(lines[3], "    image: https://example.com/kenya.png");
    }

    #[test]
    fn swiped_card_reveals_delete() {
        let mut swiped = card();
        swiped.offset = -60.0;
        swiped.bloom = Some("30s".to_string());

        let lines: Vec<String> = render_cards(&[swiped], &Theme::default(), 80)
            .iter()
            .map(|line| strip_ansi(line))
            .collect();

        assert!(lines[0].ends_with("◀ 60px 🗑 delete"));
        assert_eq!(lines[2], "    Bloom 30s");
    }
}
