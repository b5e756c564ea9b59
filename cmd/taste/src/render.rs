//! Text rendering of a prediction, standing in for the AR overlay.

use virtaste_flavor::Label;

/// Renders the predicted label as a small text card.
pub fn render_card(label: &Label) -> String {
    let flavor = format!("flavor : {}", label.flavor);
    let texture = format!("texture: {}", label.texture);
    let width = flavor.len().max(texture.len());
    let border = format!("+{}+", "-".repeat(width + 2));
    format!("{border}\n| {flavor:<width$} |\n| {texture:<width$} |\n{border}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_frames_both_fields() {
        let card = render_card(&Label::new("sweet", "smooth"));
        let expected = "\
+-----------------+
| flavor : sweet  |
| texture: smooth |
+-----------------+";
        assert_eq!(card, expected);
    }

    #[test]
    fn card_pads_uneven_fields() {
        let card = render_card(&Label::new("sour", "crisp"));
        let lines: Vec<&str> = card.lines().collect();
        assert_eq!(lines.len(), 4);
        let width = lines[0].len();
        assert!(lines.iter().all(|l| l.len() == width), "ragged card:\n{card}");
    }

    #[test]
    fn unknown_label_renders() {
        let card = render_card(&Label::unknown());
        assert!(card.contains("flavor : unknown"));
        assert!(card.contains("texture: unknown"));
    }
}
