//! Message Formatter
//!
//! Turns the program (items plus optional date) into the shareable text.

use serde::Deserialize;

use crate::models::Item;

/// Fixed texts surrounding the item lines
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MessageTemplate {
    pub title: String,
    pub date_prefix: String,
    pub empty_placeholder: String,
    pub footer: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            title: " *Programação do Culto - PIB Caetés*".to_string(),
            date_prefix: " *Data:* ".to_string(),
            empty_placeholder: "Sem itens adicionados.".to_string(),
            footer: "Que Deus abençoe nosso culto!".to_string(),
        }
    }
}

const BULLET: &str = "•";

impl MessageTemplate {
    /// Render the message. Pure: identical inputs give identical output.
    pub fn render(&self, items: &[Item], date: Option<&str>) -> String {
        let mut out = String::new();
        out.push_str(&self.title);
        out.push_str("\n\n");

        if let Some(day_month_year) = date.and_then(short_date) {
            out.push_str(&self.date_prefix);
            out.push_str(&day_month_year);
            out.push_str("\n\n");
        }

        if items.is_empty() {
            out.push_str(&self.empty_placeholder);
        } else {
            for item in items {
                out.push_str(&item_line(item));
                out.push('\n');
            }
        }

        out.push_str("\n\n");
        out.push_str(&self.footer);
        out
    }
}

/// Render with the default template
pub fn format_message(items: &[Item], date: Option<&str>) -> String {
    MessageTemplate::default().render(items, date)
}

/// One bullet line, without the trailing line break.
///
/// The label segment is `" label: "`, so a label-only line keeps its
/// trailing space.
pub fn item_line(item: &Item) -> String {
    let mut line = String::from(BULLET);
    if !item.label.is_empty() {
        line.push(' ');
        line.push_str(&item.label);
        line.push_str(": ");
    }
    if !item.content.is_empty() {
        if item.label.is_empty() {
            line.push(' ');
        }
        line.push_str(&item.content);
    }
    line
}

/// `yyyy-mm-dd` -> `dd/mm/yyyy`, keeping the components as written.
/// Anything other than three non-empty numeric components yields `None`.
fn short_date(date: &str) -> Option<String> {
    let parts: Vec<&str> = date.split('-').collect();
    let &[year, month, day] = parts.as_slice() else {
        return None;
    };
    let numeric = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());
    if !(numeric(year) && numeric(month) && numeric(day)) {
        return None;
    }
    Some(format!("{}/{}/{}", day, month, year))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_program_without_date() {
        let msg = format_message(&[], None);
        assert_eq!(
            msg,
            " *Programação do Culto - PIB Caetés*\n\nSem itens adicionados.\n\nQue Deus abençoe nosso culto!"
        );
        assert!(!msg.contains("Data:"));
    }

    #[test]
    fn test_item_with_date() {
        let items = vec![Item::new("Abertura", "Hino 1")];
        let msg = format_message(&items, Some("2024-03-10"));
        assert!(msg.contains(" *Data:* 10/03/2024\n\n"));
        assert!(msg.contains("• Abertura: Hino 1\n"));
        assert!(!msg.contains("Sem itens adicionados."));
    }

    #[test]
    fn test_content_without_label() {
        let msg = format_message(&[Item::new("", "Oração")], None);
        assert!(msg.lines().any(|l| l == "• Oração"));
        assert!(!msg.contains(": Oração"));
    }

    #[test]
    fn test_label_without_content_and_bare_bullet() {
        assert_eq!(item_line(&Item::new("Avisos", "")), "• Avisos: ");
        assert_eq!(item_line(&Item::new("Avisos", "Ceia")), "• Avisos: Ceia");
        assert_eq!(item_line(&Item::default()), "•");

        let msg = format_message(&[Item::new("Avisos", ""), Item::default()], None);
        assert!(msg.contains("\n• Avisos: \n•\n"));
    }

    #[test]
    fn test_items_keep_program_order() {
        let items = vec![
            Item::new("Abertura", "Hino 1"),
            Item::new("Leitura", "Salmo 23"),
            Item::new("Mensagem", "Pr. João"),
        ];
        let msg = format_message(&items, None);
        let bullets: Vec<&str> = msg.lines().filter(|l| l.starts_with(BULLET)).collect();
        assert_eq!(
            bullets,
            vec!["• Abertura: Hino 1", "• Leitura: Salmo 23", "• Mensagem: Pr. João"]
        );
    }

    #[test]
    fn test_malformed_dates_are_omitted() {
        for date in ["", "2024-03", "2024-03-10-01", "2024-mar-10", "10/03/2024", "2024--10"] {
            let msg = format_message(&[], Some(date));
            assert!(!msg.contains("Data:"), "date line rendered for {:?}", date);
        }
    }

    #[test]
    fn test_render_is_deterministic() {
        let items = vec![Item::new("Abertura", "Hino 1"), Item::new("", "Oração")];
        let first = format_message(&items, Some("2024-12-25"));
        let second = format_message(&items, Some("2024-12-25"));
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_template() {
        let template = MessageTemplate {
            title: "Culto".to_string(),
            footer: "Amém".to_string(),
            ..MessageTemplate::default()
        };
        assert_eq!(template.render(&[], None), "Culto\n\nSem itens adicionados.\n\nAmém");
    }
}
