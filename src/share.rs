//! Share Action
//!
//! Opens the messaging deep link with the formatted program as its text.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::AppConfig;
use crate::models::Item;

/// Characters left unescaped by `encodeURIComponent`
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn share_url(base_url: &str, message: &str) -> String {
    format!("{}?text={}", base_url, utf8_percent_encode(message, URI_COMPONENT))
}

/// Build the message and open it in a new browsing context. Failures (no
/// window, pop-up blocked) are only logged.
pub fn share_program(config: &AppConfig, items: &[Item], date: Option<&str>) {
    let message = config.message.render(items, date);
    let url = share_url(&config.share_base_url, &message);

    let Some(window) = web_sys::window() else {
        log::warn!("no window to open the share link in");
        return;
    };
    match window.open_with_url_and_target(&url, "_blank") {
        Ok(Some(_)) => log::info!("opened share link ({} items)", items.len()),
        Ok(None) => log::warn!("share link was blocked by the browser"),
        Err(e) => log::warn!("failed to open share link: {:?}", e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::format_message;

    #[test]
    fn test_url_shape() {
        assert_eq!(share_url("https://wa.me/", "Olá"), "https://wa.me/?text=Ol%C3%A1");
    }

    #[test]
    fn test_encodes_like_encode_uri_component() {
        assert_eq!(
            share_url("https://wa.me/", "a b&c=d\n*e* (f) ~g_h-i.j!'"),
            "https://wa.me/?text=a%20b%26c%3Dd%0A*e*%20(f)%20~g_h-i.j!'"
        );
    }

    #[test]
    fn test_formatted_message_is_fully_encoded() {
        let message = format_message(&[Item::new("Abertura", "Hino 1")], Some("2024-03-10"));
        let url = share_url("https://wa.me/", &message);
        let text = url.strip_prefix("https://wa.me/?text=").unwrap();
        assert!(!text.contains(' '));
        assert!(!text.contains('\n'));
        assert!(text.contains("10%2F03%2F2024"));
        assert!(text.contains("%E2%80%A2%20Abertura%3A%20Hino%201"));
    }
}
