//! Share-intent links for spreading the word about the site

/// Message sent along with the site link
pub const SHARE_TEXT: &str =
    "Check out this masjid donation app! Make your charitable contributions easily.";

pub fn whatsapp_share_url(origin: &str) -> String {
    format!(
        "https://wa.me/?text={}%20{}",
        urlencoding::encode(SHARE_TEXT),
        urlencoding::encode(origin)
    )
}

pub fn telegram_share_url(origin: &str) -> String {
    format!(
        "https://t.me/share/url?url={}&text={}",
        urlencoding::encode(origin),
        urlencoding::encode(SHARE_TEXT)
    )
}
