//! HTML fragments for the storefront pages.
//!
//! Every function returns a self-contained fragment; text from products,
//! orders and chat is escaped.

mod cart;
mod chat;
mod orders;
mod product;

pub use cart::*;
pub use chat::*;
pub use orders::*;
pub use product::*;

/// Placeholder paragraph shown where a list has nothing to show.
pub fn render_empty_state(message: &str) -> String {
    format!(r#"<p class="text-center text-muted">{}</p>"#, html_escape(message))
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom & Jerry"</b>"#),
            "&lt;b&gt;&quot;Tom &amp; Jerry&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_empty_state() {
        assert_eq!(
            render_empty_state("No orders yet"),
            r#"<p class="text-center text-muted">No orders yet</p>"#
        );
    }
}
