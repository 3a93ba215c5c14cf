//! Confirmation reply rendering
//!
//! Deterministic template rendering of a parsed order back into a
//! customer-facing WhatsApp message. Pure string formatting; currency and
//! tax lines belong to the invoice layer, not here.

use kirana_agent_core::ParsedOrder;
use unicode_segmentation::UnicodeSegmentation;

/// Render the confirmation reply for a parsed order
///
/// An empty order produces a fixed "couldn't understand" message; otherwise
/// a greeting, one numbered line per item, and two confirmation lines.
pub fn compose_reply(order: &ParsedOrder, customer_name: &str) -> String {
    if order.items.is_empty() {
        return format!(
            "Sorry {}, I couldn't understand your order. Please try again.",
            customer_name
        );
    }

    let mut lines = vec![format!("Thank you {}! Your order:", customer_name)];

    for (idx, item) in order.items.iter().enumerate() {
        lines.push(format!(
            "{}. {} {} {}",
            idx + 1,
            item.quantity,
            item.unit,
            title_case(&item.name)
        ));
    }

    lines.push("\nYour order is confirmed! ✅".to_string());
    lines.push("We'll prepare it right away.".to_string());

    lines.join("\n")
}

/// Uppercase the first letter of every word; Devanagari has no case and
/// passes through unchanged
fn title_case(s: &str) -> String {
    s.split_word_bounds()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
