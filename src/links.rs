//! WhatsApp deep links for orders, plan sign-ups and sales enquiries.

use crate::entity::{CorporateEnquiry, PlanName};
use crate::error::Result;

pub const WHATSAPP_NUMBER: &str = "917975771457";

/// `https://wa.me/<number>?text=<message>` with the message URL-encoded.
pub fn chat_link(message: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        WHATSAPP_NUMBER,
        urlencoding::encode(message)
    )
}

/// Build a chat message from a heading, labelled fields and a closing line.
pub fn compose_message(heading: &str, fields: &[(&str, String)], closing: &str) -> String {
    let mut lines = vec![format!("*{}*", heading), "---".to_string()];
    lines.extend(
        fields
            .iter()
            .map(|(label, value)| format!("*{}:* {}", label, value.trim())),
    );
    lines.push("---".to_string());
    lines.push(closing.to_string());
    lines.join("\n")
}

pub fn order_link(dish: &str) -> String {
    chat_link(&format!("Hi Taazabites! I'd like to order: {}.", dish.trim()))
}

pub fn plan_link(plan: PlanName) -> String {
    chat_link(&format!("Hi! I'm interested in the {} plan.", plan))
}

pub fn corporate_message(enquiry: &CorporateEnquiry) -> String {
    compose_message(
        "CORPORATE ENQUIRY - Taazabites",
        &[
            ("Company", enquiry.company.clone()),
            ("Contact", enquiry.contact.clone()),
            ("Employees", enquiry.employees.to_string()),
            ("Meal Type", enquiry.meal_type.to_string()),
            ("Start Date", enquiry.start_date.format("%Y-%m-%d").to_string()),
        ],
        "Please contact me to discuss a corporate meal partnership!",
    )
}

pub fn corporate_link(enquiry: &CorporateEnquiry) -> Result<String> {
    enquiry.validate()?;
    Ok(chat_link(&corporate_message(enquiry)))
}
