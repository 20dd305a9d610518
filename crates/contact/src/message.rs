//! The two outgoing message templates. Pure formatting: structured data in,
//! rendered message out, no sends here.

use askama::Template;
use atelier_notification::OutboundEmail;

use crate::{Inquiry, budget_label, service_label};

/// Addresses the workflow sends from and to.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    /// Staff mailbox receiving notifications; also named as the fallback
    /// channel in failure messages.
    pub contact_address: String,
    /// Address outgoing mail carries in its from header.
    pub from_address: String,
}

#[derive(Template)]
#[template(path = "admin_notification.html")]
struct AdminNotificationTemplate<'a> {
    name: &'a str,
    email: &'a str,
    company: Option<&'a str>,
    phone: Option<&'a str>,
    service: &'a str,
    budget: Option<&'a str>,
    message: &'a str,
}

#[derive(Template)]
#[template(path = "confirmation.html")]
struct ConfirmationTemplate<'a> {
    name: &'a str,
    contact_address: &'a str,
}

/// Staff notification: addressed to the studio mailbox, reply-to set to the
/// submitter, body renders every present field with codes resolved to
/// labels. An absent budget renders no budget line at all.
pub fn admin_notification(
    inquiry: &Inquiry,
    settings: &ContactSettings,
) -> Result<OutboundEmail, askama::Error> {
    let html = AdminNotificationTemplate {
        name: &inquiry.name,
        email: &inquiry.email,
        company: inquiry.company(),
        phone: inquiry.phone(),
        service: service_label(&inquiry.service),
        budget: inquiry.budget().map(budget_label),
        message: &inquiry.message,
    }
    .render()?;

    Ok(OutboundEmail {
        from: format!("Atelier Website <{}>", settings.from_address),
        to: vec![settings.contact_address.clone()],
        subject: format!("New contact form submission from {}", inquiry.name),
        html,
        reply_to: Some(inquiry.email.clone()),
    })
}

/// Submitter confirmation: personalized with the name only. No other form
/// field is echoed back.
pub fn confirmation(
    inquiry: &Inquiry,
    settings: &ContactSettings,
) -> Result<OutboundEmail, askama::Error> {
    let html = ConfirmationTemplate {
        name: &inquiry.name,
        contact_address: &settings.contact_address,
    }
    .render()?;

    Ok(OutboundEmail {
        from: format!("The Atelier Team <{}>", settings.from_address),
        to: vec![inquiry.email.clone()],
        subject: format!("Thank you for contacting us, {}!", inquiry.name),
        html,
        reply_to: None,
    })
}
