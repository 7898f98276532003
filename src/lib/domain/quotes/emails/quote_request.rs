//! Quote request notification template

use askama::Template;

use crate::domain::quotes::models::quote_request::QuoteRequest;

/// Fallback rendered in place of an empty phone number
pub const PHONE_NOT_PROVIDED: &str = "Non renseigné";

/// Dual-format notification body for one quote request
///
/// Both renderings enumerate name, email, phone, establishment and then the
/// message; no field is ever dropped and every value appears verbatim, with
/// no HTML escaping. The HTML rendering converts the message's line breaks
/// to `<br>` tags, the plain one keeps them as-is.
#[derive(Debug, Template)]
#[template(path = "emails/quotes/quote_request.html")]
pub struct QuoteRequestEmail {
    /// The visitor's name
    pub name: String,

    /// The visitor's email address
    pub email: String,

    /// Phone number, or [`PHONE_NOT_PROVIDED`] when empty
    pub phone: String,

    /// The establishment name
    pub establishment: String,

    /// The raw message, line breaks preserved
    pub message: String,

    /// The message split into lines, for the HTML rendering
    pub message_lines: Vec<String>,
}

impl QuoteRequestEmail {
    /// Builds the template from a captured draft
    pub fn new(request: &QuoteRequest) -> Self {
        let phone = if request.phone.is_empty() {
            PHONE_NOT_PROVIDED.to_string()
        } else {
            request.phone.clone()
        };

        Self {
            name: request.name.clone(),
            email: request.email.clone(),
            phone,
            establishment: request.establishment.clone(),
            message: request.message.clone(),
            message_lines: request.message.lines().map(String::from).collect(),
        }
    }

    /// The notification subject, derived from the establishment field
    pub fn subject(&self) -> String {
        format!("Nouvelle demande de devis - {}", self.establishment)
    }

    /// Renders the plain text version of the email
    pub fn render_plain(&self) -> String {
        format!(
            "Nouvelle demande de devis - Wine Maker\n\
             \n\
             Informations du client :\n\
             - Nom : {name}\n\
             - Email : {email}\n\
             - Téléphone : {phone}\n\
             - Établissement : {establishment}\n\
             \n\
             Message :\n\
             {message}\n\
             \n\
             ---\n\
             Cette demande a été envoyée depuis le site Wine Maker\n",
            name = self.name,
            email = self.email,
            phone = self.phone,
            establishment = self.establishment,
            message = self.message,
        )
    }
}
