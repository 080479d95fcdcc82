//! State behind the open-ticket form.

use crate::error::FormError;
use crate::ticket_service::{CreateTicket, Ticket, TicketService};
use util::validation::format_validation_errors;
use validator::Validate;

/// Raw values collected by the open-ticket form.
///
/// Category and priority come from select boxes that may be left on their
/// placeholder, so they are not required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct TicketForm {
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,

    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,

    pub category: String,
    pub priority: String,
}

impl TicketForm {
    pub fn is_empty(&self) -> bool {
        *self == TicketForm::default()
    }

    fn to_params(&self) -> CreateTicket {
        CreateTicket {
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.as_str().into(),
            priority: self.priority.as_str().into(),
        }
    }

    /// Validates and submits the form.
    ///
    /// On success the form is cleared and the created ticket returned. On
    /// failure the entered values are kept so the user can resubmit.
    pub async fn submit(&mut self, service: &TicketService) -> Result<Ticket, FormError> {
        self.validate()
            .map_err(|errors| FormError::Invalid(format_validation_errors(&errors)))?;

        let ticket = service
            .create_ticket(self.to_params())
            .await
            .map_err(FormError::Submit)?
            .into_data();

        *self = TicketForm::default();
        Ok(ticket)
    }
}
