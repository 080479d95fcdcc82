use crate::error::MockError;
use crate::mock::MockRequest;
use crate::response::ApiResponse;
use crate::service::IntoModel;
use chrono::{DateTime, Utc};
use db::{
    fixtures::sample_tickets,
    models::tickets::{Category, Priority, TicketStatus},
    models::timestamp,
    new_id,
};
use util::config::AppConfig;

pub use db::{Activity, Ticket};

/// Ticket fields supplied by the submitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicket {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub priority: Priority,
}

/// A reply posted into a ticket's conversation.
#[derive(Debug, Clone)]
pub struct ReplyToTicket {
    pub content: String,
    pub author: String,
}

impl IntoModel<Ticket> for CreateTicket {
    fn into_model(self, now: DateTime<Utc>) -> Ticket {
        Ticket {
            id: new_id(),
            title: self.title,
            description: self.description,
            category: self.category,
            priority: self.priority,
            status: TicketStatus::Open,
            created_at: now,
        }
    }
}

impl IntoModel<Activity> for ReplyToTicket {
    fn into_model(self, now: DateTime<Utc>) -> Activity {
        Activity::message(new_id(), self.content, self.author, now)
    }
}

/// Stateless mock of the ticket backend.
///
/// Cloning is cheap and clones share nothing mutable, so concurrent calls
/// never observe each other.
#[derive(Debug, Clone)]
pub struct TicketService {
    request: MockRequest,
    author: String,
}

impl Default for TicketService {
    fn default() -> Self {
        let author = AppConfig::global().mock_current_user.clone();
        Self::new(MockRequest::default(), author)
    }
}

impl TicketService {
    pub fn new(request: MockRequest, author: impl Into<String>) -> Self {
        Self {
            request,
            author: author.into(),
        }
    }

    pub fn with_request(self, request: MockRequest) -> Self {
        Self { request, ..self }
    }

    /// Makes every subsequent call fail with [`MockError::Simulated`].
    pub fn failing(self) -> Self {
        let request = self.request.failing();
        self.with_request(request)
    }

    /// The placeholder user that replies are attributed to.
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Creates a ticket with a fresh id, `open` status and the current time.
    ///
    /// The ticket is not retained; later [`list_tickets`](Self::list_tickets)
    /// calls do not include it.
    pub async fn create_ticket(&self, params: CreateTicket) -> Result<ApiResponse<Ticket>, MockError> {
        let ticket = params.into_model(timestamp::now());
        tracing::info!(ticket_id = %ticket.id, category = %ticket.category, "creating ticket");
        self.request.send(ticket).await
    }

    /// Returns the two sample tickets, timestamped relative to this call.
    pub async fn list_tickets(&self) -> Result<ApiResponse<Vec<Ticket>>, MockError> {
        let tickets = sample_tickets(timestamp::now());
        tracing::debug!(count = tickets.len(), "listing tickets");
        self.request.send(tickets).await
    }

    /// Posts `message` as the placeholder user.
    ///
    /// `ticket_id` is not checked against any ticket.
    pub async fn reply_to_ticket(
        &self,
        ticket_id: &str,
        message: &str,
    ) -> Result<ApiResponse<Activity>, MockError> {
        let activity = ReplyToTicket {
            content: message.to_owned(),
            author: self.author.clone(),
        }
        .into_model(timestamp::now());
        tracing::info!(ticket_id, activity_id = %activity.id, "replying to ticket");
        self.request.send(activity).await
    }

    /// Looks a ticket up by id, falling back to the first listed ticket.
    ///
    /// `data` is `None` only when the listing is empty.
    pub async fn find_ticket(&self, ticket_id: &str) -> Result<ApiResponse<Option<Ticket>>, MockError> {
        let listed = self.list_tickets().await?;
        Ok(listed.map(|tickets| {
            let index = tickets.iter().position(|t| t.id == ticket_id).unwrap_or(0);
            tickets.into_iter().nth(index)
        }))
    }
}
