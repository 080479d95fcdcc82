//! Conversation view over a single ticket.
//!
//! The mock service remembers nothing, so the thread keeps the activities
//! the user has seen and appends each reply the service hands back.

use crate::error::{MockError, ThreadError};
use crate::ticket_service::{Activity, Ticket, TicketService};

/// Id of the system note every thread opens with.
pub const OPENING_NOTE_ID: &str = "system-1";

pub const OPENING_NOTE: &str = "Ticket created successfully. Our team has been notified.";

#[derive(Debug, Clone)]
pub struct TicketThread {
    ticket_id: String,
    ticket: Ticket,
    activities: Vec<Activity>,
}

impl TicketThread {
    /// Loads the ticket for `ticket_id` and seeds the opening system note.
    ///
    /// Unknown ids fall back to the first listed ticket. Returns `Ok(None)`
    /// when there is no ticket to show.
    pub async fn open(service: &TicketService, ticket_id: &str) -> Result<Option<Self>, MockError> {
        let Some(ticket) = service.find_ticket(ticket_id).await?.data else {
            tracing::warn!(ticket_id, "no ticket available to open");
            return Ok(None);
        };

        let note = Activity::system(OPENING_NOTE_ID, OPENING_NOTE, ticket.created_at);
        Ok(Some(Self {
            ticket_id: ticket_id.to_owned(),
            ticket,
            activities: vec![note],
        }))
    }

    /// The id the thread was opened with, which replies are posted against.
    pub fn ticket_id(&self) -> &str {
        &self.ticket_id
    }

    pub fn ticket(&self) -> &Ticket {
        &self.ticket
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Sends `text` as a reply and appends the resulting activity.
    ///
    /// Blank replies are refused without a request. A failed request leaves
    /// the thread unchanged.
    pub async fn reply(&mut self, service: &TicketService, text: &str) -> Result<&Activity, ThreadError> {
        if text.trim().is_empty() {
            return Err(ThreadError::EmptyReply);
        }

        let response = service
            .reply_to_ticket(&self.ticket_id, text)
            .await
            .map_err(ThreadError::Send)?;

        self.activities.push(response.data);
        Ok(&self.activities[self.activities.len() - 1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockRequest;
    use db::models::ActivityType;
    use util::latency::Latency;

    fn service() -> TicketService {
        TicketService::new(MockRequest::new(Latency::fixed_ms(5), false), "JD")
    }

    #[tokio::test(start_paused = true)]
    async fn open_seeds_the_system_note() {
        let thread = TicketThread::open(&service(), "2").await.unwrap().unwrap();

        assert_eq!(thread.ticket().id, "2");
        assert_eq!(thread.activities().len(), 1);

        let note = &thread.activities()[0];
        assert_eq!(note.id, OPENING_NOTE_ID);
        assert_eq!(note.kind, ActivityType::System);
        assert_eq!(note.content, OPENING_NOTE);
        assert_eq!(note.author, None);
        assert_eq!(note.created_at, thread.ticket().created_at);
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_id_shows_first_ticket_but_keeps_requested_id() {
        let thread = TicketThread::open(&service(), "99").await.unwrap().unwrap();
        assert_eq!(thread.ticket().id, "1");
        assert_eq!(thread.ticket_id(), "99");
    }

    #[tokio::test(start_paused = true)]
    async fn replies_are_appended_in_order() {
        let svc = service();
        let mut thread = TicketThread::open(&svc, "1").await.unwrap().unwrap();

        let first_id = thread.reply(&svc, "first").await.unwrap().id.clone();
        thread.reply(&svc, "second").await.unwrap();

        let contents: Vec<&str> = thread.activities().iter().map(|a| a.content.as_str()).collect();
        assert_eq!(contents, [OPENING_NOTE, "first", "second"]);
        assert_eq!(thread.activities()[1].id, first_id);
        assert_eq!(thread.activities()[2].author.as_deref(), Some("JD"));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_reply_is_refused() {
        let svc = service();
        let mut thread = TicketThread::open(&svc, "1").await.unwrap().unwrap();

        let err = thread.reply(&svc, "   \n").await.unwrap_err();
        assert!(matches!(err, ThreadError::EmptyReply));
        assert_eq!(err.to_string(), "Please enter a message to reply.");
        assert_eq!(thread.activities().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn failed_reply_leaves_thread_untouched() {
        let svc = service();
        let mut thread = TicketThread::open(&svc, "1").await.unwrap().unwrap();

        let err = thread.reply(&svc.clone().failing(), "hello").await.unwrap_err();
        assert!(matches!(err, ThreadError::Send(MockError::Simulated)));
        assert_eq!(err.to_string(), "Failed to send reply. Please try again.");
        assert_eq!(thread.activities().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn open_propagates_simulated_failure() {
        let result = TicketThread::open(&service().failing(), "1").await;
        assert!(matches!(result, Err(MockError::Simulated)));
    }
}
