//! Mock ticket service for the support desk.
//!
//! Every operation simulates a network round trip: it waits out a latency,
//! then resolves with an [`ApiResponse`] envelope or fails with
//! [`MockError::Simulated`]. Nothing is stored between calls.

pub mod error;
pub mod mock;
pub mod response;
pub mod service;
pub mod ticket_form;
pub mod ticket_service;
pub mod ticket_thread;

pub use error::{FormError, MockError, ThreadError};
pub use mock::{MockRequest, mock_request};
pub use response::ApiResponse;
pub use ticket_service::{CreateTicket, TicketService};
