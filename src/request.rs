//! Lifecycle of a single outstanding async request.
//!
//! A request moves `Idle -> InFlight -> Succeeded | Failed`. `begin` hands out a
//! [`Ticket`]; completions carrying a ticket from before the last `begin` or
//! `cancel` are dropped, which is how a page ignores responses that arrive
//! after it unmounts.

#[derive(Debug, Clone, PartialEq)]
pub enum RequestState {
    Idle,
    InFlight,
    Succeeded,
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, PartialEq)]
pub struct Lifecycle {
    state: RequestState,
    generation: u64,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self { state: RequestState::Idle, generation: 0 }
    }

    pub fn state(&self) -> &RequestState {
        &self.state
    }

    pub fn is_in_flight(&self) -> bool {
        self.state == RequestState::InFlight
    }

    /// Start a request. Returns `None` while another one is still in flight.
    pub fn begin(&mut self) -> Option<Ticket> {
        if self.is_in_flight() {
            return None;
        }
        self.generation += 1;
        self.state = RequestState::InFlight;
        Some(Ticket(self.generation))
    }

    /// Record the outcome. Returns `false` if the ticket is stale.
    pub fn finish<T>(&mut self, ticket: Ticket, outcome: &Result<T, String>) -> bool {
        if ticket.0 != self.generation || !self.is_in_flight() {
            return false;
        }
        self.state = match outcome {
            Ok(_) => RequestState::Succeeded,
            Err(e) => RequestState::Failed(e.clone()),
        };
        true
    }

    /// Abandon whatever is in flight; its completion will be ignored.
    pub fn cancel(&mut self) {
        self.generation += 1;
        if self.is_in_flight() {
            self.state = RequestState::Idle;
        }
    }
}
