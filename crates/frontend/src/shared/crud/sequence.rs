use std::cell::Cell;
use std::rc::Rc;

/// Ticket handed to one in-flight request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Monotonic ticket source; only the latest ticket is current
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: Rc<Cell<u64>>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&self) -> Ticket {
        let next = self.latest.get() + 1;
        self.latest.set(next);
        Ticket(next)
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get() == ticket.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_ticket_is_current() {
        let seq = RequestSequence::new();
        let first = seq.next();
        assert!(seq.is_current(first));
        let second = seq.clone().next();
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
    }
}
