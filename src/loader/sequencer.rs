use serde::{Deserialize, Serialize};
use tracing::debug;

use super::LoadReport;

/// Identifies one load request. Later requests get larger tickets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LoadTicket(u64);

impl LoadTicket {
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// What happened to a completed load.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The ticket was the newest one issued; the report should replace the dataset.
    Current(LoadReport),
    /// A newer request was issued while this one was in flight.
    Superseded { ticket: LoadTicket, latest: LoadTicket },
}

/// Last-write-wins arbitration between overlapping load requests.
///
/// Hosts call [`LoadSequencer::begin`] before starting a fetch (on whatever
/// executor they use) and hand the finished report to
/// [`LoadSequencer::complete`]. Only the newest request's report survives.
#[derive(Debug, Clone, Default)]
pub struct LoadSequencer {
    latest: u64,
}

impl LoadSequencer {
    pub fn begin(&mut self) -> LoadTicket {
        self.latest += 1;
        LoadTicket(self.latest)
    }

    #[must_use]
    pub fn latest(&self) -> Option<LoadTicket> {
        (self.latest > 0).then_some(LoadTicket(self.latest))
    }

    #[must_use]
    pub fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest
    }

    pub fn complete(&self, ticket: LoadTicket, report: LoadReport) -> LoadOutcome {
        if self.is_current(ticket) {
            return LoadOutcome::Current(report);
        }

        let latest = LoadTicket(self.latest);
        debug!(
            ticket = ticket.0,
            latest = latest.0,
            discarded = report.accepted(),
            "discarding superseded load"
        );
        LoadOutcome::Superseded { ticket, latest }
    }
}
