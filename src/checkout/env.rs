//! Environments a checkout run executes against.
//!
//! Checkout needs two capabilities: a [`PaymentGateway`] for placing the
//! order and, when decorated with logging, a [`DiagnosticSink`].

use crate::checkout::model::Card;
use crate::checkout::price::Price;
use crate::effects::{DiagnosticSink, MemorySink, StderrSink};
use std::sync::{Arc, Mutex, PoisonError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaymentError {
    #[error("card {card} declined a charge of {amount}")]
    Declined { card: String, amount: Price },
}

/// Charges a card. Implementations decide retries and idempotency; the
/// machine calls this once per placed order.
pub trait PaymentGateway {
    fn charge(&self, card: &Card, amount: Price) -> Result<(), PaymentError>;
}

/// Console environment: diagnostics and charge notices go to standard error,
/// and every charge succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleEnv {
    sink: StderrSink,
}

impl ConsoleEnv {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DiagnosticSink for ConsoleEnv {
    fn write_line(&self, line: &str) {
        self.sink.write_line(line);
    }
}

impl PaymentGateway for ConsoleEnv {
    fn charge(&self, card: &Card, amount: Price) -> Result<(), PaymentError> {
        self.sink
            .write_line(&format!("charging card {} for {amount}", card.identifier()));
        Ok(())
    }
}

/// A charge seen by [`RecordingEnv`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charge {
    pub card: Card,
    pub amount: Price,
}

/// In-memory environment that records diagnostics and charges.
///
/// Clones share their recordings, so a test can keep one handle while the
/// effect runs against another.
#[derive(Clone, Debug, Default)]
pub struct RecordingEnv {
    log: MemorySink,
    charges: Arc<Mutex<Vec<Charge>>>,
    decline: bool,
}

impl RecordingEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Environment whose gateway declines every charge (declines are not recorded).
    pub fn declining() -> Self {
        Self {
            decline: true,
            ..Self::default()
        }
    }

    pub fn log(&self) -> &MemorySink {
        &self.log
    }

    pub fn charges(&self) -> Vec<Charge> {
        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl DiagnosticSink for RecordingEnv {
    fn write_line(&self, line: &str) {
        self.log.write_line(line);
    }
}

impl PaymentGateway for RecordingEnv {
    fn charge(&self, card: &Card, amount: Price) -> Result<(), PaymentError> {
        if self.decline {
            return Err(PaymentError::Declined {
                card: card.identifier().to_string(),
                amount,
            });
        }

        self.charges
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Charge {
                card: card.clone(),
                amount,
            });
        Ok(())
    }
}
