use futures::Stream;

use crate::domain::{Account, Error, Operation};

pub trait OperationStream {
    type OpStream: Stream<Item = Result<Operation, Error>> + Send + Unpin + 'static;
    fn stream(&mut self) -> Self::OpStream;
}

pub trait DeadLetterQueue {
    fn report(&self, error: &Error);
}

/// Durable home for account state. Called with the account as it stands
/// after each successful mutation.
pub trait AccountStore {
    fn persist(&mut self, account: &Account) -> Result<(), Error>;

    fn flush(&mut self) -> Result<(), Error> {
        Ok(())
    }
}
