pub mod account;
pub mod error;
pub mod money;
pub mod operation;
pub mod traits;

pub use account::Account;
pub use error::Error;
pub use money::Money;
pub use operation::{Operation, OperationKind};
pub use traits::{AccountStore, DeadLetterQueue, OperationStream};
