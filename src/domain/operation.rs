use rust_decimal::Decimal;

use crate::domain::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    Open { initial: Decimal },
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OperationKind,
    pub owner: String,
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.kind {
            OperationKind::Open { initial } => {
                write!(f, "open,owner={},initial={}", self.owner, Money(initial))
            }
            OperationKind::Deposit { amount } => {
                write!(f, "deposit,owner={},amount={}", self.owner, Money(amount))
            }
            OperationKind::Withdrawal { amount } => {
                write!(f, "withdrawal,owner={},amount={}", self.owner, Money(amount))
            }
        }
    }
}
