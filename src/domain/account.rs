use rust_decimal::Decimal;

use crate::domain::{AccountStore, Error, Money};

/// A single owner's balance. The balance only moves through [`Account::deposit`]
/// and [`Account::withdraw`], and a withdrawal never takes it below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    owner: String,
    balance: Decimal,
}

impl Account {
    pub fn new(owner: impl Into<String>) -> Result<Self, Error> {
        Self::with_balance(owner, Decimal::ZERO)
    }

    /// The initial balance is taken as given, negative values included.
    pub fn with_balance(owner: impl Into<String>, balance: Decimal) -> Result<Self, Error> {
        let owner = owner.into();

        if owner.trim().is_empty() {
            return Err(Error::InvalidArgument(
                "owner must be a non-empty name".to_string(),
            ));
        }

        Ok(Self { owner, balance })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn deposit(&mut self, amount: Decimal) -> Result<(), Error> {
        let amount = Money::ensure_positive(amount)?;
        self.balance = self.balance.checked_add(amount).ok_or_else(|| {
            Error::InvalidArgument(format!(
                "depositing {} would overflow the balance",
                Money(amount)
            ))
        })?;
        Ok(())
    }

    pub fn withdraw(&mut self, amount: Decimal) -> Result<(), Error> {
        let amount = Money::ensure_positive(amount)?;

        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }

        self.balance -= amount;
        Ok(())
    }

    /// Strictly positive: an empty account has no funds.
    pub fn has_funds(&self) -> bool {
        self.balance > Decimal::ZERO
    }

    pub fn persist<S: AccountStore + ?Sized>(&self, store: &mut S) -> Result<(), Error> {
        store.persist(self)
    }
}

impl core::fmt::Display for Account {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Owner: {} - Money: {}$",
            self.owner,
            Money(self.balance)
        )
    }
}
