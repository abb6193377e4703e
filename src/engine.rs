use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::domain::{
    Account, Error, Operation, OperationKind,
    traits::{AccountStore, DeadLetterQueue, OperationStream},
};

use futures::StreamExt;
use rust_decimal::Decimal;

/// Replays operations one at a time against independent accounts. Rejected
/// operations go to the dead-letter queue; accepted ones are persisted.
#[derive(Debug)]
pub struct Engine<I, S, D>
where
    I: OperationStream,
    S: AccountStore,
    D: DeadLetterQueue,
{
    ingestion: I,
    store: S,
    dlq: D,
    accounts: BTreeMap<String, Account>,
}

impl<I, S, D> Engine<I, S, D>
where
    I: OperationStream,
    S: AccountStore,
    D: DeadLetterQueue,
{
    pub fn new(ingestion: I, store: S, dlq: D) -> Self {
        Self {
            ingestion,
            store,
            dlq,
            accounts: BTreeMap::new(),
        }
    }

    pub async fn process(&mut self) -> Result<(), Error> {
        let mut res = self.ingestion.stream();
        let (mut applied, mut rejected) = (0usize, 0usize);

        while let Some(op) = res.next().await {
            match op.and_then(|op| self.apply_operation(op)) {
                Ok(()) => applied += 1,
                Err(e) => {
                    rejected += 1;
                    self.dlq.report(&e);
                }
            }
        }

        tracing::info!(applied, rejected, accounts = self.accounts.len(), "replay finished");
        Ok(())
    }

    fn apply_operation(&mut self, op: Operation) -> Result<(), Error> {
        tracing::debug!(%op, "applying operation");

        match op.kind {
            OperationKind::Open { initial } => self.open(op.owner, initial),
            OperationKind::Deposit { amount } => {
                let account = lookup(&mut self.accounts, &op.owner)?;
                let mut updated = account.clone();
                updated.deposit(amount)?;
                commit(account, updated, &mut self.store)
            }
            OperationKind::Withdrawal { amount } => {
                let account = lookup(&mut self.accounts, &op.owner)?;
                let mut updated = account.clone();
                updated.withdraw(amount)?;
                commit(account, updated, &mut self.store)
            }
        }
    }

    fn open(&mut self, owner: String, initial: Decimal) -> Result<(), Error> {
        match self.accounts.entry(owner) {
            Entry::Vacant(e) => {
                let account = Account::with_balance(e.key().clone(), initial)?;
                e.insert(account).persist(&mut self.store)
            }
            Entry::Occupied(e) => Err(Error::Engine(format!(
                "Account for {} already exists",
                e.key()
            ))),
        }
    }

    pub fn account(&self, owner: &str) -> Option<&Account> {
        self.accounts.get(owner)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn flush(&mut self) -> Result<(), Error> {
        self.store.flush()
    }
}

// Borrows only the account map so the store stays free for persisting.
fn lookup<'a>(
    accounts: &'a mut BTreeMap<String, Account>,
    owner: &str,
) -> Result<&'a mut Account, Error> {
    accounts
        .get_mut(owner)
        .ok_or_else(|| Error::Engine(format!("No account for {}", owner)))
}

// The account only takes the new state once the store has accepted it.
fn commit<S: AccountStore>(
    account: &mut Account,
    updated: Account,
    store: &mut S,
) -> Result<(), Error> {
    updated.persist(store)?;
    *account = updated;
    Ok(())
}
