use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;

use crate::domain::{Account, AccountStore, Error, Money};

/// Accepts every snapshot and keeps nothing.
#[derive(Default, Debug, Clone, Copy)]
pub struct NoopStore;

impl AccountStore for NoopStore {
    fn persist(&mut self, _account: &Account) -> Result<(), Error> {
        Ok(())
    }
}

/// Keeps the latest snapshot of every account it has been handed; flushing
/// writes them to stdout as CSV, ordered by owner.
#[derive(Default, Debug)]
pub struct MemoryStore {
    snapshots: BTreeMap<String, Account>,
    persist_count: usize,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    owner: &'a str,
    balance: String,
    has_funds: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self, owner: &str) -> Option<&Account> {
        self.snapshots.get(owner)
    }

    pub fn persist_count(&self) -> usize {
        self.persist_count
    }

    pub fn write_report<W: Write>(&self, out: W) -> Result<(), Error> {
        let mut wtr = csv::Writer::from_writer(out);

        if self.snapshots.is_empty() {
            wtr.write_record(["owner", "balance", "has_funds"])
                .map_err(io::Error::from)?;
        }

        for account in self.snapshots.values() {
            wtr.serialize(ReportRow {
                owner: account.owner(),
                balance: Money(account.balance()).to_string(),
                has_funds: account.has_funds(),
            })
            .map_err(io::Error::from)?;
        }

        wtr.flush()?;
        Ok(())
    }
}

impl AccountStore for MemoryStore {
    fn persist(&mut self, account: &Account) -> Result<(), Error> {
        self.snapshots
            .insert(account.owner().to_string(), account.clone());
        self.persist_count += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.write_report(io::stdout().lock())
    }
}

#[cfg(test)]
mod tests {
    use super::{MemoryStore, NoopStore};
    use crate::domain::{Account, AccountStore};
    use rust_decimal::Decimal;

    #[test]
    fn memory_store_keeps_latest_snapshot() {
        let mut store = MemoryStore::new();
        let mut account = Account::with_balance("User A", Decimal::new(10, 0)).unwrap();

        store.persist(&account).unwrap();
        account.withdraw(Decimal::new(4, 0)).unwrap();
        store.persist(&account).unwrap();

        assert_eq!(store.persist_count(), 2);
        assert_eq!(
            store.snapshot("User A").map(Account::balance),
            Some(Decimal::new(6, 0))
        );
        assert!(store.snapshot("User B").is_none());
    }

    #[test]
    fn report_is_sorted_by_owner() {
        let mut store = MemoryStore::new();
        for (owner, balance) in [("b", "0"), ("a", "12.50"), ("c", "-3")] {
            let account = Account::with_balance(owner, balance.parse().unwrap()).unwrap();
            store.persist(&account).unwrap();
        }

        let mut out = Vec::new();
        store.write_report(&mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "owner,balance,has_funds\n\
             a,12.5,true\n\
             b,0.0,false\n\
             c,-3.0,false\n"
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        let mut out = Vec::new();
        MemoryStore::new().write_report(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "owner,balance,has_funds\n");
    }

    #[test]
    fn noop_store_accepts_everything() {
        let account = Account::new("anyone").unwrap();
        let mut store = NoopStore;
        assert!(account.persist(&mut store).is_ok());
        assert!(store.flush().is_ok());
    }
}
