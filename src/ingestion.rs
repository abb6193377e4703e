use std::io::Read;
use std::pin::Pin;

use futures::stream::{self, Stream};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::domain::traits::OperationStream;
use crate::domain::{Error, Money, Operation, OperationKind};

pub struct CsvReader<R: Read> {
    reader: Option<csv::Reader<R>>,
}

impl<R: Read> CsvReader<R> {
    pub fn new(reader: R) -> Self {
        let rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(reader);

        Self { reader: Some(rdr) }
    }
}

/// Internal shape used only for CSV deserialization.
#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(rename = "type")]
    kind: String,
    owner: String,
    amount: Option<String>,
}

impl TryFrom<CsvRow> for Operation {
    type Error = Error;

    fn try_from(row: CsvRow) -> Result<Self, Self::Error> {
        let amount = row
            .amount
            .as_deref()
            .map(str::parse::<Money>)
            .transpose()?
            .map(|money| money.amount());

        let kind = match (row.kind.trim().to_ascii_lowercase().as_str(), amount) {
            ("open", initial) => OperationKind::Open {
                initial: initial.unwrap_or(Decimal::ZERO),
            },
            ("deposit", Some(amount)) => OperationKind::Deposit { amount },
            ("withdrawal", Some(amount)) => OperationKind::Withdrawal { amount },
            (kind @ ("deposit" | "withdrawal"), None) => {
                return Err(Error::InvalidArgument(format!(
                    "{} for {} is missing an amount",
                    kind, row.owner
                )));
            }
            (other, _) => {
                return Err(Error::Ingestion(format!(
                    "Invalid operation type: {}",
                    other
                )));
            }
        };

        Ok(Operation {
            kind,
            owner: row.owner,
        })
    }
}

impl<R: Read + Send + 'static> OperationStream for CsvReader<R> {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        // A reader replays its input once.
        let Some(reader) = self.reader.take() else {
            return Box::pin(stream::empty::<Result<Operation, Error>>());
        };

        let iter = reader
            .into_deserialize::<CsvRow>()
            .map(|row_res| match row_res {
                Ok(row) => Operation::try_from(row),
                Err(e) => Err(Error::Ingestion(format!(
                    "CSV deserialization error: {}",
                    e
                ))),
            });

        Box::pin(stream::iter(iter))
    }
}
