use std::path::PathBuf;

use crate::domain::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: PathBuf,
}

impl Config {
    /// Expects the program name first, then the path of the operations CSV.
    pub fn from_args<A>(args: A) -> Result<Self, Error>
    where
        A: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter().skip(1);

        let input = args
            .next()
            .filter(|path| !path.trim().is_empty())
            .ok_or_else(|| Error::Config("usage: bank_account <operations.csv>".to_string()))?;

        if let Some(extra) = args.next() {
            return Err(Error::Config(format!("unexpected argument: {}", extra)));
        }

        Ok(Self {
            input: PathBuf::from(input),
        })
    }
}
