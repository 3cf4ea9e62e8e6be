//! Domain wrapper types for the windowed paging BDD tests.

use std::str::FromStr;

/// Requested page (1-based).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageNumber(i64);

impl PageNumber {
    pub(crate) const fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for PageNumber {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>().map(Self)
    }
}

/// Records per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PageLimit(usize);

impl PageLimit {
    pub(crate) const fn value(self) -> usize {
        self.0
    }
}

impl FromStr for PageLimit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.parse::<usize>().map_err(|error| error.to_string())?;
        if value == 0 {
            return Err("PageLimit must be >= 1".to_owned());
        }

        Ok(Self(value))
    }
}

/// Number of records seeded into the fetcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RecordCount(u64);

impl RecordCount {
    pub(crate) const fn value(self) -> u64 {
        self.0
    }
}

impl FromStr for RecordCount {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Comma-separated record ids, for example `5, 6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecordIds(Vec<u64>);

impl RecordIds {
    pub(crate) fn as_slice(&self) -> &[u64] {
        &self.0
    }
}

impl FromStr for RecordIds {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',')
            .map(|id| id.trim().parse::<u64>())
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
