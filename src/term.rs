use std::cmp::Ordering;
use std::fmt;

use thiserror::Error;

/// The three terms of the academic year, in chronological order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TermName {
    Spring,
    Summer,
    Fall,
}

impl TermName {
    /// Two-letter code stored in legacy term columns.
    pub fn code(self) -> &'static str {
        match self {
            TermName::Spring => "SP",
            TermName::Summer => "SM",
            TermName::Fall => "FA",
        }
    }

    pub fn from_code(code: &str) -> Result<TermName, TermError> {
        match code {
            "SP" => Ok(TermName::Spring),
            "SM" => Ok(TermName::Summer),
            "FA" => Ok(TermName::Fall),
            _ => Err(TermError::UnknownCode(code.to_string())),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TermError {
    #[error("unknown term code '{0}'")]
    UnknownCode(String),
    #[error("malformed term key '{0}'")]
    Malformed(String),
}

/// A semester-plus-year pair, e.g. Fall 2021. Legacy columns store the pair
/// either as one short string ("FA21") or as a term code plus two-digit year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TermKey {
    pub name: TermName,
    pub year: i32,
}

impl TermKey {
    pub fn new(name: TermName, year: i32) -> TermKey {
        TermKey { name, year }
    }

    /// Two-digit year as stored in legacy term_yr columns.
    pub fn short_year(self) -> i32 {
        self.year % 100
    }

    /// Compact form used in term string columns, e.g. "FA21".
    pub fn short_string(self) -> String {
        format!("{}{:02}", self.name.code(), self.short_year())
    }

    /// Parses the compact form. Two-digit years 80-99 fall in the 1900s,
    /// 00-79 in the 2000s.
    pub fn parse_short(text: &str) -> Result<TermKey, TermError> {
        if text.len() != 4 || !text.is_ascii() {
            return Err(TermError::Malformed(text.to_string()));
        }
        let name = TermName::from_code(&text[..2])?;
        let short: i32 = text[2..]
            .parse()
            .map_err(|_| TermError::Malformed(text.to_string()))?;
        Ok(TermKey::new(name, expand_year(short)))
    }

    /// Rebuilds a key from a term-code column and a two-digit year column.
    pub fn from_columns(code: &str, short_year: i32) -> Result<TermKey, TermError> {
        if !(0..=99).contains(&short_year) {
            return Err(TermError::Malformed(format!("{}{}", code, short_year)));
        }
        let name = TermName::from_code(code)?;
        Ok(TermKey::new(name, expand_year(short_year)))
    }
}

fn expand_year(short: i32) -> i32 {
    if short >= 80 {
        1900 + short
    } else {
        2000 + short
    }
}

impl Ord for TermKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for TermKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TermKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_string())
    }
}
