//! Shared shape of registrable identifiers.
//!
//! Modules and providers run through the same pipeline; this trait is the
//! seam where they differ: repository grammar, address rules, the GitHub
//! repository they live in, and the version descriptor they persist.

use crate::address::AddressError;
use crate::error::SubmitError;
use crate::github::Repository;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;

pub trait Identifier: Clone + fmt::Debug + fmt::Display + Sized {
    /// Version descriptor stored in the catalog document.
    type Version: Clone + fmt::Debug + PartialEq + Serialize + DeserializeOwned;

    /// Lower-case entity label used in logs ("module", "provider").
    const KIND: &'static str;

    /// Parse a raw `owner/repo` string into an identifier.
    fn parse_repository(raw: &str) -> Result<Self, SubmitError>;

    /// Check the canonical address against the registry address grammar.
    fn validate_address(&self) -> Result<(), AddressError>;

    /// GitHub repository that hosts this entry's releases.
    fn repository(&self) -> Repository;

    /// Canonical address; `Display` renders the same string.
    fn address(&self) -> String {
        self.to_string()
    }

    /// Case-insensitive equality on canonical addresses.
    fn same_address(&self, other: &Self) -> bool {
        self.address().eq_ignore_ascii_case(&other.address())
    }
}
