//! Policy Layer Example
//!
//! A request handler guards its arguments through a thin policy layer that
//! turns traversal violations into the handler's own error type.
//!
//! Run with: cargo run --example ensure_guard --features std

use guard_rail::merge::{self, Equality, MergeOptions};
use guard_rail::prelude::*;
use std::fmt;

#[derive(Debug, PartialEq)]
enum GuardError {
    HeaderMismatch(Equality),
    NotAscending { previous: u32, found: u32 },
    Empty,
}

impl fmt::Display for GuardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderMismatch(equality) => write!(f, "header mismatch: {equality}"),
            Self::NotAscending { previous, found } => {
                write!(f, "ids must ascend, {found} follows {previous}")
            },
            Self::Empty => f.write_str("no ids given"),
        }
    }
}

impl std::error::Error for GuardError {}

// =============================================================================
// Policy layer
// =============================================================================

mod policy {
    use super::*;

    /// The submitted header must repeat the expected one exactly.
    pub fn same_header(expected: &[&str], given: &[&str]) -> GuardResult<Equality, GuardError> {
        merge::ensure_equal(expected.iter(), given.iter(), MergeOptions::default(), |e| {
            GuardError::HeaderMismatch(*e)
        })
    }

    /// Ids must be strictly ascending and non-empty.
    pub fn ascending_ids(ids: &[u32]) -> GuardResult<&[u32], GuardError> {
        let mut previous = None;
        Traverse::indexed(ids)
            .navigate(|id: &&u32, _, _| {
                let found = **id;
                match previous.replace(found) {
                    Some(previous) if previous >= found => {
                        Err(GuardError::NotAscending { previous, found })
                    },
                    _ => Ok(NavigateCommand::CONTINUE),
                }
            })
            .total(|summary: TraversalSummary| {
                if summary.total == 0 {
                    Err(GuardError::Empty)
                } else {
                    Ok(())
                }
            })
            .check()
    }
}

// =============================================================================
// Handler
// =============================================================================

fn handle(header: &[&str], ids: &[u32]) -> Result<usize, Box<dyn std::error::Error>> {
    policy::same_header(&["id", "name"], header)?;
    let ids = policy::ascending_ids(ids)?;
    Ok(ids.len())
}

fn main() {
    let requests: [(&[&str], &[u32]); 4] = [
        (&["id", "name"], &[1, 4, 9]),
        (&["id", "email"], &[1, 2]),
        (&["id", "name"], &[3, 3]),
        (&["id", "name"], &[]),
    ];

    for (header, ids) in requests {
        match handle(header, ids) {
            Ok(count) => println!("accepted {count} ids"),
            Err(e) => println!("rejected: {e}"),
        }
    }
}
