//! Platform share integration

use crate::{Error, Result};

/// A platform share sheet or equivalent
pub trait ShareTarget {
    fn share(&self, title: &str, text: &str) -> Result<()>;
}

/// Used where no native share facility exists; every share attempt fails
/// so that callers fall back to the clipboard
#[derive(Debug, Default, Clone, Copy)]
pub struct NoShareTarget;

impl ShareTarget for NoShareTarget {
    fn share(&self, _title: &str, _text: &str) -> Result<()> {
        Err(Error::ShareUnsupported)
    }
}
