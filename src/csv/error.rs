use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// Returned when compiling CSV from a sequence with no rows, which leaves no header to take the
/// column names from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptyInput;

impl Display for EmptyInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Unable to compile CSV from an empty row sequence!")
    }
}

impl Error for EmptyInput {}
