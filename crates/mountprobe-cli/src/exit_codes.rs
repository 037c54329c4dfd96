//! Process exit contract: the only state that crosses the process boundary.

pub const SUCCESS: i32 = 0;
/// Any check failure, mount timeout, or top-level fault.
pub const FAILURE: i32 = 1;
