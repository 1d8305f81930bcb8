//! Click action IDs for the register page.

pub const NOTICE_CLOSE: u16 = 39;
/// `FIELD_BASE + i` focuses the i-th entry of the focus order.
pub const FIELD_BASE: u16 = 40;
