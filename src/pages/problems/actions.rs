//! Click action IDs for the problems page.

pub const FILTER_ALL: u16 = 10;
/// `FILTER_BASE + i` selects the i-th catalog category.
pub const FILTER_BASE: u16 = 11;
pub const SEARCH: u16 = 20;
pub const FILTER_PREV: u16 = 30;
pub const FILTER_NEXT: u16 = 31;
/// `CARD_BASE + i` chooses the i-th visible statement.
pub const CARD_BASE: u16 = 100;
