//! Action ids for home page click targets.

pub const GO_PROBLEMS: u16 = 1;
pub const GO_REGISTER: u16 = 2;
