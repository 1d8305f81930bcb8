//! Register page state: the team registration form.

use std::cell::Cell;

use crate::catalog::Catalog;
use crate::notice::NoticeBoard;
use crate::selector::{ChoiceList, SelectorFields};

pub const MAX_TEAM_SIZE: u32 = 4;

/// Free-text inputs, in form order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextField {
    TeamName,
    TeamLeader,
    Email,
    Phone,
    College,
    Department,
}

impl TextField {
    pub const ALL: [TextField; 6] = [
        TextField::TeamName,
        TextField::TeamLeader,
        TextField::Email,
        TextField::Phone,
        TextField::College,
        TextField::Department,
    ];

    /// Form field name, as used in validation messages.
    pub fn key(self) -> &'static str {
        match self {
            TextField::TeamName => "teamName",
            TextField::TeamLeader => "teamLeader",
            TextField::Email => "email",
            TextField::Phone => "phone",
            TextField::College => "college",
            TextField::Department => "department",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TextField::TeamName => "Team Name",
            TextField::TeamLeader => "Team Leader",
            TextField::Email => "Email",
            TextField::Phone => "Phone",
            TextField::College => "College",
            TextField::Department => "Department",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            TextField::Email => "leader@college.edu",
            TextField::Phone => "+91 98765 43210",
            _ => "",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Anything that can hold focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Focus {
    Text(TextField),
    Year,
    TeamSize,
    /// Index into [`RegisterState::members`]; member 2 is index 0.
    Member(usize),
    Category,
    ProblemStatement,
    Submit,
}

/// One line of the form as laid out on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormRow {
    Section(&'static str),
    Field(Focus),
    ProblemId,
    Blank,
}

pub struct RegisterState {
    pub text: [String; 6],
    pub year: ChoiceList,
    pub team_size: ChoiceList,
    pub members: Vec<String>,
    pub selector: SelectorFields,

    /// Position in the focus order, `None` when nothing is focused.
    pub focus: Option<usize>,
    /// Ticks left until the simulated submission completes.
    pub pending_ticks: Option<u32>,
    pub notices: NoticeBoard,
    pub submit_delay_ticks: u32,

    pub scroll: usize,
    pub viewport_rows: Cell<u16>,
}

impl RegisterState {
    pub fn new(catalog: &Catalog, submit_delay_ticks: u32, notice_ticks: u32) -> Self {
        let mut year = ChoiceList::new("Select Year");
        for (value, label) in [
            ("1", "1st Year"),
            ("2", "2nd Year"),
            ("3", "3rd Year"),
            ("4", "4th Year"),
        ] {
            year.push(value, label);
        }

        let mut team_size = ChoiceList::new("Select Team Size");
        for n in 1..=MAX_TEAM_SIZE {
            let label = if n == 1 {
                "1 Member".to_string()
            } else {
                format!("{n} Members")
            };
            team_size.push(n.to_string(), label);
        }

        Self {
            text: Default::default(),
            year,
            team_size,
            members: Vec::new(),
            selector: SelectorFields::new(catalog),
            focus: None,
            pending_ticks: None,
            notices: NoticeBoard::new(notice_ticks),
            submit_delay_ticks,
            scroll: 0,
            viewport_rows: Cell::new(0),
        }
    }

    pub fn text(&self, field: TextField) -> &str {
        &self.text[field.index()]
    }

    pub fn is_pending(&self) -> bool {
        self.pending_ticks.is_some()
    }
}
