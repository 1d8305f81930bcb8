//! Problems page state: active filter, search text and list cursor.

use std::cell::Cell;

use crate::catalog::{Catalog, Category};

pub struct ProblemsState {
    pub catalog: Catalog,
    /// `None` shows every category.
    pub filter: Option<Category>,
    pub search: String,
    pub search_focused: bool,
    /// Index into the visible statements.
    pub cursor: usize,
    /// List rows scrolled out at the top.
    pub scroll: usize,
    /// List rows that fit on screen, recorded by the last render.
    pub viewport_rows: Cell<u16>,
}

impl ProblemsState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: None,
            search: String::new(),
            search_focused: false,
            cursor: 0,
            scroll: 0,
            viewport_rows: Cell::new(0),
        }
    }
}
