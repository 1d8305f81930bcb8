//! Problems page logic: filtering, search and cursor movement.

use crate::catalog::{Category, ProblemStatement};
use crate::widgets::scroll_to_show;

use super::state::ProblemsState;

/// One row of the rendered list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Row {
    Header(Category),
    Card {
        index: usize,
        category: Category,
        problem: ProblemStatement,
    },
}

/// Case-insensitive substring match on id or name. Whitespace is part of
/// the needle; only the empty search matches everything.
pub fn matches(search: &str, problem: &ProblemStatement) -> bool {
    let needle = search.to_lowercase();
    needle.is_empty()
        || problem.id.to_lowercase().contains(&needle)
        || problem.name.to_lowercase().contains(&needle)
}

/// Statements passing the filter and the search, in catalog order.
pub fn visible(state: &ProblemsState) -> Vec<(Category, ProblemStatement)> {
    state
        .catalog
        .iter()
        .filter(|(c, _)| state.filter.map_or(true, |f| f == *c))
        .filter(|(_, p)| matches(&state.search, p))
        .collect()
}

/// Visible statements grouped under a header per category.
pub fn rows(state: &ProblemsState) -> Vec<Row> {
    let mut rows = Vec::new();
    let mut current = None;
    for (index, (category, problem)) in visible(state).into_iter().enumerate() {
        if current != Some(category) {
            rows.push(Row::Header(category));
            current = Some(category);
        }
        rows.push(Row::Card {
            index,
            category,
            problem,
        });
    }
    rows
}

/// `All` followed by every category present in the catalog.
pub fn filter_options(state: &ProblemsState) -> Vec<Option<Category>> {
    std::iter::once(None)
        .chain(state.catalog.categories().map(Some))
        .collect()
}

pub fn set_filter(state: &mut ProblemsState, filter: Option<Category>) {
    state.filter = filter;
    reset_cursor(state);
}

pub fn cycle_filter(state: &mut ProblemsState, forward: bool) {
    let options = filter_options(state);
    let n = options.len();
    let pos = options.iter().position(|o| *o == state.filter).unwrap_or(0);
    let next = if forward { (pos + 1) % n } else { (pos + n - 1) % n };
    set_filter(state, options[next]);
}

pub fn type_char(state: &mut ProblemsState, c: char) {
    state.search.push(c);
    reset_cursor(state);
}

pub fn backspace(state: &mut ProblemsState) {
    if state.search.pop().is_some() {
        reset_cursor(state);
    }
}

pub fn clear_search(state: &mut ProblemsState) {
    state.search.clear();
    reset_cursor(state);
}

fn reset_cursor(state: &mut ProblemsState) {
    state.cursor = 0;
    state.scroll = 0;
}

/// Move the cursor by `delta`, clamped to the visible statements.
pub fn move_cursor(state: &mut ProblemsState, delta: isize) {
    let len = visible(state).len();
    if len == 0 {
        state.cursor = 0;
        return;
    }
    let target = state.cursor as isize + delta;
    state.cursor = target.clamp(0, len as isize - 1) as usize;
    ensure_visible(state);
}

pub fn select(state: &mut ProblemsState, index: usize) -> Option<(Category, ProblemStatement)> {
    let picked = visible(state).get(index).copied()?;
    state.cursor = index;
    Some(picked)
}

pub fn selected(state: &ProblemsState) -> Option<(Category, ProblemStatement)> {
    visible(state).get(state.cursor).copied()
}

/// Row of the cursor's card within [`rows`].
pub fn cursor_row(rows: &[Row], cursor: usize) -> Option<usize> {
    rows.iter()
        .position(|r| matches!(r, Row::Card { index, .. } if *index == cursor))
}

pub fn ensure_visible(state: &mut ProblemsState) {
    let rows = rows(state);
    state.scroll = scroll_to_show(
        cursor_row(&rows, state.cursor),
        state.scroll,
        state.viewport_rows.get() as usize,
        rows.len(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{fixtures, Catalog};

    fn small() -> ProblemsState {
        ProblemsState::new(Catalog::from_sections(fixtures::SMALL))
    }

    fn ids(state: &ProblemsState) -> Vec<&'static str> {
        visible(state).iter().map(|(_, p)| p.id).collect()
    }

    #[test]
    fn all_filter_shows_everything_in_order() {
        let state = small();
        assert_eq!(ids(&state), vec!["H-1", "H-2", "S-1", "S-2", "S-3"]);
    }

    #[test]
    fn builtin_all_filter_lists_every_statement() {
        let state = ProblemsState::new(Catalog::builtin());
        assert_eq!(visible(&state).len(), 58);
    }

    #[test]
    fn category_filter_restricts() {
        let mut state = small();
        set_filter(&mut state, Some(Category::Software));
        assert_eq!(ids(&state), vec!["S-1", "S-2", "S-3"]);
    }

    #[test]
    fn search_matches_id_and_name_case_insensitively() {
        let mut state = small();
        for c in "PLAN".chars() {
            type_char(&mut state, c);
        }
        assert_eq!(ids(&state), vec!["S-2"]);

        clear_search(&mut state);
        type_char(&mut state, 'h');
        type_char(&mut state, '-');
        assert_eq!(ids(&state), vec!["H-1", "H-2"]);
    }

    #[test]
    fn search_keeps_surrounding_whitespace() {
        let mut state = small();
        for c in "er".chars() {
            type_char(&mut state, c);
        }
        assert_eq!(ids(&state), vec!["H-2", "S-2", "S-3"]);
        // No name has "er" followed by a space.
        type_char(&mut state, ' ');
        assert!(ids(&state).is_empty());
        // A lone space is a real needle too.
        clear_search(&mut state);
        type_char(&mut state, ' ');
        assert!(ids(&state).is_empty());
    }

    #[test]
    fn search_and_filter_combine() {
        let mut state = small();
        set_filter(&mut state, Some(Category::Hardware));
        type_char(&mut state, 'r');
        // "Tracker" and "Planner" are software, filtered out.
        assert_eq!(ids(&state), vec!["H-2"]);
    }

    #[test]
    fn rows_group_under_headers() {
        let state = small();
        let rows = rows(&state);
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0], Row::Header(Category::Hardware));
        assert_eq!(rows[3], Row::Header(Category::Software));
        assert_eq!(cursor_row(&rows, 2), Some(4));
    }

    #[test]
    fn cycle_filter_wraps_through_all() {
        let mut state = small();
        cycle_filter(&mut state, true);
        assert_eq!(state.filter, Some(Category::Hardware));
        cycle_filter(&mut state, true);
        assert_eq!(state.filter, Some(Category::Software));
        cycle_filter(&mut state, true);
        assert_eq!(state.filter, None);
        cycle_filter(&mut state, false);
        assert_eq!(state.filter, Some(Category::Software));
    }

    #[test]
    fn cursor_clamps_and_resets_on_filter() {
        let mut state = small();
        move_cursor(&mut state, -1);
        assert_eq!(state.cursor, 0);
        move_cursor(&mut state, 10);
        assert_eq!(state.cursor, 4);
        assert_eq!(selected(&state).map(|(_, p)| p.id), Some("S-3"));
        set_filter(&mut state, Some(Category::Hardware));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn empty_results_have_no_selection() {
        let mut state = small();
        for c in "zzz".chars() {
            type_char(&mut state, c);
        }
        assert!(visible(&state).is_empty());
        move_cursor(&mut state, 1);
        assert_eq!(state.cursor, 0);
        assert_eq!(selected(&state), None);
        assert_eq!(select(&mut state, 0), None);
    }

    #[test]
    fn moving_cursor_updates_scroll() {
        let mut state = ProblemsState::new(Catalog::builtin());
        state.viewport_rows.set(5);
        move_cursor(&mut state, 10);
        assert!(state.scroll > 0);
        move_cursor(&mut state, -10);
        assert_eq!(state.scroll, 0);
    }
}
