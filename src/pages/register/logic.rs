//! Register page logic: focus movement, editing, selects and submission.

use crate::catalog::Catalog;
use crate::selector::{ChoiceList, SelectorController, SelectorFields};
use crate::widgets::scroll_to_show;

use super::state::{Focus, FormRow, RegisterState, TextField};
use super::validate::validate;

pub const SUCCESS_MESSAGE: &str =
    "Registration successful! You will receive a confirmation email shortly.";

/// The form, top to bottom.
pub fn rows(state: &RegisterState) -> Vec<FormRow> {
    let mut rows = vec![FormRow::Section("Team details")];
    for field in [
        TextField::TeamName,
        TextField::TeamLeader,
        TextField::Email,
        TextField::Phone,
    ] {
        rows.push(FormRow::Field(Focus::Text(field)));
    }
    rows.push(FormRow::Section("Academic details"));
    rows.push(FormRow::Field(Focus::Text(TextField::College)));
    rows.push(FormRow::Field(Focus::Text(TextField::Department)));
    rows.push(FormRow::Field(Focus::Year));
    rows.push(FormRow::Section("Team members"));
    rows.push(FormRow::Field(Focus::TeamSize));
    for i in 0..state.members.len() {
        rows.push(FormRow::Field(Focus::Member(i)));
    }
    rows.push(FormRow::Section("Problem statement"));
    rows.push(FormRow::Field(Focus::Category));
    rows.push(FormRow::Field(Focus::ProblemStatement));
    rows.push(FormRow::ProblemId);
    rows.push(FormRow::Blank);
    rows.push(FormRow::Field(Focus::Submit));
    rows
}

/// Focusable entries in tab order.
pub fn focus_order(state: &RegisterState) -> Vec<Focus> {
    rows(state)
        .into_iter()
        .filter_map(|r| match r {
            FormRow::Field(f) => Some(f),
            _ => None,
        })
        .collect()
}

pub fn focused(state: &RegisterState) -> Option<Focus> {
    let i = state.focus?;
    focus_order(state).get(i).copied()
}

pub fn is_editing_text(state: &RegisterState) -> bool {
    matches!(focused(state), Some(Focus::Text(_) | Focus::Member(_)))
}

/// Move focus by `delta`, wrapping. From no focus, forward lands on the first
/// field and backward on the last.
pub fn move_focus(state: &mut RegisterState, delta: isize) {
    let n = focus_order(state).len() as isize;
    let next = match state.focus {
        None if delta >= 0 => 0,
        None => n - 1,
        Some(i) => (i as isize + delta).rem_euclid(n),
    };
    state.focus = Some(next as usize);
    ensure_visible(state);
}

pub fn set_focus(state: &mut RegisterState, index: usize) -> bool {
    if index < focus_order(state).len() {
        state.focus = Some(index);
        ensure_visible(state);
        true
    } else {
        false
    }
}

pub fn ensure_visible(state: &mut RegisterState) {
    let rows = rows(state);
    let row = focused(state).and_then(|f| rows.iter().position(|r| *r == FormRow::Field(f)));
    state.scroll = scroll_to_show(
        row,
        state.scroll,
        state.viewport_rows.get() as usize,
        rows.len(),
    );
}

fn text_slot(state: &mut RegisterState) -> Option<&mut String> {
    match focused(state)? {
        Focus::Text(field) => Some(&mut state.text[field.index()]),
        Focus::Member(i) => state.members.get_mut(i),
        _ => None,
    }
}

pub fn type_char(state: &mut RegisterState, c: char) -> bool {
    match text_slot(state) {
        Some(slot) => {
            slot.push(c);
            true
        }
        None => false,
    }
}

pub fn backspace(state: &mut RegisterState) -> bool {
    match text_slot(state) {
        Some(slot) => {
            slot.pop();
            true
        }
        None => false,
    }
}

/// Keep one name slot per member beyond the leader. Names already typed into
/// slots that survive are kept.
pub fn sync_members(state: &mut RegisterState) {
    let size: usize = state.team_size.value().parse().unwrap_or(0);
    state.members.resize(size.saturating_sub(1), String::new());
}

/// Step the focused select. Returns false when the focus is not a select.
pub fn cycle_select(state: &mut RegisterState, catalog: &Catalog, forward: bool) -> bool {
    let step = |list: &mut ChoiceList| {
        if forward {
            list.select_next()
        } else {
            list.select_prev()
        }
    };
    let controller = SelectorController::new(catalog);
    match focused(state) {
        Some(Focus::Year) => step(&mut state.year),
        Some(Focus::TeamSize) => {
            step(&mut state.team_size);
            sync_members(state);
        }
        Some(Focus::Category) => {
            step(&mut state.selector.category);
            let category = state.selector.category.value().to_string();
            controller.on_category_changed(&mut state.selector, &category);
        }
        Some(Focus::ProblemStatement) => {
            step(&mut state.selector.problem_statement);
            let id = state.selector.problem_statement.value().to_string();
            controller.on_problem_selected(&mut state.selector, &id);
        }
        _ => return false,
    }
    true
}

/// Outcome of pressing the submit button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    Started,
    Rejected,
    AlreadyPending,
}

pub fn submit(state: &mut RegisterState) -> SubmitOutcome {
    if state.is_pending() {
        log::debug!("register: submit ignored, registration in progress");
        return SubmitOutcome::AlreadyPending;
    }
    match validate(state) {
        Ok(()) => {
            log::info!(
                "register: submitting team {:?} for {:?}",
                state.text(TextField::TeamName),
                state.selector.problem_id
            );
            state.pending_ticks = Some(state.submit_delay_ticks);
            SubmitOutcome::Started
        }
        Err(e) => {
            log::info!("register: validation failed: {e}");
            state.notices.error(e.to_string());
            SubmitOutcome::Rejected
        }
    }
}

/// Advance notices and the pending submission.
pub fn tick(state: &mut RegisterState, catalog: &Catalog, delta_ticks: u32) {
    state.notices.tick(delta_ticks);
    let Some(remaining) = state.pending_ticks else {
        return;
    };
    if remaining > delta_ticks {
        state.pending_ticks = Some(remaining - delta_ticks);
        return;
    }
    log::info!("register: registration completed");
    reset_form(state, catalog);
    state.notices.success(SUCCESS_MESSAGE);
}

/// Blank form. Notices and timing settings survive.
pub fn reset_form(state: &mut RegisterState, catalog: &Catalog) {
    for t in &mut state.text {
        t.clear();
    }
    state.year.select_index(0);
    state.team_size.select_index(0);
    state.members.clear();
    state.selector = SelectorFields::new(catalog);
    state.focus = None;
    state.pending_ticks = None;
    state.scroll = 0;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> (RegisterState, Catalog) {
        let catalog = Catalog::builtin();
        (RegisterState::new(&catalog, 20, 50), catalog)
    }

    fn focus_on(state: &mut RegisterState, target: Focus) {
        let i = focus_order(state)
            .iter()
            .position(|f| *f == target)
            .unwrap();
        set_focus(state, i);
    }

    fn fill(state: &mut RegisterState, catalog: &Catalog) {
        let values = [
            "Byte Me",
            "Asha Rao",
            "asha@college.edu",
            "9876543210",
            "City College",
            "ECE",
        ];
        for (field, value) in TextField::ALL.iter().zip(values) {
            focus_on(state, Focus::Text(*field));
            for c in value.chars() {
                type_char(state, c);
            }
        }
        focus_on(state, Focus::Year);
        cycle_select(state, catalog, true);
        focus_on(state, Focus::TeamSize);
        cycle_select(state, catalog, true);
        focus_on(state, Focus::Category);
        cycle_select(state, catalog, true);
    }

    #[test]
    fn focus_order_follows_layout() {
        let (state, _) = form();
        let order = focus_order(&state);
        assert_eq!(order[0], Focus::Text(TextField::TeamName));
        assert_eq!(order[6], Focus::Year);
        assert_eq!(order[7], Focus::TeamSize);
        assert_eq!(order[8], Focus::Category);
        assert_eq!(order.last(), Some(&Focus::Submit));
        assert_eq!(order.len(), 11);
    }

    #[test]
    fn focus_wraps() {
        let (mut state, _) = form();
        move_focus(&mut state, -1);
        assert_eq!(focused(&state), Some(Focus::Submit));
        move_focus(&mut state, 1);
        assert_eq!(focused(&state), Some(Focus::Text(TextField::TeamName)));
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let (mut state, _) = form();
        assert!(!type_char(&mut state, 'x'));
        move_focus(&mut state, 1);
        type_char(&mut state, 'A');
        type_char(&mut state, 'b');
        backspace(&mut state);
        assert_eq!(state.text(TextField::TeamName), "A");
        assert!(is_editing_text(&state));
    }

    #[test]
    fn team_size_regenerates_members_keeping_names() {
        let (mut state, catalog) = form();
        focus_on(&mut state, Focus::TeamSize);
        for _ in 0..3 {
            cycle_select(&mut state, &catalog, true);
        }
        assert_eq!(state.team_size.value(), "3");
        assert_eq!(state.members.len(), 2);
        state.members[0] = "Ravi".into();

        focus_on(&mut state, Focus::TeamSize);
        cycle_select(&mut state, &catalog, false);
        assert_eq!(state.members, vec!["Ravi".to_string()]);

        cycle_select(&mut state, &catalog, false);
        assert!(state.members.is_empty());
    }

    #[test]
    fn category_cycle_repopulates_problem_list() {
        let (mut state, catalog) = form();
        focus_on(&mut state, Focus::Category);
        cycle_select(&mut state, &catalog, true);
        assert_eq!(state.selector.category.value(), "hardware");
        assert_eq!(state.selector.problem_statement.entries().len(), 7);

        focus_on(&mut state, Focus::ProblemStatement);
        cycle_select(&mut state, &catalog, true);
        assert_eq!(state.selector.problem_id, "HW-001");

        focus_on(&mut state, Focus::Category);
        cycle_select(&mut state, &catalog, true);
        assert_eq!(state.selector.category.value(), "software");
        assert_eq!(state.selector.problem_id, "");
        assert_eq!(state.selector.problem_statement.value(), "");
    }

    #[test]
    fn problem_cycle_back_to_sentinel_clears_id() {
        let (mut state, catalog) = form();
        focus_on(&mut state, Focus::Category);
        cycle_select(&mut state, &catalog, true);
        focus_on(&mut state, Focus::ProblemStatement);
        cycle_select(&mut state, &catalog, true);
        cycle_select(&mut state, &catalog, false);
        assert_eq!(state.selector.problem_id, "");
    }

    #[test]
    fn invalid_submit_shows_error() {
        let (mut state, _) = form();
        assert_eq!(submit(&mut state), SubmitOutcome::Rejected);
        assert_eq!(
            state.notices.latest().map(|n| n.text.as_str()),
            Some("Please fill in the team name field.")
        );
        assert!(!state.is_pending());
    }

    #[test]
    fn submission_completes_after_delay() {
        let (mut state, catalog) = form();
        fill(&mut state, &catalog);
        assert_eq!(submit(&mut state), SubmitOutcome::Started);
        assert_eq!(submit(&mut state), SubmitOutcome::AlreadyPending);

        tick(&mut state, &catalog, 19);
        assert!(state.is_pending());
        assert_eq!(state.text(TextField::TeamName), "Byte Me");

        tick(&mut state, &catalog, 1);
        assert!(!state.is_pending());
        assert_eq!(state.text(TextField::TeamName), "");
        assert_eq!(state.selector.category.value(), "");
        assert_eq!(state.team_size.value(), "");
        assert_eq!(state.focus, None);
        assert_eq!(
            state.notices.latest().map(|n| n.text.as_str()),
            Some(SUCCESS_MESSAGE)
        );
    }

    #[test]
    fn success_notice_expires() {
        let (mut state, catalog) = form();
        fill(&mut state, &catalog);
        submit(&mut state);
        tick(&mut state, &catalog, 20);
        tick(&mut state, &catalog, 49);
        assert_eq!(state.notices.len(), 1);
        tick(&mut state, &catalog, 1);
        assert!(state.notices.is_empty());
    }
}
