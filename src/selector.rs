//! Category-driven problem statement selector.
//!
//! The controller owns no state: it borrows the catalog and mutates the
//! register form's three bound fields. Population is synchronous, so the
//! return of [`SelectorController::on_category_changed`] is the signal that
//! the dependent list is ready.

use crate::catalog::Catalog;

pub const SENTINEL_LABEL: &str = "Select Problem Statement";
pub const CATEGORY_SENTINEL_LABEL: &str = "Select Category";

/// One `<option>` of a single-select control.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Model of a single-select control whose first option is a non-selectable
/// "none selected" sentinel with an empty value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceList {
    options: Vec<ChoiceOption>,
    selected: usize,
}

impl ChoiceList {
    pub fn new(sentinel_label: &str) -> Self {
        Self {
            options: vec![ChoiceOption {
                value: String::new(),
                label: sentinel_label.to_string(),
            }],
            selected: 0,
        }
    }

    /// Drop everything but the sentinel and select it.
    pub fn clear(&mut self) {
        self.options.truncate(1);
        self.selected = 0;
    }

    pub fn push(&mut self, value: impl Into<String>, label: impl Into<String>) {
        self.options.push(ChoiceOption {
            value: value.into(),
            label: label.into(),
        });
    }

    pub fn options(&self) -> &[ChoiceOption] {
        &self.options
    }

    /// Options after the sentinel.
    pub fn entries(&self) -> &[ChoiceOption] {
        &self.options()[1..]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Selected value; `""` while the sentinel is selected.
    pub fn value(&self) -> &str {
        &self.options[self.selected].value
    }

    pub fn selected_label(&self) -> &str {
        &self.options[self.selected].label
    }

    /// Select the option carrying `value`.
    ///
    /// Like a DOM `<select>` assigned a value it has no option for, an
    /// unknown value leaves the sentinel selected and returns `false`.
    pub fn select_value(&mut self, value: &str) -> bool {
        match self.options.iter().position(|o| o.value == value) {
            Some(i) => {
                self.selected = i;
                true
            }
            None => {
                self.selected = 0;
                false
            }
        }
    }

    pub fn select_index(&mut self, index: usize) -> bool {
        if index < self.options.len() {
            self.selected = index;
            true
        } else {
            false
        }
    }

    /// Cycle forward, wrapping back to the sentinel.
    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.options.len();
    }

    /// Cycle backward, wrapping to the last option.
    pub fn select_prev(&mut self) {
        let n = self.options.len();
        self.selected = (self.selected + n - 1) % n;
    }
}

/// The register page controls the selector reads and writes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectorFields {
    /// `category` control: one option per catalog category.
    pub category: ChoiceList,
    /// `problemStatement` control, derived from `category`.
    pub problem_statement: ChoiceList,
    /// `problemId` field, mirrors `problem_statement`.
    pub problem_id: String,
}

impl SelectorFields {
    pub fn new(catalog: &Catalog) -> Self {
        let mut category = ChoiceList::new(CATEGORY_SENTINEL_LABEL);
        for c in catalog.categories() {
            category.push(c.key(), c.label());
        }
        Self {
            category,
            problem_statement: ChoiceList::new(SENTINEL_LABEL),
            problem_id: String::new(),
        }
    }
}

pub struct SelectorController<'a> {
    catalog: &'a Catalog,
}

impl<'a> SelectorController<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Rebuild the dependent list from `category`.
    ///
    /// The category control is moved to `category` (its sentinel when there
    /// is no such option). The list and the derived id are cleared
    /// unconditionally, so nothing from a previous category survives.
    /// Unknown categories leave only the sentinel.
    pub fn on_category_changed(&self, fields: &mut SelectorFields, category: &str) {
        fields.category.select_value(category);
        fields.problem_statement.clear();
        fields.problem_id.clear();

        let problems = self.catalog.lookup(category);
        for p in problems {
            fields.problem_statement.push(p.id, p.name);
        }
        log::debug!(
            "selector: category {:?} populated {} statements",
            category,
            problems.len()
        );
    }

    /// Mirror the chosen statement into the derived id field, verbatim.
    pub fn on_problem_selected(&self, fields: &mut SelectorFields, problem_id: &str) {
        fields.problem_id.clear();
        fields.problem_id.push_str(problem_id);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::Category;
    use proptest::prelude::*;

    fn arb_category_value() -> impl Strategy<Value = String> {
        prop_oneof![
            proptest::sample::select(Category::ALL.to_vec()).prop_map(|c| c.key().to_string()),
            "[a-z]{0,12}",
        ]
    }

    proptest! {
        #[test]
        fn prop_list_reflects_last_category(
            first in arb_category_value(),
            second in arb_category_value(),
        ) {
            let catalog = Catalog::builtin();
            let ctl = SelectorController::new(&catalog);
            let mut fields = SelectorFields::new(&catalog);
            ctl.on_category_changed(&mut fields, &first);
            ctl.on_category_changed(&mut fields, &second);

            let listed: Vec<&str> = fields.problem_statement.entries().iter().map(|o| o.value.as_str()).collect();
            let expected: Vec<&str> = catalog.lookup(&second).iter().map(|p| p.id).collect();
            prop_assert_eq!(listed, expected);
            prop_assert_eq!(fields.problem_statement.options()[0].value.as_str(), "");
            prop_assert_eq!(fields.problem_id.as_str(), "");
        }

        #[test]
        fn prop_problem_selected_is_identity(id in ".{0,24}") {
            let catalog = Catalog::builtin();
            let ctl = SelectorController::new(&catalog);
            let mut fields = SelectorFields::new(&catalog);
            ctl.on_problem_selected(&mut fields, &id);
            prop_assert_eq!(fields.problem_id, id);
        }

        #[test]
        fn prop_cycling_stays_in_bounds(steps in proptest::collection::vec(any::<bool>(), 0..40)) {
            let catalog = Catalog::builtin();
            let ctl = SelectorController::new(&catalog);
            let mut fields = SelectorFields::new(&catalog);
            ctl.on_category_changed(&mut fields, "others");
            for forward in steps {
                if forward {
                    fields.problem_statement.select_next();
                } else {
                    fields.problem_statement.select_prev();
                }
                prop_assert!(fields.problem_statement.selected_index() < fields.problem_statement.options().len());
            }
        }
    }
}
