use std::fmt::Debug;
use std::marker::PhantomData;

use super::value_commit::ValueCommit;
use super::value_selection::ValueSelection;
use super::BranchValue;
use super::CommitError;
use super::SelectionContext;
use crate::engine::store::ModEvent;
use crate::engine::CopyContext;
use crate::propagation::PropagationContext;

/// The value half of a brancher: selects a value for a view and commits alternatives on it.
///
/// Values are exchanged as [`BranchValue`]s so that the brancher does not need to know the value
/// type of its selection.
pub trait ValueSelectCommit<Var>: Clone + Debug + Send + 'static {
    fn alternatives(&self) -> u32;

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> BranchValue;

    /// Apply alternative `alternative` for `value`. A value of the wrong kind is reported before
    /// anything is narrowed.
    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: BranchValue,
    ) -> Result<ModEvent, CommitError>;

    fn notice(&self) -> bool;

    fn copy(&self, context: &mut CopyContext) -> Self;

    fn dispose(&mut self);
}

/// Composes a [`ValueSelection`] with a [`ValueCommit`] accepting the values it selects.
pub struct SelectCommit<Var, Selection, Commit> {
    selection: Selection,
    commit: Commit,
    variable: PhantomData<fn(&Var)>,
}

impl<Var, Selection, Commit> SelectCommit<Var, Selection, Commit> {
    pub fn new(selection: Selection, commit: Commit) -> Self {
        SelectCommit {
            selection,
            commit,
            variable: PhantomData,
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }
}

impl<Var, Selection: Clone, Commit: Clone> Clone for SelectCommit<Var, Selection, Commit> {
    fn clone(&self) -> Self {
        SelectCommit::new(self.selection.clone(), self.commit.clone())
    }
}

impl<Var, Selection: Debug, Commit: Debug> Debug for SelectCommit<Var, Selection, Commit> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SelectCommit")
            .field("selection", &self.selection)
            .field("commit", &self.commit)
            .finish()
    }
}

impl<Var, Selection, Commit> ValueSelectCommit<Var> for SelectCommit<Var, Selection, Commit>
where
    Var: 'static,
    Selection: ValueSelection<Var>,
    Commit: ValueCommit<Var, Selection::Value>,
{
    fn alternatives(&self) -> u32 {
        self.commit.alternatives()
    }

    fn select_value(&mut self, context: &SelectionContext, variable: &Var) -> BranchValue {
        self.selection.select_value(context, variable).into()
    }

    fn commit(
        &mut self,
        context: &mut PropagationContext,
        alternative: u32,
        variable: &Var,
        value: BranchValue,
    ) -> Result<ModEvent, CommitError> {
        let value = Selection::Value::try_from(value)?;
        Ok(self.commit.commit(context, alternative, variable, value)?)
    }

    fn notice(&self) -> bool {
        self.selection.notice() || self.commit.notice()
    }

    fn copy(&self, context: &mut CopyContext) -> Self {
        SelectCommit::new(self.selection.copy(context), self.commit.copy(context))
    }

    fn dispose(&mut self) {
        self.selection.dispose();
        self.commit.dispose();
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use super::*;
    use crate::basic_types::EmptyDomain;
    use crate::branching::branchers::ViewValueBrancher;
    use crate::branching::value_commit::AssignOrExclude;
    use crate::branching::value_selection::InDomainMin;
    use crate::branching::value_selection::InDomainPreferred;
    use crate::branching::variable_selection::InputOrder;
    use crate::containers::HashMap;
    use crate::engine::variables::DomainId;
    use crate::engine::SharedData;
    use crate::propagation::ReadDomains;
    use crate::Space;

    /// Selects the minimum and commits like [`AssignOrExclude`], counting how often it is copied
    /// and disposed.
    #[derive(Clone, Debug)]
    struct Counting {
        notices: bool,
        copies: Arc<AtomicUsize>,
        disposals: Arc<AtomicUsize>,
    }

    impl Counting {
        fn new(notices: bool) -> Self {
            Counting {
                notices,
                copies: Arc::new(AtomicUsize::new(0)),
                disposals: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn counted_copy(&self) -> Self {
            let _ = self.copies.fetch_add(1, Ordering::SeqCst);
            self.clone()
        }

        fn counted_dispose(&self) {
            let _ = self.disposals.fetch_add(1, Ordering::SeqCst);
        }

        fn copies(&self) -> usize {
            self.copies.load(Ordering::SeqCst)
        }

        fn disposals(&self) -> usize {
            self.disposals.load(Ordering::SeqCst)
        }
    }

    impl ValueSelection<DomainId> for Counting {
        type Value = i32;

        fn select_value(&mut self, context: &SelectionContext, variable: &DomainId) -> i32 {
            context.lower_bound(variable)
        }

        fn notice(&self) -> bool {
            self.notices
        }

        fn copy(&self, _context: &mut CopyContext) -> Self {
            self.counted_copy()
        }

        fn dispose(&mut self) {
            self.counted_dispose();
        }
    }

    impl ValueCommit<DomainId, i32> for Counting {
        fn commit(
            &mut self,
            context: &mut PropagationContext,
            alternative: u32,
            variable: &DomainId,
            value: i32,
        ) -> Result<ModEvent, EmptyDomain> {
            AssignOrExclude.commit(context, alternative, variable, value)
        }

        fn notice(&self) -> bool {
            self.notices
        }

        fn copy(&self, _context: &mut CopyContext) -> Self {
            self.counted_copy()
        }

        fn dispose(&mut self) {
            self.counted_dispose();
        }
    }

    fn notices<Vsc: ValueSelectCommit<DomainId>>(value_select_commit: &Vsc) -> bool {
        value_select_commit.notice()
    }

    type PreferredBrancher = ViewValueBrancher<
        DomainId,
        InputOrder,
        SelectCommit<DomainId, InDomainPreferred<DomainId>, AssignOrExclude>,
    >;

    #[test]
    fn either_half_makes_the_composition_notice() {
        assert!(!notices(&SelectCommit::new(InDomainMin, AssignOrExclude)));
        assert!(!notices(&SelectCommit::new(
            Counting::new(false),
            Counting::new(false)
        )));
        assert!(notices(&SelectCommit::new(
            Counting::new(true),
            AssignOrExclude
        )));
        assert!(notices(&SelectCommit::new(
            InDomainMin,
            Counting::new(true)
        )));
    }

    #[test]
    fn copy_and_dispose_reach_both_halves() {
        let selection = Counting::new(true);
        let commit = Counting::new(false);
        let value_select_commit: SelectCommit<DomainId, _, _> =
            SelectCommit::new(selection.clone(), commit.clone());

        let mut copy = value_select_commit.copy(&mut CopyContext::new(false));
        assert_eq!((1, 1), (selection.copies(), commit.copies()));

        copy.dispose();
        assert_eq!((1, 1), (selection.disposals(), commit.disposals()));
    }

    #[test]
    fn a_noticing_brancher_is_disposed_once_by_every_space() {
        let commit = Counting::new(true);
        {
            let mut space = Space::new();
            let x = space.new_integer_variable(0, 3).unwrap();
            let _ = space
                .add_brancher(
                    ViewValueBrancher::new(
                        vec![x],
                        InputOrder,
                        SelectCommit::new(InDomainMin, commit.clone()),
                    )
                    .unwrap(),
                )
                .unwrap();

            let copy = space.copy(false);
            assert_eq!(1, commit.copies());

            drop(copy);
            assert_eq!(1, commit.disposals());

            let _ = space.status();
            let choice = space.choice().unwrap();
            space.commit(&choice, 0).unwrap();
            assert_eq!(1, commit.disposals());
        }

        assert_eq!(2, commit.disposals());
    }

    #[test]
    fn a_brancher_which_does_not_notice_is_neither_told_about_copies_nor_disposed() {
        let selection = Counting::new(false);
        let commit = Counting::new(false);
        {
            let mut space = Space::new();
            let x = space.new_integer_variable(0, 3).unwrap();
            let _ = space
                .add_brancher(
                    ViewValueBrancher::new(
                        vec![x],
                        InputOrder,
                        SelectCommit::new(selection.clone(), commit.clone()),
                    )
                    .unwrap(),
                )
                .unwrap();

            drop(space.copy(false));
            drop(space.copy(true));
        }

        assert_eq!((0, 0), (selection.copies(), commit.copies()));
        assert_eq!((0, 0), (selection.disposals(), commit.disposals()));
    }

    #[test]
    fn preferred_values_follow_the_copy_mode_of_the_space() {
        let mut space = Space::new();
        let x = space.new_integer_variable(0, 5).unwrap();
        let y = space.new_integer_variable(0, 5).unwrap();

        let mut preferred = HashMap::default();
        let _ = preferred.insert(x, 4);
        let _ = preferred.insert(y, 2);
        let data = SharedData::new(preferred);

        let id = space
            .add_brancher(
                ViewValueBrancher::new(
                    vec![x, y],
                    InputOrder,
                    SelectCommit::new(InDomainPreferred::new(data.clone()), AssignOrExclude),
                )
                .unwrap(),
            )
            .unwrap();
        let preferred_of = |space: &Space| {
            space
                .get_brancher::<PreferredBrancher>(id)
                .unwrap()
                .value_select_commit()
                .selection()
                .preferred()
                .clone()
        };

        let shared = space.copy(true);
        assert!(preferred_of(&shared).ptr_eq(&data));

        let mut deep = space.copy(false);
        let deep_preferred = preferred_of(&deep);
        assert!(!deep_preferred.ptr_eq(&data));
        assert_eq!(*data, *deep_preferred);

        // The duplicate still drives the search: the preferred value of `x` is assigned first.
        let _ = deep.status();
        let choice = deep.choice().unwrap();
        deep.commit(&choice, 0).unwrap();
        assert_eq!(Some(4), deep.fixed_value(&x));
    }
}
