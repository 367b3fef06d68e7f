use super::row_action::{RowAction, RowActionState};
use super::selection::RowSelection;
use leptos::prelude::*;
use std::fmt::Debug;
use std::sync::Arc;

/// Props handed to a dialog that acts on one record
pub struct SingleItemDialogProps<T> {
    pub open: Signal<bool>,
    pub on_open_change: Callback<bool>,
    pub on_success: Option<Callback<()>>,
    pub show_trigger: bool,
    pub data: Option<T>,
}

/// Props handed to a dialog that acts on a list of records
pub struct MultiItemDialogProps<T> {
    pub open: Signal<bool>,
    pub on_open_change: Callback<bool>,
    pub on_success: Option<Callback<()>>,
    pub show_trigger: bool,
    pub data: Vec<T>,
}

pub type SingleDialogFn<T> = Arc<dyn Fn(SingleItemDialogProps<T>) -> AnyView + Send + Sync>;
pub type MultiDialogFn<T> = Arc<dyn Fn(MultiItemDialogProps<T>) -> AnyView + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionDataType {
    Single,
    Multi,
}

/// Dialog registered for one action variant. The arity decides the shape of
/// the data the dialog receives.
pub enum ActionConfig<T> {
    Single {
        component: SingleDialogFn<T>,
        should_deselect_on_success: bool,
    },
    Multi {
        component: MultiDialogFn<T>,
        should_deselect_on_success: bool,
    },
}

impl<T> Clone for ActionConfig<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Single {
                component,
                should_deselect_on_success,
            } => Self::Single {
                component: Arc::clone(component),
                should_deselect_on_success: *should_deselect_on_success,
            },
            Self::Multi {
                component,
                should_deselect_on_success,
            } => Self::Multi {
                component: Arc::clone(component),
                should_deselect_on_success: *should_deselect_on_success,
            },
        }
    }
}

impl<T> ActionConfig<T> {
    pub fn single<F>(component: F) -> Self
    where
        F: Fn(SingleItemDialogProps<T>) -> AnyView + Send + Sync + 'static,
    {
        Self::Single {
            component: Arc::new(component),
            should_deselect_on_success: true,
        }
    }

    pub fn multi<F>(component: F) -> Self
    where
        F: Fn(MultiItemDialogProps<T>) -> AnyView + Send + Sync + 'static,
    {
        Self::Multi {
            component: Arc::new(component),
            should_deselect_on_success: true,
        }
    }

    pub fn deselect_on_success(mut self, value: bool) -> Self {
        match &mut self {
            Self::Single {
                should_deselect_on_success,
                ..
            }
            | Self::Multi {
                should_deselect_on_success,
                ..
            } => *should_deselect_on_success = value,
        }
        self
    }

    pub fn data_type(&self) -> ActionDataType {
        match self {
            Self::Single { .. } => ActionDataType::Single,
            Self::Multi { .. } => ActionDataType::Multi,
        }
    }

    pub fn should_deselect_on_success(&self) -> bool {
        match self {
            Self::Single {
                should_deselect_on_success,
                ..
            }
            | Self::Multi {
                should_deselect_on_success,
                ..
            } => *should_deselect_on_success,
        }
    }
}

/// Dialog to mount, with the data already shaped for its arity
pub enum ResolvedDialog<T> {
    Single {
        component: SingleDialogFn<T>,
        data: Option<T>,
    },
    Multi {
        component: MultiDialogFn<T>,
        data: Vec<T>,
    },
}

/// Callbacks the dispatcher wires into every dialog it mounts
#[derive(Clone, Copy)]
pub struct DialogCallbacks {
    pub on_open_change: Callback<bool>,
    pub on_success: Callback<()>,
}

impl DialogCallbacks {
    /// Closing clears the row action. Success also deselects the row when
    /// the action is configured to, then runs `on_action_success`.
    pub fn for_table<T, A>(
        row_actions: RowActionState<T, A>,
        selection: RowSelection,
        registry: StoredValue<ActionRegistry<T, A>>,
        on_action_success: Option<Callback<()>>,
    ) -> Self
    where
        T: Clone + Send + Sync + 'static,
        A: Copy + PartialEq + Debug + Send + Sync + 'static,
    {
        Self {
            on_open_change: Callback::new(move |open: bool| {
                if !open {
                    row_actions.clear();
                }
            }),
            on_success: Callback::new(move |_| {
                // The dialog may have closed itself already; `last` survives that
                if let Some(action) = row_actions.last() {
                    let deselect = registry.with_value(|r| r.row_to_deselect(&action));
                    if let Some(id) = deselect {
                        selection.deselect(&id);
                    }
                }
                row_actions.clear();
                if let Some(cb) = on_action_success {
                    cb.run(());
                }
            }),
        }
    }
}

impl<T: Send + Sync + 'static> ResolvedDialog<T> {
    pub fn data_type(&self) -> ActionDataType {
        match self {
            Self::Single { .. } => ActionDataType::Single,
            Self::Multi { .. } => ActionDataType::Multi,
        }
    }

    /// Mount the dialog already open and without its own trigger
    pub fn render(self, callbacks: DialogCallbacks) -> AnyView {
        let open = Signal::derive(|| true);
        match self {
            Self::Single { component, data } => component(SingleItemDialogProps {
                open,
                on_open_change: callbacks.on_open_change,
                on_success: Some(callbacks.on_success),
                show_trigger: false,
                data,
            }),
            Self::Multi { component, data } => component(MultiItemDialogProps {
                open,
                on_open_change: callbacks.on_open_change,
                on_success: Some(callbacks.on_success),
                show_trigger: false,
                data,
            }),
        }
    }
}

/// Variant to dialog mapping of one table. Variants without an entry are
/// allowed and never open anything.
pub struct ActionRegistry<T, A> {
    entries: Vec<(A, ActionConfig<T>)>,
}

impl<T, A> Clone for ActionRegistry<T, A>
where
    A: Copy,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.iter().map(|(v, c)| (*v, c.clone())).collect(),
        }
    }
}

impl<T, A> Default for ActionRegistry<T, A> {
    fn default() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T, A> ActionRegistry<T, A>
where
    T: Clone,
    A: Copy + PartialEq + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `config` for `variant`, replacing an earlier entry
    pub fn with(mut self, variant: A, config: ActionConfig<T>) -> Self {
        self.entries.retain(|(v, _)| *v != variant);
        self.entries.push((variant, config));
        self
    }

    pub fn get(&self, variant: A) -> Option<&ActionConfig<T>> {
        self.entries
            .iter()
            .find(|(v, _)| *v == variant)
            .map(|(_, c)| c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Dialog to mount for the current row action, if any
    pub fn resolve(&self, current: Option<&RowAction<T, A>>) -> Option<ResolvedDialog<T>> {
        let action = current?;
        let Some(config) = self.get(action.variant) else {
            log::debug!("no dialog registered for {:?}", action.variant);
            return None;
        };
        let resolved = match config {
            ActionConfig::Single { component, .. } => ResolvedDialog::Single {
                component: Arc::clone(component),
                data: action.original.clone(),
            },
            ActionConfig::Multi { component, .. } => ResolvedDialog::Multi {
                component: Arc::clone(component),
                data: action.original.iter().cloned().collect(),
            },
        };
        Some(resolved)
    }

    /// Row to deselect once the dialog for `action` reported success
    pub fn row_to_deselect(&self, action: &RowAction<T, A>) -> Option<String> {
        let config = self.get(action.variant)?;
        if config.should_deselect_on_success() {
            action.row_id.clone()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
    }

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Variant {
        Update,
        Delete,
        Archive,
    }

    fn row(id: &str) -> Row {
        Row { id: id.to_string() }
    }

    fn action(variant: Variant, original: Option<Row>) -> RowAction<Row, Variant> {
        RowAction {
            row_id: original.as_ref().map(|r| r.id.clone()),
            original,
            variant,
        }
    }

    fn registry() -> ActionRegistry<Row, Variant> {
        ActionRegistry::new()
            .with(Variant::Update, ActionConfig::single(|_| ().into_any()))
            .with(Variant::Delete, ActionConfig::multi(|_| ().into_any()))
    }

    #[test]
    fn test_unregistered_variant_renders_nothing() {
        let registry = registry();
        assert!(registry.resolve(None).is_none());
        assert!(registry
            .resolve(Some(&action(Variant::Archive, Some(row("t1")))))
            .is_none());
        assert!(ActionRegistry::<Row, Variant>::new()
            .resolve(Some(&action(Variant::Update, Some(row("t1")))))
            .is_none());
    }

    #[test]
    fn test_single_arity_receives_record_not_list() {
        let registry = registry();
        let Some(ResolvedDialog::Single { data, .. }) =
            registry.resolve(Some(&action(Variant::Update, Some(row("t1")))))
        else {
            panic!("update resolves to a single-record dialog");
        };
        assert_eq!(data, Some(row("t1")));

        let Some(ResolvedDialog::Single { data, .. }) =
            registry.resolve(Some(&action(Variant::Update, None)))
        else {
            panic!("update resolves to a single-record dialog");
        };
        assert_eq!(data, None);
    }

    #[test]
    fn test_multi_arity_wraps_record() {
        let registry = registry();
        let Some(ResolvedDialog::Multi { data, .. }) =
            registry.resolve(Some(&action(Variant::Delete, Some(row("t2")))))
        else {
            panic!("delete resolves to a list dialog");
        };
        assert_eq!(data, vec![row("t2")]);

        let resolved = registry.resolve(Some(&action(Variant::Delete, None)));
        assert_eq!(resolved.as_ref().map(ResolvedDialog::data_type), Some(ActionDataType::Multi));
        let Some(ResolvedDialog::Multi { data, .. }) = resolved else {
            panic!("delete resolves to a list dialog");
        };
        assert!(data.is_empty());
    }

    #[test]
    fn test_success_deselects_only_when_configured() {
        let registry = registry().with(
            Variant::Archive,
            ActionConfig::single(|_| ().into_any()).deselect_on_success(false),
        );
        assert_eq!(
            registry.row_to_deselect(&action(Variant::Delete, Some(row("t3")))),
            Some("t3".to_string())
        );
        assert_eq!(
            registry.row_to_deselect(&action(Variant::Archive, Some(row("t3")))),
            None
        );
        assert_eq!(registry.row_to_deselect(&action(Variant::Delete, None)), None);
    }

    #[test]
    fn test_helpers_default_to_deselect() {
        let config: ActionConfig<Row> = ActionConfig::multi(|_| ().into_any());
        assert_eq!(config.data_type(), ActionDataType::Multi);
        assert!(config.should_deselect_on_success());

        let registry = registry().with(
            Variant::Update,
            ActionConfig::multi(|_| ().into_any()),
        );
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get(Variant::Update).map(ActionConfig::data_type),
            Some(ActionDataType::Multi)
        );
    }

    struct Dispatcher {
        row_actions: RowActionState<Row, Variant>,
        selection: RowSelection,
        successes: RwSignal<u32>,
        callbacks: DialogCallbacks,
    }

    fn dispatcher() -> Dispatcher {
        let row_actions = RowActionState::new();
        let selection = RowSelection::new();
        let successes = RwSignal::new(0u32);
        let registry = registry().with(
            Variant::Archive,
            ActionConfig::single(|_| ().into_any()).deselect_on_success(false),
        );
        let callbacks = DialogCallbacks::for_table(
            row_actions,
            selection,
            StoredValue::new(registry),
            Some(Callback::new(move |_| successes.update(|n| *n += 1))),
        );
        for id in ["t1", "t2"] {
            selection.toggle(id.to_string(), true);
        }
        Dispatcher {
            row_actions,
            selection,
            successes,
            callbacks,
        }
    }

    #[test]
    fn test_success_after_close_deselects_the_row() {
        let owner = Owner::new();
        owner.set();
        let d = dispatcher();

        d.row_actions.set("t1", row("t1"), Variant::Update);
        // Sheets close before they report success
        d.callbacks.on_open_change.run(false);
        assert!(d.row_actions.get_untracked().is_none());
        assert_eq!(d.row_actions.last().map(|a| a.key()), Some((Variant::Update, Some("t1".to_string()))));

        d.callbacks.on_success.run(());
        assert!(!d.selection.is_selected("t1"));
        assert!(d.selection.is_selected("t2"));
        assert_eq!(d.successes.get_untracked(), 1);
    }

    #[test]
    fn test_success_keeps_selection_when_not_configured() {
        let owner = Owner::new();
        owner.set();
        let d = dispatcher();

        d.row_actions.set("t2", row("t2"), Variant::Archive);
        d.callbacks.on_success.run(());
        assert!(d.selection.is_selected("t2"));
        assert!(d.row_actions.get_untracked().is_none());
        assert_eq!(d.successes.get_untracked(), 1);
    }

    #[test]
    fn test_cancel_clears_without_deselecting() {
        let owner = Owner::new();
        owner.set();
        let d = dispatcher();

        d.row_actions.set("t1", row("t1"), Variant::Delete);
        d.callbacks.on_open_change.run(true);
        assert!(d.row_actions.get_untracked().is_some());

        d.callbacks.on_open_change.run(false);
        assert!(d.row_actions.get_untracked().is_none());
        assert!(d.selection.is_selected("t1"));
        assert_eq!(d.selection.count(), 2);
        assert_eq!(d.successes.get_untracked(), 0);
    }

    #[test]
    fn test_new_action_replaces_the_current_one() {
        let owner = Owner::new();
        owner.set();
        let d = dispatcher();

        d.row_actions.set("t1", row("t1"), Variant::Update);
        let first = d.row_actions.get_untracked().map(|a| a.key());
        d.row_actions.set("t1", row("t1"), Variant::Delete);
        let second = d.row_actions.get_untracked().map(|a| a.key());

        assert_eq!(first, Some((Variant::Update, Some("t1".to_string()))));
        assert_eq!(second, Some((Variant::Delete, Some("t1".to_string()))));
        assert_ne!(first, second);
    }
}
