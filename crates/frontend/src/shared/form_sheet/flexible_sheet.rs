//! Slide-over panel with header, scrollable body and an action footer

use leptos::prelude::*;
use thaw::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetSide {
    Top,
    #[default]
    Right,
    Bottom,
    Left,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SheetSize {
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
    Full,
}

impl SheetSide {
    fn position(self) -> DrawerPosition {
        match self {
            SheetSide::Top => DrawerPosition::Top,
            SheetSide::Right => DrawerPosition::Right,
            SheetSide::Bottom => DrawerPosition::Bottom,
            SheetSide::Left => DrawerPosition::Left,
        }
    }
}

impl SheetSize {
    fn drawer_size(self) -> DrawerSize {
        match self {
            SheetSize::Sm => DrawerSize::Small,
            SheetSize::Md => DrawerSize::Medium,
            SheetSize::Lg | SheetSize::Xl => DrawerSize::Large,
            SheetSize::Full => DrawerSize::Full,
        }
    }

    fn class(self) -> &'static str {
        match self {
            SheetSize::Sm => "flexible-sheet flexible-sheet--sm",
            SheetSize::Md => "flexible-sheet flexible-sheet--md",
            SheetSize::Lg => "flexible-sheet flexible-sheet--lg",
            SheetSize::Xl => "flexible-sheet flexible-sheet--xl",
            SheetSize::Full => "flexible-sheet flexible-sheet--full",
        }
    }
}

/// Footer button
#[derive(Clone)]
pub struct SheetAction {
    pub label: String,
    pub on_click: Callback<()>,
    pub appearance: ButtonAppearance,
    pub disabled: Signal<bool>,
    pub loading: Signal<bool>,
}

impl SheetAction {
    pub fn new(label: impl Into<String>, on_click: Callback<()>) -> Self {
        Self {
            label: label.into(),
            on_click,
            appearance: ButtonAppearance::Secondary,
            disabled: Signal::from(false),
            loading: Signal::from(false),
        }
    }

    pub fn primary(mut self) -> Self {
        self.appearance = ButtonAppearance::Primary;
        self
    }

    pub fn disabled(mut self, disabled: Signal<bool>) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: Signal<bool>) -> Self {
        self.loading = loading;
        self
    }
}

#[component]
pub fn FlexibleSheet(
    #[prop(into)]
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    #[prop(optional)]
    side: SheetSide,
    #[prop(optional)]
    size: SheetSize,
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    #[prop(optional)]
    actions: Vec<SheetAction>,
    /// Overlay click and Escape close the sheet
    #[prop(optional, default = true)]
    dismissible: bool,
    /// Optional element that opens the sheet
    #[prop(optional_no_strip)]
    trigger: Option<ViewFn>,
    children: Children,
) -> impl IntoView {
    let surface_open = RwSignal::new(open.get_untracked());

    Effect::new(move |_| {
        let value = open.get();
        if surface_open.get_untracked() != value {
            surface_open.set(value);
        }
    });

    // Closed from the overlay or Escape
    Effect::new(move |_| {
        let value = surface_open.get();
        if !value && open.get_untracked() {
            on_open_change.run(false);
        }
    });

    let actions = actions
        .into_iter()
        .map(|action| {
            let SheetAction {
                label,
                on_click,
                appearance,
                disabled,
                loading,
            } = action;
            view! {
                <Button
                    appearance=appearance
                    disabled=Signal::derive(move || disabled.get() || loading.get())
                    on_click=move |_| on_click.run(())
                >
                    {move || if loading.get() { "Loading...".to_string() } else { label.clone() }}
                </Button>
            }
        })
        .collect_view();

    view! {
        {trigger.map(|t| view! {
            <span class="flexible-sheet__trigger" on:click=move |_| on_open_change.run(true)>
                {t.run()}
            </span>
        })}
        <OverlayDrawer
            open=surface_open
            position=side.position()
            size=size.drawer_size()
            mask_closeable=dismissible
            close_on_esc=dismissible
            class=size.class()
        >
            <DrawerHeader>
                <DrawerHeaderTitle>{move || title.get()}</DrawerHeaderTitle>
                {move || description.get().map(|d| view! {
                    <p class="flexible-sheet__description">{d}</p>
                })}
            </DrawerHeader>
            <DrawerBody>
                <div class="flexible-sheet__content">{children()}</div>
                <div class="flexible-sheet__footer">{actions}</div>
            </DrawerBody>
        </OverlayDrawer>
    }
}
