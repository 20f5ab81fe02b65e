use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::prelude::*;

/// Default lifetime of a toast before it auto-dismisses.
const DEFAULT_DURATION_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq)]
pub enum ToastType {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastType {
    fn classes(&self) -> &'static str {
        match self {
            ToastType::Success => "bg-emerald-600 border-emerald-700",
            ToastType::Error => "bg-red-600 border-red-700",
            ToastType::Warning => "bg-amber-500 border-amber-600",
            ToastType::Info => "bg-sky-600 border-sky-700",
        }
    }

    fn icon(&self) -> &'static str {
        match self {
            ToastType::Success => "✓",
            ToastType::Error => "✕",
            ToastType::Warning => "⚠",
            ToastType::Info => "ℹ",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub toast_type: ToastType,
    /// Milliseconds before auto-dismiss; `None` means manual dismiss only.
    pub duration: Option<u32>,
}

impl Toast {
    pub fn new(message: String, toast_type: ToastType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message,
            toast_type,
            duration: Some(DEFAULT_DURATION_MS),
        }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Success)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Warning)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastType::Info)
    }

    pub fn with_duration(mut self, duration: u32) -> Self {
        self.duration = Some(duration);
        self
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ToastContext {
    pub toasts: Vec<Toast>,
    pub add_toast: Callback<Toast>,
    pub remove_toast: Callback<Uuid>,
}

#[derive(Properties, Clone, PartialEq)]
pub struct ToastProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let toasts = use_state(Vec::new);

    let add_toast = {
        let toasts = toasts.clone();
        Callback::from(move |toast: Toast| {
            let toast_id = toast.id;
            let duration = toast.duration;

            toasts.set({
                let mut current = (*toasts).clone();
                current.push(toast);
                current
            });

            if let Some(duration_ms) = duration {
                let toasts = toasts.clone();
                Timeout::new(duration_ms, move || {
                    toasts.set({
                        let mut current = (*toasts).clone();
                        current.retain(|t| t.id != toast_id);
                        current
                    });
                })
                .forget();
            }
        })
    };

    let remove_toast = {
        let toasts = toasts.clone();
        Callback::from(move |id: Uuid| {
            toasts.set({
                let mut current = (*toasts).clone();
                current.retain(|t| t.id != id);
                current
            });
        })
    };

    let context = ToastContext {
        toasts: (*toasts).clone(),
        add_toast,
        remove_toast,
    };

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <ToastList />
        </ContextProvider<ToastContext>>
    }
}

#[function_component(ToastList)]
fn toast_list() -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    html! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {toast_context.toasts.iter().map(|toast| {
                html! {
                    <ToastItem key={toast.id.to_string()} toast={toast.clone()} />
                }
            }).collect::<Html>()}
        </div>
    }
}

#[derive(Properties, Clone, PartialEq)]
struct ToastItemProps {
    toast: Toast,
}

#[function_component(ToastItem)]
fn toast_item(props: &ToastItemProps) -> Html {
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");

    let on_close = {
        let toast_context = toast_context.clone();
        let toast_id = props.toast.id;
        Callback::from(move |_: MouseEvent| {
            toast_context.remove_toast.emit(toast_id);
        })
    };

    html! {
        <div class={classes!(
            "flex", "items-center", "p-4", "rounded-lg", "shadow-lg", "border-l-4",
            "text-white", "min-w-80", "max-w-md",
            props.toast.toast_type.classes()
        )}>
            <span class="text-lg font-bold mr-3">{props.toast.toast_type.icon()}</span>
            <p class="flex-1 text-sm font-medium">{&props.toast.message}</p>
            <button
                onclick={on_close}
                class="ml-3 text-white hover:text-gray-200 focus:outline-none"
            >
                <span class="text-lg">{"×"}</span>
            </button>
        </div>
    }
}
