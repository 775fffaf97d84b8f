use dioxus::prelude::*;
use dioxus::core::spawn_forever;
use std::collections::VecDeque;
use std::time::Duration;
use uuid::Uuid;

use crate::shared::logging::log_toast;

/// How long a toast stays visible
pub const TOAST_DURATION: Duration = Duration::from_secs(5);

/// Maximum number of toasts on screen; older ones are dropped first
pub const TOAST_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastVariant {
    Default,
    Destructive,
}

impl ToastVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToastVariant::Default => "default",
            ToastVariant::Destructive => "destructive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastSeverity {
    Success,
    Error,
    Warning,
    Info,
}

impl ToastSeverity {
    pub fn title(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "Success",
            ToastSeverity::Error => "Error",
            ToastSeverity::Warning => "Warning",
            ToastSeverity::Info => "Info",
        }
    }

    pub fn variant(&self) -> ToastVariant {
        match self {
            ToastSeverity::Error => ToastVariant::Destructive,
            _ => ToastVariant::Default,
        }
    }

    pub fn class_name(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "c-toast c-toast--success",
            ToastSeverity::Error => "c-toast c-toast--error",
            ToastSeverity::Warning => "c-toast c-toast--warning",
            ToastSeverity::Info => "c-toast c-toast--info",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastSeverity::Success => "✅",
            ToastSeverity::Error => "❌",
            ToastSeverity::Warning => "⚠️",
            ToastSeverity::Info => "ℹ️",
        }
    }
}

/// What the notification primitive accepts
#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
    pub class_name: String,
}

impl ToastOptions {
    /// Preset for a severity, with the message as description
    pub fn for_severity(severity: ToastSeverity, message: impl Into<String>) -> Self {
        Self {
            title: severity.title().to_string(),
            description: message.into(),
            variant: severity.variant(),
            class_name: severity.class_name().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: Uuid,
    pub options: ToastOptions,
}

/// Visible toasts, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
}

impl ToastQueue {
    pub fn push(&mut self, options: ToastOptions) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push_front(Toast { id, options });
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Returns false when the toast was already gone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

/// Handle to the toast queue shared through context
#[derive(Clone, Copy, PartialEq)]
pub struct Toaster {
    pub queue: Signal<ToastQueue>,
}

impl Toaster {
    /// Show a toast and schedule its dismissal.
    /// The timer runs in the root scope so it outlives the calling page.
    pub fn toast(&mut self, options: ToastOptions) -> Uuid {
        log_toast(&options.title, options.variant.as_str());
        let id = self.queue.write().push(options);

        let mut queue = self.queue;
        spawn_forever(async move {
            sleep(TOAST_DURATION).await;
            // Queue is gone if the layout unmounted first
            if let Ok(mut queue) = queue.try_write() {
                queue.dismiss(id);
            }
        });

        id
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.queue.write().dismiss(id);
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.toast(ToastOptions::for_severity(ToastSeverity::Success, message))
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        self.toast(ToastOptions::for_severity(ToastSeverity::Error, message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> Uuid {
        self.toast(ToastOptions::for_severity(ToastSeverity::Warning, message))
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.toast(ToastOptions::for_severity(ToastSeverity::Info, message))
    }
}

#[cfg(target_arch = "wasm32")]
async fn sleep(duration: Duration) {
    gloo_timers::future::sleep(duration).await;
}

#[cfg(not(target_arch = "wasm32"))]
async fn sleep(duration: Duration) {
    tokio::time::sleep(duration).await;
}

/// Create the toast queue and expose it to descendants. Call once, in the layout.
pub fn use_toast_provider() -> Toaster {
    use_context_provider(|| Toaster {
        queue: Signal::new(ToastQueue::default()),
    })
}

/// Toast handle provided by [`use_toast_provider`]
pub fn use_toast() -> Toaster {
    use_context::<Toaster>()
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod dom_tests {
    use super::*;
    use crate::shared::hooks::test_dom::run_for;
    use std::cell::RefCell;

    thread_local! {
        static TOASTER: RefCell<Option<Toaster>> = const { RefCell::new(None) };
        static SHOW_PAGE: RefCell<Option<Signal<bool>>> = const { RefCell::new(None) };
    }

    fn toaster() -> Toaster {
        TOASTER.with(|t| t.borrow().expect("layout not rendered"))
    }

    fn visible(dom: &VirtualDom) -> usize {
        dom.in_runtime(|| toaster().queue.peek().len())
    }

    /// Provider plus a page that raises a toast from its own task
    #[component]
    fn Layout() -> Element {
        let toaster = use_toast_provider();
        let show_page = use_signal(|| true);
        TOASTER.with(|t| *t.borrow_mut() = Some(toaster));
        SHOW_PAGE.with(|s| *s.borrow_mut() = Some(show_page));

        rsx! {
            if show_page() {
                Page {}
            }
        }
    }

    #[component]
    fn Page() -> Element {
        let mut toaster = use_toast();
        use_hook(|| {
            spawn(async move {
                toaster.success("Field saved");
            })
        });
        rsx! {}
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_dismissed_after_duration() {
        let mut dom = VirtualDom::new(Layout);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_secs(1)).await;
        assert_eq!(visible(&dom), 1);

        run_for(&mut dom, TOAST_DURATION).await;
        assert_eq!(visible(&dom), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_dismissed_after_raising_page_unmounts() {
        let mut dom = VirtualDom::new(Layout);
        dom.rebuild_in_place();

        run_for(&mut dom, Duration::from_secs(1)).await;
        assert_eq!(visible(&dom), 1);

        // Navigate away: the page and its tasks are dropped
        dom.in_runtime(|| {
            let mut show_page = SHOW_PAGE.with(|s| s.borrow().expect("layout not rendered"));
            show_page.set(false);
        });
        run_for(&mut dom, Duration::from_secs(20)).await;

        assert_eq!(visible(&dom), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_button_dismiss_removes_toast() {
        let mut dom = VirtualDom::new(Layout);
        dom.rebuild_in_place();
        run_for(&mut dom, Duration::from_secs(1)).await;

        let extra = dom.in_runtime(|| toaster().warning("Low feed stock"));
        assert_eq!(visible(&dom), 2);

        dom.in_runtime(|| toaster().dismiss(extra));
        assert_eq!(visible(&dom), 1);
        let remaining = dom.in_runtime(|| {
            toaster().queue.peek().iter().next().map(|t| t.options.description.clone())
        });
        assert_eq!(remaining.as_deref(), Some("Field saved"));
    }
}
