use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Older notices are dropped beyond this
const MAX_VISIBLE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl NoticeKind {
    fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice notice--success",
            NoticeKind::Error => "notice notice--error",
            NoticeKind::Info => "notice notice--info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeQueue {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeQueue {
    pub fn push(&mut self, kind: NoticeKind, message: String) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.notices.push(Notice { id, kind, message });
        if self.notices.len() > MAX_VISIBLE {
            let excess = self.notices.len() - MAX_VISIBLE;
            self.notices.drain(..excess);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.notices.retain(|n| n.id != id);
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }
}

/// Transient success / error messages shown over every page
#[derive(Clone, Copy)]
pub struct NoticeService {
    queue: RwSignal<NoticeQueue>,
    ttl_ms: u32,
}

impl NoticeService {
    pub fn new(ttl_ms: u32) -> Self {
        Self {
            queue: RwSignal::new(NoticeQueue::default()),
            ttl_ms,
        }
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(NoticeKind::Success, message.into());
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(NoticeKind::Error, message.into());
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(NoticeKind::Info, message.into());
    }

    pub fn dismiss(&self, id: u64) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn push(&self, kind: NoticeKind, message: String) {
        let mut id = 0;
        self.queue.update(|q| id = q.push(kind, message));
        let this = *self;
        spawn_local(async move {
            TimeoutFuture::new(this.ttl_ms).await;
            this.dismiss(id);
        });
    }
}

pub fn use_notices() -> NoticeService {
    use_context::<NoticeService>().expect("NoticeService not found in context")
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let notices = use_notices();

    view! {
        <div class="notice-stack">
            <For
                each=move || notices.queue.with(|q| q.notices().to_vec())
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status" on:click=move |_| notices.dismiss(id)>
                            {notice.message}
                        </div>
                    }
                }
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_keeps_latest() {
        let mut queue = NoticeQueue::default();
        for i in 0..7 {
            queue.push(NoticeKind::Info, format!("n{}", i));
        }
        assert_eq!(queue.notices().len(), MAX_VISIBLE);
        assert_eq!(queue.notices()[0].message, "n2");
    }

    #[test]
    fn test_dismiss() {
        let mut queue = NoticeQueue::default();
        let a = queue.push(NoticeKind::Success, "a".into());
        queue.push(NoticeKind::Error, "b".into());
        queue.dismiss(a);
        assert_eq!(queue.notices().len(), 1);
        assert_eq!(queue.notices()[0].kind, NoticeKind::Error);
    }
}
