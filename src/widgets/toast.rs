//! Toast notifications
//!
//! A shared queue of short-lived notices. Toasts expire a fixed time after
//! they were added; expiry is evaluated lazily whenever the queue is read.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn label(&self) -> &'static str {
        match self {
            ToastKind::Info => "info",
            ToastKind::Success => "ok",
            ToastKind::Warning => "warn",
            ToastKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
    added_at: Instant,
}

impl Toast {
    pub fn render(&self) -> String {
        format!("[{}] {}", self.kind.label(), self.message)
    }
}

#[derive(Debug, Default)]
struct ToastState {
    next_id: u64,
    toasts: Vec<Toast>,
}

/// Shared toast queue, cheap to clone
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<ToastState>>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ToastState::default())),
            ttl,
        }
    }

    fn lock(&self) -> MutexGuard<'_, ToastState> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn add(&self, message: impl Into<String>, kind: ToastKind) -> u64 {
        self.add_at(message, kind, Instant::now())
    }

    pub fn add_at(&self, message: impl Into<String>, kind: ToastKind, now: Instant) -> u64 {
        let mut state = self.lock();
        state.next_id += 1;
        let id = state.next_id;
        state.toasts.push(Toast {
            id,
            kind,
            message: message.into(),
            added_at: now,
        });
        id
    }

    pub fn info(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Info)
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Success)
    }

    pub fn warning(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Warning)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.add(message, ToastKind::Error)
    }

    pub fn dismiss(&self, id: u64) {
        self.lock().toasts.retain(|toast| toast.id != id);
    }

    /// Toasts still visible at `now`, oldest first; expired ones are dropped
    pub fn active_at(&self, now: Instant) -> Vec<Toast> {
        let ttl = self.ttl;
        let mut state = self.lock();
        state
            .toasts
            .retain(|toast| now.saturating_duration_since(toast.added_at) < ttl);
        state.toasts.clone()
    }

    pub fn active(&self) -> Vec<Toast> {
        self.active_at(Instant::now())
    }

    /// Remove and return every queued toast, expired or not
    pub fn drain(&self) -> Vec<Toast> {
        std::mem::take(&mut self.lock().toasts)
    }
}
