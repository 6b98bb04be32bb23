use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use parking_lot::RwLock;

type Waker = Box<dyn Fn() + Send + Sync>;

/// "State changed" signal shared by the services and the rendering layer.
///
/// Every mutation of service state bumps the generation and calls the waker
/// before returning, so the next paint observes the change. A renderer keeps
/// the generation it last drew and asks [`RedrawSignal::take`] before painting.
#[derive(Clone, Default)]
pub struct RedrawSignal {
    inner: Arc<Inner>,
}

#[derive(Default)]
struct Inner {
    generation: AtomicU64,
    waker: RwLock<Option<Waker>>,
}

impl RedrawSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs the hook that asks the renderer for a new frame,
    /// e.g. `egui::Context::request_repaint`.
    pub fn set_waker(&self, waker: impl Fn() + Send + Sync + 'static) {
        *self.inner.waker.write() = Some(Box::new(waker));
    }

    pub fn request(&self) {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);

        if let Some(waker) = self.inner.waker.read().as_ref() {
            waker();
        }
    }

    pub fn generation(&self) -> u64 {
        self.inner.generation.load(Ordering::Acquire)
    }

    /// Returns `true` when a redraw was requested since `seen`, and moves `seen` forward.
    pub fn take(&self, seen: &mut u64) -> bool {
        let current = self.generation();
        let changed = current != *seen;
        *seen = current;
        changed
    }
}

impl std::fmt::Debug for RedrawSignal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedrawSignal")
            .field("generation", &self.generation())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::AtomicUsize;

    use super::*;

    #[test]
    fn take_reports_each_request_once() {
        let signal = RedrawSignal::new();
        let mut seen = signal.generation();

        assert!(!signal.take(&mut seen));

        signal.request();
        signal.request();
        assert!(signal.take(&mut seen));
        assert!(!signal.take(&mut seen));
    }

    #[test]
    fn waker_runs_synchronously() {
        let signal = RedrawSignal::new();
        let woken = Arc::new(AtomicUsize::new(0));

        let counter = woken.clone();
        signal.clone().set_waker(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        signal.request();
        assert_eq!(woken.load(Ordering::SeqCst), 1);
    }
}
