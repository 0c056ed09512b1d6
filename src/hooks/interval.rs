use std::time::Duration;

use dioxus::prelude::*;

/// Runs `tick` every `period` for as long as the calling component stays
/// mounted. The backing task is armed once per mount and canceled on unmount.
pub fn use_interval(period: Duration, mut tick: impl FnMut() + 'static) -> UseInterval {
    let mut inner = use_signal(|| InnerUseInterval { task: None });

    use_hook(move || {
        inner.write().task = Some(spawn(async move {
            loop {
                gloo_timers::future::sleep(period).await;
                tick();
            }
        }));
    });

    UseInterval { inner }
}

pub struct UseInterval {
    inner: Signal<InnerUseInterval>,
}

impl Clone for UseInterval {
    fn clone(&self) -> Self {
        *self
    }
}

impl Copy for UseInterval {}

impl UseInterval {
    pub fn cancel(&mut self) {
        if let Some(task) = self.inner.write().task.take() {
            task.cancel();
        }
    }
}

struct InnerUseInterval {
    task: Option<Task>,
}

impl Drop for InnerUseInterval {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.cancel();
        }
    }
}
