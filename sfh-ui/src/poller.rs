//! A periodic task that stops when its handle is dropped.

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::sleep;
use std::future::Future;
use std::time::Duration;

/// Runs `tick` right away and then once per `period` until dropped.
///
/// Keep the handle in a signal or a component's state: replacing it with
/// `None` or unmounting the owner cancels the loop.
pub struct Poller {
    task: Task,
}

impl Poller {
    pub fn start<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + 'static,
        Fut: Future<Output = ()> + 'static,
    {
        let task = spawn(async move {
            loop {
                tick().await;
                sleep(period).await;
            }
        });
        Self { task }
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        log::debug!("Stopping poller");
        self.task.cancel();
    }
}
