//! Browser implementations of the session core's host traits.

use std::time::Duration;

use barberbook::{Executor, Navigator};
use futures::future::LocalBoxFuture;

/// Runs core tasks on the page's microtask queue.
pub struct BrowserExecutor;

impl Executor for BrowserExecutor {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        leptos::task::spawn_local(task);
    }

    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Full-page navigation through `window.location`.
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_reload(&self, route: &str) {
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.location().set_href(route) {
                    log::error!("navigation to {route} failed: {e:?}");
                }
            }
            None => log::error!("no window; cannot navigate to {route}"),
        }
    }
}
