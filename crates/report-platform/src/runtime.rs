//! Browser event-loop adapters: timers and task spawning.

use async_trait::async_trait;
use futures::future::LocalFutureObj;
use futures::task::{LocalSpawn, SpawnError};
use gloo_timers::future::TimeoutFuture;

use report_core::ports::TimerPort;

/// `setTimeout`-backed sleep.
pub struct GlooTimer;

#[async_trait(?Send)]
impl TimerPort for GlooTimer {
    async fn sleep(&self, ms: u64) {
        TimeoutFuture::new(ms.min(u32::MAX as u64) as u32).await;
    }
}

/// Runs tasks on the page's microtask queue via `spawn_local`.
pub struct BrowserSpawner;

impl LocalSpawn for BrowserSpawner {
    fn spawn_local_obj(&self, future: LocalFutureObj<'static, ()>) -> Result<(), SpawnError> {
        wasm_bindgen_futures::spawn_local(future);
        Ok(())
    }
}
