//! Runs network futures off the UI thread.
//!
//! Native: a shared multi-thread tokio runtime. WASM: the browser event loop via
//! `spawn_local`. Results always travel back to the UI over `std::sync::mpsc`.

use std::future::Future;

#[cfg(not(target_arch = "wasm32"))]
use {
    anyhow::{Context, Result},
    std::sync::Arc,
    tokio::runtime::{Handle, Runtime},
};

/// `Send` on native, nothing on wasm32 where futures are single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait MaybeSend: Send {}
#[cfg(not(target_arch = "wasm32"))]
impl<T: Send> MaybeSend for T {}

#[cfg(target_arch = "wasm32")]
pub trait MaybeSend {}
#[cfg(target_arch = "wasm32")]
impl<T> MaybeSend for T {}

#[derive(Clone)]
pub struct Spawner {
    #[cfg(not(target_arch = "wasm32"))]
    handle: Handle,
    // Keeps an owned runtime alive for as long as any clone exists.
    #[cfg(not(target_arch = "wasm32"))]
    _runtime: Option<Arc<Runtime>>,
}

#[cfg(not(target_arch = "wasm32"))]
impl Spawner {
    /// Builds a dedicated runtime for the GUI process.
    pub fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("coin-forecast-io")
            .enable_all()
            .build()
            .context("Failed to create tokio runtime")?;
        Ok(Self {
            handle: runtime.handle().clone(),
            _runtime: Some(Arc::new(runtime)),
        })
    }

    /// Borrow an existing runtime (e.g. inside `#[tokio::test]`).
    pub fn from_handle(handle: Handle) -> Self {
        Self {
            handle,
            _runtime: None,
        }
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + MaybeSend + 'static,
    {
        self.handle.spawn(fut);
    }
}

#[cfg(target_arch = "wasm32")]
impl Spawner {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {})
    }

    pub fn spawn<F>(&self, fut: F)
    where
        F: Future<Output = ()> + MaybeSend + 'static,
    {
        wasm_bindgen_futures::spawn_local(fut);
    }
}
