// EventLoopBridge - coordinates the tokio runtime with the Slint event loop
//
// Two event loops run in this application: Slint's single-threaded GUI loop
// and tokio's worker pool for subprocess execution. The bridge lets worker
// tasks update the UI safely (marshalled onto the GUI thread) and lets GUI
// callbacks hand work to tokio without blocking the window.

use slint::{ComponentHandle, Weak};
use std::future::Future;

/// Bridge between the tokio runtime and the Slint event loop.
pub struct EventLoopBridge<T: ComponentHandle> {
    ui_weak: Weak<T>,
    tokio_handle: tokio::runtime::Handle,
}

impl<T: ComponentHandle + 'static> EventLoopBridge<T> {
    pub fn new(ui: &T, tokio_handle: tokio::runtime::Handle) -> Self {
        Self {
            ui_weak: ui.as_weak(),
            tokio_handle,
        }
    }

    /// Queue a UI update from any thread.
    ///
    /// The closure runs on the GUI thread during the next event loop
    /// iteration; if the window is already gone the update is dropped.
    pub fn update_ui<F>(&self, update: F)
    where
        F: FnOnce(&T) + Send + 'static,
    {
        let result = self.ui_weak.upgrade_in_event_loop(move |ui| update(&ui));
        if let Err(e) = result {
            tracing::warn!("Failed to queue UI update, event loop stopped: {e:?}");
        }
    }

    /// Spawn an async task on the tokio runtime from a Slint callback.
    pub fn spawn_async<F, Fut>(&self, future_factory: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.tokio_handle.spawn(async move {
            future_factory().await;
        });
    }

    /// A cloneable handle for capturing in multiple callbacks.
    pub fn clone_handle(&self) -> EventLoopBridgeHandle<T> {
        EventLoopBridgeHandle {
            ui_weak: self.ui_weak.clone(),
            tokio_handle: self.tokio_handle.clone(),
        }
    }
}

/// Lightweight cloneable handle onto the bridge.
pub struct EventLoopBridgeHandle<T: ComponentHandle> {
    ui_weak: Weak<T>,
    tokio_handle: tokio::runtime::Handle,
}

// Manual Clone implementation to avoid requiring T: Clone
impl<T: ComponentHandle> Clone for EventLoopBridgeHandle<T> {
    fn clone(&self) -> Self {
        Self {
            ui_weak: self.ui_weak.clone(),
            tokio_handle: self.tokio_handle.clone(),
        }
    }
}

impl<T: ComponentHandle + 'static> EventLoopBridgeHandle<T> {
    /// See [`EventLoopBridge::update_ui`].
    pub fn update_ui<F>(&self, update: F)
    where
        F: FnOnce(&T) + Send + 'static,
    {
        let result = self.ui_weak.upgrade_in_event_loop(move |ui| update(&ui));
        if let Err(e) = result {
            tracing::warn!("Failed to queue UI update, event loop stopped: {e:?}");
        }
    }

    /// See [`EventLoopBridge::spawn_async`].
    pub fn spawn_async<F, Fut>(&self, future_factory: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.tokio_handle.spawn(async move {
            future_factory().await;
        });
    }

    /// Weak reference to the UI component.
    pub fn ui_weak(&self) -> &Weak<T> {
        &self.ui_weak
    }
}
