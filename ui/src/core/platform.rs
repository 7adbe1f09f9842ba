//! Platform detection and task spawning helpers.

use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Web,
    Desktop,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::Web
        } else {
            Self::Desktop
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::Desktop => "desktop",
        }
    }
}

/// Run a detached future on the browser event loop.
#[cfg(target_arch = "wasm32")]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    wasm_bindgen_futures::spawn_local(future);
}

/// Run a detached future on the ambient tokio runtime. Outside of one (plain
/// unit tests, early startup) a private current-thread runtime is used.
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn_future<F>(future: F)
where
    F: Future<Output = ()> + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(handle) => {
            handle.spawn(future);
        }
        Err(_) => {
            std::thread::spawn(move || {
                match tokio::runtime::Builder::new_current_thread()
                    .enable_time()
                    .build()
                {
                    Ok(runtime) => runtime.block_on(future),
                    Err(error) => {
                        tracing::error!(%error, "failed to start background runtime");
                    }
                }
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_report_desktop() {
        assert_eq!(Platform::current(), Platform::Desktop);
        assert_eq!(Platform::current().label(), "desktop");
    }

    #[test]
    fn spawn_without_runtime_still_runs() {
        let (tx, rx) = std::sync::mpsc::channel();
        spawn_future(async move {
            crate::core::timing::sleep_ms(1).await;
            let _ = tx.send(42);
        });
        assert_eq!(
            rx.recv_timeout(std::time::Duration::from_secs(5)).unwrap(),
            42
        );
    }
}
