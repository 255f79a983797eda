//! Persistence boundaries: local scene files and the remote drawing
//! store.
//!
//! Both traits are async so hosts can back them with real I/O or
//! network transports; the editor core itself never blocks on them.

mod file;
mod memory;
mod remote;

pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use remote::{MemoryRemoteStore, RemoteEntry, RemoteStore};

use crate::scene::Scene;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("drawing not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async storage operations.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Local persistence of scenes, keyed by a caller-chosen id.
pub trait Storage: Send + Sync {
    /// Save a scene under the given id, replacing any previous content.
    fn save(&self, id: &str, scene: &Scene) -> BoxFuture<'_, StorageResult<()>>;

    /// Load the scene stored under the given id.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Scene>>;

    /// Delete the scene stored under the given id, if any.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List the ids of all stored scenes.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;
}

/// Minimal polling executor for storage futures in tests.
#[cfg(test)]
pub(crate) fn block_on<F: Future>(future: F) -> F::Output {
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    // Safety: the vtable functions are all no-ops over a null pointer.
    let waker = unsafe { Waker::from_raw(raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut future = std::pin::pin!(future);
    loop {
        if let Poll::Ready(output) = future.as_mut().poll(&mut cx) {
            return output;
        }
    }
}
