use crate::error::{TourError, TourResult};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use tracing::warn;

// =============================================================================
// Scope guard: the cleanup step that runs on every exit path
// =============================================================================

pub struct ScopeGuard<F: FnOnce()> {
    cleanup: Option<F>,
}

impl<F: FnOnce()> ScopeGuard<F> {
    pub fn new(cleanup: F) -> Self {
        ScopeGuard {
            cleanup: Some(cleanup),
        }
    }
}

impl<F: FnOnce()> Drop for ScopeGuard<F> {
    fn drop(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

// =============================================================================
// Checked access and outcome classification
// =============================================================================

#[derive(Debug)]
pub enum FailureOutcome<T> {
    Completed(T),
    OutOfBounds(TourError),
    Other(TourError),
}

pub fn element_at<T: Copy>(values: &[T], index: usize) -> TourResult<T> {
    values
        .get(index)
        .copied()
        .ok_or(TourError::IndexOutOfBounds {
            index,
            len: values.len(),
        })
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

/// Runs `body`, routes out-of-bounds errors to their own handler and every
/// other failure (panics included) to the fallback, then runs `cleanup`.
pub fn attempt<T, B, F>(body: B, cleanup: F) -> FailureOutcome<T>
where
    B: FnOnce() -> TourResult<T>,
    F: FnOnce(),
{
    let _finally = ScopeGuard::new(cleanup);

    let outcome = match catch_unwind(AssertUnwindSafe(body)) {
        Ok(Ok(value)) => FailureOutcome::Completed(value),
        Ok(Err(err @ TourError::IndexOutOfBounds { .. })) => FailureOutcome::OutOfBounds(err),
        Ok(Err(err)) => FailureOutcome::Other(err),
        Err(payload) => FailureOutcome::Other(TourError::Panicked(panic_message(payload))),
    };

    match &outcome {
        FailureOutcome::Completed(_) => {}
        FailureOutcome::OutOfBounds(err) => {
            warn!(error = %err, "out-of-bounds access caught");
            println!("Array size exceeded: {}", err);
        }
        FailureOutcome::Other(err) => {
            warn!(error = %err, "failure caught by fallback handler");
            println!("Other failure: {}", err);
        }
    }

    outcome
}

pub fn run_failures(index: usize) -> FailureOutcome<i32> {
    let array = [0i32; 2];
    attempt(
        || {
            let value = element_at(&array, index)?;
            println!("{}", value);
            Ok(value)
        },
        || println!("Always runs (finally)."),
    )
}
