//! Terminal UI components (spinner, colors, prompts).

use anyhow::Result;
use inquire::InquireError;

mod spinner;
mod style;

pub use spinner::Spinner;
pub use style::Style;

const fn is_prompt_cancelled(err: &InquireError) -> bool {
    matches!(
        err,
        InquireError::OperationCanceled | InquireError::OperationInterrupted
    )
}

/// Runs an interactive prompt flow, treating Ctrl+C or Escape as a clean exit.
pub fn handle_prompt_cancellation<F>(f: F) -> Result<()>
where
    F: FnOnce() -> Result<()>,
{
    match f() {
        Err(e)
            if e.downcast_ref::<InquireError>()
                .is_some_and(is_prompt_cancelled) =>
        {
            println!();
            Ok(())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_prompt_is_ok() {
        assert!(handle_prompt_cancellation(|| Err(InquireError::OperationCanceled.into())).is_ok());
        assert!(
            handle_prompt_cancellation(|| Err(InquireError::OperationInterrupted.into())).is_ok()
        );
    }

    #[test]
    fn test_other_errors_propagate() {
        let result = handle_prompt_cancellation(|| Err(anyhow::anyhow!("config write failed")));
        let Err(err) = result else {
            panic!("expected an error");
        };
        assert!(err.to_string().contains("config write failed"));

        let err = InquireError::Custom("test".into());
        assert!(!is_prompt_cancelled(&err));
    }
}
