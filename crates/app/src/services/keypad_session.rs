//! Keypad session: drives the keypad reducer against an arithmetic port.

use calcpad_domain::error::CalcError;
use calcpad_domain::keypad::{Key, KeyBinding, KeypadState, PendingCall};

use crate::ports::Arithmetic;

/// One keypad instance wired to an [`Arithmetic`] implementation.
///
/// Presses are handled one at a time: `press` takes `&mut self`, so a second
/// press cannot start while a calculation is in flight.
pub struct KeypadSession<A> {
    arithmetic: A,
    state: KeypadState,
}

impl<A: Arithmetic> KeypadSession<A> {
    /// Create a session in the initial state.
    pub fn new(arithmetic: A) -> Self {
        Self {
            arithmetic,
            state: KeypadState::new(),
        }
    }

    /// Current keypad state.
    pub fn state(&self) -> &KeypadState {
        &self.state
    }

    /// The arithmetic implementation backing this session.
    pub fn arithmetic(&self) -> &A {
        &self.arithmetic
    }

    /// Apply a key press, performing the calculation it needs (if any).
    ///
    /// The loading flag is set while the calculation runs and is cleared on
    /// every exit path, including this future being dropped mid-call.
    pub async fn press(&mut self, key: Key) -> &KeypadState {
        tracing::debug!(?key, "key pressed");
        if let Some(call) = self.state.press(key) {
            let request = call.request.clone();
            let in_flight = InFlight {
                state: &mut self.state,
                call: Some(call),
            };
            let outcome = self.arithmetic.calculate(request).await.map(|r| r.result);
            if let Err(err) = &outcome {
                tracing::debug!(error = %err, "calculation failed");
            }
            in_flight.complete(outcome);
        }
        &self.state
    }

    /// Apply a keyboard key by name. Unmapped keys are ignored and return
    /// `None`.
    pub async fn press_keyboard(&mut self, name: &str) -> Option<KeyBinding> {
        let binding = KeyBinding::from_keyboard(name)?;
        self.press(binding.key).await;
        Some(binding)
    }
}

/// Releases the keypad's loading flag if the call is never completed.
struct InFlight<'a> {
    state: &'a mut KeypadState,
    call: Option<PendingCall>,
}

impl InFlight<'_> {
    fn complete(mut self, outcome: Result<f64, CalcError>) {
        if let Some(call) = self.call.take() {
            self.state.resolve(call, outcome);
        }
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        if let Some(call) = self.call.take() {
            tracing::debug!("calculation abandoned");
            self.state.abandon(call);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::Future;
    use std::sync::Mutex;

    use calcpad_domain::calculation::{CalculationRequest, CalculationResult};
    use calcpad_domain::error::RemoteError;
    use calcpad_domain::expression::Evaluation;
    use calcpad_domain::keypad::{ERROR_DISPLAY, Operator};
    use calcpad_domain::operation::OperationName;

    use crate::services::calculator_service::CalculatorService;

    /// Never answers.
    struct Stalled;

    impl Arithmetic for Stalled {
        fn calculate(
            &self,
            _request: CalculationRequest,
        ) -> impl Future<Output = Result<CalculationResult, CalcError>> + Send {
            std::future::pending()
        }

        fn evaluate(
            &self,
            _expression: String,
        ) -> impl Future<Output = Result<Evaluation, CalcError>> + Send {
            std::future::pending()
        }
    }

    /// Always fails, remembering what it was asked.
    #[derive(Default)]
    struct Offline {
        requests: Mutex<Vec<CalculationRequest>>,
    }

    impl Arithmetic for Offline {
        fn calculate(
            &self,
            request: CalculationRequest,
        ) -> impl Future<Output = Result<CalculationResult, CalcError>> + Send {
            self.requests.lock().unwrap().push(request);
            async { Err(RemoteError::new("API offline").into()) }
        }

        fn evaluate(
            &self,
            _expression: String,
        ) -> impl Future<Output = Result<Evaluation, CalcError>> + Send {
            async { Err(RemoteError::new("API offline").into()) }
        }
    }

    async fn press_keys<A: Arithmetic>(session: &mut KeypadSession<A>, keys: &[Key]) {
        for key in keys {
            session.press(*key).await;
        }
    }

    #[tokio::test]
    async fn should_add_through_service() {
        let mut session = KeypadSession::new(CalculatorService::new());
        press_keys(
            &mut session,
            &[
                Key::Digit(7),
                Key::Operator(Operator::Add),
                Key::Digit(3),
                Key::Equals,
            ],
        )
        .await;

        let state = session.state();
        assert_eq!(state.display, "10");
        assert_eq!(state.history, "7 + 3 =");
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn should_surface_division_by_zero() {
        let mut session = KeypadSession::new(CalculatorService::new());
        press_keys(
            &mut session,
            &[
                Key::Digit(5),
                Key::Operator(Operator::Divide),
                Key::Digit(0),
                Key::Equals,
            ],
        )
        .await;

        let state = session.state();
        assert_eq!(state.display, ERROR_DISPLAY);
        assert_eq!(state.error.as_deref(), Some("Division by zero"));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn should_map_keyboard_names() {
        let mut session = KeypadSession::new(CalculatorService::new());
        for name in ["9", "*", "4", "Enter"] {
            session.press_keyboard(name).await.unwrap();
        }
        assert_eq!(session.state().display, "36");
        assert_eq!(session.state().history, "9 × 4 =");

        let binding = session.press_keyboard("/").await.unwrap();
        assert!(binding.prevent_default);
        assert!(session.press_keyboard("q").await.is_none());

        session.press_keyboard("Escape").await.unwrap();
        assert_eq!(session.state(), &KeypadState::default());
    }

    #[tokio::test]
    async fn should_release_loading_and_keep_state_on_failure() {
        let mut session = KeypadSession::new(Offline::default());
        press_keys(
            &mut session,
            &[
                Key::Digit(2),
                Key::Operator(Operator::Multiply),
                Key::Digit(6),
                Key::Operator(Operator::Add),
            ],
        )
        .await;

        let state = session.state();
        assert!(!state.is_loading);
        assert_eq!(state.display, ERROR_DISPLAY);
        assert_eq!(state.error.as_deref(), Some("API offline"));
        assert_eq!(state.previous_value, Some(2.0));
        assert_eq!(state.history, "2 ×");

        let requests = session.arithmetic().requests.lock().unwrap();
        assert_eq!(
            requests.as_slice(),
            &[CalculationRequest::binary(OperationName::Multiply, 2.0, 6.0)]
        );
    }

    #[tokio::test]
    async fn should_release_loading_when_press_is_dropped() {
        let mut session = KeypadSession::new(Stalled);
        press_keys(
            &mut session,
            &[Key::Digit(1), Key::Operator(Operator::Add), Key::Digit(1)],
        )
        .await;

        {
            let press = session.press(Key::Equals);
            tokio::select! {
                biased;
                _ = press => panic!("stalled calculation should never finish"),
                () = std::future::ready(()) => {}
            }
        }

        let state = session.state();
        assert!(!state.is_loading);
        assert_eq!(state.display, "1");
        assert_eq!(state.previous_value, Some(1.0));
        assert_eq!(state.pending_operator, Some(Operator::Add));
    }
}
