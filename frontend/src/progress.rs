//! Deployment progress tracking.
//!
//! While a deploy request is in flight the UI shows a scripted list of
//! steps that advances on a fixed timer. The list is **cosmetic**: the
//! deploy API exposes no intermediate status, so ticks carry no
//! information about which phase the remote deployment is actually in.
//! The pure state lives in [`DeploymentProgress`]; wiring it to a
//! reactive signal and a browser interval is [`ProgressDriver`]'s job.

use std::time::Duration;

use leptos::{set_interval_with_handle, SignalSet, SignalUpdate, WriteSignal};
use leptos_dom::helpers::IntervalHandle;

use crate::config::TICK_INTERVAL_MS;
use crate::types::{AppError, AppResult, TokenStandard};

// =============================================================================
// Pure state
// =============================================================================

/// Lifecycle of a single scripted step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    /// Not reached yet.
    Pending,
    /// The step currently shown as in progress.
    Loading,
    Complete,
    Error,
}

impl StepStatus {
    /// CSS class for rendering this status.
    pub fn css_class(&self) -> &'static str {
        match self {
            StepStatus::Pending => "step-pending",
            StepStatus::Loading => "step-loading",
            StepStatus::Complete => "step-complete",
            StepStatus::Error => "step-error",
        }
    }
}

/// One line of the progress list.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentStep {
    pub message: String,
    pub status: StepStatus,
}

/// Scripted progress of one deployment attempt.
///
/// At most one step is ever `Loading`. Ticks walk that marker forward
/// through the script; resolution rewrites the whole list in one move.
/// Once resolved no step is `Loading` anymore, which makes any further
/// [`tick`](Self::tick) a no-op.
#[derive(Clone, Debug, PartialEq)]
pub struct DeploymentProgress {
    steps: Vec<DeploymentStep>,
}

impl DeploymentProgress {
    /// Begin a new attempt: the first step starts loading, the rest
    /// wait as pending. An empty script is allowed and stays empty
    /// until resolution.
    pub fn start(messages: Vec<String>) -> Self {
        let steps = messages
            .into_iter()
            .enumerate()
            .map(|(index, message)| DeploymentStep {
                message,
                status: if index == 0 { StepStatus::Loading } else { StepStatus::Pending },
            })
            .collect();
        Self { steps }
    }

    /// Steps in script order.
    pub fn steps(&self) -> &[DeploymentStep] {
        &self.steps
    }

    fn loading_index(&self) -> Option<usize> {
        self.steps.iter().position(|step| step.status == StepStatus::Loading)
    }

    /// Advance the loading marker by one step.
    ///
    /// The last scripted step keeps loading for as long as the deploy
    /// call takes; it is never completed by the timer, only by
    /// resolution.
    pub fn tick(&mut self) {
        let Some(index) = self.loading_index() else {
            return;
        };
        if index + 1 < self.steps.len() {
            self.steps[index].status = StepStatus::Complete;
            self.steps[index + 1].status = StepStatus::Loading;
        }
    }

    /// Finish the attempt successfully: every scripted step is marked
    /// complete, regardless of how far the timer got, and the final
    /// message is appended as an extra complete step.
    pub fn resolve_success(&mut self, final_message: &str) {
        for step in &mut self.steps {
            step.status = StepStatus::Complete;
        }
        self.steps.push(DeploymentStep {
            message: final_message.to_string(),
            status: StepStatus::Complete,
        });
    }

    /// Finish the attempt with an error: the step that was loading
    /// turns into the error marker, earlier steps keep their completed
    /// state and later steps stay pending.
    pub fn resolve_failure(&mut self) {
        if let Some(index) = self.loading_index() {
            self.steps[index].status = StepStatus::Error;
        }
    }
}

/// Step script shown while deploying a contract of the given standard.
///
/// The wording mirrors what the deploy API actually does, but the
/// timing does not.
pub fn deployment_steps(standard: TokenStandard) -> Vec<String> {
    vec![
        "Creating new wallet on Base Sepolia...".to_string(),
        "Requesting testnet ETH from faucet...".to_string(),
        format!("Deploying {} contract...", standard),
        "Waiting for transaction confirmation...".to_string(),
    ]
}

// =============================================================================
// Reactive driver
// =============================================================================

/// Owns one attempt's interval timer and its progress signal.
///
/// [`succeed`](Self::succeed) and [`fail`](Self::fail) take `self` by
/// value, so an attempt can only be resolved once and no tick can be
/// scheduled afterwards: both clear the interval before touching the
/// step list.
pub struct ProgressDriver {
    progress: WriteSignal<Option<DeploymentProgress>>,
    timer: IntervalHandle,
}

impl ProgressDriver {
    /// Publish a fresh [`DeploymentProgress`] into `progress` and start
    /// ticking it every [`TICK_INTERVAL_MS`] milliseconds.
    pub fn start(
        progress: WriteSignal<Option<DeploymentProgress>>,
        messages: Vec<String>,
    ) -> AppResult<Self> {
        let timer = set_interval_with_handle(
            move || {
                progress.update(|state| {
                    if let Some(state) = state {
                        state.tick();
                    }
                });
            },
            Duration::from_millis(TICK_INTERVAL_MS),
        )
        .map_err(|_| AppError::Deploy("Failed to start the progress timer".to_string()))?;

        progress.set(Some(DeploymentProgress::start(messages)));
        Ok(Self { progress, timer })
    }

    /// Stop the timer and mark the attempt as succeeded, appending
    /// `final_message` as the closing step.
    pub fn succeed(self, final_message: &str) {
        self.timer.clear();
        let message = final_message.to_string();
        self.progress.update(|state| {
            if let Some(state) = state {
                state.resolve_success(&message);
            }
        });
    }

    /// Stop the timer and mark the attempt as failed.
    pub fn fail(self) {
        self.timer.clear();
        self.progress.update(|state| {
            if let Some(state) = state {
                state.resolve_failure();
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script() -> Vec<String> {
        deployment_steps(TokenStandard::Erc721)
    }

    fn statuses(progress: &DeploymentProgress) -> Vec<StepStatus> {
        progress.steps().iter().map(|step| step.status).collect()
    }

    #[test]
    fn test_start_marks_first_step_loading() {
        let progress = DeploymentProgress::start(script());

        assert_eq!(
            statuses(&progress),
            vec![
                StepStatus::Loading,
                StepStatus::Pending,
                StepStatus::Pending,
                StepStatus::Pending,
            ]
        );
        assert_eq!(progress.steps()[0].message, "Creating new wallet on Base Sepolia...");
    }

    #[test]
    fn test_tick_advances_loading_marker() {
        let mut progress = DeploymentProgress::start(script());
        progress.tick();

        assert_eq!(
            statuses(&progress),
            vec![
                StepStatus::Complete,
                StepStatus::Loading,
                StepStatus::Pending,
                StepStatus::Pending,
            ]
        );
    }

    #[test]
    fn test_last_step_keeps_loading() {
        let mut progress = DeploymentProgress::start(vec!["a".to_string(), "b".to_string()]);
        progress.tick();
        let parked = progress.clone();
        progress.tick();
        progress.tick();

        // The timer parks on the final step until resolution.
        assert_eq!(progress, parked);
        assert_eq!(statuses(&progress), vec![StepStatus::Complete, StepStatus::Loading]);
    }

    #[test]
    fn test_tick_on_empty_script_is_noop() {
        let mut progress = DeploymentProgress::start(Vec::new());
        progress.tick();

        assert!(progress.steps().is_empty());
    }

    #[test]
    fn test_resolve_success_completes_everything() {
        let mut progress = DeploymentProgress::start(script());
        progress.tick();
        progress.resolve_success("Contract deployed at: 0xabc");

        assert_eq!(progress.steps().len(), 5);
        assert!(progress.steps().iter().all(|step| step.status == StepStatus::Complete));
        assert_eq!(progress.steps()[4].message, "Contract deployed at: 0xabc");
    }

    #[test]
    fn test_resolve_success_on_empty_script_appends_final_step() {
        let mut progress = DeploymentProgress::start(Vec::new());
        progress.resolve_success("Contract deployed at: 0xabc");

        assert_eq!(statuses(&progress), vec![StepStatus::Complete]);
    }

    #[test]
    fn test_resolve_failure_marks_current_step() {
        let mut progress = DeploymentProgress::start(script());
        progress.tick();
        progress.tick();
        progress.resolve_failure();

        assert_eq!(
            statuses(&progress),
            vec![
                StepStatus::Complete,
                StepStatus::Complete,
                StepStatus::Error,
                StepStatus::Pending,
            ]
        );
    }

    #[test]
    fn test_resolve_failure_before_first_tick() {
        let mut progress = DeploymentProgress::start(script());
        progress.resolve_failure();

        assert_eq!(progress.steps()[0].status, StepStatus::Error);
        assert!(progress.steps()[1..].iter().all(|step| step.status == StepStatus::Pending));
    }

    #[test]
    fn test_tick_after_success_is_noop() {
        let mut progress = DeploymentProgress::start(script());
        progress.resolve_success("done");
        let resolved = progress.clone();
        progress.tick();

        assert_eq!(progress, resolved);
    }

    #[test]
    fn test_tick_after_failure_is_noop() {
        let mut progress = DeploymentProgress::start(script());
        progress.tick();
        progress.resolve_failure();
        let resolved = progress.clone();
        progress.tick();

        assert_eq!(progress, resolved);
    }

    #[test]
    fn test_step_script_names_the_standard() {
        let erc721 = deployment_steps(TokenStandard::Erc721);
        let erc1155 = deployment_steps(TokenStandard::Erc1155);

        assert_eq!(erc721[2], "Deploying ERC721 contract...");
        assert_eq!(erc1155[2], "Deploying ERC1155 contract...");
        assert_eq!(erc721.len(), 4);
    }
}
