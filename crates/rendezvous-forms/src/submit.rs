//! The submission lifecycle: validate, deliver, show success, auto-dismiss.
//!
//! The lifecycle is an explicit enumerated phase with guarded transitions
//! rather than ad hoc flags, so the "disabled while submitting" invariant is
//! checkable. The transport is the seam where a real booking backend replaces
//! the simulated delay.

use crate::config::FlowConfig;
use crate::field::FieldId;
use crate::form::{AppointmentForm, BookingRequest};
use serde::Serialize;
use std::time::Duration;

/// Where the submission lifecycle currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SubmissionPhase {
	/// Accepting input; submit attempts run validation.
	Idle,
	/// A delivery is pending; the submit control is disabled.
	Submitting,
	/// Delivery completed; the success banner is visible until dismissed.
	Success,
}

/// Errors from a submission transport.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
	#[error("transport unavailable: {0}")]
	Unavailable(String),
	#[error("delivery failed: {0}")]
	Delivery(String),
}

/// The replaceable submission collaborator.
///
/// Given the validated field values, resolve to success or failure. The
/// in-repo implementation is [`SimulatedTransport`]; a production system
/// substitutes an HTTP call to the booking backend here.
#[async_trait::async_trait]
pub trait SubmissionTransport: Send + Sync {
	async fn deliver(&self, booking: &BookingRequest) -> Result<(), TransportError>;
}

/// Stands in for a network round trip with a fixed non-blocking delay.
/// Always succeeds.
#[derive(Debug, Clone)]
pub struct SimulatedTransport {
	delay: Duration,
}

impl SimulatedTransport {
	pub fn new(delay: Duration) -> Self {
		Self { delay }
	}
}

#[async_trait::async_trait]
impl SubmissionTransport for SimulatedTransport {
	async fn deliver(&self, _booking: &BookingRequest) -> Result<(), TransportError> {
		tokio::time::sleep(self.delay).await;
		Ok(())
	}
}

/// The submit button's label and disabled state.
///
/// While a delivery is pending the control shows the busy label and is
/// disabled; both are restored exactly once on the way out of
/// [`SubmissionPhase::Submitting`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubmitControl {
	label: String,
	disabled: bool,
	#[serde(skip)]
	resting_label: String,
}

impl SubmitControl {
	fn new(label: String) -> Self {
		Self {
			resting_label: label.clone(),
			label,
			disabled: false,
		}
	}

	pub fn label(&self) -> &str {
		&self.label
	}

	pub fn is_disabled(&self) -> bool {
		self.disabled
	}

	fn engage(&mut self, busy_label: &str) {
		// The restore target is the label as it reads at engage time, not at
		// construction.
		self.resting_label = self.label.clone();
		self.label = busy_label.to_string();
		self.disabled = true;
	}

	fn restore(&mut self) {
		self.label = self.resting_label.clone();
		self.disabled = false;
	}
}

/// The success message element's state.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SuccessBanner {
	visible: bool,
	#[serde(skip)]
	scroll_requested: bool,
}

impl SuccessBanner {
	pub fn is_visible(&self) -> bool {
		self.visible
	}

	/// One-shot: whether the host should scroll the banner into view
	/// (centered, smooth). Consuming the request clears it.
	pub fn take_scroll_request(&mut self) -> bool {
		std::mem::take(&mut self.scroll_requested)
	}

	fn show(&mut self) {
		self.visible = true;
		self.scroll_requested = true;
	}

	fn hide(&mut self) {
		self.visible = false;
	}
}

/// What a submit attempt produced.
#[derive(Debug, PartialEq)]
pub enum SubmitOutcome {
	/// Validation failed; focus should move to the named field.
	Rejected { focus: FieldId },
	/// A lifecycle is already pending; nothing was touched.
	AlreadyPending,
	/// The transport accepted the booking; the success banner is showing.
	Delivered,
	/// The transport failed; entered values are preserved.
	Failed { error: TransportError },
}

/// Drives the submission lifecycle over an [`AppointmentForm`].
///
/// # Examples
///
/// ```
/// use rendezvous_forms::{AppointmentForm, FieldId, FlowConfig, SubmitFlow, SubmitOutcome};
///
/// # tokio_test::block_on(async {
/// let config = FlowConfig {
/// 	submit_delay_ms: 0,
/// 	success_visible_ms: 0,
/// 	..FlowConfig::default()
/// };
/// let mut flow = SubmitFlow::simulated(AppointmentForm::new(), config);
///
/// // An empty form is rejected and the first invalid field gets focus.
/// let outcome = flow.submit().await;
/// assert_eq!(outcome, SubmitOutcome::Rejected { focus: FieldId::Name });
/// # });
/// ```
pub struct SubmitFlow<T = SimulatedTransport> {
	form: AppointmentForm,
	transport: T,
	config: FlowConfig,
	phase: SubmissionPhase,
	control: SubmitControl,
	banner: SuccessBanner,
}

impl SubmitFlow<SimulatedTransport> {
	/// A flow whose transport is the simulated delay from the configuration.
	pub fn simulated(form: AppointmentForm, config: FlowConfig) -> Self {
		let transport = SimulatedTransport::new(config.submit_delay());
		Self::new(form, transport, config)
	}
}

impl<T: SubmissionTransport> SubmitFlow<T> {
	pub fn new(form: AppointmentForm, transport: T, config: FlowConfig) -> Self {
		let control = SubmitControl::new(config.submit_label.clone());
		Self {
			form,
			transport,
			config,
			phase: SubmissionPhase::Idle,
			control,
			banner: SuccessBanner::default(),
		}
	}

	pub fn form(&self) -> &AppointmentForm {
		&self.form
	}

	/// The form, mutably; the host routes input, toggle, and blur events
	/// through this.
	pub fn form_mut(&mut self) -> &mut AppointmentForm {
		&mut self.form
	}

	pub fn phase(&self) -> SubmissionPhase {
		self.phase
	}

	pub fn control(&self) -> &SubmitControl {
		&self.control
	}

	pub fn banner(&self) -> &SuccessBanner {
		&self.banner
	}

	pub fn banner_mut(&mut self) -> &mut SuccessBanner {
		&mut self.banner
	}

	/// Runs one submit attempt.
	///
	/// Outside [`SubmissionPhase::Idle`] the attempt is rejected without
	/// touching any state. Otherwise the whole form is validated; a failed
	/// pass stays in Idle and names the focus target. A valid form enters
	/// Submitting (control disabled, busy label) for the duration of the
	/// transport call, then either Success (banner shown, form reset,
	/// control restored) or back to Idle with the entered values preserved.
	pub async fn submit(&mut self) -> SubmitOutcome {
		if self.phase != SubmissionPhase::Idle {
			return SubmitOutcome::AlreadyPending;
		}

		if !self.form.validate_form() {
			// A failed pass always leaves at least one field displayed.
			let focus = self.form.first_invalid().unwrap_or(FieldId::Name);
			tracing::debug!(focus = %focus, "submit rejected by validation");
			return SubmitOutcome::Rejected { focus };
		}

		let booking = match self.form.booking() {
			Ok(booking) => booking,
			Err(error) => {
				tracing::warn!(error = %error, "booking snapshot failed after a valid pass");
				let focus = self.form.first_invalid().unwrap_or(FieldId::Name);
				return SubmitOutcome::Rejected { focus };
			}
		};

		self.phase = SubmissionPhase::Submitting;
		self.control.engage(&self.config.busy_label);
		tracing::debug!(service = %booking.service, date = %booking.date, "submitting booking");

		match self.transport.deliver(&booking).await {
			Ok(()) => {
				self.banner.show();
				self.form.reset();
				self.control.restore();
				self.phase = SubmissionPhase::Success;
				tracing::debug!("booking delivered");
				SubmitOutcome::Delivered
			}
			Err(error) => {
				self.control.restore();
				self.phase = SubmissionPhase::Idle;
				tracing::warn!(error = %error, "booking delivery failed");
				SubmitOutcome::Failed { error }
			}
		}
	}

	/// Holds the success banner for its configured duration, then hides it
	/// and returns the flow to [`SubmissionPhase::Idle`]. A no-op outside
	/// Success.
	pub async fn dismiss(&mut self) {
		if self.phase != SubmissionPhase::Success {
			return;
		}
		tokio::time::sleep(self.config.success_visible()).await;
		self.banner.hide();
		self.phase = SubmissionPhase::Idle;
		tracing::debug!("success banner dismissed");
	}

	/// [`SubmitFlow::submit`] followed by the automatic banner dismissal,
	/// mirroring the page's full submit-to-quiet sequence.
	pub async fn submit_and_dismiss(&mut self) -> SubmitOutcome {
		let outcome = self.submit().await;
		if outcome == SubmitOutcome::Delivered {
			self.dismiss().await;
		}
		outcome
	}
}
