//! Native pad controller.
//!
//! A [`Session`] ties one capture surface to the pad state and a service
//! client. Handlers take `&mut self`, so at most one request is in flight
//! and nothing else can touch the surface while it is awaited. Each service
//! call follows the same shape: start the request, export and send, log any
//! failure, then hand the outcome to [`PadState`].

use protocol::{Operation, PadState, TransitionError};
use surface::engine::{Action, SurfaceCore};
use surface::geometry::{DisplayRect, Point};
use surface::input::Button;

use crate::client::ClassifierClient;
use crate::script::StrokeScript;

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("no symbol selected to save under")]
    NoSymbol,
}

/// Why an export-and-send step failed. Only logged.
#[derive(Debug, thiserror::Error)]
enum CallError {
    #[error(transparent)]
    Encode(#[from] surface::encode::EncodeError),
    #[error(transparent)]
    Client(#[from] crate::client::ClientError),
}

pub struct Session {
    surface: SurfaceCore,
    pad: PadState,
    client: ClassifierClient,
}

impl Session {
    /// A session with a blank default-size surface.
    #[must_use]
    pub fn new(client: ClassifierClient) -> Self {
        Self::with_surface(SurfaceCore::new(), client)
    }

    #[must_use]
    pub fn with_surface(surface: SurfaceCore, client: ClassifierClient) -> Self {
        Self { surface, pad: PadState::default(), client }
    }

    #[must_use]
    pub fn pad(&self) -> &PadState {
        &self.pad
    }

    #[must_use]
    pub fn surface(&self) -> &SurfaceCore {
        &self.surface
    }

    // --- Drawing ---

    pub fn pointer_down(&mut self, at: Point, display: DisplayRect, button: Button) -> Action {
        if !self.pad.inputs_enabled() || !button.draws() {
            return Action::None;
        }
        self.pad.touch();
        self.surface.begin(at, display)
    }

    pub fn pointer_move(&mut self, at: Point, display: DisplayRect) -> Action {
        if !self.pad.inputs_enabled() {
            return Action::None;
        }
        self.surface.extend(at, display)
    }

    pub fn pointer_up(&mut self) -> Action {
        self.surface.end()
    }

    /// Draw a recorded script through the pointer handlers.
    pub fn replay(&mut self, script: &StrokeScript) {
        let display = script.display_rect();
        for stroke in script.strokes() {
            let mut points = stroke.into_iter();
            if let Some(first) = points.next() {
                self.pointer_down(first, display, Button::Primary);
                for point in points {
                    self.pointer_move(point, display);
                }
                self.pointer_up();
            }
        }
    }

    /// Blank the surface and drop the prediction. Refused while a request is pending.
    pub fn clear(&mut self) -> Action {
        if !self.pad.clear() {
            return Action::None;
        }
        self.surface.clear()
    }

    // --- Prediction and correction ---

    pub fn select_symbol(&mut self, code: &str) {
        self.pad.select_symbol(code);
    }

    /// Classify the current drawing.
    ///
    /// Service failures are not errors here: they land in [`PadState`] as a
    /// failed request with a notice.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transition`] if another request is pending.
    pub async fn proceed(&mut self) -> Result<(), SessionError> {
        self.pad.begin(Operation::Classify)?;
        let outcome = self.classify_surface().await;
        match &outcome {
            Ok(label) => tracing::info!(%label, "classified drawing"),
            Err(e) => tracing::warn!(error = %e, "classify failed"),
        }
        self.pad.classified(outcome)?;
        Ok(())
    }

    async fn classify_surface(&self) -> Result<String, CallError> {
        let image = self.surface.export_encoded()?;
        Ok(self.client.classify(&image).await?)
    }

    /// Save the current drawing under the selected symbol.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::NoSymbol`] if nothing is selected and
    /// [`SessionError::Transition`] if another request is pending.
    pub async fn save_correction(&mut self) -> Result<(), SessionError> {
        if self.pad.selected_symbol.trim().is_empty() {
            return Err(SessionError::NoSymbol);
        }
        self.pad.begin(Operation::Save)?;
        let outcome = self.save_surface().await;
        match &outcome {
            Ok(()) => tracing::info!(symbol = %self.pad.selected_symbol, "saved drawing"),
            Err(e) => tracing::warn!(error = %e, symbol = %self.pad.selected_symbol, "save failed"),
        }
        self.pad.saved(outcome)?;
        Ok(())
    }

    async fn save_surface(&self) -> Result<(), CallError> {
        let image = self.surface.export_encoded()?;
        Ok(self.client.save(&image, &self.pad.selected_symbol).await?)
    }

    /// Ask the service to retrain; the new version is recorded on success.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transition`] if another request is pending.
    pub async fn retrain(&mut self) -> Result<(), SessionError> {
        self.pad.begin(Operation::Retrain)?;
        let outcome = self.client.retrain().await;
        match &outcome {
            Ok(version) => tracing::info!(%version, "model retrained"),
            Err(e) => tracing::warn!(error = %e, "retrain failed"),
        }
        self.pad.retrained(outcome)?;
        Ok(())
    }

    /// Fetch the model version; failure records it as unknown.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Transition`] if another version lookup is pending.
    pub async fn refresh_version(&mut self) -> Result<(), SessionError> {
        self.pad.begin_version_lookup()?;
        let outcome = self.client.version().await;
        if let Err(e) = &outcome {
            tracing::warn!(error = %e, "version lookup failed");
        }
        self.pad.version_loaded(outcome)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
