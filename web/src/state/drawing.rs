#[cfg(test)]
#[path = "drawing_test.rs"]
mod drawing_test;

/// Hand-off between the canvas host and the controls.
///
/// The canvas host owns the surface. After every stroke (and after a clear)
/// it publishes the encoded bitmap here; the controls read it to submit.
/// Controls ask for a clear by bumping `clear_seq`, which the host watches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawingState {
    /// Bare base64 PNG of the surface as last exported.
    pub image: Option<String>,
    /// Whether any ink has been laid since the last clear.
    pub has_ink: bool,
    /// Incremented once per requested clear.
    pub clear_seq: u64,
}

impl DrawingState {
    /// Record a fresh export of the surface.
    pub fn publish(&mut self, image: String, has_ink: bool) {
        self.image = Some(image);
        self.has_ink = has_ink;
    }

    /// Ask the canvas host to blank the surface.
    pub fn request_clear(&mut self) {
        self.clear_seq = self.clear_seq.saturating_add(1);
    }
}
