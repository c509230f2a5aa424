/// Transient banner text with a timed expiry.
///
/// Each `show` bumps a generation counter; an expiry timer only clears the
/// banner if no newer message replaced it in the meantime.
#[derive(Clone, Debug, Default)]
pub struct Notice {
    message: Option<String>,
    generation: u64,
}

impl Notice {
    /// Display `message`; returns the generation to pass to [`Notice::expire`].
    pub fn show(&mut self, message: impl Into<String>) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.message = Some(message.into());
        self.generation
    }

    /// Clear the banner if `generation` is still the latest. Returns true if cleared.
    pub fn expire(&mut self, generation: u64) -> bool {
        if generation == self.generation && self.message.is_some() {
            self.message = None;
            true
        } else {
            false
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible(&self) -> bool {
        self.message.is_some()
    }
}
