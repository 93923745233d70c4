/// Every presentation marker the panel ever applies to the document root.
///
/// A synchronization step removes all of these before applying the subset
/// returned by [`AccessibilityState::marker_classes`], so applying a state
/// twice leaves the document identical to applying it once.
pub const MARKER_CLASSES: &[&str] = &[
    "high-contrast",
    "reading-mode",
    "font-large",
    "font-xlarge",
    "font-xxlarge",
];

/// Stepped font sizing, cyclic over four steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontStep {
    #[default]
    Normal,
    Large,
    ExtraLarge,
    Maximum,
}

impl FontStep {
    /// Advance one step, wrapping from `Maximum` back to `Normal`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Normal => Self::Large,
            Self::Large => Self::ExtraLarge,
            Self::ExtraLarge => Self::Maximum,
            Self::Maximum => Self::Normal,
        }
    }

    /// Numeric index of this step as stored in the persisted record.
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Normal => 0,
            Self::Large => 1,
            Self::ExtraLarge => 2,
            Self::Maximum => 3,
        }
    }

    /// Step for a persisted index. Anything outside `0..=3` is `None`.
    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Normal),
            1 => Some(Self::Large),
            2 => Some(Self::ExtraLarge),
            3 => Some(Self::Maximum),
            _ => None,
        }
    }

    /// Marker class for this step. `Normal` carries no marker.
    #[must_use]
    pub const fn marker(self) -> Option<&'static str> {
        match self {
            Self::Normal => None,
            Self::Large => Some("font-large"),
            Self::ExtraLarge => Some("font-xlarge"),
            Self::Maximum => Some("font-xxlarge"),
        }
    }
}

/// The panel's in-memory preference state.
///
/// Mutated only through the four control operations, each of which reports
/// what changed as a [`StateChange`] so the caller can announce and persist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AccessibilityState {
    pub font_step: FontStep,
    pub high_contrast: bool,
    pub reading_mode: bool,
}

/// Outcome of a control operation, used to pick the announcement message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    HighContrast(bool),
    FontStep(FontStep),
    ReadingMode(bool),
    Reset,
}

impl StateChange {
    /// Message key announced to assistive technology for this change.
    ///
    /// The reset-to-normal font message is distinct from the enlarge
    /// messages, and a full reset announces a single combined message.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::HighContrast(true) => "a11y.contrast.on",
            Self::HighContrast(false) => "a11y.contrast.off",
            Self::FontStep(FontStep::Normal) => "a11y.font.normal",
            Self::FontStep(FontStep::Large) => "a11y.font.large",
            Self::FontStep(FontStep::ExtraLarge) => "a11y.font.xlarge",
            Self::FontStep(FontStep::Maximum) => "a11y.font.max",
            Self::ReadingMode(true) => "a11y.reading.on",
            Self::ReadingMode(false) => "a11y.reading.off",
            Self::Reset => "a11y.reset",
        }
    }
}

impl AccessibilityState {
    /// Flip the high-contrast flag.
    pub fn toggle_high_contrast(&mut self) -> StateChange {
        self.high_contrast = !self.high_contrast;
        StateChange::HighContrast(self.high_contrast)
    }

    /// Advance the font step, wrapping past the maximum back to normal.
    pub fn increase_font_size(&mut self) -> StateChange {
        self.font_step = self.font_step.next();
        StateChange::FontStep(self.font_step)
    }

    /// Flip the reading-mode flag.
    pub fn toggle_reading_mode(&mut self) -> StateChange {
        self.reading_mode = !self.reading_mode;
        StateChange::ReadingMode(self.reading_mode)
    }

    /// Return every field to its default in one step.
    pub fn reset(&mut self) -> StateChange {
        *self = Self::default();
        StateChange::Reset
    }

    /// Marker classes the document root must carry for this state.
    ///
    /// Pure and deterministic: at most one font marker (none at the normal
    /// step) plus one marker per enabled mode flag, all drawn from
    /// [`MARKER_CLASSES`].
    #[must_use]
    pub fn marker_classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(3);
        if self.high_contrast {
            classes.push("high-contrast");
        }
        if self.reading_mode {
            classes.push("reading-mode");
        }
        if let Some(marker) = self.font_step.marker() {
            classes.push(marker);
        }
        classes
    }
}
