/// In-page sections reachable through keyboard shortcuts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Home,
    About,
    Mentorship,
}

impl Section {
    /// Element id of the section's anchor in the page.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Home => "inicio",
            Self::About => "sobre",
            Self::Mentorship => "mentoria",
        }
    }

    /// Message key announced after jumping to this section.
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::Home => "nav.home",
            Self::About => "nav.about",
            Self::Mentorship => "nav.mentorship",
        }
    }
}

/// Action bound to a recognized keyboard combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    JumpTo(Section),
    ResetAll,
}

// Centralized shortcut mapping for KeyboardEvent.key values.
// Only digits with the modifier held are recognized; anything else is None.
#[must_use]
pub fn shortcut_for(key: &str, modifier: bool) -> Option<Shortcut> {
    if !modifier {
        return None;
    }
    match key {
        "1" => Some(Shortcut::JumpTo(Section::Home)),
        "2" => Some(Shortcut::JumpTo(Section::About)),
        "3" => Some(Shortcut::JumpTo(Section::Mentorship)),
        "0" => Some(Shortcut::ResetAll),
        _ => None,
    }
}
