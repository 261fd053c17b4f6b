//! Emotion Drill-Down State Machine
//!
//! The editor walks three tiers: pick a primary emotion, then a secondary
//! within it, then a tertiary that submits the entry. The machine is a plain
//! tagged enum with pure transitions, independent of any rendering concern,
//! so every rule is unit-testable.

/// Maximum note length; input is clipped to this as the user types
pub const MAX_NOTE_LEN: usize = 255;

/// Which tier the editor is currently choosing from
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    /// Choosing a primary emotion
    Primary,
    /// Primary chosen; choosing a secondary
    Secondary { primary: String },
    /// Primary and secondary chosen; choosing a tertiary
    Tertiary { primary: String, secondary: String },
}

impl Stage {
    /// Advance one tier with the given selection. Selecting at the tertiary
    /// tier submits instead (see [`Stage::compose`]), so `select` there is
    /// a no-op.
    pub fn select(&self, choice: &str) -> Stage {
        match self {
            Stage::Primary => Stage::Secondary {
                primary: choice.to_string(),
            },
            Stage::Secondary { primary } => Stage::Tertiary {
                primary: primary.clone(),
                secondary: choice.to_string(),
            },
            Stage::Tertiary { .. } => self.clone(),
        }
    }

    /// Step back up one tier
    pub fn back(&self) -> Stage {
        match self {
            Stage::Primary => Stage::Primary,
            Stage::Secondary { .. } => Stage::Primary,
            Stage::Tertiary { primary, .. } => Stage::Secondary {
                primary: primary.clone(),
            },
        }
    }

    /// Compose the final entry label. Only a full three-tier path produces
    /// a label; earlier stages return `None`.
    pub fn compose(&self, tertiary: &str) -> Option<String> {
        match self {
            Stage::Tertiary { primary, secondary } => {
                Some(format!("{} > {} > {}", primary, secondary, tertiary))
            }
            _ => None,
        }
    }

    /// Breadcrumb of selections made so far, e.g. "Joy > Contentment"
    pub fn breadcrumb(&self) -> Option<String> {
        match self {
            Stage::Primary => None,
            Stage::Secondary { primary } => Some(primary.clone()),
            Stage::Tertiary { primary, secondary } => {
                Some(format!("{} > {}", primary, secondary))
            }
        }
    }
}

/// A tertiary selection is only submittable once primary and secondary are
/// both chosen and the note is non-empty.
pub fn can_submit(stage: &Stage, note: &str) -> bool {
    matches!(stage, Stage::Tertiary { .. }) && !note.trim().is_empty()
}

/// Clip a note to [`MAX_NOTE_LEN`] characters, respecting UTF-8 boundaries
pub fn clip_note(note: &str) -> String {
    if note.chars().count() <= MAX_NOTE_LEN {
        note.to_string()
    } else {
        note.chars().take(MAX_NOTE_LEN).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_walks_tiers_in_order() {
        let stage = Stage::Primary;
        let stage = stage.select("Joy");
        assert_eq!(
            stage,
            Stage::Secondary {
                primary: "Joy".to_string()
            }
        );

        let stage = stage.select("Contentment");
        assert_eq!(
            stage,
            Stage::Tertiary {
                primary: "Joy".to_string(),
                secondary: "Contentment".to_string()
            }
        );
    }

    #[test]
    fn test_compose_requires_full_path() {
        // tertiary options never produce a label before both parents are set
        assert_eq!(Stage::Primary.compose("Peace"), None);
        assert_eq!(
            Stage::Secondary {
                primary: "Joy".to_string()
            }
            .compose("Peace"),
            None
        );

        let stage = Stage::Tertiary {
            primary: "Joy".to_string(),
            secondary: "Contentment".to_string(),
        };
        assert_eq!(
            stage.compose("Peace"),
            Some("Joy > Contentment > Peace".to_string())
        );
    }

    #[test]
    fn test_back_steps_up_one_tier() {
        let stage = Stage::Tertiary {
            primary: "Fear".to_string(),
            secondary: "Anxiety".to_string(),
        };
        assert_eq!(
            stage.back(),
            Stage::Secondary {
                primary: "Fear".to_string()
            }
        );
        assert_eq!(stage.back().back(), Stage::Primary);
        assert_eq!(Stage::Primary.back(), Stage::Primary);
    }

    #[test]
    fn test_submit_blocked_while_note_empty() {
        let stage = Stage::Tertiary {
            primary: "Joy".to_string(),
            secondary: "Happiness".to_string(),
        };
        assert!(!can_submit(&stage, ""));
        assert!(!can_submit(&stage, "   "));
        assert!(can_submit(&stage, "a good day"));

        // never submittable before the tertiary tier
        assert!(!can_submit(&Stage::Primary, "a good day"));
        assert!(!can_submit(
            &Stage::Secondary {
                primary: "Joy".to_string()
            },
            "a good day"
        ));
    }

    #[test]
    fn test_clip_note_caps_length() {
        let long = "x".repeat(MAX_NOTE_LEN + 40);
        let clipped = clip_note(&long);
        assert_eq!(clipped.chars().count(), MAX_NOTE_LEN);

        let short = "kept as is";
        assert_eq!(clip_note(short), short);
    }

    #[test]
    fn test_clip_note_multibyte_safe() {
        let long: String = "é".repeat(MAX_NOTE_LEN + 5);
        let clipped = clip_note(&long);
        assert_eq!(clipped.chars().count(), MAX_NOTE_LEN);
        assert!(clipped.chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_breadcrumb() {
        assert_eq!(Stage::Primary.breadcrumb(), None);
        let stage = Stage::Primary.select("Love").select("Affection");
        assert_eq!(stage.breadcrumb(), Some("Love > Affection".to_string()));
    }
}
