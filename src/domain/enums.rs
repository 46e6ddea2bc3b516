use crate::error::TaskError;

/// Urgency bucket of a task, most urgent first
///
/// The declaration order matters: `Late < Critical < ... < Normal`, so a
/// numerically greater bucket is a less urgent one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Urgency {
    Late,
    Critical,
    Urgent,
    Important,
    Normal,
}

/// Color family used when painting a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Alert,
    Warning,
    Notice,
    Calm,
}

impl Urgency {
    /// Number of buckets, also the number of listing groups
    pub const COUNT: usize = 5;

    /// Get all buckets in listing order
    pub fn all() -> &'static [Urgency] {
        &[
            Urgency::Late,
            Urgency::Critical,
            Urgency::Urgent,
            Urgency::Important,
            Urgency::Normal,
        ]
    }

    /// Bucket id as stored in the task file (0..=4)
    pub fn id(&self) -> u8 {
        match self {
            Urgency::Late => 0,
            Urgency::Critical => 1,
            Urgency::Urgent => 2,
            Urgency::Important => 3,
            Urgency::Normal => 4,
        }
    }

    /// Bucket for a stored id
    pub fn from_id(id: u8) -> Option<Self> {
        Self::all().get(id as usize).copied()
    }

    /// Parse the urgency field of a record ("0" to "4")
    pub fn parse_id(value: &str) -> Result<Self, TaskError> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .and_then(Self::from_id)
            .ok_or_else(|| TaskError::invalid_urgency(value.trim()))
    }

    /// Parse a user choice ("1" to "5"), which is the bucket id plus one
    pub fn parse_choice(value: &str) -> Result<Self, TaskError> {
        value
            .trim()
            .parse::<u8>()
            .ok()
            .filter(|choice| (1..=5).contains(choice))
            .and_then(|choice| Self::from_id(choice - 1))
            .ok_or_else(|| TaskError::invalid_urgency(value.trim()))
    }

    /// Status label shown in the listing, always 10 columns wide
    pub fn label(&self) -> &'static str {
        match self {
            Urgency::Late => "   late   ",
            Urgency::Critical => " critical ",
            Urgency::Urgent => "  urgent  ",
            Urgency::Important => "  touchy  ",
            Urgency::Normal => "  normal  ",
        }
    }

    /// Display name used in prompts
    pub fn name(&self) -> &'static str {
        match self {
            Urgency::Late => "late",
            Urgency::Critical => "critical",
            Urgency::Urgent => "urgent",
            Urgency::Important => "important",
            Urgency::Normal => "normal",
        }
    }

    /// Color family for this bucket (late and critical share one)
    pub fn tone(&self) -> Tone {
        match self {
            Urgency::Late | Urgency::Critical => Tone::Alert,
            Urgency::Urgent => Tone::Warning,
            Urgency::Important => Tone::Notice,
            Urgency::Normal => Tone::Calm,
        }
    }
}

/// Tighten `current` to the floor implied by `days_left`
///
/// Late and critical floors always apply. The urgent and important floors
/// only apply when `current` is less urgent than them, so a classification
/// never loosens.
pub fn classify(days_left: i64, current: Urgency) -> Urgency {
    match days_left {
        d if d < 0 => Urgency::Late,
        0 | 1 => Urgency::Critical,
        2 if current > Urgency::Urgent => Urgency::Urgent,
        3 | 4 if current > Urgency::Important => Urgency::Important,
        _ => current,
    }
}
