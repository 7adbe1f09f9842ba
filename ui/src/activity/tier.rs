//! Intensity buckets for heatmap cells.

/// Five display tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum IntensityTier {
    Empty,
    Low,
    Medium,
    High,
    Max,
}

impl IntensityTier {
    /// Legend order.
    pub const ALL: [Self; 5] = [Self::Empty, Self::Low, Self::Medium, Self::High, Self::Max];

    pub fn from_count(count: u32) -> Self {
        match count {
            0 => Self::Empty,
            1 => Self::Low,
            2 => Self::Medium,
            3 => Self::High,
            _ => Self::Max,
        }
    }

    pub fn level(self) -> u8 {
        match self {
            Self::Empty => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
            Self::Max => 4,
        }
    }

    /// Modifier class, e.g. `heatmap__cell--2`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Empty => "heatmap__cell--0",
            Self::Low => "heatmap__cell--1",
            Self::Medium => "heatmap__cell--2",
            Self::High => "heatmap__cell--3",
            Self::Max => "heatmap__cell--4",
        }
    }
}
