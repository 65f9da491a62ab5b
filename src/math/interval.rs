/// Which endpoints of an [`Interval`] are included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntervalType {
    /// `[min, max]`
    Closed,
    /// `(min, max]`
    OpenStart,
    /// `[min, max)`
    OpenEnd,
    /// `(min, max)`
    Open,
}

impl IntervalType {
    /// Swaps the roles of start and end.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::OpenStart => Self::OpenEnd,
            Self::OpenEnd => Self::OpenStart,
            other => other,
        }
    }

    #[must_use]
    pub fn includes_start(self) -> bool {
        matches!(self, Self::Closed | Self::OpenEnd)
    }

    #[must_use]
    pub fn includes_end(self) -> bool {
        matches!(self, Self::Closed | Self::OpenStart)
    }
}

/// A range of numbers with configurable endpoint inclusion.
///
/// `min <= max` is expected but not checked. When `min == max` the single
/// value is contained unless the interval is [`IntervalType::Open`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
    include_min: bool,
    include_max: bool,
}

impl Interval {
    #[must_use]
    pub fn new(min: f64, max: f64, interval_type: IntervalType) -> Self {
        #[allow(clippy::float_cmp)]
        let (include_min, include_max) = if min == max {
            let inside = interval_type != IntervalType::Open;
            (inside, inside)
        } else {
            (interval_type.includes_start(), interval_type.includes_end())
        };
        Self {
            min,
            max,
            include_min,
            include_max,
        }
    }

    /// Shorthand for a closed interval `[min, max]`.
    #[must_use]
    pub fn closed(min: f64, max: f64) -> Self {
        Self::new(min, max, IntervalType::Closed)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above_min = if self.include_min {
            self.min <= value
        } else {
            self.min < value
        };
        let below_max = if self.include_max {
            value <= self.max
        } else {
            value < self.max
        };
        above_min && below_max
    }
}
