//! Bracket tracking for goal seeking.

/// An evaluated point `(x, f(x))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    /// Argument.
    pub x: f64,
    /// Function value at `x`.
    pub y: f64,
}

/// Best positive and negative samples seen during one solve.
///
/// Each side is filled by the first sample of that sign. After that a
/// sample replaces the held one only if it improves it:
///
/// - with both signs held, the new `x` must be strictly closer to the
///   opposite-sign `x` than the current pair is, so the bracket narrows;
/// - with only this sign held, the new `y` must be strictly closer to zero.
///
/// The bracket sizes finite-difference steps and seeds bisection. It is
/// never reset during a solve.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bracket {
    positive: Option<Sample>,
    negative: Option<Sample>,
    root: Option<f64>,
}

impl Bracket {
    /// Creates an empty bracket.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a sample. Returns true iff `y == 0`, i.e. `x` is an exact root.
    ///
    /// NaN values belong to neither side and are ignored.
    pub fn update(&mut self, x: f64, y: f64) -> bool {
        let sample = Sample { x, y };

        if y > 0.0 {
            self.positive = Some(match (self.positive, self.negative) {
                (None, _) => sample,
                (Some(pos), Some(neg)) if (x - neg.x).abs() < (pos.x - neg.x).abs() => sample,
                (Some(pos), None) if y < pos.y => sample,
                (Some(pos), _) => pos,
            });
            false
        } else if y < 0.0 {
            self.negative = Some(match (self.negative, self.positive) {
                (None, _) => sample,
                (Some(neg), Some(pos)) if (x - pos.x).abs() < (neg.x - pos.x).abs() => sample,
                (Some(neg), None) if -y < -neg.y => sample,
                (Some(neg), _) => neg,
            });
            false
        } else if y == 0.0 {
            self.root = Some(x);
            true
        } else {
            false
        }
    }

    /// Returns the held positive sample.
    #[must_use]
    pub fn positive(&self) -> Option<Sample> {
        self.positive
    }

    /// Returns the held negative sample.
    #[must_use]
    pub fn negative(&self) -> Option<Sample> {
        self.negative
    }

    /// Returns the recorded root, if the solve has found one.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.root
    }

    /// Returns true once a sample of each sign is held.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.positive.is_some() && self.negative.is_some()
    }

    /// Returns `|xpos - xneg|` when both sides are held.
    #[must_use]
    pub fn width(&self) -> Option<f64> {
        match (self.positive, self.negative) {
            (Some(pos), Some(neg)) => Some((pos.x - neg.x).abs()),
            _ => None,
        }
    }

    pub(crate) fn set_root(&mut self, x: f64) {
        self.root = Some(x);
    }
}
