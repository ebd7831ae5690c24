use swiperow_graphics::Axis;

/// Direction a row is being swiped in.
///
/// `Still` means no direction has been locked for the current gesture.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum SwipeDirection {
    #[default]
    Still = 0x00,
    Up = 0x01,
    Down = 0x02,
    Left = 0x04,
    Right = 0x08,
}

impl SwipeDirection {
    pub fn axis(self) -> Option<Axis> {
        match self {
            SwipeDirection::Still => None,
            SwipeDirection::Left | SwipeDirection::Right => Some(Axis::Horizontal),
            SwipeDirection::Up | SwipeDirection::Down => Some(Axis::Vertical),
        }
    }

    pub fn is_horizontal(self) -> bool {
        self.axis() == Some(Axis::Horizontal)
    }

    pub fn is_vertical(self) -> bool {
        self.axis() == Some(Axis::Vertical)
    }

    /// Clamps `distance` to the half-range this direction travels in:
    /// `[-extent, 0]` for Left/Up and `[0, extent]` for Right/Down.
    pub fn clamp_distance(self, distance: i32, extent: i32) -> i32 {
        let extent = extent.max(0);
        match self {
            SwipeDirection::Still => 0,
            SwipeDirection::Left | SwipeDirection::Up => distance.clamp(-extent, 0),
            SwipeDirection::Right | SwipeDirection::Down => distance.clamp(0, extent),
        }
    }
}

/// Set of directions a row accepts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionMask(u8);

impl DirectionMask {
    pub const NONE: Self = Self(0);
    pub const UP: Self = Self(SwipeDirection::Up as u8);
    pub const DOWN: Self = Self(SwipeDirection::Down as u8);
    pub const LEFT: Self = Self(SwipeDirection::Left as u8);
    pub const RIGHT: Self = Self(SwipeDirection::Right as u8);
    pub const HORIZONTAL: Self = Self(Self::LEFT.0 | Self::RIGHT.0);
    pub const ALL: Self = Self(Self::UP.0 | Self::DOWN.0 | Self::LEFT.0 | Self::RIGHT.0);

    /// Builds a mask from raw bits, dropping unknown ones.
    pub fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn with(mut self, direction: SwipeDirection) -> Self {
        self.insert(direction);
        self
    }

    pub fn insert(&mut self, direction: SwipeDirection) {
        self.0 |= direction as u8;
    }

    pub fn remove(&mut self, direction: SwipeDirection) {
        self.0 &= !(direction as u8);
    }

    pub fn contains(self, direction: SwipeDirection) -> bool {
        direction != SwipeDirection::Still && (self.0 & direction as u8) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl Default for DirectionMask {
    fn default() -> Self {
        Self::NONE
    }
}

impl std::ops::BitOr for DirectionMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
