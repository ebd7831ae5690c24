use swiperow_graphics::Point;

pub type PointerId = u64;

/// What a pointer event reports.
///
/// Hosts map their native actions onto the four gesture kinds; anything else
/// (hover, secondary pointers, outside touches) arrives as `Other` carrying
/// the raw action code, and rows report it as unhandled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
    Other(u16),
}

/// A single pointer sample in row-local coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    /// Host timestamp in milliseconds. Only differences are meaningful.
    pub time_millis: u64,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            time_millis: 0,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, Point::new(x, y))
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, Point::new(x, y))
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, Point::new(x, y))
    }

    pub fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, Point::new(x, y))
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    pub fn at_time(mut self, time_millis: u64) -> Self {
        self.time_millis = time_millis;
        self
    }
}
