use crate::error::GameError;

/// Width and height of an entity. Always finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    width: f64,
    height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Result<Self, GameError> {
        if valid_extent(width) && valid_extent(height) {
            Ok(Size { width, height })
        } else {
            Err(GameError::InvalidDimensions { width, height })
        }
    }

    /// Compile-time checked constructor for built-in sizes.
    pub const fn constant(width: f64, height: f64) -> Self {
        assert!(width > 0.0 && height > 0.0, "sizes must be positive");
        Size { width, height }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

fn valid_extent(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Axis-aligned rectangle, `x`/`y` being the top-left corner in viewport pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    size: Size,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, GameError> {
        Ok(Rect::from_size(x, y, Size::new(width, height)?))
    }

    pub fn from_size(x: f64, y: f64, size: Size) -> Self {
        Rect { x, y, size }
    }

    pub fn width(&self) -> f64 {
        self.size.width
    }

    pub fn height(&self) -> f64 {
        self.size.height
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn right(&self) -> f64 {
        self.x + self.size.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.size.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.size.width / 2.0
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        overlaps(self, other)
    }
}

/// True iff the two rectangles share a region of non-zero area.
/// Rectangles that only touch along an edge do not overlap.
pub fn overlaps(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && a.right() > b.x && a.y < b.bottom() && a.bottom() > b.y
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    width: f64,
    height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, GameError> {
        if valid_extent(width) && valid_extent(height) {
            Ok(Viewport { width, height })
        } else {
            Err(GameError::InvalidDimensions { width, height })
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Largest `x` at which a body of the given width still fits on screen.
    pub fn max_x(&self, width: f64) -> f64 {
        (self.width - width).max(0.0)
    }

    pub fn max_y(&self, height: f64) -> f64 {
        (self.height - height).max(0.0)
    }

    /// Pulls the rectangle back inside the viewport.
    pub fn clamp(&self, rect: &mut Rect) {
        rect.x = rect.x.clamp(0.0, self.max_x(rect.width()));
        rect.y = rect.y.clamp(0.0, self.max_y(rect.height()));
    }
}
