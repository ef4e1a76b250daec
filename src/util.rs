use geo::{coord, BoundingRect, MultiPoint, Rect};

/// Axis-aligned extent of anything placed on the page. Image coordinates:
/// y grows downwards, so `top` is the smallest y.
pub trait Bounds {
    fn bounds(&self) -> Rect<f32>;

    fn top(&self) -> f32 {
        self.bounds().min().y
    }

    fn bottom(&self) -> f32 {
        self.bounds().max().y
    }

    fn left(&self) -> f32 {
        self.bounds().min().x
    }

    fn right(&self) -> f32 {
        self.bounds().max().x
    }

    fn height(&self) -> f32 {
        self.bottom() - self.top()
    }

    fn center_x(&self) -> f32 {
        let left = self.left();
        left + (self.right() - left) / 2.0
    }
}

impl Bounds for Rect<f32> {
    fn bounds(&self) -> Rect<f32> {
        *self
    }
}

/// Smallest rectangle containing every point, `None` for an empty polygon.
pub fn polygon_bounds(polygon: &[[f32; 2]]) -> Option<Rect<f32>> {
    polygon
        .iter()
        .copied()
        .collect::<MultiPoint<f32>>()
        .bounding_rect()
}

pub(crate) fn union(a: Rect<f32>, b: Rect<f32>) -> Rect<f32> {
    Rect::new(
        coord! { x: a.min().x.min(b.min().x), y: a.min().y.min(b.min().y) },
        coord! { x: a.max().x.max(b.max().x), y: a.max().y.max(b.max().y) },
    )
}

pub(crate) fn enclosing<B: Bounds>(items: &[B]) -> Option<Rect<f32>> {
    items.iter().map(Bounds::bounds).reduce(union)
}

/// Index of the first still-unassigned slot at or after `from`.
pub(crate) fn next_unassigned<T>(pool: &[Option<T>], from: usize) -> Option<usize> {
    pool.get(from..)?
        .iter()
        .position(Option::is_some)
        .map(|offset| from + offset)
}
