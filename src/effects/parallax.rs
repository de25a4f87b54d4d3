use crate::effects::pointer::PointerPosition;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> PointerPosition {
        PointerPosition::new(self.width / 2.0, self.height / 2.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ParallaxOffset {
    pub dx: f64,
    pub dy: f64,
}

impl ParallaxOffset {
    pub fn transform(&self) -> String {
        format!("translate({}px, {}px)", self.dx, self.dy)
    }
}

/// Offset of the background layer for the given pointer position.
pub fn offset(pointer: PointerPosition, viewport: Viewport, damping: f64) -> ParallaxOffset {
    let center = viewport.center();
    ParallaxOffset {
        dx: (pointer.x - center.x) * damping,
        dy: (pointer.y - center.y) * damping,
    }
}
