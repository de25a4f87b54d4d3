//! Pointer-driven 3D tilt for hover cards.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardRect {
    pub width: f64,
    pub height: f64,
}

impl CardRect {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltAngle {
    pub rotate_x_deg: f64,
    pub rotate_y_deg: f64,
}

/// Tilt for a pointer at local `(x, y)` measured from the card's top-left.
///
/// Returns `None` for a card with no area, where the angle is undefined.
pub fn tilt_for(rect: CardRect, x: f64, y: f64, max_deg: f64) -> Option<TiltAngle> {
    if rect.is_degenerate() {
        return None;
    }
    let cx = rect.width / 2.0;
    let cy = rect.height / 2.0;
    Some(TiltAngle {
        rotate_x_deg: ((y - cy) / cy) * -max_deg,
        rotate_y_deg: ((x - cx) / cx) * max_deg,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    pub angle: TiltAngle,
    pub hovered: bool,
}

impl TiltState {
    /// Next state after a pointer move. Degenerate geometry keeps `self`.
    pub fn moved(self, rect: CardRect, x: f64, y: f64, max_deg: f64) -> Self {
        match tilt_for(rect, x, y, max_deg) {
            Some(angle) => Self { angle, hovered: true },
            None => {
                log::debug!("Skipping tilt update for {}x{} card", rect.width, rect.height);
                self
            }
        }
    }

    pub fn left(self) -> Self {
        Self::default()
    }

    pub fn transform(&self) -> String {
        format!(
            "perspective(1000px) rotateX({}deg) rotateY({}deg) scale({})",
            self.angle.rotate_x_deg,
            self.angle.rotate_y_deg,
            if self.hovered { 1.05 } else { 1.0 }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MAX_TILT_DEG;

    const EPS: f64 = 1e-9;

    #[test]
    fn card_center_is_flat() {
        let angle = tilt_for(CardRect::new(200.0, 100.0), 100.0, 50.0, MAX_TILT_DEG).unwrap();
        assert_eq!(angle, TiltAngle::default());
    }

    #[test]
    fn upper_right_quadrant() {
        let angle = tilt_for(CardRect::new(200.0, 100.0), 150.0, 25.0, MAX_TILT_DEG).unwrap();
        assert!((angle.rotate_x_deg - 5.0).abs() < EPS);
        assert!((angle.rotate_y_deg - 5.0).abs() < EPS);
    }

    #[test]
    fn magnitude_grows_away_from_center() {
        let rect = CardRect::new(300.0, 120.0);
        let mut prev_y = 0.0;
        let mut prev_x = 0.0;
        for step in 1..=10 {
            let d = step as f64;
            let a = tilt_for(rect, 150.0 + d * 15.0, 60.0 + d * 6.0, MAX_TILT_DEG).unwrap();
            assert!(a.rotate_y_deg.abs() > prev_y);
            assert!(a.rotate_x_deg.abs() > prev_x);
            prev_y = a.rotate_y_deg.abs();
            prev_x = a.rotate_x_deg.abs();
        }
        assert!((prev_y - MAX_TILT_DEG).abs() < EPS);
        assert!((prev_x - MAX_TILT_DEG).abs() < EPS);
    }

    #[test]
    fn degenerate_rect_has_no_angle() {
        assert!(tilt_for(CardRect::new(0.0, 100.0), 1.0, 1.0, MAX_TILT_DEG).is_none());
        assert!(tilt_for(CardRect::new(100.0, 0.0), 1.0, 1.0, MAX_TILT_DEG).is_none());
        assert!(tilt_for(CardRect::new(f64::NAN, 10.0), 1.0, 1.0, MAX_TILT_DEG).is_none());
    }

    #[test]
    fn degenerate_move_keeps_previous_state() {
        let tilted = TiltState::default().moved(CardRect::new(200.0, 100.0), 150.0, 25.0, MAX_TILT_DEG);
        let after = tilted.moved(CardRect::new(0.0, 0.0), 10.0, 10.0, MAX_TILT_DEG);
        assert_eq!(after, tilted);
        assert!(after.hovered);
    }

    #[test]
    fn leave_always_resets() {
        let tilted = TiltState::default().moved(CardRect::new(200.0, 100.0), 0.0, 0.0, MAX_TILT_DEG);
        assert!(tilted.hovered);
        assert_ne!(tilted.angle, TiltAngle::default());

        let reset = tilted.left();
        assert_eq!(reset.angle, TiltAngle::default());
        assert!(!reset.hovered);
        assert_eq!(TiltState::default().left(), TiltState::default());
    }

    #[test]
    fn transform_scales_when_hovered() {
        let state = TiltState {
            angle: TiltAngle { rotate_x_deg: 5.0, rotate_y_deg: -2.5 },
            hovered: true,
        };
        assert_eq!(
            state.transform(),
            "perspective(1000px) rotateX(5deg) rotateY(-2.5deg) scale(1.05)"
        );
        assert!(TiltState::default().transform().ends_with("scale(1)"));
    }
}
