use std::ops::Range;

/// Snowfall variants the page can be served with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnowfallPreset {
    /// 50 fixed-size flakes that drift slowly.
    Classic,
    /// 80 flakes of varying size, falling a bit faster.
    Blizzard,
}

impl SnowfallPreset {
    pub fn count(self) -> usize {
        match self {
            SnowfallPreset::Classic => 50,
            SnowfallPreset::Blizzard => 80,
        }
    }

    pub fn delay_s(self) -> Range<f64> {
        0.0..10.0
    }

    pub fn duration_s(self) -> Range<f64> {
        match self {
            SnowfallPreset::Classic => 10.0..25.0,
            SnowfallPreset::Blizzard => 8.0..20.0,
        }
    }

    pub fn size_px(self) -> Option<Range<f64>> {
        match self {
            SnowfallPreset::Classic => None,
            SnowfallPreset::Blizzard => Some(15.0..40.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub id: usize,
    pub delay_s: f64,
    pub duration_s: f64,
    pub left_pct: f64,
    pub size_px: Option<f64>,
}

impl Particle {
    pub fn left(&self) -> String {
        format!("{}%", self.left_pct)
    }

    pub fn style(&self) -> String {
        let mut style = format!(
            "left: {}; animation-delay: {}s; animation-duration: {}s;",
            self.left(),
            self.delay_s,
            self.duration_s
        );
        if let Some(size) = self.size_px {
            style.push_str(&format!(" font-size: {}px;", size));
        }
        style
    }
}

fn sample(rng: &mut fastrand::Rng, range: &Range<f64>) -> f64 {
    range.start + rng.f64() * (range.end - range.start)
}

/// Draws the full flake list for a preset. Called once per page mount.
pub fn generate(preset: SnowfallPreset, rng: &mut fastrand::Rng) -> Vec<Particle> {
    let delay = preset.delay_s();
    let duration = preset.duration_s();
    let size = preset.size_px();

    (0..preset.count())
        .map(|id| Particle {
            id,
            delay_s: sample(rng, &delay),
            duration_s: sample(rng, &duration),
            left_pct: rng.f64() * 100.0,
            size_px: size.as_ref().map(|range| sample(rng, range)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_bounds(preset: SnowfallPreset, seed: u64) {
        let mut rng = fastrand::Rng::with_seed(seed);
        let flakes = generate(preset, &mut rng);
        assert_eq!(flakes.len(), preset.count());

        let duration = preset.duration_s();
        for flake in &flakes {
            assert!((0.0..10.0).contains(&flake.delay_s), "delay {}", flake.delay_s);
            assert!(
                flake.duration_s >= duration.start && flake.duration_s <= duration.end,
                "duration {}",
                flake.duration_s
            );
            assert!((0.0..100.0).contains(&flake.left_pct));
            match preset.size_px() {
                Some(_) => {
                    let size = flake.size_px.unwrap();
                    assert!((15.0..=40.0).contains(&size), "size {}", size);
                }
                None => assert!(flake.size_px.is_none()),
            }
        }
    }

    #[test]
    fn classic_flakes_stay_in_bounds() {
        for seed in 0..20 {
            check_bounds(SnowfallPreset::Classic, seed);
        }
    }

    #[test]
    fn blizzard_flakes_stay_in_bounds() {
        for seed in 0..20 {
            check_bounds(SnowfallPreset::Blizzard, seed);
        }
    }

    #[test]
    fn ids_follow_generation_order() {
        let mut rng = fastrand::Rng::with_seed(7);
        let flakes = generate(SnowfallPreset::Blizzard, &mut rng);
        assert!(flakes.iter().enumerate().all(|(i, f)| f.id == i));
    }

    #[test]
    fn same_seed_same_flakes() {
        let a = generate(SnowfallPreset::Classic, &mut fastrand::Rng::with_seed(42));
        let b = generate(SnowfallPreset::Classic, &mut fastrand::Rng::with_seed(42));
        assert_eq!(a, b);
    }

    #[test]
    fn style_carries_position_and_timing() {
        let flake = Particle {
            id: 3,
            delay_s: 1.5,
            duration_s: 12.0,
            left_pct: 40.0,
            size_px: Some(20.0),
        };
        assert_eq!(flake.left(), "40%");
        assert_eq!(
            flake.style(),
            "left: 40%; animation-delay: 1.5s; animation-duration: 12s; font-size: 20px;"
        );

        let plain = Particle { size_px: None, ..flake };
        assert!(!plain.style().contains("font-size"));
    }
}
