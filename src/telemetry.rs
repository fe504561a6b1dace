//! Scroll telemetry and the parallax math derived from it.
//!
//! Everything here is pure: the browser listeners in `viewport.rs` feed
//! snapshots in, components read derived frames out.

use std::f64::consts::PI;

/// Scroll distance over which the background completes one sweep.
/// Not derived from page height.
pub const BACKGROUND_NORMALIZATION: f64 = 1500.0;

pub const STARS_COEFF: f64 = 0.15;
pub const MOUNTAINS_COEFF: f64 = 0.35;
pub const COLONY_COEFF: f64 = 0.45;
pub const TERRAIN_COEFF: f64 = 0.5;

/// Fraction of the viewport where the terrain overlay starts before scrolling.
pub const OVERLAY_START_RATIO: f64 = 0.95;

pub const STAR_COUNT: usize = 80;

/// Rover travel per millisecond of animation time, in scene widths.
pub const ROVER_SPEED_PER_MS: f64 = 0.00005;

/// Scroll offset plus the viewport-relative top of the page's anchor
/// section. The anchor is infinitely far away until it is mounted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollSnapshot {
    pub scroll_offset: f64,
    pub anchor_top: f64,
}

impl Default for ScrollSnapshot {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            anchor_top: f64::INFINITY,
        }
    }
}

/// Drops samples identical to the previous one so unchanged scroll events
/// don't trigger re-renders.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollTelemetry {
    last: ScrollSnapshot,
}

impl ScrollTelemetry {
    /// Returns true if `next` differs from the previous sample.
    pub fn observe(&mut self, next: ScrollSnapshot) -> bool {
        if next == self.last {
            return false;
        }
        self.last = next;
        true
    }
}

/// `scroll / normalization`, clamped to `[0, 1]`.
pub fn progress(scroll: f64, normalization: f64) -> f64 {
    if !(normalization > 0.0) {
        return 0.0;
    }
    let p = scroll / normalization;
    if p.is_nan() {
        0.0
    } else {
        p.clamp(0.0, 1.0)
    }
}

/// Motion of one parallax layer. Overscroll above the top counts as zero.
pub fn layer_offset(scroll: f64, coefficient: f64) -> f64 {
    if scroll.is_nan() {
        return 0.0;
    }
    scroll.max(0.0) * coefficient
}

/// Everything the background needs for one scroll position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxFrame {
    pub progress: f64,
    pub stars_offset: f64,
    pub mountains_offset: f64,
    pub colony_offset: f64,
    pub terrain_offset: f64,
    /// Horizontal position of the Earth, percent of viewport width.
    pub earth_x_pct: f64,
    /// Vertical position of the Earth, percent of viewport height.
    pub earth_y_vh: f64,
    pub earth_rotation_deg: f64,
}

impl ParallaxFrame {
    pub fn derive(scroll: f64, normalization: f64) -> Self {
        let p = progress(scroll, normalization);
        let rotation = p * 360.0;
        Self {
            progress: p,
            stars_offset: layer_offset(scroll, STARS_COEFF),
            mountains_offset: layer_offset(scroll, MOUNTAINS_COEFF),
            colony_offset: layer_offset(scroll, COLONY_COEFF),
            terrain_offset: layer_offset(scroll, TERRAIN_COEFF),
            // Off-screen left to off-screen right, arcing up through the middle
            earth_x_pct: -25.0 + p * 190.0,
            earth_y_vh: 40.0 - (p * PI).sin() * 40.0,
            earth_rotation_deg: rotation * 0.3,
        }
    }
}

/// Flat terrain-coloured fill that tracks the foreground terrain so the
/// page below the fold stays orange.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainOverlay {
    pub top_px: f64,
    pub visible: bool,
}

impl TerrainOverlay {
    pub fn derive(snapshot: ScrollSnapshot, viewport_height: f64) -> Self {
        let base_top = viewport_height * OVERLAY_START_RATIO;
        let top = base_top - layer_offset(snapshot.scroll_offset, TERRAIN_COEFF);
        Self {
            top_px: top.max(0.0),
            visible: snapshot.anchor_top < viewport_height,
        }
    }
}

/// The rover drives back and forth across the terrain on its own clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoverState {
    progress: f64,
    direction: f64,
}

impl Default for RoverState {
    fn default() -> Self {
        Self {
            progress: 0.0,
            direction: 1.0,
        }
    }
}

impl RoverState {
    /// 1.0 when driving right, -1.0 when driving left.
    pub fn direction(&self) -> f64 {
        self.direction
    }

    /// Move by `delta_ms` of animation time, bouncing off both edges.
    pub fn advance(&mut self, delta_ms: f64) {
        if !(delta_ms > 0.0) {
            return;
        }
        let next = self.progress + delta_ms * ROVER_SPEED_PER_MS * self.direction;
        if next >= 1.0 {
            self.progress = 1.0;
            self.direction = -1.0;
        } else if next <= 0.0 {
            self.progress = 0.0;
            self.direction = 1.0;
        } else {
            self.progress = next;
        }
    }

    pub fn x_pct(&self) -> f64 {
        -20.0 + self.progress * 140.0
    }

    pub fn tilt_deg(&self) -> f64 {
        (self.progress * PI * 2.0).sin() * 3.0
    }

    pub fn bounce_px(&self) -> f64 {
        (self.progress * PI * 4.0).sin() * 3.0
    }

    /// Dust trail only once the rover is on screen.
    pub fn shows_dust(&self) -> bool {
        self.progress > 0.05
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub size: f64,
    pub left_pct: f64,
    pub top_vh: f64,
    pub opacity: f64,
}

/// Scatter `count` stars using `random` as a uniform `[0, 1)` source.
pub fn star_field(count: usize, mut random: impl FnMut() -> f64) -> Vec<Star> {
    (0..count)
        .map(|_| Star {
            size: random() * 3.0 + 1.0,
            left_pct: random() * 100.0,
            top_vh: random() * 200.0 - 20.0,
            opacity: random() * 0.5 + 0.3,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_clamps() {
        assert_eq!(progress(0.0, 1500.0), 0.0);
        assert_eq!(progress(750.0, 1500.0), 0.5);
        assert_eq!(progress(1500.0, 1500.0), 1.0);
        assert_eq!(progress(1.0e12, 1500.0), 1.0);
        assert_eq!(progress(f64::INFINITY, 1500.0), 1.0);
        assert_eq!(progress(-40.0, 1500.0), 0.0);
        assert_eq!(progress(f64::NAN, 1500.0), 0.0);
        assert_eq!(progress(100.0, 0.0), 0.0);
    }

    #[test]
    fn test_offsets_monotonic_in_scroll() {
        let mut previous = ParallaxFrame::derive(0.0, BACKGROUND_NORMALIZATION);
        let mut scroll = 0.0;
        while scroll < 5000.0 {
            scroll += 37.5;
            let frame = ParallaxFrame::derive(scroll, BACKGROUND_NORMALIZATION);
            assert!(frame.stars_offset >= previous.stars_offset);
            assert!(frame.mountains_offset >= previous.mountains_offset);
            assert!(frame.colony_offset >= previous.colony_offset);
            assert!(frame.terrain_offset >= previous.terrain_offset);
            assert!(frame.progress >= previous.progress);
            assert!(frame.progress <= 1.0);
            previous = frame;
        }
    }

    #[test]
    fn test_layers_move_at_their_coefficients() {
        let frame = ParallaxFrame::derive(1000.0, BACKGROUND_NORMALIZATION);
        assert!((frame.stars_offset - 150.0).abs() < 1e-9);
        assert!((frame.mountains_offset - 350.0).abs() < 1e-9);
        assert!((frame.colony_offset - 450.0).abs() < 1e-9);
        assert_eq!(frame.terrain_offset, 500.0);
    }

    #[test]
    fn test_earth_arc() {
        let start = ParallaxFrame::derive(0.0, BACKGROUND_NORMALIZATION);
        assert_eq!(start.earth_x_pct, -25.0);
        assert_eq!(start.earth_y_vh, 40.0);

        let middle = ParallaxFrame::derive(750.0, BACKGROUND_NORMALIZATION);
        assert!((middle.earth_x_pct - 70.0).abs() < 1e-9);
        assert!(middle.earth_y_vh.abs() < 1e-9);
        assert!((middle.earth_rotation_deg - 54.0).abs() < 1e-9);

        let end = ParallaxFrame::derive(3000.0, BACKGROUND_NORMALIZATION);
        assert_eq!(end.earth_x_pct, 165.0);
        assert!((end.earth_y_vh - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_telemetry_skips_unchanged() {
        let mut telemetry = ScrollTelemetry::default();
        assert!(!telemetry.observe(ScrollSnapshot::default()));

        let sample = ScrollSnapshot {
            scroll_offset: 120.0,
            anchor_top: 640.0,
        };
        assert!(telemetry.observe(sample));
        assert!(!telemetry.observe(sample));
        assert!(telemetry.observe(ScrollSnapshot {
            anchor_top: 600.0,
            ..sample
        }));
        assert_eq!(telemetry.last.anchor_top, 600.0);
    }

    #[test]
    fn test_overlay() {
        let hidden = TerrainOverlay::derive(ScrollSnapshot::default(), 1000.0);
        assert!((hidden.top_px - 950.0).abs() < 1e-9);
        assert!(!hidden.visible);

        let shown = TerrainOverlay::derive(
            ScrollSnapshot {
                scroll_offset: 400.0,
                anchor_top: 999.0,
            },
            1000.0,
        );
        assert!((shown.top_px - 750.0).abs() < 1e-9);
        assert!(shown.visible);

        let far = TerrainOverlay::derive(
            ScrollSnapshot {
                scroll_offset: 5000.0,
                anchor_top: -2000.0,
            },
            1000.0,
        );
        assert_eq!(far.top_px, 0.0);
    }

    #[test]
    fn test_rover_bounces() {
        let mut rover = RoverState::default();
        rover.advance(10_000.0);
        assert!((rover.progress - 0.5).abs() < 1e-9);
        assert_eq!(rover.direction(), 1.0);

        rover.advance(20_000.0);
        assert_eq!(rover.progress, 1.0);
        assert_eq!(rover.direction(), -1.0);

        rover.advance(4_000.0);
        assert!((rover.progress - 0.8).abs() < 1e-9);

        rover.advance(100_000.0);
        assert_eq!(rover.progress, 0.0);
        assert_eq!(rover.direction(), 1.0);
        assert!(!rover.shows_dust());
        assert_eq!(rover.x_pct(), -20.0);
    }

    #[test]
    fn test_rover_ignores_bad_deltas() {
        let mut rover = RoverState::default();
        rover.advance(-16.0);
        rover.advance(f64::NAN);
        assert_eq!(rover, RoverState::default());
    }

    #[test]
    fn test_star_field_ranges() {
        let mut seed = 0.0;
        let stars = star_field(STAR_COUNT, || {
            seed = (seed + 0.37) % 1.0;
            seed
        });
        assert_eq!(stars.len(), STAR_COUNT);
        for star in stars {
            assert!((1.0..4.0).contains(&star.size));
            assert!((0.0..100.0).contains(&star.left_pct));
            assert!((-20.0..180.0).contains(&star.top_vh));
            assert!((0.3..0.8).contains(&star.opacity));
        }
    }
}
