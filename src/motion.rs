//! Scroll-derived motion math. Everything here is a pure function of the
//! current scroll position so independent consumers (nav, hero, progress
//! bar, parallax blobs) can derive their own values without interfering.

/// Scroll offset in pixels past which the nav switches to its solid style.
pub const NAV_SOLID_THRESHOLD: f64 = 10.0;

/// Absolute scroll window, in pixels, over which the backdrop blobs drift.
pub const PARALLAX_RANGE: f64 = 800.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavState {
    Transparent,
    Solid,
}

impl NavState {
    pub fn from_offset(scroll_y: f64) -> Self {
        if scroll_y > NAV_SOLID_THRESHOLD {
            NavState::Solid
        } else {
            NavState::Transparent
        }
    }

    pub fn is_solid(self) -> bool {
        matches!(self, NavState::Solid)
    }
}

/// Piecewise-linear mapping of `x` through `(input, output)` keyframe
/// pairs. Inputs must be sorted ascending; samples outside the keyframe
/// range clamp to the first/last output.
pub fn interpolate(stops: &[(f64, f64)], x: f64) -> f64 {
    let (first_in, first_out) = stops[0];
    if x <= first_in {
        return first_out;
    }
    for pair in stops.windows(2) {
        let (x0, y0) = pair[0];
        let (x1, y1) = pair[1];
        if x <= x1 {
            if x1 == x0 {
                return y1;
            }
            let t = (x - x0) / (x1 - x0);
            return y0 + (y1 - y0) * t;
        }
    }
    stops[stops.len() - 1].1
}

/// Normalized progress through the document: 0.0 at the top, 1.0 with the
/// viewport scrolled to the end. A document no taller than the viewport has
/// no track to measure and reports 0.0.
pub fn page_progress(scroll_y: f64, doc_height: f64, viewport_height: f64) -> f64 {
    let track = doc_height - viewport_height;
    if track <= 0.0 {
        0.0
    } else {
        (scroll_y / track).clamp(0.0, 1.0)
    }
}

/// Transform values applied to the hero block as the page scrolls away.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroMotion {
    pub shift_px: f64,
    pub skew_deg: f64,
    pub opacity: f64,
}

impl HeroMotion {
    pub fn at(progress: f64) -> Self {
        HeroMotion {
            shift_px: interpolate(&[(0.0, 0.0), (1.0, -40.0)], progress),
            skew_deg: interpolate(&[(0.0, 0.0), (1.0, -2.0)], progress),
            opacity: interpolate(&[(0.0, 1.0), (0.7, 0.98), (1.0, 0.95)], progress),
        }
    }
}

/// Vertical drift of the two fixed backdrop blobs over the first
/// `PARALLAX_RANGE` pixels of scroll. The far blob moves twice as fast as
/// the near one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxMotion {
    pub near_px: f64,
    pub far_px: f64,
}

impl ParallaxMotion {
    pub fn at(scroll_y: f64) -> Self {
        ParallaxMotion {
            near_px: interpolate(&[(0.0, 0.0), (PARALLAX_RANGE, -40.0)], scroll_y),
            far_px: interpolate(&[(0.0, 0.0), (PARALLAX_RANGE, -80.0)], scroll_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_threshold_boundary() {
        assert_eq!(NavState::from_offset(0.0), NavState::Transparent);
        assert_eq!(NavState::from_offset(10.0), NavState::Transparent);
        assert_eq!(NavState::from_offset(10.5), NavState::Solid);
        assert_eq!(NavState::from_offset(500.0), NavState::Solid);

        // Reversible: scrolling back below the threshold restores transparent
        assert_eq!(NavState::from_offset(9.0), NavState::Transparent);
    }

    #[test]
    fn test_interpolate_endpoints_and_midpoint() {
        let stops = [(0.0, 0.0), (1.0, -40.0)];
        assert_eq!(interpolate(&stops, 0.0), 0.0);
        assert_eq!(interpolate(&stops, 1.0), -40.0);
        assert_eq!(interpolate(&stops, 0.5), -20.0);
    }

    #[test]
    fn test_interpolate_clamps_outside_range() {
        let stops = [(0.0, 0.0), (800.0, -80.0)];
        assert_eq!(interpolate(&stops, -100.0), 0.0);
        assert_eq!(interpolate(&stops, 1200.0), -80.0);
    }

    #[test]
    fn test_interpolate_multi_segment() {
        let stops = [(0.0, 1.0), (0.7, 0.98), (1.0, 0.95)];
        assert_eq!(interpolate(&stops, 0.0), 1.0);
        assert!((interpolate(&stops, 0.35) - 0.99).abs() < 1e-9);
        assert!((interpolate(&stops, 0.7) - 0.98).abs() < 1e-9);
        assert!((interpolate(&stops, 0.85) - 0.965).abs() < 1e-9);
        assert_eq!(interpolate(&stops, 1.0), 0.95);
    }

    #[test]
    fn test_page_progress_normalizes() {
        assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(page_progress(2000.0, 3000.0, 1000.0), 1.0);

        // Overscroll clamps rather than overshooting
        assert_eq!(page_progress(2500.0, 3000.0, 1000.0), 1.0);
        assert_eq!(page_progress(-50.0, 3000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_page_progress_degenerate_track() {
        // Document shorter than the viewport: nothing to scroll
        assert_eq!(page_progress(0.0, 500.0, 1000.0), 0.0);
        assert_eq!(page_progress(100.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn test_hero_motion_keyframes() {
        let rest = HeroMotion::at(0.0);
        assert_eq!(rest.shift_px, 0.0);
        assert_eq!(rest.skew_deg, 0.0);
        assert_eq!(rest.opacity, 1.0);

        let end = HeroMotion::at(1.0);
        assert_eq!(end.shift_px, -40.0);
        assert_eq!(end.skew_deg, -2.0);
        assert_eq!(end.opacity, 0.95);
    }

    #[test]
    fn test_parallax_motion_window() {
        let top = ParallaxMotion::at(0.0);
        assert_eq!(top.near_px, 0.0);
        assert_eq!(top.far_px, 0.0);

        let mid = ParallaxMotion::at(400.0);
        assert_eq!(mid.near_px, -20.0);
        assert_eq!(mid.far_px, -40.0);

        // Past the window the blobs hold their final offsets
        let past = ParallaxMotion::at(2000.0);
        assert_eq!(past.near_px, -40.0);
        assert_eq!(past.far_px, -80.0);
    }
}
