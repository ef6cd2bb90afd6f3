use std::time::Duration;

use rand::random_range;

use crate::vec2f::Vec2f;

/// Which walls the rectangle hit during a single step.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Bounces {
    pub horizontal: bool, // Left or right wall was crossed.
    pub vertical: bool,   // Top or bottom wall was crossed.
}

impl Bounces {
    /// Checks if either axis collided this step.
    #[inline]
    pub fn any(self) -> bool {
        self.horizontal || self.vertical
    }
}

/// State of the bouncing rectangle. Owns position, velocity, and the current
/// fill color; the platform layer owns everything drawn around it.
#[derive(Debug)]
pub(crate) struct Simulation {
    bounds: Vec2f,   // Dimensions of the area the rectangle is confined to.
    position: Vec2f, // Top-left corner of the rectangle.
    size: Vec2f,     // Width and height, constant for the session.
    velocity: Vec2f, // Units per second on each axis.
    color: u32,      // Current 24-bit RGB fill color.
}

impl Simulation {
    /// Default rectangle width, used when no overlay image is loaded.
    pub const RECT_WIDTH: f32 = 96.0;
    /// Rectangle height, fixed regardless of overlay.
    pub const RECT_HEIGHT: f32 = 64.0;
    /// Speed on each axis in units per second.
    pub const VELOCITY: f32 = 128.0;

    /// Creates a rectangle at a random position, clamped so it starts fully
    /// inside the bounds, moving down-right at the fixed speed.
    pub fn new(bounds: Vec2f, size: Vec2f) -> Self {
        let mut position = Vec2f(random_range(0.0..bounds.0), random_range(0.0..bounds.1));
        position.0 = position.0.min(bounds.0 - size.0);
        position.1 = position.1.min(bounds.1 - size.1);

        Self {
            bounds,
            position,
            size,
            velocity: Vec2f(Self::VELOCITY, Self::VELOCITY),
            color: random_range(0..0x0100_0000),
        }
    }

    /// Rectangle dimensions for a session: height is fixed, width comes from
    /// the overlay's aspect ratio when one was loaded.
    pub fn size_for(aspect: Option<f32>) -> Vec2f {
        match aspect {
            Some(ratio) => Vec2f(Self::RECT_HEIGHT * ratio, Self::RECT_HEIGHT),
            None => Vec2f(Self::RECT_WIDTH, Self::RECT_HEIGHT),
        }
    }

    /// Advances the rectangle by the elapsed time and reflects the velocity
    /// off any wall the post-integration position crossed. The position is
    /// not clamped; the overshoot resolves on a later step. Color and sound
    /// side effects stay with the caller, once per colliding axis.
    pub fn advance(&mut self, delta: Duration) -> Bounces {
        self.position += self.velocity.scale(delta.as_secs_f32());

        let mut bounces = Bounces::default();
        if self.position.0 <= 0.0 || self.position.0 + self.size.0 >= self.bounds.0 {
            self.velocity.0 = -self.velocity.0;
            bounces.horizontal = true;
        }
        if self.position.1 <= 0.0 || self.position.1 + self.size.1 >= self.bounds.1 {
            self.velocity.1 = -self.velocity.1;
            bounces.vertical = true;
        }

        bounces
    }

    /// Replaces the fill color with a uniformly random 24-bit value. The new
    /// color may repeat the previous one.
    pub fn resample_color(&mut self) {
        self.color = random_range(0..0x0100_0000);
    }

    /// Obtains the top-left corner of the rectangle.
    #[inline]
    pub fn position(&self) -> Vec2f {
        self.position
    }

    /// Obtains the rectangle dimensions.
    #[inline]
    pub fn size(&self) -> Vec2f {
        self.size
    }

    /// Obtains the velocity in units per second.
    #[inline]
    pub fn velocity(&self) -> Vec2f {
        self.velocity
    }

    /// Obtains the current packed 24-bit RGB color.
    #[inline]
    pub fn color(&self) -> u32 {
        self.color
    }

    /// Unpacks the current color into RGB components.
    #[inline]
    pub fn color_rgb(&self) -> (u8, u8, u8) {
        (
            (self.color >> 16 & 0xFF) as u8,
            (self.color >> 8 & 0xFF) as u8,
            (self.color & 0xFF) as u8,
        )
    }

    /// Overrides position and velocity for scenario tests.
    #[cfg(test)]
    fn place(&mut self, position: Vec2f, velocity: Vec2f) {
        self.position = position;
        self.velocity = velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Vec2f = Vec2f(800.0, 600.0);
    const SIZE: Vec2f = Vec2f(96.0, 64.0);

    fn sim() -> Simulation {
        Simulation::new(BOUNDS, SIZE)
    }

    #[test]
    fn integration_moves_by_velocity_over_elapsed_time() {
        let mut sim = sim();
        sim.place(Vec2f::ZERO, Vec2f(128.0, 128.0));
        let color = sim.color();

        let bounces = sim.advance(Duration::from_millis(1000));

        assert_eq!(sim.position(), Vec2f(128.0, 128.0));
        assert_eq!(sim.velocity(), Vec2f(128.0, 128.0));
        assert_eq!(sim.color(), color);
        assert!(!bounces.any());
    }

    #[test]
    fn zero_delta_leaves_position_unchanged() {
        let mut sim = sim();
        sim.place(Vec2f(100.0, 100.0), Vec2f(128.0, 128.0));

        let bounces = sim.advance(Duration::ZERO);

        assert_eq!(sim.position(), Vec2f(100.0, 100.0));
        assert!(!bounces.any());
    }

    #[test]
    fn right_wall_reflects_horizontal_velocity() {
        let mut sim = sim();
        sim.place(Vec2f(704.0, 100.0), Vec2f(128.0, 0.0));

        let bounces = sim.advance(Duration::from_millis(1000));

        // Overshoot is kept; only the velocity reflects.
        assert_eq!(sim.position(), Vec2f(832.0, 100.0));
        assert_eq!(sim.velocity(), Vec2f(-128.0, 0.0));
        assert!(bounces.horizontal);
        assert!(!bounces.vertical);
    }

    #[test]
    fn left_wall_reflects_horizontal_velocity() {
        let mut sim = sim();
        sim.place(Vec2f(10.0, 200.0), Vec2f(-128.0, 0.0));

        let bounces = sim.advance(Duration::from_millis(1000));

        assert_eq!(sim.velocity(), Vec2f(128.0, 0.0));
        assert!(bounces.horizontal);
        assert!(!bounces.vertical);
    }

    #[test]
    fn bottom_wall_reflects_vertical_velocity() {
        let mut sim = sim();
        sim.place(Vec2f(100.0, 535.0), Vec2f(0.0, 128.0));

        let bounces = sim.advance(Duration::from_millis(100));

        // 535 + 12.8 = 547.8; 547.8 + 64 >= 600.
        assert_eq!(sim.velocity(), Vec2f(0.0, -128.0));
        assert!(!bounces.horizontal);
        assert!(bounces.vertical);
    }

    #[test]
    fn corner_hit_reports_both_axes() {
        let mut sim = sim();
        sim.place(Vec2f(704.0, 536.0), Vec2f(128.0, 128.0));

        let bounces = sim.advance(Duration::from_millis(1000));

        assert!(bounces.horizontal);
        assert!(bounces.vertical);
        assert_eq!(sim.velocity(), Vec2f(-128.0, -128.0));
    }

    #[test]
    fn each_axis_reflects_at_most_once_per_step() {
        let mut sim = sim();
        // Far past the right wall; still a single reflection.
        sim.place(Vec2f(790.0, 100.0), Vec2f(128.0, 0.0));

        let bounces = sim.advance(Duration::from_millis(5000));

        assert!(bounces.horizontal);
        assert_eq!(sim.velocity(), Vec2f(-128.0, 0.0));
    }

    #[test]
    fn resting_on_wall_with_zero_delta_reflects() {
        let mut sim = sim();
        sim.place(Vec2f(0.0, 100.0), Vec2f(128.0, 0.0));

        // The check runs on the post-integration position, so a rectangle
        // sitting exactly on a wall counts as a hit even with no movement.
        let bounces = sim.advance(Duration::ZERO);

        assert!(bounces.horizontal);
        assert_eq!(sim.velocity(), Vec2f(-128.0, 0.0));
    }

    #[test]
    fn non_colliding_steps_are_idempotent_for_velocity_and_color() {
        let mut sim = sim();
        sim.place(Vec2f(10.0, 10.0), Vec2f(128.0, 128.0));
        let color = sim.color();

        for _ in 0..4 {
            let bounces = sim.advance(Duration::from_millis(100));
            assert!(!bounces.any());
        }

        assert_eq!(sim.velocity(), Vec2f(128.0, 128.0));
        assert_eq!(sim.color(), color);
    }

    #[test]
    fn spawn_starts_fully_inside_bounds() {
        for _ in 0..100 {
            let sim = sim();
            let pos = sim.position();
            assert!(pos.0 >= 0.0 && pos.0 <= BOUNDS.0 - SIZE.0);
            assert!(pos.1 >= 0.0 && pos.1 <= BOUNDS.1 - SIZE.1);
        }
    }

    #[test]
    fn spawn_moves_down_right_at_fixed_speed() {
        let sim = sim();
        assert_eq!(
            sim.velocity(),
            Vec2f(Simulation::VELOCITY, Simulation::VELOCITY)
        );
    }

    #[test]
    fn resampled_color_stays_within_24_bits() {
        let mut sim = sim();
        for _ in 0..50 {
            sim.resample_color();
            assert!(sim.color() <= 0x00FF_FFFF);
        }
    }

    #[test]
    fn color_components_repack_to_the_sampled_value() {
        let mut sim = sim();
        for _ in 0..50 {
            sim.resample_color();
            let (r, g, b) = sim.color_rgb();
            let repacked = (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
            assert_eq!(repacked, sim.color());
        }
    }

    #[test]
    fn default_size_is_used_without_an_overlay() {
        assert_eq!(Simulation::size_for(None), Vec2f(96.0, 64.0));
    }

    #[test]
    fn overlay_aspect_ratio_drives_the_width() {
        // A 128x64 source image has a 2.0 ratio.
        assert_eq!(Simulation::size_for(Some(2.0)), Vec2f(128.0, 64.0));
        assert_eq!(Simulation::size_for(Some(0.5)), Vec2f(32.0, 64.0));
    }
}
