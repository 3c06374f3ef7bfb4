//! Field parameters

/// Default grid cell size in pixels
pub const DEFAULT_GRID_SIZE: u32 = 20;
/// Default gap between grid cells in pixels
pub const DEFAULT_SEPARATION: u32 = 1;
/// Default number of groups
pub const DEFAULT_GROUP_COUNT: usize = 2;
/// Default number of frames between moves
pub const DEFAULT_MOVE_INTERVAL: u64 = 4;
/// Default probability that a lattice point holds a figure
pub const DEFAULT_DENSITY: f64 = 0.1;
/// Default cap on direction resampling
pub const DEFAULT_MAX_DIRECTION_ATTEMPTS: u32 = 1000;

/// Parameters that shape a field
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Grid cell size `G`
    pub grid_size: u32,
    /// Cell separation `S`
    pub separation: u32,
    /// Number of groups to build
    pub group_count: usize,
    /// Frames between moves (at least 1)
    pub move_interval: u64,
    /// Probability in `[0, 1]` that a lattice point gets a figure
    pub density: f64,
    /// Upper bound on direction draws per group
    pub max_direction_attempts: u32,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            separation: DEFAULT_SEPARATION,
            group_count: DEFAULT_GROUP_COUNT,
            move_interval: DEFAULT_MOVE_INTERVAL,
            density: DEFAULT_DENSITY,
            max_direction_attempts: DEFAULT_MAX_DIRECTION_ATTEMPTS,
        }
    }
}

impl FieldParams {
    /// Create params with the given grid geometry and defaults elsewhere
    pub fn new(grid_size: u32, separation: u32) -> Self {
        Self {
            grid_size,
            separation,
            ..Self::default()
        }
    }

    pub fn with_group_count(mut self, group_count: usize) -> Self {
        self.group_count = group_count;
        self
    }

    /// Set the move interval (0 is treated as 1)
    pub fn with_move_interval(mut self, frames: u64) -> Self {
        self.move_interval = frames.max(1);
        self
    }

    /// Set the figure density (clamped to `[0, 1]`)
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        self
    }

    pub fn with_max_direction_attempts(mut self, attempts: u32) -> Self {
        self.max_direction_attempts = attempts.max(1);
        self
    }

    /// Distance between lattice points, `G + S`
    #[inline]
    pub fn step(&self) -> u32 {
        self.grid_size.saturating_add(self.separation)
    }

    /// Drawn shape size, `G - S`
    #[inline]
    pub fn shape_size(&self) -> f32 {
        self.grid_size as f32 - self.separation as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let p = FieldParams::default();
        assert_eq!(p.step(), 21);
        assert_eq!(p.shape_size(), 19.0);
        assert_eq!(p.group_count, 2);
        assert_eq!(p.move_interval, 4);
    }

    #[test]
    fn test_builders_normalize() {
        let p = FieldParams::new(10, 2)
            .with_move_interval(0)
            .with_density(3.0)
            .with_max_direction_attempts(0);
        assert_eq!(p.move_interval, 1);
        assert_eq!(p.density, 1.0);
        assert_eq!(p.max_direction_attempts, 1);
        assert_eq!(p.step(), 12);
        assert_eq!(p.shape_size(), 8.0);

        assert_eq!(FieldParams::default().with_density(f64::NAN).density, 0.0);
    }
}
