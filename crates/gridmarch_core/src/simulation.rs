//! The marching field simulation
//!
//! A [`Simulation`] owns every group and the frame counter. The host builds
//! it once with [`Simulation::setup`], then calls [`Simulation::tick`] every
//! frame and [`Simulation::resize`] whenever the canvas changes size.

use std::fmt;

use crate::canvas::Canvas;
use crate::color::{palette_color, Rgb};
use crate::figure::{Direction, Figure, Group, ShapeKind};
use crate::params::FieldParams;
use crate::random::RandomSource;

/// Error returned when a field cannot be built
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    /// The random source kept producing (0, 0) directions
    DirectionSamplingExhausted {
        /// Index of the group being built
        group: usize,
        /// Number of draws made before giving up
        attempts: u32,
    },
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupError::DirectionSamplingExhausted { group, attempts } => write!(
                f,
                "No non-zero direction for group {} after {} attempts",
                group, attempts
            ),
        }
    }
}

impl std::error::Error for SetupError {}

/// Simulation state for one canvas
#[derive(Clone, Debug)]
pub struct Simulation {
    groups: Vec<Group>,
    params: FieldParams,
    width: u32,
    height: u32,
    background: Rgb,
    frame_counter: u64,
}

impl Simulation {
    /// Build a field for a `width` x `height` canvas
    ///
    /// An empty palette yields a simulation without groups.
    pub fn setup<R: RandomSource + ?Sized>(
        width: u32,
        height: u32,
        params: FieldParams,
        palette: &[Rgb],
        random: &mut R,
    ) -> Result<Self, SetupError> {
        let groups = initialize_groups(width, height, &params, palette, random)?;
        log::info!(
            "Built {} groups with {} figures on a {}x{} canvas",
            groups.len(),
            groups.iter().map(Group::figure_count).sum::<usize>(),
            width,
            height
        );
        Ok(Self::from_groups(width, height, params, groups))
    }

    /// Wrap existing groups in a simulation
    pub fn from_groups(width: u32, height: u32, params: FieldParams, groups: Vec<Group>) -> Self {
        Self {
            groups,
            params,
            width,
            height,
            background: Rgb::BLACK,
            frame_counter: 0,
        }
    }

    /// Set the color painted behind the figures each frame
    pub fn with_background(mut self, color: Rgb) -> Self {
        self.background = color;
        self
    }

    /// Advance one frame and draw it
    ///
    /// Figures move only on frames where the counter is a multiple of the
    /// move interval; drawing happens every frame.
    pub fn tick<C: Canvas + ?Sized>(&mut self, canvas: &mut C) {
        canvas.clear_background(self.background);

        if self.is_move_frame() {
            self.update_groups();
        }
        self.draw_groups(canvas);

        self.frame_counter = self.frame_counter.wrapping_add(1);
    }

    /// Adopt new canvas extents without touching figures
    ///
    /// Figures left outside the new bounds are wrapped on their next move.
    pub fn resize(&mut self, width: u32, height: u32) {
        log::debug!(
            "Canvas resized from {}x{} to {}x{}",
            self.width,
            self.height,
            width,
            height
        );
        self.width = width;
        self.height = height;
    }

    /// Move every figure one lattice step and wrap at the canvas edges
    pub fn update_groups(&mut self) {
        let step = to_i32(self.params.step());
        let width = to_i32(self.width);
        let height = to_i32(self.height);

        for group in &mut self.groups {
            let dir = group.direction();
            for figure in group.figures_mut() {
                figure.x = wrap_axis(figure.x.saturating_add(dir.dx() * step), width, step);
                figure.y = wrap_axis(figure.y.saturating_add(dir.dy() * step), height, step);
            }
        }
    }

    /// Draw every group onto the canvas
    pub fn draw_groups<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        let size = self.params.shape_size();
        let inset = self.params.separation as f32 / 2.0;

        for group in &self.groups {
            canvas.set_fill_color(group.color());
            for figure in group.figures() {
                draw_shape(canvas, figure.x as f32, figure.y as f32, size, inset, figure.kind());
            }
        }
    }

    /// Whether the current frame moves figures
    #[inline]
    pub fn is_move_frame(&self) -> bool {
        self.frame_counter % self.params.move_interval.max(1) == 0
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn params(&self) -> &FieldParams {
        &self.params
    }

    /// Current canvas size as (width, height)
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    /// Frames ticked so far
    pub fn frame_counter(&self) -> u64 {
        self.frame_counter
    }

    /// Total figures across all groups
    pub fn figure_count(&self) -> usize {
        self.groups.iter().map(Group::figure_count).sum()
    }
}

/// Build the groups of a field
///
/// Group `i` takes palette color `i mod len`, a random non-zero direction and
/// a sparse random sample of the lattice.
pub fn initialize_groups<R: RandomSource + ?Sized>(
    width: u32,
    height: u32,
    params: &FieldParams,
    palette: &[Rgb],
    random: &mut R,
) -> Result<Vec<Group>, SetupError> {
    if palette.is_empty() {
        if params.group_count > 0 {
            log::warn!("Empty palette, building no groups");
        }
        return Ok(Vec::new());
    }
    if params.step() == 0 {
        log::warn!("Lattice step is zero, groups will have no figures");
    }

    let mut groups = Vec::with_capacity(params.group_count);
    for i in 0..params.group_count {
        let Some(color) = palette_color(palette, i) else {
            break;
        };
        let direction = sample_direction(random, params.max_direction_attempts)
            .ok_or(SetupError::DirectionSamplingExhausted {
                group: i,
                attempts: params.max_direction_attempts,
            })?;
        let figures = scatter_figures(width, height, params, random);
        log::debug!(
            "Group {}: {} figures, direction ({}, {})",
            i,
            figures.len(),
            direction.dx(),
            direction.dy()
        );
        groups.push(Group::new(figures, color, direction));
    }
    Ok(groups)
}

/// Draw directions until one is non-zero, giving up after `max_attempts`
pub fn sample_direction<R: RandomSource + ?Sized>(
    random: &mut R,
    max_attempts: u32,
) -> Option<Direction> {
    for _ in 0..max_attempts {
        let dx = random.int_in_range(-1, 2);
        let dy = random.int_in_range(-1, 2);
        if let Some(direction) = Direction::new(dx, dy) {
            return Some(direction);
        }
    }
    None
}

/// Sample figures over the lattice, columns outer and rows inner
fn scatter_figures<R: RandomSource + ?Sized>(
    width: u32,
    height: u32,
    params: &FieldParams,
    random: &mut R,
) -> Vec<Figure> {
    let step = params.step() as usize;
    if step == 0 {
        return Vec::new();
    }

    let mut figures = Vec::new();
    for x in (0..width).step_by(step) {
        for y in (0..height).step_by(step) {
            if random.chance(params.density) {
                let kind = ShapeKind::from_index(random.int_in_range(0, 3) as usize)
                    .unwrap_or(ShapeKind::Ellipse);
                figures.push(Figure::new(to_i32(x), to_i32(y), kind));
            }
        }
    }
    figures
}

/// One-step wrap of a coordinate against `[0, extent)`
///
/// This is a clamp, not a modulo: a value more than one step outside the
/// range is only corrected once.
#[inline]
pub fn wrap_axis(value: i32, extent: i32, step: i32) -> i32 {
    if value < 0 {
        extent - step
    } else if value >= extent {
        0
    } else {
        value
    }
}

/// Issue the drawing call for one figure
///
/// `size` is the shape extent and `inset` half the cell separation.
pub fn draw_shape<C: Canvas + ?Sized>(
    canvas: &mut C,
    x: f32,
    y: f32,
    size: f32,
    inset: f32,
    kind: ShapeKind,
) {
    match kind {
        ShapeKind::Ellipse => {
            canvas.draw_ellipse(x + size / 2.0 + inset, y + size / 2.0 + inset, size, size)
        }
        ShapeKind::Rectangle => canvas.draw_rect(x + inset, y + inset, size, size),
        ShapeKind::Triangle => canvas.draw_triangle(
            x + inset,
            y + size + inset,
            x + size / 2.0 + inset,
            y + inset,
            x + size + inset,
            y + size + inset,
        ),
    }
}

#[inline]
fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}
