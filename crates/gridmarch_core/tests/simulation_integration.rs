//! Integration tests for the marching field
//!
//! These tests drive the public setup/tick/resize surface the way a host
//! does and check the field-wide invariants:
//! 1. Directions are non-zero grid vectors
//! 2. Figures stay inside the canvas after any number of moves
//! 3. Updates are deterministic and never add or remove figures
//! 4. Resize is lazy

use gridmarch_core::{
    Canvas, Direction, FieldParams, Figure, Group, RecordingCanvas, Rgb, RngSource,
    SequenceSource, ShapeKind, Simulation, DEFAULT_PALETTE,
};

fn seeded_sim(seed: u64, width: u32, height: u32, params: FieldParams) -> Simulation {
    Simulation::setup(width, height, params, &DEFAULT_PALETTE, &mut RngSource::seeded(seed))
        .expect("seeded setup should succeed")
}

fn positions(sim: &Simulation) -> Vec<Vec<(i32, i32)>> {
    sim.groups()
        .iter()
        .map(|g| g.figures().iter().map(|f| (f.x, f.y)).collect())
        .collect()
}

/// Canvas that ignores every call
struct NullCanvas;

impl Canvas for NullCanvas {
    fn clear_background(&mut self, _color: Rgb) {}
    fn set_fill_color(&mut self, _color: Rgb) {}
    fn draw_ellipse(&mut self, _cx: f32, _cy: f32, _w: f32, _h: f32) {}
    fn draw_rect(&mut self, _x: f32, _y: f32, _w: f32, _h: f32) {}
    fn draw_triangle(&mut self, _x1: f32, _y1: f32, _x2: f32, _y2: f32, _x3: f32, _y3: f32) {}
}

// ==================== Setup Tests ====================

#[test]
fn test_group_count_and_colors() {
    let params = FieldParams::default().with_group_count(12);
    let sim = seeded_sim(11, 640, 480, params);

    assert_eq!(sim.groups().len(), 12);
    for (i, group) in sim.groups().iter().enumerate() {
        assert_eq!(group.color(), DEFAULT_PALETTE[i % DEFAULT_PALETTE.len()]);
    }
}

#[test]
fn test_directions_are_nonzero_grid_vectors() {
    for seed in 0..50 {
        let sim = seeded_sim(seed, 200, 200, FieldParams::default().with_group_count(5));
        for group in sim.groups() {
            let d = group.direction();
            assert!((-1..=1).contains(&d.dx()));
            assert!((-1..=1).contains(&d.dy()));
            assert!(d.dx() != 0 || d.dy() != 0);
        }
    }
}

#[test]
fn test_zero_density_gives_empty_groups() {
    let params = FieldParams::new(20, 1).with_density(0.0);
    let sim = seeded_sim(5, 100, 100, params);

    assert_eq!(sim.groups().len(), 2);
    assert!(sim.groups().iter().all(|g| g.figure_count() == 0));
}

#[test]
fn test_zero_canvas_gives_empty_groups() {
    let sim = seeded_sim(5, 0, 0, FieldParams::default().with_density(1.0));
    assert_eq!(sim.groups().len(), 2);
    assert_eq!(sim.figure_count(), 0);
}

#[test]
fn test_zero_group_count() {
    let sim = seeded_sim(5, 100, 100, FieldParams::default().with_group_count(0));
    assert!(sim.groups().is_empty());
}

#[test]
fn test_alternating_source_terminates() {
    // 0.5 maps to 0 and 0.99 maps to 1 for the range [-1, 2)
    let mut src = SequenceSource::new(vec![0.5, 0.99]);
    let params = FieldParams::new(20, 1).with_density(0.0);
    let sim = Simulation::setup(100, 100, params, &DEFAULT_PALETTE, &mut src).unwrap();

    for group in sim.groups() {
        assert!(group.direction().dx() != 0 || group.direction().dy() != 0);
    }
}

#[test]
fn test_figures_start_on_lattice() {
    let params = FieldParams::new(20, 1).with_density(0.5);
    let sim = seeded_sim(9, 300, 200, params);
    for group in sim.groups() {
        for f in group.figures() {
            assert_eq!(f.x % 21, 0);
            assert_eq!(f.y % 21, 0);
            assert!(f.x < 300 && f.y < 200);
        }
    }
}

// ==================== Update Tests ====================

#[test]
fn test_positions_stay_in_bounds() {
    let params = FieldParams::new(20, 1).with_density(0.3).with_group_count(8);
    let mut sim = seeded_sim(21, 317, 211, params);

    for _ in 0..200 {
        sim.update_groups();
        for group in sim.groups() {
            for f in group.figures() {
                assert!(f.x >= 0 && f.x < 317, "x out of bounds: {}", f.x);
                assert!(f.y >= 0 && f.y < 211, "y out of bounds: {}", f.y);
            }
        }
    }
}

#[test]
fn test_update_is_deterministic() {
    let params = FieldParams::default().with_density(0.4).with_group_count(4);
    let mut a = seeded_sim(77, 400, 300, params.clone());
    let mut b = seeded_sim(77, 400, 300, params);
    assert_eq!(positions(&a), positions(&b));

    for _ in 0..37 {
        a.tick(&mut NullCanvas);
        b.tick(&mut RecordingCanvas::new());
    }
    assert_eq!(positions(&a), positions(&b));
    assert_eq!(a.frame_counter(), b.frame_counter());
}

#[test]
fn test_figure_count_is_invariant() {
    let params = FieldParams::default().with_density(0.25).with_group_count(3);
    let mut sim = seeded_sim(3, 256, 256, params);
    let counts: Vec<usize> = sim.groups().iter().map(Group::figure_count).collect();

    for i in 0..64 {
        sim.tick(&mut NullCanvas);
        if i % 10 == 0 {
            sim.resize(128 + i, 300 - i);
        }
    }

    let after: Vec<usize> = sim.groups().iter().map(Group::figure_count).collect();
    assert_eq!(counts, after);
}

#[test]
fn test_draw_emits_fill_per_group_and_shape_per_figure() {
    let params = FieldParams::default().with_density(0.3).with_group_count(3);
    let mut sim = seeded_sim(13, 210, 210, params);
    let mut canvas = RecordingCanvas::new();
    sim.tick(&mut canvas);

    assert_eq!(canvas.fill_count(), 3);
    assert_eq!(canvas.shape_count(), sim.figure_count());
}

// ==================== Resize Tests ====================

#[test]
fn test_resize_is_lazy() {
    let group = Group::new(
        vec![
            Figure::new(84, 84, ShapeKind::Ellipse),
            Figure::new(21, 21, ShapeKind::Triangle),
        ],
        Rgb::WHITE,
        Direction::new(1, 0).unwrap(),
    );
    let mut sim = Simulation::from_groups(100, 100, FieldParams::new(20, 1), vec![group]);

    sim.resize(50, 50);
    assert_eq!(sim.size(), (50, 50));
    let f = sim.groups()[0].figures();
    assert_eq!((f[0].x, f[0].y), (84, 84));
    assert_eq!((f[1].x, f[1].y), (21, 21));

    // Both axes wrap against the new extents on the next move
    sim.update_groups();
    let f = sim.groups()[0].figures();
    assert_eq!((f[0].x, f[0].y), (0, 0));
    assert_eq!((f[1].x, f[1].y), (42, 21));
}
