use std::collections::BTreeSet;

use conway::patterns::{self, Pattern};
use conway::{Automaton, CellState, Coord, GridSize};

fn grid(n: i64) -> GridSize {
    GridSize::new(n).unwrap()
}

fn seeded(n: i64, pattern: &Pattern, origin: (usize, usize)) -> Automaton {
    let mut life = Automaton::with_seed(grid(n), 11);
    pattern.apply(&mut life, Coord::from(origin));
    life
}

fn step(life: &mut Automaton, generations: u32) {
    for generation in (1..=generations).rev() {
        life.compute_next_generation();
        life.commit_generation(generation);
    }
}

fn collect_live(life: &Automaton) -> BTreeSet<Coord> {
    life.size().coords().filter(|&coord| life.cell(coord).is_alive()).collect()
}

fn shifted(cells: &BTreeSet<Coord>, dx: usize, dy: usize, side: usize) -> BTreeSet<Coord> {
    cells
        .iter()
        .map(|c| Coord::new((c.x + dx) % side, (c.y + dy) % side))
        .collect()
}

#[test]
fn block_is_stable() {
    let mut life = seeded(6, &patterns::BLOCK, (2, 2));
    let before = collect_live(&life);
    step(&mut life, 5);
    assert_eq!(collect_live(&life), before, "{} moved", patterns::BLOCK.name);
}

#[test]
fn block_is_stable_across_the_seam() {
    let mut life = seeded(6, &patterns::BLOCK, (5, 5));
    let before = collect_live(&life);
    assert!(before.contains(&Coord::new(0, 0)));
    step(&mut life, 3);
    assert_eq!(collect_live(&life), before, "{} moved across the seam", patterns::BLOCK.name);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut life = seeded(6, &patterns::BLINKER, (2, 1));
    let horizontal = collect_live(&life);

    step(&mut life, 1);
    let vertical: BTreeSet<Coord> = [(1, 2), (2, 2), (3, 2)].into_iter().map(Coord::from).collect();
    assert_eq!(collect_live(&life), vertical);

    step(&mut life, 1);
    assert_eq!(collect_live(&life), horizontal);
}

#[test]
fn toad_oscillates_with_period_two() {
    let mut life = seeded(8, &patterns::TOAD, (3, 2));
    let before = collect_live(&life);
    step(&mut life, 1);
    assert_ne!(collect_live(&life), before, "{} did not change phase", patterns::TOAD.name);
    step(&mut life, 1);
    assert_eq!(collect_live(&life), before, "{} did not return", patterns::TOAD.name);
}

#[test]
fn glider_moves_diagonally_and_wraps_home() {
    let mut life = seeded(8, &patterns::GLIDER, (0, 0));
    let start = collect_live(&life);

    step(&mut life, 4);
    assert_eq!(collect_live(&life), shifted(&start, 1, 1, 8));

    step(&mut life, 28);
    assert_eq!(collect_live(&life), start, "{} did not wrap home", patterns::GLIDER.name);
}

#[test]
fn processing_order_does_not_leak_into_counts() {
    // A full row of three on a 3x3 torus: alive cells see 2 alive
    // neighbors, dead ones see 3, so every cell is alive next.
    let mut life = Automaton::with_seed(grid(3), 5);
    life.clear();
    for y in 0..3 {
        life.set_cell(Coord::new(0, y), true);
    }
    life.compute_next_generation();
    for coord in life.size().coords() {
        assert!(life.staged(coord), "at {:?}", coord);
    }
}

#[test]
fn neighbors_of_is_a_pure_read() {
    let mut life = Automaton::with_seed(grid(4), 2);
    step(&mut life, 1);
    let before: Vec<CellState> = life.size().coords().map(|c| life.cell(c)).collect();
    for coord in life.size().coords() {
        let _ = life.neighbors_of(coord);
        let _ = life.alive_neighbors(coord);
    }
    let after: Vec<CellState> = life.size().coords().map(|c| life.cell(c)).collect();
    assert_eq!(before, after);
}

#[test]
fn reallocate_then_one_pass_defines_everything() {
    let mut life = seeded(7, &patterns::GLIDER, (1, 1));
    step(&mut life, 10);
    life.reallocate();
    assert!(life.size().coords().all(|c| life.cell(c) == CellState::Unset));
    step(&mut life, 1);
    assert!(life.is_materialized());
    assert_eq!(life.size().cells(), 49);
}

#[test]
fn frame_total_matches_staged_alive_count() {
    let mut life = Automaton::with_seed(grid(9), 99);
    step(&mut life, 3);
    life.compute_next_generation();
    let staged = life.size().coords().filter(|&c| life.staged(c)).count();
    let frame = life.commit_generation(997);
    assert_eq!(frame.alive_total(), staged);
    assert_eq!(life.alive_count(), staged);
}
