use std::collections::HashSet;

use sparselife::Coord;
use sparselife::cell::Cell;
use sparselife::patterns;
use sparselife::world::World;

fn world_with(pattern: &[(Coord, Coord)]) -> World {
    let mut world = World::default();
    patterns::stamp(world.grid_mut(), pattern, 0, 0);

    world
}

fn alive_set(world: &World) -> HashSet<Cell> {
    world.grid().cells().clone()
}

#[test]
fn glider_translates_by_one_one_every_four_generations() {
    let mut world = world_with(patterns::GLIDER);

    for _ in 0..4 {
        world.advance();
        assert_eq!(world.grid().population(), 5);
    }

    let expected: HashSet<Cell> = patterns::GLIDER
        .iter()
        .map(|&(x, y)| Cell::new(x + 1, y + 1))
        .collect();

    assert_eq!(alive_set(&world), expected);
}

#[test]
fn block_is_a_still_life() {
    let mut world = world_with(patterns::BLOCK);
    let start = alive_set(&world);

    for _ in 0..10 {
        world.advance();
        assert_eq!(alive_set(&world), start);
    }
}

#[test]
fn blinker_oscillates_with_period_two() {
    let mut world = world_with(patterns::BLINKER);
    let start = alive_set(&world);

    world.advance();
    assert_ne!(alive_set(&world), start);

    world.advance();
    assert_eq!(alive_set(&world), start);
}

#[test]
fn activate_is_idempotent() {
    let mut once = World::default();
    once.activate(Cell::new(2, 3));

    let mut twice = World::default();
    twice.activate(Cell::new(2, 3));
    twice.activate(Cell::new(2, 3));

    assert_eq!(alive_set(&once), alive_set(&twice));
    assert_eq!(twice.grid().population(), 1);
}

#[test]
fn clear_empties_everything() {
    let mut world = world_with(patterns::GLIDER);
    patterns::stamp(world.grid_mut(), patterns::BLOCK, 20, 20);

    for _ in 0..8 {
        world.advance();
    }

    world.clear();

    assert!(world.grid().cells().is_empty());
    assert!(world.grid().border().is_empty());
    assert!(!world.grid().is_alive(Cell::new(20, 20)));
    assert_eq!(world.generation(), 0);

    // A cleared world stays empty when stepped
    world.advance();
    assert!(world.grid().cells().is_empty());
}

#[test]
fn lone_cell_counts_no_neighbors_and_dies() {
    let mut world = World::default();
    world.activate(Cell::new(0, 0));

    assert_eq!(world.grid().live_neighbors(Cell::new(0, 0)), 0);

    world.advance();

    assert!(world.grid().cells().is_empty());
}

#[test]
fn border_drains_after_population_dies_out() {
    let mut world = World::default();
    world.activate(Cell::new(0, 0));

    // The step that kills the lone cell leaves its 8 old neighbors in the
    // border set. Their neighbor count was 1 when it was measured, so the
    // prune only catches them on the following step.
    world.advance();
    assert_eq!(world.grid().border().len(), 8);

    world.advance();
    assert!(world.grid().border().is_empty());

    // And from then on the far field stays clean
    let far = Cell::new(100, 100);
    assert_eq!(world.grid().live_neighbors(far), 0);
    assert!(!world.grid().border().contains(&far));
}

#[test]
fn border_never_overlaps_alive_cells() {
    let mut world = world_with(patterns::R_PENTOMINO);

    for _ in 0..20 {
        world.advance();
        assert!(world.grid().cells().is_disjoint(world.grid().border()));
    }
}

#[test]
fn two_gliders_do_not_interfere_at_distance() {
    let mut world = world_with(patterns::GLIDER);
    patterns::stamp(world.grid_mut(), patterns::GLIDER, 50, 50);

    for _ in 0..4 {
        world.advance();
    }

    let expected: HashSet<Cell> = patterns::GLIDER
        .iter()
        .flat_map(|&(x, y)| [Cell::new(x + 1, y + 1), Cell::new(x + 51, y + 51)])
        .collect();

    assert_eq!(alive_set(&world), expected);
}
