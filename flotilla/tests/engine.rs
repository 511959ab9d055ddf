//! End-to-end exercises of the engine over whole games.

use rand::{rngs::StdRng, SeedableRng};

use flotilla::{
    board::{Coordinate, Dimensions},
    game::Game,
    ships::ShipClass,
};

fn total_ship_cells() -> usize {
    ShipClass::ALL.iter().map(|s| s.len()).sum()
}

#[test]
fn sweeping_the_grid_sinks_the_whole_fleet() {
    let mut rng = StdRng::seed_from_u64(0xB0A7);
    let mut game = Game::random(Dimensions::default(), &mut rng).unwrap();
    assert!(!game.has_ended());

    let universe: Vec<Coordinate> = game.dimensions().iter().collect();
    let mut accepted = 0;
    for coord in universe {
        if game.has_ended() {
            break;
        }
        game.fire(coord).unwrap();
        accepted += 1;
    }

    assert!(game.has_ended());
    assert_eq!(game.turns(), accepted);
    assert!(game.ships().all(|(_, sunk)| sunk));

    let hits = game
        .moves()
        .iter()
        .filter(|&&coord| game.ship_at(coord).is_some())
        .count();
    assert_eq!(hits, total_ship_cells());
}

#[test]
fn firing_only_at_ships_ends_the_game_in_the_minimum_turns() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut game = Game::random(Dimensions::default(), &mut rng).unwrap();

    // Cheat by reading the fleet's cells out of the board, then snipe them.
    let targets: Vec<Coordinate> = game
        .dimensions()
        .iter()
        .filter(|&coord| game.ship_at(coord).is_some())
        .collect();
    assert_eq!(targets.len(), total_ship_cells());

    for coord in targets {
        assert!(!game.has_ended());
        game.fire(coord).unwrap();
    }
    assert!(game.has_ended());
    assert_eq!(game.turns(), total_ship_cells());
}

#[test]
fn the_same_seed_reproduces_the_same_fleet() {
    let dim = Dimensions::default();
    let game_a = Game::random(dim, &mut StdRng::seed_from_u64(9)).unwrap();
    let game_b = Game::random(dim, &mut StdRng::seed_from_u64(9)).unwrap();

    for coord in dim.iter() {
        assert_eq!(game_a.ship_at(coord), game_b.ship_at(coord));
    }
}
