use rayon::prelude::*;

use crate::game::Game;
use crate::rules::Action;

/// Number of leaf nodes `depth` plies below the current position, following useful
/// actions only.
///
/// `perft(g, 0) == 1` and `perft(g, 1)` is the number of useful legal actions, counted
/// without applying them.
pub fn perft(game: &mut Game, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let actions = game.useful_legal_actions();
    if depth == 1 {
        return actions.len() as u64;
    }
    let mut nodes = 0;
    for action in actions {
        let undo = game.make_action(action);
        nodes += perft(game, depth - 1);
        game.undo_action(&undo);
    }
    nodes
}

/// Per-root-action node counts. The counts sum to [`perft`] at the same depth.
pub fn perft_divide(game: &mut Game, depth: u32) -> Vec<(Action, u64)> {
    if depth == 0 {
        return Vec::new();
    }
    let roots = game.useful_legal_actions();
    let mut out = Vec::with_capacity(roots.len());
    for action in roots {
        let undo = game.make_action(action);
        let nodes = perft(game, depth - 1);
        game.undo_action(&undo);
        tracing::debug!(%action, nodes, "divide");
        out.push((action, nodes));
    }
    out
}

/// [`perft`] with the root actions spread over the rayon pool.
///
/// Each worker clones the game once (the atlas is shared) and walks its share of the
/// tree with make/undo; the caller's game is never mutated.
pub fn perft_parallel(game: &Game, depth: u32) -> u64 {
    if depth <= 1 {
        return perft(&mut game.clone(), depth);
    }
    let roots = game.clone().useful_legal_actions();
    roots
        .par_iter()
        .map_init(
            || game.clone(),
            |worker, &action| {
                let undo = worker.make_action(action);
                let nodes = perft(worker, depth - 1);
                worker.undo_action(&undo);
                nodes
            },
        )
        .sum()
}
