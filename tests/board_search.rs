// Cenários de ponta a ponta sobre o jogo de demonstração.

use gambito::board::{Board, BoardMove, BoardRules};
use gambito::eval::standard_evaluator;
use gambito::search::{AlphaBetaEngine, ParallelEngine};
use gambito::Side;

fn sq(name: &str) -> u8 {
    let bytes = name.as_bytes();
    (bytes[1] - b'1') * 8 + (bytes[0] - b'a')
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

#[test]
fn prefers_the_capture_that_wins_material() {
    init_tracing();
    // Reis e peões: o peão branco de e4 pode avançar ou capturar em d5.
    // Com profundidade 1, a captura é o único lance que ganha material.
    let board = Board::from_ascii(
        "....k...\
         ........\
         ........\
         ...p....\
         ....P...\
         ........\
         ........\
         ....K...",
    )
    .unwrap();
    let mut engine = AlphaBetaEngine::new(BoardRules, standard_evaluator());

    let result = engine.best_move(&board, Side::Maximizing, 1).unwrap();
    assert_eq!(
        result.best_move,
        Some(BoardMove {
            from: sq("e4"),
            to: sq("d5"),
        })
    );
}

#[test]
fn minimizing_side_captures_the_hanging_queen() {
    init_tracing();
    // As pretas jogam: o peão de e6 pode capturar a dama branca em d5.
    // A raiz minimizadora tem de escolher o lance de menor score, não o
    // melhor lance para as brancas.
    let board = Board::from_ascii(
        "....k...\
         ........\
         ....p...\
         ...Q....\
         ........\
         ........\
         ........\
         ....K...",
    )
    .unwrap();
    let mut engine = AlphaBetaEngine::new(BoardRules, standard_evaluator());

    let result = engine.best_move(&board, Side::Minimizing, 1).unwrap();
    assert_eq!(
        result.best_move,
        Some(BoardMove {
            from: sq("e6"),
            to: sq("d5"),
        })
    );
    assert!(result.score < 0.0);
}

#[test]
fn search_from_the_start_position_is_deterministic() {
    let board = Board::start_position();
    let mut engine = AlphaBetaEngine::new(BoardRules, standard_evaluator());

    let first = engine.best_move(&board, Side::Maximizing, 2).unwrap();
    let second = engine.best_move(&board, Side::Maximizing, 2).unwrap();

    assert!(first.best_move.is_some());
    assert_eq!(first.best_move, second.best_move);
    assert_eq!(first.score, second.score);
}

#[test]
fn side_without_pieces_has_no_move() {
    // Só o rei preto no tabuleiro: as brancas não têm lance algum.
    let board = Board::from_ascii(
        "....k...\
         ........\
         ........\
         ........\
         ........\
         ........\
         ........\
         ........",
    )
    .unwrap();
    let mut engine = AlphaBetaEngine::new(BoardRules, standard_evaluator());

    let result = engine.best_move(&board, Side::Maximizing, 3).unwrap();
    assert!(result.best_move.is_none());
    assert_eq!(result.nodes_searched, 0);
}

#[test]
fn parallel_and_sequential_choose_the_same_move() {
    let board = Board::start_position();
    let mut sequential = AlphaBetaEngine::new(BoardRules, standard_evaluator());
    let parallel = ParallelEngine::with_threads(BoardRules, standard_evaluator(), 4);

    let seq = sequential.best_move(&board, Side::Maximizing, 3).unwrap();
    let par = parallel.best_move(&board, Side::Maximizing, 3).unwrap();

    assert_eq!(seq.best_move, par.best_move);
    assert_eq!(seq.score, par.score);
}

#[test]
fn deeper_search_still_takes_the_free_pawn() {
    // Mesmo olhando duas jogadas à frente, capturar o peão de d5 não tem
    // retaliação: o lance material continua sendo o melhor.
    let board = Board::from_ascii(
        "....k...\
         ........\
         ........\
         ...p....\
         ....P...\
         ........\
         ........\
         ....K...",
    )
    .unwrap();
    let mut engine = AlphaBetaEngine::new(BoardRules, standard_evaluator());

    let result = engine.best_move(&board, Side::Maximizing, 3).unwrap();
    assert_eq!(
        result.best_move,
        Some(BoardMove {
            from: sq("e4"),
            to: sq("d5"),
        })
    );
}
