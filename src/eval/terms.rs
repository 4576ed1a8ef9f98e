// Ficheiro: src/eval/terms.rs
// Descrição: Termos heurísticos do jogo de demonstração.

use super::{CompositeEvaluator, MobilityTerm, Term};
use crate::board::{Board, BoardRules, Color, Piece, PieceKind};
use crate::core::Score;

// d4, e4, d5, e5
const CENTER_SQUARES: [u8; 4] = [27, 28, 35, 36];

/// Termo material: soma assinada dos valores das peças, positivo para as
/// brancas (lado maximizador). Domina os demais termos no caso comum.
pub struct MaterialTerm;

impl Term<BoardRules> for MaterialTerm {
    fn score(&self, _rules: &BoardRules, board: &Board) -> Score {
        let mut score = 0.0;
        for (_, piece) in board.pieces() {
            match piece.color {
                Color::White => score += piece.kind.value(),
                Color::Black => score -= piece.kind.value(),
            }
        }
        score
    }
}

/// Bônus por peões e bispos ocupando as quatro casas centrais.
pub struct CenterControlTerm {
    pub weight: Score,
}

impl Default for CenterControlTerm {
    fn default() -> Self {
        CenterControlTerm { weight: 0.25 }
    }
}

impl Term<BoardRules> for CenterControlTerm {
    fn score(&self, _rules: &BoardRules, board: &Board) -> Score {
        let mut score = 0.0;
        for sq in CENTER_SQUARES {
            if let Some(piece) = board.piece_at(sq) {
                if matches!(piece.kind, PieceKind::Pawn | PieceKind::Bishop) {
                    match piece.color {
                        Color::White => score += self.weight,
                        Color::Black => score -= self.weight,
                    }
                }
            }
        }
        score
    }
}

/// Segurança do rei: bônus por peão amigo escudando as casas à frente do rei.
pub struct KingSafetyTerm {
    pub weight: Score,
}

impl Default for KingSafetyTerm {
    fn default() -> Self {
        KingSafetyTerm { weight: 0.25 }
    }
}

impl Term<BoardRules> for KingSafetyTerm {
    fn score(&self, _rules: &BoardRules, board: &Board) -> Score {
        let mut score = 0.0;
        for color in [Color::White, Color::Black] {
            let Some(king_sq) = board.king_square(color) else {
                continue;
            };
            let file = (king_sq % 8) as i8;
            let rank = (king_sq / 8) as i8;
            let forward = match color {
                Color::White => 1,
                Color::Black => -1,
            };

            let mut shield = 0.0;
            for df in -1..=1 {
                let f = file + df;
                let r = rank + forward;
                if !(0..8).contains(&f) || !(0..8).contains(&r) {
                    continue;
                }
                let sq = (r * 8 + f) as u8;
                if board.piece_at(sq) == Some(Piece::new(PieceKind::Pawn, color)) {
                    shield += self.weight;
                }
            }

            match color {
                Color::White => score += shield,
                Color::Black => score -= shield,
            }
        }
        score
    }
}

/// Avaliador padrão do jogo de demonstração: material mais os ajustes
/// posicionais de centro, segurança do rei e mobilidade.
pub fn standard_evaluator() -> CompositeEvaluator<BoardRules> {
    CompositeEvaluator::new()
        .with_term(MaterialTerm)
        .with_term(CenterControlTerm::default())
        .with_term(KingSafetyTerm::default())
        .with_term(MobilityTerm::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::Evaluator;

    #[test]
    fn material_is_a_signed_sum() {
        let board = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ...p....\
             ....P...\
             ........\
             .....N..\
             ....K...",
        )
        .unwrap();
        // Peão e cavalo brancos contra peão preto; reis não pontuam.
        assert_eq!(MaterialTerm.score(&BoardRules, &board), 3.0);
    }

    #[test]
    fn material_ignores_kings() {
        let board = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ........\
             ........\
             ........\
             ........\
             ....K...",
        )
        .unwrap();
        assert_eq!(MaterialTerm.score(&BoardRules, &board), 0.0);
    }

    #[test]
    fn center_control_counts_pawns_and_bishops_only() {
        let board = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ...bP...\
             ...N....\
             ........\
             ........\
             ....K...",
        )
        .unwrap();
        // Peão branco em e5 contra bispo preto em d5; o cavalo em d4 não conta.
        let term = CenterControlTerm { weight: 1.0 };
        assert_eq!(term.score(&BoardRules, &board), 0.0);

        let unopposed = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ....P...\
             ........\
             ........\
             ........\
             ....K...",
        )
        .unwrap();
        assert_eq!(term.score(&BoardRules, &unopposed), 1.0);
    }

    #[test]
    fn king_safety_rewards_the_pawn_shield() {
        let board = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ........\
             ........\
             ........\
             ...PPP..\
             ....K...",
        )
        .unwrap();
        let term = KingSafetyTerm { weight: 1.0 };
        // Escudo branco completo (d2, e2, f2); rei preto sem escudo.
        assert_eq!(term.score(&BoardRules, &board), 3.0);
    }

    #[test]
    fn composite_sums_independent_terms() {
        let board = Board::from_ascii(
            "....k...\
             ........\
             ........\
             ........\
             ....P...\
             ........\
             ........\
             ....K...",
        )
        .unwrap();
        let evaluator = CompositeEvaluator::new()
            .with_term(MaterialTerm)
            .with_term(CenterControlTerm { weight: 0.5 });
        // 1.0 de material + 0.5 do peão central em e4.
        assert_eq!(evaluator.evaluate(&BoardRules, &board), 1.5);
    }

    #[test]
    fn standard_evaluator_is_side_symmetric() {
        let boards = [
            Board::start_position(),
            Board::from_ascii(
                "....k...\
                 ........\
                 ..n.....\
                 ...p....\
                 ....P...\
                 ........\
                 ...PPP..\
                 ..R.K...",
            )
            .unwrap(),
        ];
        let evaluator = standard_evaluator();

        for board in boards {
            let score = evaluator.evaluate(&BoardRules, &board);
            let mirrored = evaluator.evaluate(&BoardRules, &board.mirrored());
            assert!(
                (score + mirrored).abs() < 1e-9,
                "expected mirror symmetry, got {} and {}",
                score,
                mirrored
            );
        }
    }
}
