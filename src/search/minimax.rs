// Ficheiro: src/search/minimax.rs
// Descrição: Minimax puro, sem poda — referência de correção para a poda.

use super::alpha_beta::{improves, static_eval, worst_score, SearchResult};
use crate::core::{GameRules, Score, SearchError, Side, SCORE_MAX, SCORE_MIN};
use crate::eval::Evaluator;
use std::time::Instant;
use tracing::debug;

/// Motor minimax sem poda alpha-beta.
///
/// Visita a árvore inteira até a profundidade pedida. Existe como referência
/// de correção: para qualquer posição, lado e profundidade, o score devolvido
/// deve ser idêntico ao do `AlphaBetaEngine` — a poda só muda quantos nós são
/// visitados, nunca o resultado.
pub struct MinimaxEngine<R, E> {
    rules: R,
    evaluator: E,
    nodes_searched: u64,
}

impl<R, E> MinimaxEngine<R, E>
where
    R: GameRules,
    E: Evaluator<R>,
{
    pub fn new(rules: R, evaluator: E) -> Self {
        MinimaxEngine {
            rules,
            evaluator,
            nodes_searched: 0,
        }
    }

    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Escolhe o melhor lance para `side`, com a mesma política de raiz da
    /// busca com poda: seleção relativa ao lado (maior para o maximizador,
    /// menor para o minimizador), desempate pelo primeiro lance enumerado.
    pub fn best_move(
        &mut self,
        position: &R::Position,
        side: Side,
        depth: u8,
    ) -> Result<SearchResult<R::Move>, SearchError> {
        let start = Instant::now();
        self.nodes_searched = 0;

        let moves = self.rules.generate_moves(position, side);
        if moves.is_empty() {
            return Ok(SearchResult {
                best_move: None,
                score: worst_score(side),
                depth,
                nodes_searched: 0,
                time_elapsed: start.elapsed(),
            });
        }

        let mut best_score = worst_score(side);
        let mut best_move = None;

        for mv in &moves {
            let child = self.rules.apply_move(position, mv);
            let score = minimax(
                &self.rules,
                &self.evaluator,
                &child,
                depth.saturating_sub(1),
                !side,
                &mut self.nodes_searched,
            )?;

            if improves(side, score, best_score) {
                best_score = score;
                best_move = Some(mv.clone());
            }
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes_searched: self.nodes_searched,
            time_elapsed: start.elapsed(),
        };
        debug!(
            depth,
            score = result.score,
            nodes = result.nodes_searched,
            time_ms = result.time_elapsed.as_millis() as u64,
            "minimax search finished"
        );
        Ok(result)
    }

    /// Avaliação recursiva sem janela de poda.
    pub fn evaluate_position(
        &mut self,
        position: &R::Position,
        depth: u8,
        side: Side,
    ) -> Result<Score, SearchError> {
        self.nodes_searched = 0;
        minimax(
            &self.rules,
            &self.evaluator,
            position,
            depth,
            side,
            &mut self.nodes_searched,
        )
    }
}

fn minimax<R, E>(
    rules: &R,
    evaluator: &E,
    position: &R::Position,
    depth: u8,
    side: Side,
    nodes: &mut u64,
) -> Result<Score, SearchError>
where
    R: GameRules,
    E: Evaluator<R>,
{
    *nodes += 1;

    if depth == 0 || rules.is_terminal(position) {
        return static_eval(rules, evaluator, position);
    }

    let moves = rules.generate_moves(position, side);
    if moves.is_empty() {
        // Mesmo tratamento da busca com poda: nó sem lances é terminal.
        return static_eval(rules, evaluator, position);
    }

    match side {
        Side::Maximizing => {
            let mut best = SCORE_MIN;
            for mv in &moves {
                let child = rules.apply_move(position, mv);
                let score =
                    minimax(rules, evaluator, &child, depth - 1, Side::Minimizing, nodes)?;
                best = best.max(score);
            }
            Ok(best)
        }
        Side::Minimizing => {
            let mut best = SCORE_MAX;
            for mv in &moves {
                let child = rules.apply_move(position, mv);
                let score =
                    minimax(rules, evaluator, &child, depth - 1, Side::Maximizing, nodes)?;
                best = best.min(score);
            }
            Ok(best)
        }
    }
}
