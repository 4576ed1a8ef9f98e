// Ficheiro: src/search/alpha_beta.rs
// Descrição: Busca minimax limitada em profundidade com poda alpha-beta.

use crate::core::{GameRules, Score, SearchError, Side, SCORE_MAX, SCORE_MIN};
use crate::eval::Evaluator;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

/// Resultado da busca
#[derive(Debug, Clone)]
pub struct SearchResult<M> {
    pub best_move: Option<M>,
    pub score: Score,
    pub depth: u8,
    pub nodes_searched: u64,
    pub time_elapsed: Duration,
}

/// Motor Alpha-Beta sobre regras e avaliador plugáveis.
///
/// Busca síncrona em profundidade: cada chamada recursiva possui a sua
/// própria cópia da posição, descartada no retorno. Nenhum estado é
/// compartilhado entre ramos irmãos.
pub struct AlphaBetaEngine<R, E> {
    rules: R,
    evaluator: E,
    nodes_searched: u64,
}

impl<R, E> AlphaBetaEngine<R, E>
where
    R: GameRules,
    E: Evaluator<R>,
{
    pub fn new(rules: R, evaluator: E) -> Self {
        AlphaBetaEngine {
            rules,
            evaluator,
            nodes_searched: 0,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    /// Nós visitados pela última chamada de busca.
    pub fn nodes_searched(&self) -> u64 {
        self.nodes_searched
    }

    /// Escolhe o melhor lance para `side` em `position`, olhando `depth` plies
    /// à frente. A raiz maximizadora escolhe o maior score; a minimizadora, o
    /// menor.
    ///
    /// Sem lances na raiz devolve `best_move: None` sem invocar o avaliador
    /// (com `score` na sentinela do pior caso para `side`); o chamador decide
    /// se isso é mate, afogamento ou outro fim de jogo. Empates entre lances
    /// são resolvidos pela comparação estrita: o primeiro lance enumerado
    /// vence.
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
            // Cada filho da raiz recebe janela cheia: a raiz não poda entre
            // os próprios filhos, apenas a descida recursiva poda.
            let score = alpha_beta(
                &self.rules,
                &self.evaluator,
                &child,
                depth.saturating_sub(1),
                !side,
                SCORE_MIN,
                SCORE_MAX,
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
            "alpha-beta search finished"
        );
        Ok(result)
    }

    /// Avaliação recursiva de `position` com janela (`alpha`, `beta`).
    ///
    /// Com `depth == 0` ou posição terminal devolve a avaliação estática
    /// imediatamente, seja de quem for a vez.
    pub fn evaluate_position(
        &mut self,
        position: &R::Position,
        depth: u8,
        side: Side,
        alpha: Score,
        beta: Score,
    ) -> Result<Score, SearchError> {
        self.nodes_searched = 0;
        alpha_beta(
            &self.rules,
            &self.evaluator,
            position,
            depth,
            side,
            alpha,
            beta,
            &mut self.nodes_searched,
        )
    }
}

/// Núcleo recursivo do minimax com poda, compartilhado com a busca paralela.
#[allow(clippy::too_many_arguments)]
pub(crate) fn alpha_beta<R, E>(
    rules: &R,
    evaluator: &E,
    position: &R::Position,
    depth: u8,
    side: Side,
    mut alpha: Score,
    mut beta: Score,
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
        // Nó sem lances é tratado como terminal: avaliação estática, nunca
        // a sentinela ±infinito, mesmo que is_terminal não o tenha acusado.
        return static_eval(rules, evaluator, position);
    }

    match side {
        Side::Maximizing => {
            let mut best = SCORE_MIN;
            for mv in &moves {
                let child = rules.apply_move(position, mv);
                let score = alpha_beta(
                    rules,
                    evaluator,
                    &child,
                    depth - 1,
                    Side::Minimizing,
                    alpha,
                    beta,
                    nodes,
                )?;
                best = best.max(score);
                alpha = alpha.max(score);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "beta cutoff");
                    break;
                }
            }
            Ok(best)
        }
        Side::Minimizing => {
            let mut best = SCORE_MAX;
            for mv in &moves {
                let child = rules.apply_move(position, mv);
                let score = alpha_beta(
                    rules,
                    evaluator,
                    &child,
                    depth - 1,
                    Side::Maximizing,
                    alpha,
                    beta,
                    nodes,
                )?;
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    trace!(depth, alpha, beta, "alpha cutoff");
                    break;
                }
            }
            Ok(best)
        }
    }
}

/// Sentinela inicial da raiz: o pior score possível para o lado que joga.
pub(crate) fn worst_score(side: Side) -> Score {
    match side {
        Side::Maximizing => SCORE_MIN,
        Side::Minimizing => SCORE_MAX,
    }
}

/// Critério de seleção da raiz, estrito para preservar o desempate pelo
/// primeiro lance enumerado.
pub(crate) fn improves(side: Side, score: Score, best: Score) -> bool {
    match side {
        Side::Maximizing => score > best,
        Side::Minimizing => score < best,
    }
}

/// Avaliação estática validada: score não finito é violação de contrato.
pub(crate) fn static_eval<R, E>(
    rules: &R,
    evaluator: &E,
    position: &R::Position,
) -> Result<Score, SearchError>
where
    R: GameRules,
    E: Evaluator<R>,
{
    let score = evaluator.evaluate(rules, position);
    if !score.is_finite() {
        return Err(SearchError::NonFiniteScore { score });
    }
    Ok(score)
}
