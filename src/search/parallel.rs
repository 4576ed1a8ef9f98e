// Ficheiro: src/search/parallel.rs
// Descrição: Busca paralela na raiz — um ramo independente por lance.

use super::alpha_beta::{alpha_beta, improves, worst_score, SearchResult};
use crate::core::{GameRules, SearchError, Side, SCORE_MAX, SCORE_MIN};
use crate::eval::Evaluator;
use rayon::prelude::*;
use std::time::Instant;
use tracing::debug;

/// Busca alpha-beta com os filhos da raiz distribuídos por um pool de threads.
///
/// Só a raiz é paralelizada: cada ramo desce sequencialmente sobre a sua
/// própria cópia da posição, por isso nenhuma disciplina de lock é necessária
/// além da junção final. O resultado é idêntico ao do `AlphaBetaEngine`
/// sequencial, incluindo o desempate pelo primeiro lance enumerado.
pub struct ParallelEngine<R, E> {
    rules: R,
    evaluator: E,
    pool: rayon::ThreadPool,
}

impl<R, E> ParallelEngine<R, E>
where
    R: GameRules + Sync,
    E: Evaluator<R> + Sync,
    R::Position: Send + Sync,
    R::Move: Send + Sync,
{
    /// Cria o motor com uma thread por núcleo lógico.
    pub fn new(rules: R, evaluator: E) -> Self {
        Self::with_threads(rules, evaluator, num_cpus::get().max(1))
    }

    pub fn with_threads(rules: R, evaluator: E, threads: usize) -> Self {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .build()
            .expect("failed to build search thread pool");
        ParallelEngine {
            rules,
            evaluator,
            pool,
        }
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Escolhe o melhor lance para `side`, com a mesma semântica da busca
    /// sequencial (janela cheia por filho da raiz, desempate estável).
    pub fn best_move(
        &self,
        position: &R::Position,
        side: Side,
        depth: u8,
    ) -> Result<SearchResult<R::Move>, SearchError> {
        let start = Instant::now();

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

        let rules = &self.rules;
        let evaluator = &self.evaluator;
        let scored: Result<Vec<_>, SearchError> = self.pool.install(|| {
            moves
                .par_iter()
                .map(|mv| {
                    let child = rules.apply_move(position, mv);
                    let mut nodes = 0u64;
                    let score = alpha_beta(
                        rules,
                        evaluator,
                        &child,
                        depth.saturating_sub(1),
                        !side,
                        SCORE_MIN,
                        SCORE_MAX,
                        &mut nodes,
                    )?;
                    Ok((score, nodes))
                })
                .collect()
        });
        let scored = scored?;

        // Redução sequencial em ordem de enumeração: preserva o desempate
        // estrito "primeiro lance enumerado" da busca sequencial.
        let mut best_score = worst_score(side);
        let mut best_move = None;
        let mut total_nodes = 0u64;
        for (mv, (score, nodes)) in moves.iter().zip(&scored) {
            total_nodes += nodes;
            if improves(side, *score, best_score) {
                best_score = *score;
                best_move = Some(mv.clone());
            }
        }

        let result = SearchResult {
            best_move,
            score: best_score,
            depth,
            nodes_searched: total_nodes,
            time_elapsed: start.elapsed(),
        };
        debug!(
            depth,
            score = result.score,
            nodes = result.nodes_searched,
            time_ms = result.time_elapsed.as_millis() as u64,
            threads = self.pool.current_num_threads(),
            "parallel root search finished"
        );
        Ok(result)
    }
}
