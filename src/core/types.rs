// Ficheiro: src/core/types.rs
// Descrição: Tipos fundamentais da busca (lado, score e erros de contrato).

use thiserror::Error;

// O score de uma posição é um real do ponto de vista do lado maximizador.
// Valores maiores favorecem o maximizador. ±infinito é reservado como
// sentinela da janela de busca; um avaliador nunca deve produzi-lo.
pub type Score = f64;

/// Limites iniciais da janela de busca: (alpha, beta) = (-infinito, +infinito).
pub const SCORE_MIN: Score = f64::NEG_INFINITY;
pub const SCORE_MAX: Score = f64::INFINITY;

// Enum para representar o lado relativo à busca. O rótulo é relativo à
// chamada de raiz, não a um jogador concreto: as regras do jogo decidem
// quem é o maximizador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Maximizing,
    Minimizing,
}

impl std::ops::Not for Side {
    type Output = Side;

    fn not(self) -> Self::Output {
        match self {
            Side::Maximizing => Side::Minimizing,
            Side::Minimizing => Side::Maximizing,
        }
    }
}

/// Violações de contrato detectadas durante a busca.
///
/// A busca assume regras e avaliador bem formados; quando a violação é
/// detectável, falha imediatamente em vez de propagar scores corrompidos.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SearchError {
    /// O avaliador devolveu NaN ou ±infinito para uma posição avaliada.
    #[error("evaluator returned a non-finite score: {score}")]
    NonFiniteScore { score: Score },
}
