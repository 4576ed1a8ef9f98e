// Ficheiro: src/eval/mod.rs
// Descrição: Avaliação estática de posições por soma de termos heurísticos.

pub mod terms;

pub use terms::*;

use crate::core::{GameRules, Score, Side};

/// Avaliador estático de posições.
///
/// Invocado apenas nas folhas da busca (profundidade esgotada ou posição
/// terminal). Deve ser uma função pura da posição: total, determinística e
/// simétrica entre os lados — espelhar a posição nega o score. A simetria é
/// exigida pela correção do minimax e é verificada em teste.
pub trait Evaluator<R: GameRules> {
    /// Score da posição do ponto de vista do lado maximizador.
    fn evaluate(&self, rules: &R, position: &R::Position) -> Score;
}

/// Adaptador para usar uma função pura como avaliador.
pub struct EvalFn<F>(pub F);

impl<R, F> Evaluator<R> for EvalFn<F>
where
    R: GameRules,
    F: Fn(&R, &R::Position) -> Score,
{
    fn evaluate(&self, rules: &R, position: &R::Position) -> Score {
        (self.0)(rules, position)
    }
}

/// Termo heurístico independente. Termos são avaliados isoladamente e
/// somados; nenhum termo depende do resultado de outro.
pub trait Term<R: GameRules>: Send + Sync {
    fn score(&self, rules: &R, position: &R::Position) -> Score;
}

/// Avaliador composto aditivamente por termos independentes.
pub struct CompositeEvaluator<R: GameRules> {
    terms: Vec<Box<dyn Term<R>>>,
}

impl<R: GameRules> CompositeEvaluator<R> {
    pub fn new() -> Self {
        CompositeEvaluator { terms: Vec::new() }
    }

    /// Acrescenta um termo ao avaliador.
    pub fn with_term(mut self, term: impl Term<R> + 'static) -> Self {
        self.terms.push(Box::new(term));
        self
    }
}

impl<R: GameRules> Default for CompositeEvaluator<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GameRules> Evaluator<R> for CompositeEvaluator<R> {
    fn evaluate(&self, rules: &R, position: &R::Position) -> Score {
        self.terms.iter().map(|term| term.score(rules, position)).sum()
    }
}

/// Termo de mobilidade: diferença entre o número de lances legais dos dois
/// lados. É o único termo que consulta a geração de lances das regras em vez
/// de olhar apenas para o estado da posição.
pub struct MobilityTerm {
    pub weight: Score,
}

impl Default for MobilityTerm {
    fn default() -> Self {
        MobilityTerm { weight: 0.1 }
    }
}

impl<R: GameRules> Term<R> for MobilityTerm {
    fn score(&self, rules: &R, position: &R::Position) -> Score {
        let max_moves = rules.generate_moves(position, Side::Maximizing).len() as Score;
        let min_moves = rules.generate_moves(position, Side::Minimizing).len() as Score;
        self.weight * (max_moves - min_moves)
    }
}
