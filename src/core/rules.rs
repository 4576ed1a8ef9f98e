// Ficheiro: src/core/rules.rs
// Descrição: Contrato das regras de jogo consumido pela busca (Move Oracle).

use super::types::Side;

/// Contrato que a busca exige das regras de um jogo concreto.
///
/// A busca não conhece nenhuma regra em si: apenas enumera lances legais,
/// aplica-os com semântica de valor e consulta o estado terminal. Qualquer
/// jogo de dois jogadores, soma zero e informação perfeita serve.
pub trait GameRules {
    /// Snapshot completo e autocontido do estado do jogo. Cada ramo da
    /// busca opera sobre a sua própria cópia; ramos irmãos nunca observam
    /// mutações uns dos outros.
    type Position: Clone;

    /// Descritor opaco de uma transição legal. Só tem significado para a
    /// posição que o gerou.
    type Move: Clone;

    /// Enumera todos os lances legais de `side` em `position`. Vetor vazio
    /// sinaliza ausência de lances. Deve ser determinístico para uma posição
    /// fixa; a ordem de enumeração define o desempate na raiz da busca.
    fn generate_moves(&self, position: &Self::Position, side: Side) -> Vec<Self::Move>;

    /// Devolve uma nova posição com o lance aplicado, sem modificar a
    /// original. Comportamento indefinido se `mv` não veio de
    /// `generate_moves` sobre uma posição equivalente.
    fn apply_move(&self, position: &Self::Position, mv: &Self::Move) -> Self::Position;

    /// Indica se o jogo terminou nesta posição, independente da profundidade
    /// restante da busca.
    fn is_terminal(&self, position: &Self::Position) -> bool;
}
