// Ficheiro: src/board.rs
// Descrição: Jogo de demonstração — tabuleiro 8x8 com movimentação simplificada.
//
// Implementa o contrato GameRules para exercitar a busca e o avaliador com um
// jogo concreto. A movimentação é pseudo-legal: sem xeque, roque, promoção ou
// en passant; a partida termina quando um rei é capturado.

use crate::core::{GameRules, Score, Side};
use thiserror::Error;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Valor material da peça. O rei não pontua: a sua perda é detectada
    /// pelo estado terminal, não pela contagem de material.
    pub fn value(&self) -> Score {
        match self {
            PieceKind::Pawn => 1.0,
            PieceKind::Knight => 3.0,
            PieceKind::Bishop => 3.0,
            PieceKind::Rook => 5.0,
            PieceKind::Queen => 9.0,
            PieceKind::King => 0.0,
        }
    }

    fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }
}

// Struct para representar uma peça, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
}

// Struct para representar um lance: casa de origem e de destino.
// Índices 0..64, bit 0 = a1, 63 = h8, como de costume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardMove {
    pub from: u8,
    pub to: u8,
}

impl std::fmt::Display for BoardMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", to_algebraic(self.from), to_algebraic(self.to))
    }
}

fn to_algebraic(sq: u8) -> String {
    let file = (sq % 8) + b'a';
    let rank = (sq / 8) + b'1';
    format!("{}{}", file as char, rank as char)
}

/// Erros de construção do tabuleiro a partir de texto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("invalid piece character: '{0}'")]
    InvalidPiece(char),
    #[error("expected 64 squares, found {0}")]
    WrongSquareCount(usize),
}

/// Tabuleiro 8x8 com semântica de valor.
///
/// `Copy` garante o invariante central da busca: aplicar um lance a uma cópia
/// nunca modifica a posição original, e ramos irmãos nunca se observam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Posição inicial padrão do xadrez.
    pub fn start_position() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::empty();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as u8;
            board.place(file, Piece::new(kind, Color::White));
            board.place(8 + file, Piece::new(PieceKind::Pawn, Color::White));
            board.place(48 + file, Piece::new(PieceKind::Pawn, Color::Black));
            board.place(56 + file, Piece::new(kind, Color::Black));
        }
        board
    }

    /// Constrói um tabuleiro a partir de 64 caracteres, rank 8 primeiro,
    /// da esquerda para a direita. Maiúsculas são brancas, `.` é casa vazia;
    /// espaços e quebras de linha são ignorados.
    pub fn from_ascii(text: &str) -> Result<Self, BoardError> {
        let cells: Vec<char> = text.chars().filter(|ch| !ch.is_whitespace()).collect();
        if cells.len() != 64 {
            return Err(BoardError::WrongSquareCount(cells.len()));
        }

        let mut board = Board::empty();
        for (i, &ch) in cells.iter().enumerate() {
            if ch == '.' {
                continue;
            }
            let kind = PieceKind::from_char(ch).ok_or(BoardError::InvalidPiece(ch))?;
            let color = if ch.is_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let rank = 7 - (i / 8) as u8;
            let file = (i % 8) as u8;
            board.place(rank * 8 + file, Piece::new(kind, color));
        }
        Ok(board)
    }

    pub fn piece_at(&self, sq: u8) -> Option<Piece> {
        self.squares[sq as usize]
    }

    pub fn place(&mut self, sq: u8, piece: Piece) {
        self.squares[sq as usize] = Some(piece);
    }

    pub fn remove(&mut self, sq: u8) {
        self.squares[sq as usize] = None;
    }

    /// Itera sobre todas as casas ocupadas.
    pub fn pieces(&self) -> impl Iterator<Item = (u8, Piece)> + '_ {
        self.squares
            .iter()
            .enumerate()
            .filter_map(|(sq, piece)| piece.map(|p| (sq as u8, p)))
    }

    pub fn king_square(&self, color: Color) -> Option<u8> {
        self.pieces()
            .find(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .map(|(sq, _)| sq)
    }

    /// Espelho com os lados trocados: ranks invertidos e cores invertidas.
    /// Para um avaliador simétrico, `evaluate(espelho) == -evaluate(original)`.
    pub fn mirrored(&self) -> Board {
        let mut mirror = Board::empty();
        for (sq, piece) in self.pieces() {
            let rank = sq / 8;
            let file = sq % 8;
            let flipped = (7 - rank) * 8 + file;
            mirror.place(flipped, Piece::new(piece.kind, !piece.color));
        }
        mirror
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let ch = match self.piece_at(rank * 8 + file) {
                    Some(p) if p.color == Color::White => {
                        p.kind.to_char().to_ascii_uppercase()
                    }
                    Some(p) => p.kind.to_char(),
                    None => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Regras do jogo de demonstração. O lado maximizador joga com as brancas.
pub struct BoardRules;

impl BoardRules {
    fn color_for(side: Side) -> Color {
        match side {
            Side::Maximizing => Color::White,
            Side::Minimizing => Color::Black,
        }
    }
}

impl GameRules for BoardRules {
    type Position = Board;
    type Move = BoardMove;

    fn generate_moves(&self, board: &Board, side: Side) -> Vec<BoardMove> {
        let color = Self::color_for(side);
        let mut moves = Vec::new();

        for (sq, piece) in board.pieces() {
            if piece.color != color {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => push_pawn_moves(board, sq, color, &mut moves),
                PieceKind::Knight => push_step_moves(board, sq, &KNIGHT_OFFSETS, color, &mut moves),
                PieceKind::King => push_step_moves(board, sq, &KING_OFFSETS, color, &mut moves),
                PieceKind::Bishop => push_sliding_moves(board, sq, &BISHOP_DIRS, color, &mut moves),
                PieceKind::Rook => push_sliding_moves(board, sq, &ROOK_DIRS, color, &mut moves),
                PieceKind::Queen => {
                    push_sliding_moves(board, sq, &BISHOP_DIRS, color, &mut moves);
                    push_sliding_moves(board, sq, &ROOK_DIRS, color, &mut moves);
                }
            }
        }

        moves
    }

    fn apply_move(&self, board: &Board, mv: &BoardMove) -> Board {
        let mut next = *board;
        next.squares[mv.to as usize] = next.squares[mv.from as usize];
        next.squares[mv.from as usize] = None;
        next
    }

    fn is_terminal(&self, board: &Board) -> bool {
        board.king_square(Color::White).is_none() || board.king_square(Color::Black).is_none()
    }
}

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

const KING_OFFSETS: [(i8, i8); 8] = [
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];
const ROOK_DIRS: [(i8, i8); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

/// Desloca `sq` por (df, dr); None se sair do tabuleiro.
fn offset_square(sq: u8, df: i8, dr: i8) -> Option<u8> {
    let file = (sq % 8) as i8 + df;
    let rank = (sq / 8) as i8 + dr;
    if (0..8).contains(&file) && (0..8).contains(&rank) {
        Some((rank * 8 + file) as u8)
    } else {
        None
    }
}

fn push_pawn_moves(board: &Board, sq: u8, color: Color, moves: &mut Vec<BoardMove>) {
    let forward = match color {
        Color::White => 1,
        Color::Black => -1,
    };

    if let Some(to) = offset_square(sq, 0, forward) {
        if board.piece_at(to).is_none() {
            moves.push(BoardMove { from: sq, to });
        }
    }

    for df in [-1, 1] {
        if let Some(to) = offset_square(sq, df, forward) {
            if matches!(board.piece_at(to), Some(p) if p.color != color) {
                moves.push(BoardMove { from: sq, to });
            }
        }
    }
}

fn push_step_moves(
    board: &Board,
    sq: u8,
    offsets: &[(i8, i8)],
    color: Color,
    moves: &mut Vec<BoardMove>,
) {
    for &(df, dr) in offsets {
        if let Some(to) = offset_square(sq, df, dr) {
            match board.piece_at(to) {
                Some(p) if p.color == color => {}
                _ => moves.push(BoardMove { from: sq, to }),
            }
        }
    }
}

fn push_sliding_moves(
    board: &Board,
    sq: u8,
    dirs: &[(i8, i8)],
    color: Color,
    moves: &mut Vec<BoardMove>,
) {
    for &(df, dr) in dirs {
        let mut current = sq;
        while let Some(to) = offset_square(current, df, dr) {
            match board.piece_at(to) {
                None => {
                    moves.push(BoardMove { from: sq, to });
                    current = to;
                }
                Some(p) => {
                    if p.color != color {
                        moves.push(BoardMove { from: sq, to });
                    }
                    break;
                }
            }
        }
    }
}
