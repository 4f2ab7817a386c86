mod bishops;
mod kings;
mod knights;
mod pawns;

use super::{Move, MoveList, Piece, Position, Square};

impl Position {
    /// All pseudo-legal moves for the side to move, in board scan order
    pub(crate) fn generate_pseudo_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for (from, c, piece) in self.pieces() {
            if c != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => self.generate_bishop_moves(from, &mut moves),
                Piece::King => self.generate_king_moves(from, &mut moves),
            }
        }
        moves
    }

    /// Pseudo-legal target of a step or leap: empty or held by the opponent
    #[inline]
    fn push_if_target(&self, from: Square, to: Square, piece: Piece, moves: &mut MoveList) {
        match self.piece_at(to) {
            Some((c, _)) if c == self.side_to_move => {}
            captured => moves.push(Move::new(from, to, (self.side_to_move, piece), captured)),
        }
    }

    /// Legal moves: pseudo-legal moves that leave the mover's king safe
    pub fn legal_moves(&mut self) -> MoveList {
        let mut moves = self.generate_pseudo_moves();
        let mover = self.side_to_move;
        moves.retain(|m| {
            self.make_move(m);
            let safe = !self.king_in_danger(mover);
            self.undo_move();
            safe
        });
        moves
    }

    /// Number of legal moves for the side to move
    pub fn legal_move_count(&mut self) -> usize {
        self.legal_moves().len()
    }

    /// Whether `m` leaves the opponent's king attacked
    pub fn gives_check(&mut self, m: Move) -> bool {
        self.make_move(m);
        let check = self.is_in_check();
        self.undo_move();
        check
    }

    /// Count leaf nodes of the legal move tree to `depth`
    pub fn perft(&mut self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for m in moves {
            self.make_move(m);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }
}
