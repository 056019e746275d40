//! 結合テスト: 三目並べを題材に、3つの探索エントリポイントが
//! 公開APIだけで一貫した手を選ぶことを確認する。

/// 統合テスト本体。
#[cfg(test)]
mod tests {
    use yomi_core::game::problem::GameProblem;
    use yomi_core::game::{Payoff, Player};
    use yomi_core::search;

    /// 3つ並びになるマスの組。
    const LINES: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];

    /// 三目並べの局面。
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct Board {
        /// 各マスの状態（先手/後手/空き）。
        cells: [Option<Player>; 9],
        /// 手番。
        to_move: Player,
    }

    impl Board {
        /// 空の盤面（先手番）。
        const fn empty() -> Self {
            Self {
                cells: [None; 9],
                to_move: Player::First,
            }
        }

        /// 3つ並びを作ったプレイヤーを返す。
        fn winner(&self) -> Option<Player> {
            for line in LINES {
                let first = self.cells[line[0]];
                if first.is_some() && first == self.cells[line[1]] && first == self.cells[line[2]] {
                    return first;
                }
            }
            None
        }

        /// 空きマスが残っていないかどうか。
        fn is_full(&self) -> bool {
            self.cells.iter().all(Option::is_some)
        }
    }

    /// 任意の局面を開始局面とする三目並べのゲーム問題。
    struct TicTacToe {
        /// 探索の開始局面。
        start: Board,
    }

    impl GameProblem for TicTacToe {
        type Action = usize;
        type State = Board;

        fn available_actions(&self, state: &Board) -> Vec<usize> {
            (0..9).filter(|&cell| state.cells[cell].is_none()).collect()
        }

        fn is_terminal(&self, state: &Board) -> bool {
            state.winner().is_some() || state.is_full()
        }

        fn player_to_move(&self, state: &Board) -> Player {
            state.to_move
        }

        fn start_state(&self) -> Board {
            self.start
        }

        fn terminal_payoff(&self, state: &Board) -> Payoff {
            match state.winner() {
                Some(Player::First) => Payoff::zero_sum(1.0),
                Some(Player::Second) => Payoff::zero_sum(-1.0),
                Some(_) | None => Payoff::zero_sum(0.0),
            }
        }

        fn transition(&self, state: &Board, action: &usize) -> Board {
            let mut next = *state;
            next.cells[*action] = Some(state.to_move);
            next.to_move = state.to_move.opponent();
            next
        }
    }

    /// 空の盤面から `moves` を交互に適用した局面を返す。
    fn board_after(moves: &[usize]) -> Board {
        let problem = TicTacToe {
            start: Board::empty(),
        };
        let mut board = Board::empty();
        for cell in moves {
            board = problem.transition(&board, cell);
        }
        board
    }

    /// テスト実行時にJSONログの購読を初期化する（多重初期化は無視）。
    fn init_tracing() {
        let init_result = tracing_subscriber::fmt().json().try_init();
        drop(init_result);
    }

    /// 打ち切り探索用の簡易評価：自分のマーク数と相手のマーク数の差。
    fn mark_difference(state: &Board, player: Player) -> f64 {
        let mut score = 0.0;
        for cell in state.cells {
            match cell {
                Some(owner) if owner == player => score += 1.0,
                Some(_) => score -= 1.0,
                None => {}
            }
        }
        score
    }

    #[test]
    fn alpha_beta_from_empty_board_is_draw() {
        init_tracing();

        let problem = TicTacToe {
            start: Board::empty(),
        };
        let outcome = search::alpha_beta_outcome(&problem).expect("search must succeed");

        assert_eq!(outcome.value(), 0.0, "perfect play must end in a draw");
        assert!(*outcome.action() < 9, "chosen cell must be on the board");
    }

    #[test]
    fn minimax_and_alpha_beta_agree_from_midgame() {
        let problem = TicTacToe {
            start: board_after(&[0, 4, 8]),
        };

        let mm = search::minimax_outcome(&problem).expect("minimax must succeed");
        let ab = search::alpha_beta_outcome(&problem).expect("alpha-beta must succeed");

        assert_eq!(mm.value(), ab.value());
        assert!(ab.stats().nodes() <= mm.stats().nodes());
    }

    #[test]
    fn all_entry_points_take_immediate_win() {
        // 先手が0と1を押さえ、2で勝てる局面。後手も5を狙っているので
        // 即勝ち以外の手は価値が落ちる。
        let problem = TicTacToe {
            start: board_after(&[0, 3, 1, 4]),
        };

        assert_eq!(search::minimax(&problem), Ok(2));
        assert_eq!(search::alpha_beta(&problem), Ok(2));
        assert_eq!(search::alpha_beta_cutoff(&problem, 2, mark_difference), Ok(2));
    }

    #[test]
    fn optimal_play_ends_in_draw() {
        init_tracing();

        let mut board = Board::empty();
        for _turn in 0..9 {
            let problem = TicTacToe { start: board };
            if problem.is_terminal(&board) {
                break;
            }

            let cell = search::alpha_beta(&problem).expect("non-terminal board must yield a move");
            board = problem.transition(&board, &cell);
        }

        let problem = TicTacToe { start: board };
        assert!(problem.is_terminal(&board), "game must reach a terminal state");
        assert_eq!(board.winner(), None, "optimal play must not produce a winner");

        let payoff = problem.terminal_payoff(&board);
        assert_eq!(payoff.get(Player::First), 0.0);
        assert_eq!(payoff.get(Player::Second), 0.0);
    }

    #[test]
    fn shallow_cutoff_selects_legal_move() {
        let problem = TicTacToe {
            start: Board::empty(),
        };
        let outcome = search::alpha_beta_cutoff_outcome(&problem, 3, mark_difference)
            .expect("cutoff search must succeed");

        assert!(*outcome.action() < 9);
        assert!(
            outcome.stats().heuristic_evals() > 0,
            "a 3-ply cutoff on an empty board must hit the heuristic"
        );
    }

    #[test]
    fn deep_cutoff_matches_alpha_beta() {
        let problem = TicTacToe {
            start: board_after(&[0, 4, 8]),
        };

        let never_called = |state: &Board, _player: Player| -> f64 {
            unreachable!("heuristic must not be called, board={state:?}");
        };

        let ab = search::alpha_beta_outcome(&problem).expect("alpha-beta must succeed");
        let cut = search::alpha_beta_cutoff_outcome(&problem, 9, never_called)
            .expect("cutoff search must succeed");

        assert_eq!(cut.action(), ab.action());
        assert_eq!(cut.value(), ab.value());
        assert_eq!(cut.stats().heuristic_evals(), 0);
    }
}
