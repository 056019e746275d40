use crate::game::types::Player;

/// 探索統計。
#[derive(Default, Clone, Copy, Debug)]
pub struct SearchStats {
    /// αβカットで兄弟の探索を打ち切った回数。
    cutoffs: u64,
    /// ヒューリスティック評価を行った回数。
    heuristic_evals: u64,
    /// 訪問（評価）したノード数。
    nodes: u64,
}

impl SearchStats {
    /// αβカット回数を返す。
    #[must_use]
    pub const fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// ヒューリスティック評価回数を返す。
    #[must_use]
    pub const fn heuristic_evals(&self) -> u64 {
        self.heuristic_evals
    }

    /// αβカット回数を加算する。
    pub(crate) const fn inc_cutoffs(&mut self) {
        self.cutoffs = self.cutoffs.wrapping_add(1);
    }

    /// ヒューリスティック評価回数を加算する。
    pub(crate) const fn inc_heuristic_evals(&mut self) {
        self.heuristic_evals = self.heuristic_evals.wrapping_add(1);
    }

    /// 訪問ノード数を加算する。
    pub(crate) const fn inc_nodes(&mut self) {
        self.nodes = self.nodes.wrapping_add(1);
    }

    /// 訪問ノード数を返す。
    #[must_use]
    pub const fn nodes(&self) -> u64 {
        self.nodes
    }
}

/// 1回のトップレベル探索の間だけ生きる探索コンテキスト。
///
/// 根プレイヤーは開始局面で一度だけ決まり、以後すべての再帰呼び出しで
/// 固定される（ノードごとに再計算しない）。
#[derive(Debug)]
pub(crate) struct SearchContext {
    /// 探索全体で固定される根プレイヤー。
    root_player: Player,
    /// 探索統計。
    stats: SearchStats,
}

impl SearchContext {
    /// 探索コンテキストを生成する。
    pub(crate) fn new(root_player: Player) -> Self {
        Self {
            root_player,
            stats: SearchStats::default(),
        }
    }

    /// 探索全体で固定される根プレイヤーを返す。
    pub(crate) const fn root_player(&self) -> Player {
        self.root_player
    }

    /// 探索統計を返す。
    pub(crate) const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 探索統計への可変参照を返す。
    pub(crate) const fn stats_mut(&mut self) -> &mut SearchStats {
        &mut self.stats
    }
}
