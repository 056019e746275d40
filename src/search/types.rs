use super::stats::SearchStats;

/// 探索ノードの役割（根プレイヤー視点で最大化するか最小化するか）。
///
/// 役割は1手ごとに交代する。最小化側の正しさは定和ゲームの仮定に依存する
/// （相手の利得最大化＝根プレイヤーの利得最小化）。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum Role {
    /// 根プレイヤーの利得を最大化する。
    Max,
    /// 根プレイヤーの利得を最小化する。
    Min,
}

impl Role {
    /// 1手（ply）進んだときの役割を返す。
    #[inline]
    pub(crate) const fn flipped(self) -> Self {
        match self {
            Self::Max => Self::Min,
            Self::Min => Self::Max,
        }
    }
}

/// 探索が手を返せなかった理由。
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// 非終端の開始局面に合法手が1つも無かった。
    NoAvailableAction,
    /// 開始局面がすでに終端だった。
    TerminalStart,
}

/// 探索の結果（最善手・評価値・統計）。
#[derive(Clone, Copy, Debug)]
pub struct SearchOutcome<A> {
    /// ルートで選択した最善手。
    action: A,
    /// 探索統計。
    stats: SearchStats,
    /// `action` の評価値（根プレイヤー視点）。
    value: f64,
}

impl<A> SearchOutcome<A> {
    /// ルートで選択した最善手への参照を返す。
    #[must_use]
    pub const fn action(&self) -> &A {
        &self.action
    }

    /// 最善手を取り出す。
    #[must_use]
    pub fn into_action(self) -> A {
        self.action
    }

    /// 探索結果を生成する。
    pub(crate) const fn new(action: A, value: f64, stats: SearchStats) -> Self {
        Self {
            action,
            stats,
            value,
        }
    }

    /// 探索統計を返す。
    #[must_use]
    pub const fn stats(&self) -> SearchStats {
        self.stats
    }

    /// 評価値（根プレイヤー視点）を返す。
    #[must_use]
    pub const fn value(&self) -> f64 {
        self.value
    }
}
