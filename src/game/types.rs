/// 手番プレイヤー。
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[non_exhaustive]
pub enum Player {
    /// 先手。
    First,
    /// 後手。
    Second,
}

impl Player {
    /// 相手側のプレイヤーを返す。
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// 終端局面の利得ベクトル（プレイヤーごとの実数値）。
///
/// 定和（constant-sum）であることは利用側の契約であり、ここでは検証しない。
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Payoff {
    /// 先手の利得。
    first: f64,
    /// 後手の利得。
    second: f64,
}

impl Payoff {
    /// `player` の利得を返す。
    #[inline]
    #[must_use]
    pub const fn get(self, player: Player) -> f64 {
        match player {
            Player::First => self.first,
            Player::Second => self.second,
        }
    }

    /// 両プレイヤーの利得を指定して生成する。
    #[inline]
    #[must_use]
    pub const fn new(first: f64, second: f64) -> Self {
        Self { first, second }
    }

    /// 零和の利得を生成する（後手の利得は `-first`）。
    #[inline]
    #[must_use]
    pub const fn zero_sum(first: f64) -> Self {
        Self::new(first, -first)
    }
}
