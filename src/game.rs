/// ゲーム問題の抽象インターフェース（トレイト）の定義。
pub mod problem;
pub mod types;

pub type Payoff = types::Payoff;
pub type Player = types::Player;
