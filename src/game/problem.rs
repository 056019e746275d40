use crate::game::types::{Payoff, Player};

/// 2人・定和ゲームの抽象インターフェース。
///
/// 探索側は局面の中身を一切解釈せず、ここで公開される操作だけを通じて
/// ゲーム木を辿る。実装側が満たすべき前提条件：
///
/// - `transition` は純粋関数である（同じ入力は常に同じ局面を返す）。
/// - 非終端局面には少なくとも1つの合法手が存在する。
/// - 開始局面から到達可能なゲーム木は有限である
///   （違反すると再帰が止まらず、スタックを使い切る）。
pub trait GameProblem {
    /// 1手を表す型。`available_actions` の列挙順がタイブレーク順になる。
    type Action;

    /// 1局面を表す型。探索側からは不変値として扱う。
    type State;

    /// `state` で指せる合法手を列挙順で返す。
    ///
    /// 非終端局面で空を返してはならない（呼び出し側の前提条件）。
    fn available_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// `state` が終端局面かどうかを返す。
    fn is_terminal(&self, state: &Self::State) -> bool;

    /// `state` の手番プレイヤーを返す。
    ///
    /// 探索は開始局面で一度だけ参照し、以後は根プレイヤーとして固定する。
    fn player_to_move(&self, state: &Self::State) -> Player;

    /// 探索の起点となる開始局面を返す。
    fn start_state(&self) -> Self::State;

    /// 終端局面の利得ベクトルを返す。
    ///
    /// `is_terminal` が真の局面に対してのみ呼ばれる。
    fn terminal_payoff(&self, state: &Self::State) -> Payoff;

    /// `state` に `action` を適用した次の局面を返す。
    fn transition(&self, state: &Self::State, action: &Self::Action) -> Self::State;
}
