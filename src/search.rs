//! 探索アルゴリズムのエントリポイント。
//!
//! 3つの変種はいずれも、開始局面の手番プレイヤー（根プレイヤー）の
//! 保証利得を最大化する手を返す。タイブレークは「狭義の改善のみ採用」
//! （同値なら先に列挙された手が勝つ）で3変種とも共通。

/// 深さ打ち切り付きαβ探索の実装。
mod bounded;
/// 全探索ミニマックスの実装。
mod exhaustive;
/// αβ枝刈り探索の実装。
mod pruned;
/// 探索統計と探索コンテキスト。
pub mod stats;
/// 探索結果・エラーの型定義。
pub mod types;

use crate::game::problem::GameProblem;
use crate::game::types::Player;
use self::stats::SearchContext;
use self::types::Role;

pub type SearchError = types::SearchError;
pub type SearchOutcome<A> = types::SearchOutcome<A>;
pub type SearchStats = stats::SearchStats;

/// 探索値として扱う正の無限大。
pub(crate) const INF: f64 = f64::INFINITY;

/// αβ枝刈り探索で開始局面の最善手を返す。
///
/// 定和ゲームであれば [`minimax`] と同じ評価値の手を返し、
/// 訪問ノード数はミニマックスの部分集合に収まる。
///
/// # Errors
///
/// 次の場合にエラーを返す：
/// - `SearchError::TerminalStart`: 開始局面がすでに終端の場合
/// - `SearchError::NoAvailableAction`: 開始局面に合法手が無い場合
#[inline]
pub fn alpha_beta<P: GameProblem>(problem: &P) -> Result<P::Action, SearchError> {
    match alpha_beta_outcome(problem) {
        Ok(outcome) => Ok(outcome.into_action()),
        Err(err) => Err(err),
    }
}

/// 深さ打ち切り付きαβ探索で開始局面の最善手を返す。
///
/// 根から `cutoff_ply` 手（ply）に達した非終端局面では、それ以上
/// 降りずに `heuristic(state, 根プレイヤー)` の推定値を使う。
/// 終端判定は常に打ち切りより優先されるため、`heuristic` が終端局面で
/// 呼ばれることはない。`cutoff_ply` が最深の終端より深ければ結果は
/// [`alpha_beta`] と一致する。
///
/// `cutoff_ply` は正であることが前提条件（0 は 1 として扱う）。
///
/// # Errors
///
/// エラー条件は [`alpha_beta`] と同じ。
#[inline]
pub fn alpha_beta_cutoff<P, H>(
    problem: &P,
    cutoff_ply: u32,
    heuristic: H,
) -> Result<P::Action, SearchError>
where
    P: GameProblem,
    H: Fn(&P::State, Player) -> f64,
{
    match alpha_beta_cutoff_outcome(problem, cutoff_ply, heuristic) {
        Ok(outcome) => Ok(outcome.into_action()),
        Err(err) => Err(err),
    }
}

/// 深さ打ち切り付きαβ探索の結果（最善手・評価値・統計）を返す。
///
/// # Errors
///
/// エラー条件は [`alpha_beta`] と同じ。
pub fn alpha_beta_cutoff_outcome<P, H>(
    problem: &P,
    cutoff_ply: u32,
    heuristic: H,
) -> Result<SearchOutcome<P::Action>, SearchError>
where
    P: GameProblem,
    H: Fn(&P::State, Player) -> f64,
{
    let start = problem.start_state();
    if problem.is_terminal(&start) {
        return Err(SearchError::TerminalStart);
    }

    let cutoff = bounded::normalize_cutoff(cutoff_ply);
    let mut ctx = SearchContext::new(problem.player_to_move(&start));
    let (value, action_opt) = bounded::evaluate_node(
        problem,
        &start,
        Role::Max,
        -INF,
        INF,
        u32::MIN,
        cutoff,
        &heuristic,
        &mut ctx,
    );

    let search_stats = ctx.stats();
    tracing::debug!(
        nodes = search_stats.nodes(),
        cutoffs = search_stats.cutoffs(),
        heuristic_evals = search_stats.heuristic_evals(),
        value,
        "alpha-beta cutoff search finished"
    );

    match action_opt {
        Some(action) => Ok(SearchOutcome::new(action, value, search_stats)),
        None => Err(SearchError::NoAvailableAction),
    }
}

/// αβ枝刈り探索の結果（最善手・評価値・統計）を返す。
///
/// # Errors
///
/// エラー条件は [`alpha_beta`] と同じ。
pub fn alpha_beta_outcome<P: GameProblem>(
    problem: &P,
) -> Result<SearchOutcome<P::Action>, SearchError> {
    let start = problem.start_state();
    if problem.is_terminal(&start) {
        return Err(SearchError::TerminalStart);
    }

    let mut ctx = SearchContext::new(problem.player_to_move(&start));
    let (value, action_opt) = pruned::evaluate_node(problem, &start, Role::Max, -INF, INF, &mut ctx);

    let search_stats = ctx.stats();
    tracing::debug!(
        nodes = search_stats.nodes(),
        cutoffs = search_stats.cutoffs(),
        value,
        "alpha-beta search finished"
    );

    match action_opt {
        Some(action) => Ok(SearchOutcome::new(action, value, search_stats)),
        None => Err(SearchError::NoAvailableAction),
    }
}

/// ミニマックス法（全探索）で開始局面の最善手を返す。
///
/// 2人・定和ゲームを前提に終端までゲーム木を全探索し、
/// 双方が最善を尽くした場合に根プレイヤーの利得を最大化する手を返す。
///
/// # Errors
///
/// エラー条件は [`alpha_beta`] と同じ。
#[inline]
pub fn minimax<P: GameProblem>(problem: &P) -> Result<P::Action, SearchError> {
    match minimax_outcome(problem) {
        Ok(outcome) => Ok(outcome.into_action()),
        Err(err) => Err(err),
    }
}

/// ミニマックス法の探索結果（最善手・評価値・統計）を返す。
///
/// # Errors
///
/// エラー条件は [`alpha_beta`] と同じ。
pub fn minimax_outcome<P: GameProblem>(
    problem: &P,
) -> Result<SearchOutcome<P::Action>, SearchError> {
    let start = problem.start_state();
    if problem.is_terminal(&start) {
        return Err(SearchError::TerminalStart);
    }

    let mut ctx = SearchContext::new(problem.player_to_move(&start));
    let (value, action_opt) = exhaustive::evaluate_node(problem, &start, Role::Max, &mut ctx);

    let search_stats = ctx.stats();
    tracing::debug!(
        nodes = search_stats.nodes(),
        value,
        "minimax search finished"
    );

    match action_opt {
        Some(action) => Ok(SearchOutcome::new(action, value, search_stats)),
        None => Err(SearchError::NoAvailableAction),
    }
}
