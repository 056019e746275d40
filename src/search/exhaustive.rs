use super::INF;
use super::stats::SearchContext;
use super::types::Role;
use crate::game::problem::GameProblem;

/// 1ノードを全探索で評価し、(評価値, そのノードでの最善手) を返す。
///
/// - 終端局面では根プレイヤーの利得を返し、手は `None`。
/// - 同値の手では更新しない（狭義の改善のみ）。先に列挙された手が勝つ。
/// - 合法手の無い非終端局面では番兵値（±∞）と `None` がそのまま伝播する。
pub(super) fn evaluate_node<P: GameProblem>(
    problem: &P,
    state: &P::State,
    role: Role,
    ctx: &mut SearchContext,
) -> (f64, Option<P::Action>) {
    ctx.stats_mut().inc_nodes();

    if problem.is_terminal(state) {
        let payoff = problem.terminal_payoff(state);
        return (payoff.get(ctx.root_player()), None);
    }

    let mut best_value = match role {
        Role::Max => -INF,
        Role::Min => INF,
    };
    let mut best_action: Option<P::Action> = None;

    for action in problem.available_actions(state) {
        let next = problem.transition(state, &action);
        let (child_value, _reply) = evaluate_node(problem, &next, role.flipped(), ctx);

        let improved = match role {
            Role::Max => child_value > best_value,
            Role::Min => child_value < best_value,
        };
        if improved {
            best_value = child_value;
            best_action = Some(action);
        }
    }

    (best_value, best_action)
}
