use super::INF;
use super::stats::SearchContext;
use super::types::Role;
use crate::game::problem::GameProblem;

/// 1ノードをαβ枝刈り付きで評価し、(評価値, そのノードでの最善手) を返す。
///
/// 窓（`alpha`/`beta`）は値渡しで再帰に伝播し、兄弟枝の間で共有しない。
/// 更新規則は元のミニマックスと同一（狭義の改善のみ、先に列挙された手が
/// タイに勝つ）で、カットは次の2つ：
///
/// - 最大化ノード: 改善時に `alpha` を引き上げ、`best >= beta` で即座に返す。
/// - 最小化ノード: 改善時に `beta` を引き下げ、`best <= alpha` で即座に返す。
pub(super) fn evaluate_node<P: GameProblem>(
    problem: &P,
    state: &P::State,
    role: Role,
    alpha: f64,
    beta: f64,
    ctx: &mut SearchContext,
) -> (f64, Option<P::Action>) {
    ctx.stats_mut().inc_nodes();

    if problem.is_terminal(state) {
        let payoff = problem.terminal_payoff(state);
        return (payoff.get(ctx.root_player()), None);
    }

    let mut alpha_mut = alpha;
    let mut beta_mut = beta;
    let mut best_value = match role {
        Role::Max => -INF,
        Role::Min => INF,
    };
    let mut best_action: Option<P::Action> = None;

    for action in problem.available_actions(state) {
        let next = problem.transition(state, &action);
        let (child_value, _reply) =
            evaluate_node(problem, &next, role.flipped(), alpha_mut, beta_mut, ctx);

        match role {
            Role::Max => {
                if child_value > best_value {
                    best_value = child_value;
                    best_action = Some(action);
                    if best_value > alpha_mut {
                        alpha_mut = best_value;
                    }
                }
                if best_value >= beta_mut {
                    ctx.stats_mut().inc_cutoffs();
                    return (best_value, best_action);
                }
            }
            Role::Min => {
                if child_value < best_value {
                    best_value = child_value;
                    best_action = Some(action);
                    if best_value < beta_mut {
                        beta_mut = best_value;
                    }
                }
                if best_value <= alpha_mut {
                    ctx.stats_mut().inc_cutoffs();
                    return (best_value, best_action);
                }
            }
        }
    }

    (best_value, best_action)
}
