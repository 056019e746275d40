use super::INF;
use super::stats::SearchContext;
use super::types::Role;
use crate::game::problem::GameProblem;
use crate::game::types::Player;

/// 打ち切り深さを正規化する（0の場合は1にする）。
#[inline]
pub(super) const fn normalize_cutoff(cutoff_ply: u32) -> u32 {
    if cutoff_ply == u32::MIN {
        u32::MIN.wrapping_add(1)
    } else {
        cutoff_ply
    }
}

/// 1ノードを深さ打ち切り付きαβで評価し、(評価値, 最善手) を返す。
///
/// ノードごとの評価順序は固定：
///
/// 1. 終端局面なら真の利得を返す（深さに関係なく、打ち切りより常に優先）。
/// 2. `depth` が `cutoff_ply` に達していれば `heuristic(state, 根プレイヤー)`
///    を返し、それ以上降りない。
/// 3. それ以外は `depth + 1` で通常のαβ再帰を続ける。
///
/// 枝刈りとタイブレークの規則は [`super::pruned`] と同一。
#[expect(clippy::too_many_arguments, reason = "再帰に窓と深さを値渡しで伝播する")]
pub(super) fn evaluate_node<P, H>(
    problem: &P,
    state: &P::State,
    role: Role,
    alpha: f64,
    beta: f64,
    depth: u32,
    cutoff_ply: u32,
    heuristic: &H,
    ctx: &mut SearchContext,
) -> (f64, Option<P::Action>)
where
    P: GameProblem,
    H: Fn(&P::State, Player) -> f64,
{
    ctx.stats_mut().inc_nodes();

    // 終端判定は深さ打ち切りより常に優先する。
    if problem.is_terminal(state) {
        let payoff = problem.terminal_payoff(state);
        return (payoff.get(ctx.root_player()), None);
    }

    if depth >= cutoff_ply {
        ctx.stats_mut().inc_heuristic_evals();
        return (heuristic(state, ctx.root_player()), None);
    }

    let next_depth = depth.saturating_add(1);
    let mut alpha_mut = alpha;
    let mut beta_mut = beta;
    let mut best_value = match role {
        Role::Max => -INF,
        Role::Min => INF,
    };
    let mut best_action: Option<P::Action> = None;

    for action in problem.available_actions(state) {
        let next = problem.transition(state, &action);
        let (child_value, _reply) = evaluate_node(
            problem,
            &next,
            role.flipped(),
            alpha_mut,
            beta_mut,
            next_depth,
            cutoff_ply,
            heuristic,
            ctx,
        );

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
