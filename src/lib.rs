//! 2人・定和（constant-sum）ゲームの意思決定コア。
//!
//! このクレートはゲームモデルの抽象境界 `game` と、最善手を選択する
//! 探索アルゴリズム群 `search` を提供します。
//! 盤面表現・合法手生成・遷移などの具体的なゲームモデルは、
//! 利用側が `game::problem::GameProblem` として実装して渡します。

#![forbid(unsafe_code)]

/// ゲーム問題の抽象インターフェースを提供するモジュール。
pub mod game;

/// 探索アルゴリズム（ミニマックス/αβ/深さ打ち切りαβ）を提供するモジュール。
pub mod search;
