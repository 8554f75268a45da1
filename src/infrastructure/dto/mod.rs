//! DTO（ワイヤーフォーマット）定義
//!
//! WebSocket / HTTP の境界でやり取りする構造体。ドメインモデルとは
//! 分離し、境界で明示的に変換します。

pub mod http;
pub mod websocket;
