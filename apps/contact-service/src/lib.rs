//! # Contact Service ライブラリ
//!
//! 公開予定ページ（Coming Soon）のバックエンド API。
//!
//! ## モジュール構成
//!
//! - `app_builder`: ルーター構築と DI
//! - `config`: 環境変数からの設定読み込み
//! - `error`: エラー定義と HTTP レスポンスへの変換
//! - `handler`: HTTP ハンドラ
//! - `usecase`: お問い合わせの検証と保存

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
pub mod usecase;
