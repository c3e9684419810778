//! # Contact Service 設定
//!
//! 環境変数から設定を読み込む。すべての変数にデフォルト値があり、必須の変数はない。
//!
//! | 変数名 | デフォルト | 説明 |
//! |--------|------------|------|
//! | `HOST` | `0.0.0.0` | バインドアドレス |
//! | `PORT` | `5000` | ポート番号 |
//! | `MONGO_URI` | `mongodb://localhost:27017/comingsoon` | MongoDB 接続 URI |
//! | `MONGO_CONNECT_TIMEOUT_SECS` | `5` | 起動時の接続タイムアウト（秒） |
//! | `FRONTEND_URL` | `*` | CORS で許可するオリジン（`*` は全オリジン） |
//!
//! 空文字列は未設定として扱う。値が設定されていて不正な場合はエラーを返し、
//! プロセスは起動しない。

use std::{env, time::Duration};

use axum::http::HeaderValue;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_MONGO_URI: &str = "mongodb://localhost:27017/comingsoon";
const DEFAULT_MONGO_CONNECT_TIMEOUT_SECS: u64 = 5;

/// 設定読み込みエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   #[error("{name} の値が不正です: {value:?}")]
   Invalid { name: &'static str, value: String },
}

/// CORS で許可するオリジン
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigin {
   /// 全オリジンを許可（`FRONTEND_URL=*`）
   Any,
   /// 指定したオリジンのみ許可
   Exact(HeaderValue),
}

impl AllowedOrigin {
   fn parse(value: &str) -> Result<Self, ConfigError> {
      if value == "*" {
         return Ok(Self::Any);
      }
      HeaderValue::from_str(value)
         .map(Self::Exact)
         .map_err(|_| ConfigError::Invalid {
            name:  "FRONTEND_URL",
            value: value.to_string(),
         })
   }
}

/// Contact Service の設定
#[derive(Debug, Clone)]
pub struct ContactServiceConfig {
   /// バインドアドレス
   pub host:                  String,
   /// ポート番号
   pub port:                  u16,
   /// MongoDB 接続 URI（認証情報を含みうるためログに出さない）
   pub mongo_uri:             String,
   /// 起動時の接続・サーバー選択タイムアウト
   pub mongo_connect_timeout: Duration,
   /// CORS で許可するオリジン
   pub allowed_origin:        AllowedOrigin,
}

impl ContactServiceConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の読み取り関数から設定を組み立てる
   ///
   /// テストでプロセスの環境変数を書き換えずに検証するために分離している。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

      let port = match get("PORT") {
         Some(value) => value.parse::<u16>().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let mongo_connect_timeout = match get("MONGO_CONNECT_TIMEOUT_SECS") {
         Some(value) => value
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid {
               name: "MONGO_CONNECT_TIMEOUT_SECS",
               value,
            })?,
         None => Duration::from_secs(DEFAULT_MONGO_CONNECT_TIMEOUT_SECS),
      };

      let allowed_origin = match get("FRONTEND_URL") {
         Some(value) => AllowedOrigin::parse(&value)?,
         None => AllowedOrigin::Any,
      };

      Ok(Self {
         host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
         port,
         mongo_uri: get("MONGO_URI").unwrap_or_else(|| DEFAULT_MONGO_URI.to_string()),
         mongo_connect_timeout,
         allowed_origin,
      })
   }
}
