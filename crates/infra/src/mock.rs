//! # テスト用モック
//!
//! ユースケース・ハンドラのテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! comingsoon-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{
   Arc,
   Mutex,
   atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use comingsoon_domain::{
   clock::{Clock, SystemClock},
   contact::{ContactMessage, ContactMessageId, NewContactMessage},
};

use crate::{error::InfraError, mongo::DatabaseProbe, repository::ContactMessageRepository};

/// 障害モードで返す内部エラーメッセージ
///
/// レスポンスに漏れていないことをテストで確認するため公開する。
pub const MOCK_STORE_FAILURE: &str = "connection refused: mongodb://10.0.0.5:27017 (pool cleared)";

// ===== MockContactMessageRepository =====

#[derive(Clone)]
pub struct MockContactMessageRepository {
   messages:     Arc<Mutex<Vec<ContactMessage>>>,
   create_calls: Arc<AtomicUsize>,
   unavailable:  bool,
   clock:        Arc<dyn Clock>,
}

impl Default for MockContactMessageRepository {
   fn default() -> Self {
      Self::new()
   }
}

impl MockContactMessageRepository {
   pub fn new() -> Self {
      Self {
         messages:     Arc::new(Mutex::new(Vec::new())),
         create_calls: Arc::new(AtomicUsize::new(0)),
         unavailable:  false,
         clock:        Arc::new(SystemClock),
      }
   }

   /// ストアに到達できない状態を再現する（`create` は常に失敗する）
   pub fn unavailable() -> Self {
      Self {
         unavailable: true,
         ..Self::new()
      }
   }

   pub fn with_clock(self, clock: Arc<dyn Clock>) -> Self {
      Self { clock, ..self }
   }

   /// 保存済みメッセージのスナップショット
   pub fn messages(&self) -> Vec<ContactMessage> {
      self.messages.lock().unwrap().clone()
   }

   /// `create` が呼ばれた回数（失敗した呼び出しも含む）
   pub fn create_call_count(&self) -> usize {
      self.create_calls.load(Ordering::SeqCst)
   }
}

#[async_trait]
impl ContactMessageRepository for MockContactMessageRepository {
   async fn create(&self, draft: NewContactMessage) -> Result<ContactMessage, InfraError> {
      self.create_calls.fetch_add(1, Ordering::SeqCst);

      if self.unavailable {
         return Err(InfraError::unexpected(MOCK_STORE_FAILURE));
      }

      let message = ContactMessage::new(ContactMessageId::new(), draft, self.clock.now());
      self.messages.lock().unwrap().push(message.clone());
      Ok(message)
   }
}

// ===== MockDatabaseProbe =====

#[derive(Clone, Copy)]
pub struct MockDatabaseProbe {
   reachable: bool,
}

impl MockDatabaseProbe {
   pub fn reachable() -> Self {
      Self { reachable: true }
   }

   pub fn unreachable() -> Self {
      Self { reachable: false }
   }
}

#[async_trait]
impl DatabaseProbe for MockDatabaseProbe {
   async fn ping(&self) -> Result<(), InfraError> {
      if self.reachable {
         Ok(())
      } else {
         Err(InfraError::unexpected(MOCK_STORE_FAILURE))
      }
   }
}
