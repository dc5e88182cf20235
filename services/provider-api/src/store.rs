//! SQLiteプロバイダーストア
//!
//! ローン提供会社レコードの作成・一覧・更新・削除機能を提供する。
//! - 書き込み: 専用の単一接続（Arc<Mutex<Connection>>）
//! - 読み取り: deadpool-sqliteによるasync接続プール

use std::sync::{Arc, Mutex};

use deadpool_sqlite::{Config, Pool, Runtime};
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// ストアエラー
#[derive(Debug, Error)]
pub enum StoreError {
    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(String),

    /// プール取得エラー
    #[error("プールエラー: {0}")]
    Pool(String),

    /// 接続構築エラー
    #[error("接続構築エラー: {0}")]
    Build(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<deadpool_sqlite::BuildError> for StoreError {
    fn from(err: deadpool_sqlite::BuildError) -> Self {
        StoreError::Build(err.to_string())
    }
}

impl From<deadpool_sqlite::PoolError> for StoreError {
    fn from(err: deadpool_sqlite::PoolError) -> Self {
        StoreError::Pool(err.to_string())
    }
}

impl From<deadpool_sqlite::InteractError> for StoreError {
    fn from(err: deadpool_sqlite::InteractError) -> Self {
        StoreError::Database(err.to_string())
    }
}

/// ローン提供会社レコード
///
/// HTTP APIのレスポンスで使用する。`id`はストアが採番し、以後不変。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Provider {
    /// レコードID（ストアが採番）
    pub id: i64,
    /// 提供会社名
    pub provider_name: String,
    /// 金利
    pub interest_rate: f64,
    /// 融資上限額
    pub max_loan_amount: f64,
}

/// ローン提供会社の入力
///
/// 作成・更新リクエストのボディ。`id`を除く3フィールドを常に一括で扱う
/// （部分更新はない）。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderInput {
    /// 提供会社名
    pub provider_name: String,
    /// 金利
    pub interest_rate: f64,
    /// 融資上限額
    pub max_loan_amount: f64,
}

/// SQLiteプロバイダーストア
///
/// - 書き込み: 専用の単一接続（Arc<Mutex<Connection>>）
/// - 読み取り: deadpool-sqliteによるasync接続プール
pub struct SqliteProviderStore {
    /// 書き込み専用接続（低頻度のため単一接続で十分）
    write_conn: Arc<Mutex<Connection>>,
    /// 読み取り用async接続プール
    read_pool: Pool,
}

/// SQLiteデータベースのスキーマを定義するSQL
const SCHEMA_SQL: &str = r#"
-- WALモード設定
PRAGMA journal_mode=WAL;
PRAGMA synchronous=NORMAL;

-- プロバイダーテーブル
CREATE TABLE IF NOT EXISTS providers (
    id INTEGER PRIMARY KEY AUTOINCREMENT,  -- ストアが採番するID
    provider_name TEXT NOT NULL,           -- 提供会社名（一意制約なし）
    interest_rate REAL NOT NULL,           -- 金利
    max_loan_amount REAL NOT NULL          -- 融資上限額
);
"#;

impl SqliteProviderStore {
    /// 新しいSqliteProviderStoreを作成
    ///
    /// データベースファイルを開き、スキーマを初期化する。
    /// WALモードを有効にし、書き込み用単一接続と読み取り用プールを構成する。
    ///
    /// # Arguments
    /// * `db_path` - データベースファイルのパス
    pub async fn new(db_path: &str) -> Result<Self, StoreError> {
        // 書き込み用接続を作成し、スキーマを初期化
        let write_conn = Connection::open(db_path)?;
        write_conn.execute_batch(SCHEMA_SQL)?;

        // 読み取り用プールを作成（最大4接続）
        // builder()はInfallibleを返すためexpect()を使用
        let cfg = Config::new(db_path);
        let read_pool = cfg
            .builder(Runtime::Tokio1)
            .expect("Config builder should not fail")
            .max_size(4)
            .build()?;

        Ok(Self {
            write_conn: Arc::new(Mutex::new(write_conn)),
            read_pool,
        })
    }

    /// プロバイダーを作成
    ///
    /// 書き込み専用接続を使用する。挿入後、採番されたIDを含む
    /// 完全なレコードを返す。
    ///
    /// # Arguments
    /// * `input` - 作成するプロバイダーの入力
    ///
    /// # Returns
    /// * `Ok(Provider)` - 採番されたIDを含む作成済みレコード
    /// * `Err(StoreError)` - エラー
    pub async fn create_provider(&self, input: &ProviderInput) -> Result<Provider, StoreError> {
        let input = input.clone();
        let conn = self.write_conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .expect("プロバイダー作成時の書き込み接続ロック取得に失敗（Mutex poisoned）");

            conn.execute(
                "INSERT INTO providers (provider_name, interest_rate, max_loan_amount) VALUES (?1, ?2, ?3)",
                rusqlite::params![
                    &input.provider_name,
                    input.interest_rate,
                    input.max_loan_amount,
                ],
            )?;

            let id = conn.last_insert_rowid();

            Ok(Provider {
                id,
                provider_name: input.provider_name,
                interest_rate: input.interest_rate,
                max_loan_amount: input.max_loan_amount,
            })
        })
        .await
        .map_err(|e| StoreError::Database(format!("タスク実行エラー: {}", e)))?
    }

    /// 全プロバイダーを一覧取得
    ///
    /// 読み取りプールから接続を取得し、並行実行可能。
    /// フィルター・ページネーションはなく、挿入順（id昇順）で全件を返す。
    ///
    /// # Returns
    /// * `Ok(Vec<Provider>)` - 全レコード（id昇順）
    /// * `Err(StoreError)` - エラー
    pub async fn list_providers(&self) -> Result<Vec<Provider>, StoreError> {
        let conn = self.read_pool.get().await?;

        conn.interact(|conn| {
            let mut stmt = conn.prepare(
                "SELECT id, provider_name, interest_rate, max_loan_amount FROM providers ORDER BY id",
            )?;

            let providers: Vec<Provider> = stmt
                .query_map([], |row| {
                    Ok(Provider {
                        id: row.get(0)?,
                        provider_name: row.get(1)?,
                        interest_rate: row.get(2)?,
                        max_loan_amount: row.get(3)?,
                    })
                })?
                .collect::<Result<_, _>>()?;

            Ok(providers)
        })
        .await?
    }

    /// プロバイダーを更新
    ///
    /// 書き込み専用接続を使用し、id一致行の3フィールドを一括で上書きする。
    ///
    /// # Arguments
    /// * `id` - 更新対象のプロバイダーID
    /// * `input` - 上書きする入力
    ///
    /// # Returns
    /// * `Ok(true)` - 更新成功
    /// * `Ok(false)` - idに一致する行が存在しなかった
    /// * `Err(StoreError)` - エラー
    pub async fn update_provider(
        &self,
        id: i64,
        input: &ProviderInput,
    ) -> Result<bool, StoreError> {
        let input = input.clone();
        let conn = self.write_conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .expect("プロバイダー更新時の書き込み接続ロック取得に失敗（Mutex poisoned）");

            let rows_affected = conn.execute(
                "UPDATE providers SET provider_name = ?1, interest_rate = ?2, max_loan_amount = ?3 WHERE id = ?4",
                rusqlite::params![
                    &input.provider_name,
                    input.interest_rate,
                    input.max_loan_amount,
                    id,
                ],
            )?;

            Ok(rows_affected > 0)
        })
        .await
        .map_err(|e| StoreError::Database(format!("タスク実行エラー: {}", e)))?
    }

    /// プロバイダーを削除
    ///
    /// 書き込み専用接続を使用する。
    ///
    /// # Arguments
    /// * `id` - 削除対象のプロバイダーID
    ///
    /// # Returns
    /// * `Ok(true)` - 削除成功
    /// * `Ok(false)` - idに一致する行が存在しなかった
    /// * `Err(StoreError)` - エラー
    pub async fn delete_provider(&self, id: i64) -> Result<bool, StoreError> {
        let conn = self.write_conn.clone();

        tokio::task::spawn_blocking(move || {
            let conn = conn
                .lock()
                .expect("プロバイダー削除時の書き込み接続ロック取得に失敗（Mutex poisoned）");

            let rows_affected = conn.execute("DELETE FROM providers WHERE id = ?1", [id])?;

            Ok(rows_affected > 0)
        })
        .await
        .map_err(|e| StoreError::Database(format!("タスク実行エラー: {}", e)))?
    }
}
