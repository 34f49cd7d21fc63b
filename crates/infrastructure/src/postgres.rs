use shared::DatabaseConfig;
use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions, PgSslMode};

/// リファレンス用のテーブル定義（サービス自体はマイグレーションを行わない）
pub const TODO_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS todo (
    id           BIGSERIAL PRIMARY KEY,
    title        TEXT        NOT NULL,
    complete     BOOLEAN     NOT NULL DEFAULT FALSE,
    last_updated TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// 設定から接続オプションを組み立てる
///
/// 個別の DB_* 値は URL を経由せずにそのまま渡すので、パスワード中の
/// `/` `#` `%` などもエスケープ不要。`DATABASE_URL` がある場合はそれを解析する。
pub fn connect_options(config: &DatabaseConfig) -> Result<PgConnectOptions, sqlx::Error> {
    if let Some(url) = &config.url {
        return url.parse();
    }

    let ssl_mode: PgSslMode = config.sslmode.parse()?;

    Ok(PgConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.name)
        .ssl_mode(ssl_mode))
}

/// 接続プールを作成し、疎通確認まで行う
pub async fn connect_pool(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(connect_options(config)?)
        .await?;

    sqlx::query("SELECT 1").execute(&pool).await?;

    tracing::info!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        "Connected to PostgreSQL"
    );

    Ok(pool)
}
