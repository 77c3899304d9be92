//! Schema migrations run at startup.
//!
//! Plain idempotent DDL statements; no migration framework. Foreign keys
//! are declared without `ON DELETE CASCADE` on purpose: cascading a venue
//! or artist delete over its shows is an explicit repository operation
//! inside one transaction, not a framework annotation.

use sqlx::PgPool;

/// Creates the directory tables and indexes if they do not exist.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] if any DDL statement fails.
pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("running directory migrations");

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS venues (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT NOT NULL,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_talent BOOLEAN,
            seeking_description TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS artists (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            genres TEXT,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT NOT NULL,
            image_link TEXT,
            facebook_link TEXT,
            website_link TEXT,
            seeking_venue BOOLEAN,
            seeking_description TEXT
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r"
        CREATE TABLE IF NOT EXISTS shows (
            id BIGSERIAL PRIMARY KEY,
            start_time TIMESTAMPTZ NOT NULL,
            venue_id BIGINT NOT NULL REFERENCES venues(id),
            artist_id BIGINT NOT NULL REFERENCES artists(id)
        )
        ",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue_id ON shows(venue_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist_id ON shows(artist_id)")
        .execute(pool)
        .await?;

    tracing::info!("directory migrations complete");
    Ok(())
}
