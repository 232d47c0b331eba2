use axum::Json;
use axum::extract::State;
use diesel::{QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use song_api::Song;

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

pub async fn handler(database: &Database) -> Result<Vec<Song>, Error> {
    Ok(songs::table
        .select(songs::Song::as_select())
        .order_by(songs::id)
        .get_results(&mut database.get().await?)
        .await?
        .into_iter()
        .map(songs::Song::into)
        .collect())
}

pub async fn json_handler(State(database): State<Database>) -> Result<Json<Vec<Song>>, Error> {
    handler(&database).await.map(Json)
}
