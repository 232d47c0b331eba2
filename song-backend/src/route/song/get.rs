use axum::Json;
use axum::extract::{Path, State};
use diesel::{ExpressionMethods, QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use song_api::Song;

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

pub async fn handler(database: &Database, id: i32) -> Result<Song, Error> {
    songs::table
        .filter(songs::id.eq(id))
        .select(songs::Song::as_select())
        .first(&mut database.get().await?)
        .await
        .map(songs::Song::into)
        .map_err(Error::from)
}

pub async fn json_handler(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<Json<Song>, Error> {
    handler(&database, id).await.map(Json)
}
