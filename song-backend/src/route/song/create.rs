use axum::Json;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use axum_extra::extract::WithRejection;
use diesel::SelectableHelper;
use diesel_async::RunQueryDsl;
use song_api::{Song, song};

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

pub async fn handler(database: &Database, data: &song::Data) -> Result<Song, Error> {
    let song: Song = diesel::insert_into(songs::table)
        .values(songs::Data::from(data))
        .returning(songs::Song::as_returning())
        .get_result(&mut database.get().await?)
        .await
        .map(songs::Song::into)?;
    tracing::debug!(id = song.id, "song created");
    Ok(song)
}

pub async fn json_handler(
    State(database): State<Database>,
    WithRejection(Json(data), _): WithRejection<Json<song::Data>, Error>,
) -> Result<impl IntoResponse, Error> {
    let song = handler(&database, &data).await?;
    Ok((StatusCode::CREATED, [(header::LOCATION, format!("/songs/{}", song.id))], Json(song)))
}
