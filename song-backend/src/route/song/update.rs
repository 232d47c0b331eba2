use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;
use diesel::ExpressionMethods;
use diesel_async::RunQueryDsl;
use song_api::song;

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

pub async fn handler(database: &Database, id: i32, data: &song::Data) -> Result<(), Error> {
    let updated = diesel::update(songs::table)
        .filter(songs::id.eq(id))
        .set(songs::Data::from(data))
        .execute(&mut database.get().await?)
        .await?;
    if updated == 0 { Err(Error::NotFound) } else { Ok(()) }
}

pub async fn json_handler(
    State(database): State<Database>,
    Path(id): Path<i32>,
    WithRejection(Json(data), _): WithRejection<Json<song::Data>, Error>,
) -> Result<StatusCode, Error> {
    handler(&database, id, &data).await?;
    Ok(StatusCode::NO_CONTENT)
}
