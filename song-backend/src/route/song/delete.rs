use axum::extract::{Path, State};
use axum::http::StatusCode;
use diesel::ExpressionMethods;
use diesel_async::RunQueryDsl;

use crate::Error;
use crate::database::Database;
use crate::orm::songs;

pub async fn handler(database: &Database, id: i32) -> Result<(), Error> {
    let deleted = diesel::delete(songs::table)
        .filter(songs::id.eq(id))
        .execute(&mut database.get().await?)
        .await?;
    if deleted == 0 { Err(Error::NotFound) } else { Ok(()) }
}

pub async fn json_handler(
    State(database): State<Database>,
    Path(id): Path<i32>,
) -> Result<StatusCode, Error> {
    handler(&database, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
