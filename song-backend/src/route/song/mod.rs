pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use axum::Router;
use axum::routing::get;

use crate::database::Database;

pub fn router() -> Router<Database> {
    Router::new()
        .route("/songs", get(list::json_handler).post(create::json_handler))
        .route(
            "/songs/{id}",
            get(get::json_handler).put(update::json_handler).delete(delete::json_handler),
        )
}
