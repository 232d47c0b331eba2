use diesel::{QueryDsl, SelectableHelper};
use diesel_async::RunQueryDsl;
use fake::{Fake, Faker};
use rstest::fixture;
use song_api::Song;

use super::database;
use crate::database::Database;
use crate::orm::songs;
use crate::route;

pub struct Mock {
    pub database: database::Mock,
}

impl Mock {
    async fn new() -> Self {
        Self { database: database::Mock::new().await }
    }

    pub fn database(&self) -> &Database {
        self.database.database()
    }

    pub async fn add_song(&self) -> Song {
        route::song::create::handler(self.database(), &Faker.fake()).await.unwrap()
    }

    pub async fn songs(&self) -> Vec<Song> {
        songs::table
            .select(songs::Song::as_select())
            .order_by(songs::id)
            .get_results(&mut self.database().get().await.unwrap())
            .await
            .unwrap()
            .into_iter()
            .map(songs::Song::into)
            .collect()
    }

    pub async fn song(&self, index: usize) -> Song {
        self.songs().await.swap_remove(index)
    }
}

#[fixture]
pub async fn mock(#[default(1)] n_song: usize) -> Mock {
    let mock = Mock::new().await;
    for _ in 0..n_song {
        mock.add_song().await;
    }
    mock
}
