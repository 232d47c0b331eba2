use std::borrow::Cow;

use diesel::prelude::*;
use o2o::o2o;
use song_api::song;

pub use crate::schema::songs::{self, *};

#[derive(Debug, Queryable, Selectable, Insertable, AsChangeset, o2o)]
#[from_ref(song::Data)]
#[owned_into(song::Data)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Data<'a> {
    #[from((&~).into())]
    #[into(~.into_owned())]
    pub artist: Cow<'a, str>,
    #[from((&~).into())]
    #[into(~.into_owned())]
    pub title: Cow<'a, str>,
    pub length_in_seconds: i32,
    #[from((&~).into())]
    #[into(~.into_owned())]
    pub category: Cow<'a, str>,
}

#[derive(Debug, Queryable, Selectable, o2o)]
#[owned_into(song_api::Song)]
#[diesel(table_name = songs, check_for_backend(crate::orm::Type))]
pub struct Song<'a> {
    pub id: i32,
    #[diesel(embed)]
    #[into(~.into())]
    pub data: Data<'a>,
}
