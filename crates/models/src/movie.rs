use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{actor, movie_actor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub release_date: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    MovieActor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self { Relation::MovieActor => Entity::has_many(movie_actor::Entity).into() }
    }
}

impl Related<movie_actor::Entity> for Entity {
    fn to() -> RelationDef { Relation::MovieActor.def() }
}

impl Related<actor::Entity> for Entity {
    fn to() -> RelationDef { movie_actor::Relation::Actor.def() }
    fn via() -> Option<RelationDef> { Some(movie_actor::Relation::Movie.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, title: &str, release_date: &str) -> Result<Model, errors::ModelError> {
    if title.trim().is_empty() { return Err(errors::ModelError::Validation("title required".into())); }
    if release_date.trim().is_empty() { return Err(errors::ModelError::Validation("release date required".into())); }
    let am = ActiveModel {
        title: Set(title.to_string()),
        release_date: Set(release_date.to_string()),
        ..Default::default()
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_title_and_release_date<C: ConnectionTrait>(
    db: &C,
    title: &str,
    release_date: &str,
) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find()
        .filter(Column::Title.eq(title))
        .filter(Column::ReleaseDate.eq(release_date))
        .one(db)
        .await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn update<C: ConnectionTrait>(db: &C, id: i32, title: &str, release_date: &str) -> Result<Model, errors::ModelError> {
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound("movie".into()))?
        .into();
    found.title = Set(title.to_string());
    found.release_date = Set(release_date.to_string());
    Ok(found.update(db).await?)
}

/// Movies the actor appears in, ordered by id.
pub async fn find_by_actor<C: ConnectionTrait>(db: &C, actor: &actor::Model) -> Result<Vec<Model>, errors::ModelError> {
    Ok(actor.find_related(Entity).order_by_asc(Column::Id).all(db).await?)
}

/// Removes the movie together with its join rows.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    movie_actor::unlink_all(db, id).await?;
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
