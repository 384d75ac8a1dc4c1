use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{movie, movie_actor};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "actor")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
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

impl Related<movie::Entity> for Entity {
    fn to() -> RelationDef { movie_actor::Relation::Movie.def() }
    fn via() -> Option<RelationDef> { Some(movie_actor::Relation::Actor.def().rev()) }
}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_name(name: &str) -> Result<(), errors::ModelError> {
    if name.trim().is_empty() { return Err(errors::ModelError::Validation("name required".into())); }
    if name.chars().count() > 255 { return Err(errors::ModelError::Validation("name longer than 255 characters".into())); }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let am = ActiveModel { name: Set(name.to_string()), ..Default::default() };
    Ok(am.insert(db).await?)
}

pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find().filter(Column::Name.eq(name)).one(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Ok(Entity::find().order_by_asc(Column::Id).all(db).await?)
}

pub async fn rename<C: ConnectionTrait>(db: &C, id: i32, name: &str) -> Result<Model, errors::ModelError> {
    validate_name(name)?;
    let mut found: ActiveModel = Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| errors::ModelError::NotFound("actor".into()))?
        .into();
    found.name = Set(name.to_string());
    Ok(found.update(db).await?)
}

/// Returns `false` when no row had that id.
pub async fn delete<C: ConnectionTrait>(db: &C, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
