use sea_orm::{entity::prelude::*, ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::errors;
use crate::{actor, movie};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "movie_actor")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub movie_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub actor_id: i32,
    pub position: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {
    Movie,
    Actor,
}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Movie => Entity::belongs_to(movie::Entity)
                .from(Column::MovieId)
                .to(movie::Column::Id)
                .into(),
            Relation::Actor => Entity::belongs_to(actor::Entity)
                .from(Column::ActorId)
                .to(actor::Column::Id)
                .into(),
        }
    }
}

impl Related<movie::Entity> for Entity {
    fn to() -> RelationDef { Relation::Movie.def() }
}

impl Related<actor::Entity> for Entity {
    fn to() -> RelationDef { Relation::Actor.def() }
}

impl ActiveModelBehavior for ActiveModel {}

/// Link actors to a movie, recording their list order.
pub async fn link_all<C: ConnectionTrait>(db: &C, movie_id: i32, actor_ids: &[i32]) -> Result<(), errors::ModelError> {
    if actor_ids.is_empty() { return Ok(()); }
    let rows = actor_ids.iter().enumerate().map(|(pos, actor_id)| ActiveModel {
        movie_id: Set(movie_id),
        actor_id: Set(*actor_id),
        position: Set(pos as i32),
    });
    Entity::insert_many(rows).exec_without_returning(db).await?;
    Ok(())
}

pub async fn unlink_all<C: ConnectionTrait>(db: &C, movie_id: i32) -> Result<u64, errors::ModelError> {
    let res = Entity::delete_many().filter(Column::MovieId.eq(movie_id)).exec(db).await?;
    Ok(res.rows_affected)
}

/// Actors of a movie in list order.
pub async fn actors_of<C: ConnectionTrait>(db: &C, movie_id: i32) -> Result<Vec<actor::Model>, errors::ModelError> {
    let rows = Entity::find()
        .filter(Column::MovieId.eq(movie_id))
        .order_by_asc(Column::Position)
        .find_also_related(actor::Entity)
        .all(db)
        .await?;
    Ok(rows.into_iter().filter_map(|(_, a)| a).collect())
}
