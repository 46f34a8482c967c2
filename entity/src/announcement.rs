use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "announcement")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub body: String,
    /// Weak back-reference to the authoring user; lookup only.
    pub creator_id: Option<i32>,
    pub end_date: DateTimeUtc,
    pub image_url: String,
    pub is_debug: bool,
    pub link: String,
    pub start_date: DateTimeUtc,
    pub title: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::announcement_app::Entity")]
    AnnouncementApp,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::CreatorId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
}

impl Related<super::announcement_app::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AnnouncementApp.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
