use crate::{
    data::announcement::AnnouncementRepository,
    model::announcement::{CreateAnnouncementParams, UpdateAnnouncementParams},
};
use chrono::{Duration, Utc};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory, factory::announcement::AnnouncementFactory};

mod create;
mod find_active;
mod list;
mod update;
