use crate::{
    error::AppError,
    model::app::{CreateAppParams, UpdateAppParams},
    service::app::AppService,
};
use chrono::{Duration, Utc};
use test_utils::{builder::TestBuilder, factory, factory::announcement::AnnouncementFactory};

mod delete;
mod update;
mod validate_slugs;
