use crate::data::seen_event::{CommitOutcome, SeenEventRepository};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod commit;
mod contains;
