use crate::server::{
    data::group::GroupRepository,
    model::group::{CreateGroupParams, UpdateGroupParams},
};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};
