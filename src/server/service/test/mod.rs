mod auth;
mod group;
mod subject;
mod teacher;
