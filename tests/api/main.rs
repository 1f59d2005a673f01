mod admin;
mod helpers;
mod members;
mod projects;
mod status;
