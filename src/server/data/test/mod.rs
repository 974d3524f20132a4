mod favorite;
mod user;
