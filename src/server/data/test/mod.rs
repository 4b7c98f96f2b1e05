mod favorite;
mod stats;
mod user;
