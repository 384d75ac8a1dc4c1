pub mod errors;
pub mod db;
pub mod actor;
pub mod movie;
pub mod movie_actor;

#[cfg(test)]
mod tests;
