pub mod identity_cache;
pub mod matches;
pub mod rocket_league;
