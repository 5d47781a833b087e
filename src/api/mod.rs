pub mod pubg;
pub mod rocket_league;

#[cfg(test)]
pub mod fake;
