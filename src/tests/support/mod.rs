pub mod candidate_fixtures;
