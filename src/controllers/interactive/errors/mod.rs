pub mod rules_engine;
