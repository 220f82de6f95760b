mod analyze_test;
mod config_test;
