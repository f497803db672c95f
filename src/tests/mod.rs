mod pipeline_tests;
mod utils;
