mod fragment_extractor_tests;
mod fragment_inliner_tests;
mod typename_stripper_tests;
mod utils;
