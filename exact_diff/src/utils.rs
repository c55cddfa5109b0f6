pub mod sequence_matcher;
