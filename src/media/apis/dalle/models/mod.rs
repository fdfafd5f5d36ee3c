pub mod input_spec;
