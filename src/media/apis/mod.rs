pub mod dalle;
