// Student commands

pub mod submit_complaint;
