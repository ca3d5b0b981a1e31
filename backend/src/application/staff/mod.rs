// Staff persona - works the complaints assigned to them
pub mod commands;
