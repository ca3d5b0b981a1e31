// Student persona - files complaints and tracks their own
pub mod commands;
