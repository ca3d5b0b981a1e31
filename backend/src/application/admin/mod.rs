// Admin persona - triage, assignment and account management
pub mod commands;
