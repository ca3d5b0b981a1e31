// Staff commands

pub mod update_complaint_status;
