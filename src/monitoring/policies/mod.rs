mod monitor_name;

pub use monitor_name::MonitorName;
