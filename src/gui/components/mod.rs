mod monitor_map;

pub use monitor_map::MonitorMap;
